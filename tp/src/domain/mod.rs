//! Domain types for trip planning
//!
//! - [`TripRequest`] - payload posted to the planning endpoint
//! - [`TripPlan`] - itinerary returned by the backend
//! - [`FormState`] - raw form field values the request is built from
//! - [`ThemeSelector`] - single-choice travel style button group

mod form;
mod plan;
mod request;
mod theme;

pub use form::{FIELD_NAMES, FormState};
pub use plan::{Activity, DayPlan, Location, Price, Restaurant, TripPlan};
pub use request::{TripRequest, parse_duration, parse_interests};
pub use theme::{ThemeButton, ThemeSelector};
