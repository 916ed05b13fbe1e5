//! TripStory - trip planning client
//!
//! Collects a trip form, posts it to a planning backend and renders the
//! returned itinerary as day chapters plus one map marker per day.
//!
//! # Flow
//!
//! ```text
//! FormState ──► TripRequest ──► POST /api/plan ──► TripPlan
//!                                                     │
//!                         plan_view (pure) ◄──────────┘
//!                               │
//!                 ┌─────────────┴─────────────┐
//!           StorySurface                RenderContext
//!        (chapters, title)          (map view + markers)
//! ```
//!
//! # Modules
//!
//! - [`domain`] - request/plan types, form state and theme selection
//! - [`collector`] - builds requests and talks to the backend
//! - [`render`] - view model, render context and output adapters
//! - [`repl`] - interactive session holding one form and one renderer
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod collector;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod repl;

pub use collector::{HttpTransport, InputCollector, PlanTransport, RawResponse, Submission};
pub use config::{Config, MapConfig, ServerConfig, ThemesConfig};
pub use domain::{Activity, DayPlan, FormState, Location, Price, Restaurant, ThemeSelector, TripPlan, TripRequest};
pub use error::{ErrorKind, PlanError};
pub use render::{
    ChapterView, MarkerView, OutputFormat, PlanRenderer, RenderContext, StoryDocument, StorySurface, ViewNode,
    plan_view,
};

/// Duration used when the duration field does not hold a positive integer
pub const DEFAULT_DURATION_DAYS: u32 = 3;
