//! Form field state
//!
//! Holds field values the way the input widgets do: as raw text, normalized
//! only when a request is built.

use serde::Serialize;
use tracing::debug;

use super::request::{TripRequest, parse_duration, parse_interests};
use super::theme::ThemeSelector;

/// Names accepted by [`FormState::set_field`]
pub const FIELD_NAMES: &[&str] = &[
    "destination",
    "duration",
    "budget",
    "interests",
    "eat_out",
    "origin",
    "start_date",
];

/// Current values of the trip form
#[derive(Debug, Clone, Serialize)]
pub struct FormState {
    pub destination: String,
    pub duration: String,
    pub budget: String,
    pub interests: String,
    pub eat_out: bool,
    pub origin: String,
    pub start_date: String,
    pub themes: ThemeSelector,
}

impl FormState {
    /// Empty form with the given theme group
    pub fn new(themes: ThemeSelector) -> Self {
        Self {
            destination: String::new(),
            duration: String::new(),
            budget: String::new(),
            interests: String::new(),
            eat_out: false,
            origin: String::new(),
            start_date: String::new(),
            themes,
        }
    }

    /// Set a field by name from its text value
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), String> {
        debug!(%name, %value, "FormState::set_field: called");
        match name {
            "destination" => self.destination = value.to_string(),
            "duration" => self.duration = value.to_string(),
            "budget" => self.budget = value.to_string(),
            "interests" => self.interests = value.to_string(),
            "eat_out" => self.eat_out = parse_checkbox(value)?,
            "origin" => self.origin = value.to_string(),
            "start_date" => self.start_date = value.to_string(),
            _ => {
                return Err(format!(
                    "Unknown field: {} (expected one of: {})",
                    name,
                    FIELD_NAMES.join(", ")
                ));
            }
        }
        Ok(())
    }

    /// Build the request payload from the current field values
    pub fn to_request(&self) -> TripRequest {
        TripRequest {
            destination: self.destination.clone(),
            duration_days: parse_duration(&self.duration),
            budget: self.budget.clone(),
            travel_style: self.themes.style_value().to_string(),
            interests: parse_interests(&self.interests),
            eat_out: self.eat_out,
            origin: non_empty(&self.origin),
            start_date: non_empty(&self.start_date),
        }
    }
}

fn parse_checkbox(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" | "" => Ok(false),
        other => Err(format!("Expected yes/no for eat_out, got: {}", other)),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
