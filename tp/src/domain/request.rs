//! TripRequest and form field normalization

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::DEFAULT_DURATION_DAYS;

/// Payload sent to `POST /api/plan`
///
/// Built fresh from the form on every submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub duration_days: u32,
    pub budget: String,
    pub travel_style: String,
    pub interests: Vec<String>,
    pub eat_out: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Parse the duration field
///
/// Reads the leading integer of the trimmed field (`"5 days"` is 5, `"3.7"` is 3).
/// Anything that is not a positive integer falls back to [`DEFAULT_DURATION_DAYS`].
pub fn parse_duration(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();

    match digits.parse::<u32>() {
        Ok(days) if days > 0 => days,
        _ => {
            debug!(%raw, "parse_duration: not a positive integer, using default");
            DEFAULT_DURATION_DAYS
        }
    }
}

/// Split a comma-separated interests field into trimmed, non-empty tokens
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
