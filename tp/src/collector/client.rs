//! PlanTransport trait definition

use async_trait::async_trait;

use crate::domain::TripRequest;
use crate::error::PlanError;

/// Status and body of a backend response, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Connection to the planning backend
///
/// One call is one request: implementations must not retry, and a non-2xx
/// status is returned as a response, not as an error.
#[async_trait]
pub trait PlanTransport: Send + Sync {
    /// Post a trip request to the plan endpoint
    async fn post_plan(&self, request: &TripRequest) -> Result<RawResponse, PlanError>;

    /// Fetch narration audio for one chapter
    async fn fetch_narration(&self, chapter_id: u32, text: &str) -> Result<RawResponse, PlanError>;
}
