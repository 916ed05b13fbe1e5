//! Input collector
//!
//! Turns the form into a [`TripRequest`], sends it once, and interprets the
//! response: non-2xx becomes [`PlanError::Server`] with the raw body, a 2xx
//! body is decoded into a [`TripPlan`].

use std::sync::Arc;

use tracing::{debug, info, warn};

pub mod client;
mod http;

pub use client::{PlanTransport, RawResponse};
pub use http::HttpTransport;

use crate::config::ServerConfig;
use crate::domain::{FormState, TripPlan, TripRequest};
use crate::error::PlanError;

/// A request and the plan it produced
#[derive(Debug, Clone)]
pub struct Submission {
    pub request: TripRequest,
    pub plan: TripPlan,
}

/// Sends trip requests to the backend
#[derive(Clone)]
pub struct InputCollector {
    transport: Arc<dyn PlanTransport>,
}

impl InputCollector {
    pub fn new(transport: Arc<dyn PlanTransport>) -> Self {
        Self { transport }
    }

    /// Collector talking HTTP to the configured backend
    pub fn from_config(config: &ServerConfig) -> Result<Self, PlanError> {
        Ok(Self::new(Arc::new(HttpTransport::from_config(config)?)))
    }

    /// Build a request from the form and submit it
    pub async fn submit(&self, form: &FormState) -> Result<Submission, PlanError> {
        let request = form.to_request();
        let plan = self.request_plan(&request).await?;
        Ok(Submission { request, plan })
    }

    /// Send one request and decode the plan
    ///
    /// A plan without a destination inherits the request's destination.
    pub async fn request_plan(&self, request: &TripRequest) -> Result<TripPlan, PlanError> {
        info!(destination = %request.destination, days = request.duration_days, style = %request.travel_style, "Requesting plan");

        let response = self.transport.post_plan(request).await?;
        let body = check_status(response)?;

        let mut plan = TripPlan::from_json(&body)?;
        if plan.destination.is_none() {
            debug!("request_plan: filling destination from request");
            plan.destination = Some(request.destination.clone());
        }

        info!(days = plan.itinerary.len(), "Plan received");
        Ok(plan)
    }

    /// Fetch narration audio bytes for a chapter
    pub async fn narrate(&self, chapter_id: u32, text: &str) -> Result<Vec<u8>, PlanError> {
        let response = self.transport.fetch_narration(chapter_id, text).await?;
        if !response.is_success() {
            let body = response.text();
            warn!(status = response.status, "narrate: server error");
            return Err(PlanError::Server {
                status: response.status,
                body,
            });
        }
        Ok(response.body)
    }
}

fn check_status(response: RawResponse) -> Result<String, PlanError> {
    let body = response.text();
    if !response.is_success() {
        warn!(status = response.status, "check_status: server error");
        return Err(PlanError::Server {
            status: response.status,
            body,
        });
    }
    Ok(body)
}
