//! HTTP transport for the planning backend

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

use super::client::{PlanTransport, RawResponse};
use crate::config::ServerConfig;
use crate::domain::TripRequest;
use crate::error::PlanError;

/// reqwest-backed [`PlanTransport`]
pub struct HttpTransport {
    base_url: String,
    plan_path: String,
    audio_path: String,
    http: Client,
}

impl HttpTransport {
    /// Create a transport from server configuration
    pub fn from_config(config: &ServerConfig) -> Result<Self, PlanError> {
        debug!(?config, "from_config: called");
        let mut builder = Client::builder().user_agent(concat!("tripstory/", env!("CARGO_PKG_VERSION")));
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder.build().map_err(PlanError::Transport)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            plan_path: config.plan_path.clone(),
            audio_path: config.audio_path.clone(),
            http,
        })
    }

    fn plan_url(&self) -> String {
        format!("{}{}", self.base_url, self.plan_path)
    }

    fn audio_url(&self, chapter_id: u32) -> String {
        format!("{}{}", self.base_url, self.audio_path.replace("{id}", &chapter_id.to_string()))
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse, PlanError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, len = body.len(), "read: response received");
        Ok(RawResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl PlanTransport for HttpTransport {
    async fn post_plan(&self, request: &TripRequest) -> Result<RawResponse, PlanError> {
        let url = self.plan_url();
        debug!(%url, destination = %request.destination, "post_plan: called");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        Self::read(response).await
    }

    async fn fetch_narration(&self, chapter_id: u32, text: &str) -> Result<RawResponse, PlanError> {
        let url = self.audio_url(chapter_id);
        debug!(%url, text_len = text.len(), "fetch_narration: called");

        let response = self.http.get(&url).query(&[("text", text)]).send().await?;

        Self::read(response).await
    }
}
