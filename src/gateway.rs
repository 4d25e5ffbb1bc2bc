//! Remote data gateway
//!
//! Typed access to the CrewLink backend REST API. The `Gateway` trait is the
//! seam the aggregation and submission layers depend on; `HttpGateway` is the
//! production implementation over a shared `reqwest` client. Every call is a
//! suspension point; the gateway itself holds no mutable state.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::types::{
    LeaderboardEntry, PastProjectRecord, ProjectRecord, SkillLevel, TeamInvite, UserInterest,
    UserSkill,
};

/// Environment variable overriding the default API base URL
pub const API_URL_ENV: &str = "CREWLINK_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Transport-level failures raised by the gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection, timeout or body-read failure
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("api error {status}: {body}")]
    Status { status: u16, body: String },

    /// Backend answered 2xx but the body did not parse
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

// ============================================================================
// Write payloads
// ============================================================================

/// Wire payload for adding one skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPayload {
    pub skill_name: String,
    pub proficiency_level: SkillLevel,
}

/// Wire payload for adding one interest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestPayload {
    pub interest_name: String,
}

/// Wire payload for adding one past project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastProjectPayload {
    pub project_title: String,
    pub description: String,
    pub technologies_used: String,
}

// ============================================================================
// Capability surface
// ============================================================================

/// Read/write capability surface consumed by the core
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn fetch_skills(&self, user_id: u64) -> GatewayResult<Vec<UserSkill>>;
    async fn fetch_interests(&self, user_id: u64) -> GatewayResult<Vec<UserInterest>>;
    async fn fetch_past_projects(&self, user_id: u64) -> GatewayResult<Vec<PastProjectRecord>>;
    async fn fetch_projects(&self, user_id: u64) -> GatewayResult<Vec<ProjectRecord>>;
    async fn fetch_team_invites(&self, user_id: u64) -> GatewayResult<Vec<TeamInvite>>;
    async fn fetch_leaderboard(&self) -> GatewayResult<Vec<LeaderboardEntry>>;

    async fn add_skill(&self, user_id: u64, payload: SkillPayload) -> GatewayResult<()>;
    async fn add_interest(&self, user_id: u64, payload: InterestPayload) -> GatewayResult<()>;
    async fn add_past_project(
        &self,
        user_id: u64,
        payload: PastProjectPayload,
    ) -> GatewayResult<()>;
}

// ============================================================================
// HTTP implementation
// ============================================================================

/// Configuration for the HTTP gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend API base URL (no trailing slash required)
    pub base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl GatewayConfig {
    /// Default configuration with the base URL taken from `CREWLINK_API_URL`
    /// when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        config
    }
}

/// Production gateway over a shared `reqwest` client
pub struct HttpGateway {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl HttpGateway {
    /// Create a gateway with default configuration
    pub fn new() -> Self {
        Self::with_config(GatewayConfig::default())
    }

    /// Create a gateway with custom configuration
    pub fn with_config(config: GatewayConfig) -> Self {
        // Builder failure means the TLS backend could not initialize
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent("crewlink-client/0.1")
            .build()
            .expect("failed to build HTTP client");

        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        debug!(path, "gateway read");
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| GatewayError::Decode(err.to_string()))
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> GatewayResult<()> {
        debug!(path, "gateway write");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_skills(&self, user_id: u64) -> GatewayResult<Vec<UserSkill>> {
        self.get_json(&format!("/onboarding/{user_id}/skills")).await
    }

    async fn fetch_interests(&self, user_id: u64) -> GatewayResult<Vec<UserInterest>> {
        self.get_json(&format!("/onboarding/{user_id}/interest"))
            .await
    }

    async fn fetch_past_projects(&self, user_id: u64) -> GatewayResult<Vec<PastProjectRecord>> {
        self.get_json(&format!("/onboarding/{user_id}/past-projects"))
            .await
    }

    async fn fetch_projects(&self, user_id: u64) -> GatewayResult<Vec<ProjectRecord>> {
        self.get_json(&format!("/projects/{user_id}/projects")).await
    }

    async fn fetch_team_invites(&self, user_id: u64) -> GatewayResult<Vec<TeamInvite>> {
        self.get_json(&format!("/teams/team-invites/{user_id}"))
            .await
    }

    async fn fetch_leaderboard(&self) -> GatewayResult<Vec<LeaderboardEntry>> {
        self.get_json("/leaderboard/").await
    }

    async fn add_skill(&self, user_id: u64, payload: SkillPayload) -> GatewayResult<()> {
        self.post_json(&format!("/onboarding/{user_id}/skills"), &payload)
            .await
    }

    async fn add_interest(&self, user_id: u64, payload: InterestPayload) -> GatewayResult<()> {
        self.post_json(&format!("/onboarding/{user_id}/interest"), &payload)
            .await
    }

    async fn add_past_project(
        &self,
        user_id: u64,
        payload: PastProjectPayload,
    ) -> GatewayResult<()> {
        self.post_json(&format!("/onboarding/{user_id}/past-projects"), &payload)
            .await
    }
}
