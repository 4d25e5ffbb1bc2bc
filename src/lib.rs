//! CrewLink client core
//!
//! Aggregation-and-staging layer for the CrewLink team-formation client.
//! Joins independently-updated backend record sets into derived views
//! (dashboard, profile, leaderboard) and stages user-entered onboarding
//! records locally until they are committed in batched, deduplicated,
//! idempotent submissions.
//!
//! ## Services
//!
//! - **Gateway**: typed HTTP access to the CrewLink backend REST API
//! - **Session/Identity**: session-scoped key-value store and the
//!   current-user accessor layered on top of it
//! - **Staging**: session-persisted local edits (skills, interests,
//!   past projects) with a single write path
//! - **Submission**: deduplicated batched writes, one per unique record
//! - **Aggregation**: fan-out/join view builders for dashboard and profile
//! - **Ranking**: pure leaderboard ordering and placement

pub mod aggregation;
pub mod catalog;
pub mod error;
pub mod gateway;
pub mod identity;
pub mod ranking;
pub mod session;
pub mod staging;
pub mod submission;
pub mod types;

pub use aggregation::AggregationService;
pub use error::{CoreError, Result};
pub use gateway::{Gateway, GatewayConfig, GatewayError, HttpGateway};
pub use identity::{CurrentUser, Identity};
pub use session::{FileSession, MemorySession, SessionStore};
pub use staging::{Collection, StagingStore};
pub use submission::{SubmissionCoordinator, SubmitOutcome};
