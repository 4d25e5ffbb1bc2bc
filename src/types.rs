//! Domain records and derived views
//!
//! Server-owned records mirror the backend's wire shapes field-for-field.
//! Staged records are the locally-edited onboarding entities before
//! submission. Derived views are recomputed on every load and never
//! persisted.

use serde::{Deserialize, Serialize};

// ============================================================================
// Staged records (user-edited, held in the staging store)
// ============================================================================

/// Proficiency level of a staged skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

/// A skill selected during onboarding. Identity = `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedSkill {
    pub name: String,
    pub level: SkillLevel,
}

/// An interest selected during onboarding. Identity = `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedInterest {
    pub name: String,
}

/// A past project entered during onboarding. Identity = `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedPastProject {
    pub title: String,
    pub description: String,
    pub technologies: String,
}

// ============================================================================
// Server-owned records (read-only snapshots)
// ============================================================================

/// A skill as stored by the backend, keyed by (user, skill_name)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSkill {
    pub id: u64,
    pub user_id: u64,
    pub skill_name: String,
    pub proficiency_level: String,
}

/// An interest as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInterest {
    pub id: u64,
    pub user_id: u64,
    pub interest_name: String,
}

/// A past project as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastProjectRecord {
    pub id: u64,
    pub user_id: u64,
    pub project_title: String,
    pub description: String,
    pub technologies_used: String,
}

/// A platform project owned by or linked to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u64,
    pub user_id: u64,
    pub project_name: String,
    pub description: String,
    pub repository_url: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub last_commit_message: Option<String>,
    #[serde(default)]
    pub last_commit_sha: Option<String>,
    #[serde(default)]
    pub last_commit_url: Option<String>,
    #[serde(default)]
    pub skill_requirements: Vec<serde_json::Value>,
}

/// A team invite for a user. Status is a free-form string compared
/// case-insensitively against "accepted" / "pending".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInvite {
    pub id: u64,
    pub user_id: u64,
    pub role: String,
    pub status: String,
}

/// One row of the global leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub score: i64,
}

// ============================================================================
// Derived views (computed per load, never persisted)
// ============================================================================

/// Aggregated dashboard for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub user_name: String,
    pub active_teams: usize,
    pub skill_score: i64,
    pub global_rank: usize,
    pub skills: Vec<String>,
    pub latest_commit_message: Option<String>,
    pub pending_invites: usize,
    pub projects_count: usize,
    pub past_projects_count: usize,
    pub interests_count: usize,
}

/// One entry of the profile's recent-activity feed. Times are qualitative
/// labels, not timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub text: String,
    pub time: String,
}

/// Aggregated profile for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub past_projects: Vec<PastProjectRecord>,
    pub projects_count: usize,
    pub teams_accepted: usize,
    pub teams_pending: usize,
    pub recent_activity: Vec<ActivityItem>,
}
