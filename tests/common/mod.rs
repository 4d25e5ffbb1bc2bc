//! Shared test fixtures: a call-recording mock gateway

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crewlink_core::gateway::{
    Gateway, GatewayError, GatewayResult, InterestPayload, PastProjectPayload, SkillPayload,
};
use crewlink_core::types::{
    LeaderboardEntry, PastProjectRecord, ProjectRecord, TeamInvite, UserInterest, UserSkill,
};

/// In-memory gateway that serves canned fixtures, records every write, and
/// can be told to fail specific reads (by resource name) or writes (by the
/// record's natural key). Failing writes are still recorded, so tests can
/// assert that siblings were not cancelled.
#[derive(Default)]
pub struct MockGateway {
    pub skills: Vec<UserSkill>,
    pub interests: Vec<UserInterest>,
    pub past_projects: Vec<PastProjectRecord>,
    pub projects: Vec<ProjectRecord>,
    pub invites: Vec<TeamInvite>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub fail_reads: HashSet<&'static str>,
    pub fail_writes: HashSet<String>,
    read_calls: AtomicUsize,
    writes: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    /// Every attempted write as (path, payload), in completion order
    pub fn recorded_writes(&self) -> Vec<(String, serde_json::Value)> {
        self.writes.lock().unwrap().clone()
    }

    fn read<T: Clone>(&self, resource: &'static str, data: &[T]) -> GatewayResult<Vec<T>> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.contains(resource) {
            return Err(GatewayError::Status {
                status: 500,
                body: format!("{resource} unavailable"),
            });
        }
        Ok(data.to_vec())
    }

    fn write(&self, path: String, key: &str, payload: serde_json::Value) -> GatewayResult<()> {
        self.writes.lock().unwrap().push((path, payload));
        if self.fail_writes.contains(key) {
            return Err(GatewayError::Status {
                status: 500,
                body: format!("write rejected for {key}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn fetch_skills(&self, _user_id: u64) -> GatewayResult<Vec<UserSkill>> {
        self.read("skills", &self.skills)
    }

    async fn fetch_interests(&self, _user_id: u64) -> GatewayResult<Vec<UserInterest>> {
        self.read("interests", &self.interests)
    }

    async fn fetch_past_projects(&self, _user_id: u64) -> GatewayResult<Vec<PastProjectRecord>> {
        self.read("past projects", &self.past_projects)
    }

    async fn fetch_projects(&self, _user_id: u64) -> GatewayResult<Vec<ProjectRecord>> {
        self.read("projects", &self.projects)
    }

    async fn fetch_team_invites(&self, _user_id: u64) -> GatewayResult<Vec<TeamInvite>> {
        self.read("team invites", &self.invites)
    }

    async fn fetch_leaderboard(&self) -> GatewayResult<Vec<LeaderboardEntry>> {
        self.read("leaderboard", &self.leaderboard)
    }

    async fn add_skill(&self, user_id: u64, payload: SkillPayload) -> GatewayResult<()> {
        let key = payload.skill_name.clone();
        self.write(
            format!("/onboarding/{user_id}/skills"),
            &key,
            serde_json::to_value(payload).unwrap(),
        )
    }

    async fn add_interest(&self, user_id: u64, payload: InterestPayload) -> GatewayResult<()> {
        let key = payload.interest_name.clone();
        self.write(
            format!("/onboarding/{user_id}/interest"),
            &key,
            serde_json::to_value(payload).unwrap(),
        )
    }

    async fn add_past_project(
        &self,
        user_id: u64,
        payload: PastProjectPayload,
    ) -> GatewayResult<()> {
        let key = payload.project_title.clone();
        self.write(
            format!("/onboarding/{user_id}/past-projects"),
            &key,
            serde_json::to_value(payload).unwrap(),
        )
    }
}

// ============================================================================
// Fixture builders
// ============================================================================

pub fn user_skill(id: u64, user_id: u64, name: &str) -> UserSkill {
    UserSkill {
        id,
        user_id,
        skill_name: name.to_string(),
        proficiency_level: "intermediate".to_string(),
    }
}

pub fn user_interest(id: u64, user_id: u64, name: &str) -> UserInterest {
    UserInterest {
        id,
        user_id,
        interest_name: name.to_string(),
    }
}

pub fn past_project(id: u64, user_id: u64, title: &str) -> PastProjectRecord {
    PastProjectRecord {
        id,
        user_id,
        project_title: title.to_string(),
        description: format!("{title} description"),
        technologies_used: "Rust".to_string(),
    }
}

pub fn project(id: u64, user_id: u64, name: &str, commit: Option<&str>) -> ProjectRecord {
    ProjectRecord {
        id,
        user_id,
        project_name: name.to_string(),
        description: String::new(),
        repository_url: format!("https://example.com/{name}"),
        requirements: String::new(),
        last_commit_message: commit.map(str::to_string),
        last_commit_sha: None,
        last_commit_url: None,
        skill_requirements: Vec::new(),
    }
}

pub fn invite(id: u64, user_id: u64, status: &str) -> TeamInvite {
    TeamInvite {
        id,
        user_id,
        role: "member".to_string(),
        status: status.to_string(),
    }
}

pub fn leaderboard_entry(id: u64, score: i64) -> LeaderboardEntry {
    LeaderboardEntry {
        id,
        name: format!("user-{id}"),
        email: format!("user-{id}@example.com"),
        score,
    }
}
