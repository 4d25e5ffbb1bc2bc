//! Derived view builders
//!
//! Fans out independent reads for one user, joins them, and assembles an
//! immutable view. The fan-out is all-or-nothing: if any read fails the
//! whole build fails, naming the source that failed — a partial view is
//! never returned. Assembly itself is pure: the same fetched inputs always
//! produce the same view.

use std::sync::Arc;
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::gateway::{Gateway, GatewayResult};
use crate::ranking;
use crate::types::{
    ActivityItem, DashboardView, LeaderboardEntry, PastProjectRecord, ProfileView, ProjectRecord,
    TeamInvite, UserInterest, UserSkill,
};

/// Builds dashboard and profile views by joining independent backend reads
pub struct AggregationService {
    gateway: Arc<dyn Gateway>,
}

impl AggregationService {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// Build the dashboard view for one user.
    ///
    /// Six concurrent reads: skills, leaderboard (global), team invites,
    /// projects, interests, past projects. `display_name_fallback` is carried
    /// through verbatim; the dashboard does not fetch the user record itself.
    pub async fn build_dashboard(
        &self,
        user_id: u64,
        display_name_fallback: &str,
    ) -> Result<DashboardView> {
        if user_id == 0 {
            return Err(CoreError::DataUnavailable("user id"));
        }

        let (skills, leaderboard, invites, projects, interests, past_projects) = tokio::join!(
            self.gateway.fetch_skills(user_id),
            self.gateway.fetch_leaderboard(),
            self.gateway.fetch_team_invites(user_id),
            self.gateway.fetch_projects(user_id),
            self.gateway.fetch_interests(user_id),
            self.gateway.fetch_past_projects(user_id),
        );

        let skills = tag(skills, "skills")?;
        let leaderboard = tag(leaderboard, "leaderboard")?;
        let invites = tag(invites, "team invites")?;
        let projects = tag(projects, "projects")?;
        let interests = tag(interests, "interests")?;
        let past_projects = tag(past_projects, "past projects")?;

        debug!(user_id, "dashboard sources joined");
        Ok(assemble_dashboard(
            user_id,
            display_name_fallback,
            &skills,
            &leaderboard,
            &invites,
            &projects,
            &interests,
            &past_projects,
        ))
    }

    /// Build the profile view for one user.
    ///
    /// Five concurrent reads: skills, interests, past projects, projects,
    /// team invites. Name and email are supplied by the caller (typically
    /// from the identity accessor).
    pub async fn build_profile(
        &self,
        user_id: u64,
        display_name: &str,
        email: &str,
    ) -> Result<ProfileView> {
        if user_id == 0 {
            return Err(CoreError::DataUnavailable("user id"));
        }

        let (skills, interests, past_projects, projects, invites) = tokio::join!(
            self.gateway.fetch_skills(user_id),
            self.gateway.fetch_interests(user_id),
            self.gateway.fetch_past_projects(user_id),
            self.gateway.fetch_projects(user_id),
            self.gateway.fetch_team_invites(user_id),
        );

        let skills = tag(skills, "skills")?;
        let interests = tag(interests, "interests")?;
        let past_projects = tag(past_projects, "past projects")?;
        let projects = tag(projects, "projects")?;
        let invites = tag(invites, "team invites")?;

        debug!(user_id, "profile sources joined");
        Ok(assemble_profile(
            user_id,
            display_name,
            email,
            &skills,
            &interests,
            &past_projects,
            &projects,
            &invites,
        ))
    }
}

fn tag<T>(result: GatewayResult<T>, resource: &'static str) -> Result<T> {
    result.map_err(|err| CoreError::AggregationFailed {
        resource,
        message: err.to_string(),
    })
}

fn count_status(invites: &[TeamInvite], status: &str) -> usize {
    invites
        .iter()
        .filter(|invite| invite.status.eq_ignore_ascii_case(status))
        .count()
}

/// Pure assembly of the dashboard view from its six source record sets
#[allow(clippy::too_many_arguments)]
pub fn assemble_dashboard(
    user_id: u64,
    display_name_fallback: &str,
    skills: &[UserSkill],
    leaderboard: &[LeaderboardEntry],
    invites: &[TeamInvite],
    projects: &[ProjectRecord],
    interests: &[UserInterest],
    past_projects: &[PastProjectRecord],
) -> DashboardView {
    let skill_names: Vec<String> = skills.iter().map(|s| s.skill_name.clone()).collect();

    // User absent from the leaderboard (including an empty leaderboard):
    // synthesize a score from staged skills and a rank one past the end
    let (skill_score, global_rank) = match ranking::rank(leaderboard, user_id) {
        Some(placement) => (placement.score, placement.rank),
        None => (skill_names.len() as i64 * 10, leaderboard.len() + 1),
    };

    let latest_commit_message = projects
        .iter()
        .find(|p| {
            p.last_commit_message
                .as_deref()
                .is_some_and(|message| !message.trim().is_empty())
        })
        .and_then(|p| p.last_commit_message.clone());

    DashboardView {
        user_name: display_name_fallback.to_string(),
        active_teams: count_status(invites, "accepted"),
        skill_score,
        global_rank,
        skills: skill_names,
        latest_commit_message,
        pending_invites: count_status(invites, "pending"),
        projects_count: projects.len(),
        past_projects_count: past_projects.len(),
        interests_count: interests.len(),
    }
}

/// Pure assembly of the profile view from its five source record sets
#[allow(clippy::too_many_arguments)]
pub fn assemble_profile(
    user_id: u64,
    display_name: &str,
    email: &str,
    skills: &[UserSkill],
    interests: &[UserInterest],
    past_projects: &[PastProjectRecord],
    projects: &[ProjectRecord],
    invites: &[TeamInvite],
) -> ProfileView {
    let teams_pending = count_status(invites, "pending");

    // Fixed-order feed, at most one entry per signal
    let mut recent_activity = Vec::new();

    if let Some(latest) = projects.iter().find(|p| {
        p.last_commit_message
            .as_deref()
            .is_some_and(|message| !message.is_empty())
    }) {
        recent_activity.push(ActivityItem {
            text: format!("Pushed code to {}", latest.project_name),
            time: "Recently".to_string(),
        });
    }

    if teams_pending > 0 {
        recent_activity.push(ActivityItem {
            text: "You have pending team invites".to_string(),
            time: "Today".to_string(),
        });
    }

    if !skills.is_empty() {
        recent_activity.push(ActivityItem {
            text: "Updated your skills".to_string(),
            time: "This week".to_string(),
        });
    }

    ProfileView {
        id: user_id,
        name: display_name.to_string(),
        email: email.to_string(),
        skills: skills.iter().map(|s| s.skill_name.clone()).collect(),
        interests: interests.iter().map(|i| i.interest_name.clone()).collect(),
        past_projects: past_projects.to_vec(),
        projects_count: projects.len(),
        teams_accepted: count_status(invites, "accepted"),
        teams_pending,
        recent_activity,
    }
}
