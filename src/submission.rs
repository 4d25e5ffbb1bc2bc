//! Batched submission of staged records
//!
//! Converts a staged collection into a minimal, deduplicated set of write
//! operations and fans them out in parallel. Dedup happens before any write
//! is issued (last occurrence wins per natural key), and every write settles
//! and reports individually — a failure never cancels its siblings, and the
//! aggregate failure message names the records that failed. The coordinator
//! never touches the staging store, so a failed submission leaves staged
//! data intact for retry. Resubmitting an unchanged collection re-sends the
//! same payload set; there is no "already submitted" suppression.

use futures::future::join_all;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{info, warn};

use crate::gateway::{Gateway, GatewayResult, InterestPayload, PastProjectPayload, SkillPayload};
use crate::types::{StagedInterest, StagedPastProject, StagedSkill};

/// Aggregate result of one submission. Never an `Err`: transport failures
/// are folded into `success = false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

impl SubmitOutcome {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    fn not_logged_in() -> Self {
        Self::failed("User not logged in")
    }
}

/// Deduplicate by natural key: the last occurrence of a key wins, keys keep
/// their first-seen order so the resulting payload set is deterministic.
fn dedup_last_wins<T, K, F>(records: Vec<T>, key_fn: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut unique: Vec<T> = Vec::new();

    for record in records {
        let key = key_fn(&record);
        match positions.get(&key) {
            Some(&index) => unique[index] = record,
            None => {
                positions.insert(key, unique.len());
                unique.push(record);
            }
        }
    }

    unique
}

/// Issues one write per unique staged record, in parallel
pub struct SubmissionCoordinator {
    gateway: Arc<dyn Gateway>,
}

impl SubmissionCoordinator {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// Submit staged skills, deduplicated by name
    pub async fn submit_skills(&self, user_id: u64, staged: Vec<StagedSkill>) -> SubmitOutcome {
        if user_id == 0 {
            return SubmitOutcome::not_logged_in();
        }

        let staged: Vec<StagedSkill> =
            staged.into_iter().filter(|s| !s.name.is_empty()).collect();
        let unique = dedup_last_wins(staged, |s| s.name.clone());
        if unique.is_empty() {
            return SubmitOutcome::ok("No skills to save");
        }

        let writes = unique.into_iter().map(|skill| {
            let key = skill.name.clone();
            let payload = SkillPayload {
                skill_name: skill.name,
                proficiency_level: skill.level,
            };
            async move { (key, self.gateway.add_skill(user_id, payload).await) }
        });
        let settled = join_all(writes).await;

        aggregate("skills", "Skills saved", "Failed to save skills", settled)
    }

    /// Submit staged interests, deduplicated by name
    pub async fn submit_interests(
        &self,
        user_id: u64,
        staged: Vec<StagedInterest>,
    ) -> SubmitOutcome {
        if user_id == 0 {
            return SubmitOutcome::not_logged_in();
        }

        let staged: Vec<StagedInterest> =
            staged.into_iter().filter(|i| !i.name.is_empty()).collect();
        let unique = dedup_last_wins(staged, |i| i.name.clone());
        if unique.is_empty() {
            return SubmitOutcome::ok("No interests to save");
        }

        let writes = unique.into_iter().map(|interest| {
            let key = interest.name.clone();
            let payload = InterestPayload {
                interest_name: interest.name,
            };
            async move { (key, self.gateway.add_interest(user_id, payload).await) }
        });
        let settled = join_all(writes).await;

        aggregate(
            "interests",
            "Interests saved",
            "Failed to save interests",
            settled,
        )
    }

    /// Submit staged past projects, deduplicated by title. Empty description
    /// falls back to the title, empty technologies to "Not specified".
    pub async fn submit_past_projects(
        &self,
        user_id: u64,
        staged: Vec<StagedPastProject>,
    ) -> SubmitOutcome {
        if user_id == 0 {
            return SubmitOutcome::not_logged_in();
        }

        let staged: Vec<StagedPastProject> =
            staged.into_iter().filter(|p| !p.title.is_empty()).collect();
        let unique = dedup_last_wins(staged, |p| p.title.clone());
        if unique.is_empty() {
            return SubmitOutcome::ok("No projects to save");
        }

        let writes = unique.into_iter().map(|project| {
            let key = project.title.clone();
            let payload = PastProjectPayload {
                description: if project.description.is_empty() {
                    project.title.clone()
                } else {
                    project.description
                },
                technologies_used: if project.technologies.is_empty() {
                    "Not specified".to_string()
                } else {
                    project.technologies
                },
                project_title: project.title,
            };
            async move { (key, self.gateway.add_past_project(user_id, payload).await) }
        });
        let settled = join_all(writes).await;

        aggregate(
            "past projects",
            "Past projects saved",
            "Failed to save past projects",
            settled,
        )
    }
}

/// Fold per-record outcomes into one aggregate result, attributing failures
/// to their natural keys
fn aggregate(
    what: &str,
    ok_message: &str,
    err_message: &str,
    settled: Vec<(String, GatewayResult<()>)>,
) -> SubmitOutcome {
    let total = settled.len();
    let mut failed: Vec<String> = Vec::new();

    for (key, result) in settled {
        if let Err(err) = result {
            warn!(what, key = %key, %err, "record write failed");
            failed.push(key);
        }
    }

    if failed.is_empty() {
        info!(what, count = total, "submission complete");
        SubmitOutcome::ok(ok_message)
    } else {
        SubmitOutcome::failed(format!(
            "{err_message}: {} of {total} failed ({})",
            failed.len(),
            failed.join(", ")
        ))
    }
}
