//! End-to-end onboarding flow: stage edits, submit, retry after failure

mod common;

use std::sync::Arc;

use common::MockGateway;
use crewlink_core::types::{SkillLevel, StagedSkill};
use crewlink_core::{
    Collection, Identity, MemorySession, SessionStore, StagingStore, SubmissionCoordinator,
};

fn skill(name: &str, level: SkillLevel) -> StagedSkill {
    StagedSkill {
        name: name.to_string(),
        level,
    }
}

#[tokio::test]
async fn test_stage_then_submit_flow() {
    let session = Arc::new(MemorySession::new());
    session.set("userId", "7");
    session.set("userName", "Ada");

    let staging = StagingStore::new(session.clone());
    let identity = Identity::new(session);

    // User toggles skills, changing their mind about Go's level
    staging.upsert(
        Collection::Skills,
        skill("Go", SkillLevel::Beginner),
        |s: &StagedSkill| s.name.clone(),
    );
    staging.upsert(
        Collection::Skills,
        skill("Rust", SkillLevel::Advanced),
        |s: &StagedSkill| s.name.clone(),
    );
    staging.upsert(
        Collection::Skills,
        skill("Go", SkillLevel::Intermediate),
        |s: &StagedSkill| s.name.clone(),
    );

    let gateway = Arc::new(MockGateway::new());
    let coordinator = SubmissionCoordinator::new(gateway.clone());

    let user_id = identity.user_id().unwrap();
    let staged: Vec<StagedSkill> = staging.load(Collection::Skills);
    let outcome = coordinator.submit_skills(user_id, staged).await;

    assert!(outcome.success);
    let writes = gateway.recorded_writes();
    assert_eq!(writes.len(), 2, "one write per unique skill");
    assert!(writes.iter().any(|(_, p)| p["skill_name"] == "Go"
        && p["proficiency_level"] == "intermediate"));
}

#[tokio::test]
async fn test_staging_survives_failed_submission_for_retry() {
    let session = Arc::new(MemorySession::new());
    let staging = StagingStore::new(session);

    staging.upsert(
        Collection::Skills,
        skill("Go", SkillLevel::Beginner),
        |s: &StagedSkill| s.name.clone(),
    );

    let mut gateway = MockGateway::new();
    gateway.fail_writes.insert("Go".to_string());
    let gateway = Arc::new(gateway);
    let coordinator = SubmissionCoordinator::new(gateway.clone());

    let staged: Vec<StagedSkill> = staging.load(Collection::Skills);
    let outcome = coordinator.submit_skills(7, staged).await;
    assert!(!outcome.success);

    // The coordinator never touches the staging store: the user can retry
    // without re-entering anything
    let still_staged: Vec<StagedSkill> = staging.load(Collection::Skills);
    assert_eq!(still_staged.len(), 1);
    assert_eq!(still_staged[0].name, "Go");
}

#[tokio::test]
async fn test_caller_clears_staging_after_successful_submit() {
    let session = Arc::new(MemorySession::new());
    let staging = StagingStore::new(session);

    staging.upsert(
        Collection::Skills,
        skill("Go", SkillLevel::Beginner),
        |s: &StagedSkill| s.name.clone(),
    );

    let gateway = Arc::new(MockGateway::new());
    let coordinator = SubmissionCoordinator::new(gateway);

    let staged: Vec<StagedSkill> = staging.load(Collection::Skills);
    let outcome = coordinator.submit_skills(7, staged).await;
    assert!(outcome.success);

    staging.clear(Collection::Skills);
    let remaining: Vec<StagedSkill> = staging.load(Collection::Skills);
    assert!(remaining.is_empty());
}
