use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{PaymentStatus, MAX_PROGRESS};
use store::ProjectRepository;

#[test]
fn test_progress_within_bounds() {
    let repo = common::test_repo();
    for project in repo.list_projects().unwrap() {
        assert!(project.progress <= MAX_PROGRESS, "{}", project.id);
        assert_eq!(project.clamped_progress(), project.progress);
    }
}

#[test]
fn test_ids_unique_within_each_collection() {
    let repo = common::test_repo();
    let projects = repo.list_projects().unwrap();
    let mut project_ids = common::ids(&projects, |p| p.id.as_str());
    project_ids.sort();
    project_ids.dedup();
    assert_eq!(project_ids.len(), projects.len());

    let mut stage_ids = Vec::new();
    let mut payment_ids = Vec::new();
    for project in &projects {
        stage_ids.extend(common::ids(&repo.list_stages(&project.id).unwrap(), |s| s.id.as_str()));
        payment_ids.extend(common::ids(&repo.list_payments(&project.id).unwrap(), |p| p.id.as_str()));
    }
    let stage_count = stage_ids.len();
    stage_ids.sort();
    stage_ids.dedup();
    assert_eq!(stage_ids.len(), stage_count);
    let payment_count = payment_ids.len();
    payment_ids.sort();
    payment_ids.dedup();
    assert_eq!(payment_ids.len(), payment_count);
}

#[test]
fn test_exactly_one_stage_shows_progress_note() {
    let repo = common::test_repo();
    let stages = repo.list_stages("p1").unwrap();
    let noted: Vec<&str> = stages
        .iter()
        .filter(|s| s.shows_progress_note())
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(noted, vec!["Roofing"]);
    assert_eq!(stages.iter().filter(|s| s.completed).count(), 2);
}

#[test]
fn test_completed_stage_never_carries_note() {
    let repo = common::test_repo();
    for stage in repo.list_stages("p1").unwrap() {
        if stage.completed {
            assert!(stage.progress_note().is_none(), "{}", stage.name);
        }
    }
}

#[test]
fn test_payment_states_split_paid_and_pending() {
    let repo = common::test_repo();
    let payments = repo.list_payments("p1").unwrap();
    let paid = payments.iter().filter(|p| p.status == PaymentStatus::Paid).count();
    let pending = payments.iter().filter(|p| p.status == PaymentStatus::Pending).count();
    assert_eq!((paid, pending), (2, 1));
}

#[test]
fn test_fixture_rows_serialize_with_wire_names() {
    let repo = common::test_repo();
    let project = repo.find_project("p1").unwrap();
    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["clientId"], "2");
    assert_eq!(json["status"], "IN_PROGRESS");
    assert_eq!(json["startDate"], "2023-11-15");
}
