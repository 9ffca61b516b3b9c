use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{PaymentStatus, StatTone, UserRole};
use store::ProjectRepository;

#[test]
fn test_list_projects_in_display_order() {
    let repo = common::test_repo();
    let projects = repo.list_projects().unwrap();
    assert_eq!(common::ids(&projects, |p| p.id.as_str()), vec!["p1", "p2"]);
    assert_eq!(projects[0].name, "Residential Villa - Tiko");
    assert_eq!(projects[0].progress, 65);
}

#[test]
fn test_find_project_returns_matching_row() {
    let repo = common::test_repo();
    let project = repo.find_project("p2").unwrap();
    assert_eq!(project.name, "Commercial Plaza - Buea");
    assert_eq!(project.progress, 30);
}

#[test]
fn test_list_stages_keeps_timeline_order() {
    let repo = common::test_repo();
    let stages = repo.list_stages("p1").unwrap();
    let names: Vec<&str> = stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Foundation", "Blockwork", "Roofing", "Finishing"]);
}

#[test]
fn test_list_payments_keeps_milestone_order() {
    let repo = common::test_repo();
    let payments = repo.list_payments("p1").unwrap();
    assert_eq!(common::ids(&payments, |p| p.id.as_str()), vec!["pay1", "pay2", "pay3"]);
    assert_eq!(payments[0].amount, 15_000_000);
    assert_eq!(payments[2].status, PaymentStatus::Pending);
}

#[test]
fn test_project_without_rows_lists_empty() {
    let repo = common::test_repo();
    assert!(repo.list_stages("p2").unwrap().is_empty());
    assert!(repo.list_payments("p2").unwrap().is_empty());
}

#[test]
fn test_summary_stats_are_four_static_cards() {
    let repo = common::test_repo();
    let stats = repo.summary_stats().unwrap();
    let labels: Vec<&str> = stats.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Active Projects", "Total Clients", "Ongoing Builds", "Pending Payments"]
    );
    assert_eq!(stats[3].value, "6.5M");
    assert_eq!(stats[0].tone, StatTone::Projects);
}

#[test]
fn test_summary_stats_ignore_project_rows() {
    let repo = common::two_project_repo();
    let stats = repo.summary_stats().unwrap();
    assert_eq!(stats[0].value, "24");
}

#[test]
fn test_demo_profiles_cover_both_roles() {
    let repo = common::test_repo();
    let profiles = repo.demo_profiles();
    assert!(profiles.iter().any(|p| p.role == UserRole::Admin));
    assert!(profiles.iter().any(|p| p.role == UserRole::Client));
}
