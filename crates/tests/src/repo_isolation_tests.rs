use crate::common;
use pretty_assertions::assert_eq;
use store::ProjectRepository;

#[test]
fn test_stages_scoped_to_requested_project() {
    let repo = common::two_project_repo();
    let a = repo.list_stages("a").unwrap();
    let b = repo.list_stages("b").unwrap();
    assert_eq!(common::ids(&a, |s| s.id.as_str()), vec!["a1", "a2", "a3"]);
    assert_eq!(common::ids(&b, |s| s.id.as_str()), vec!["b1", "b2"]);
    assert!(a.iter().all(|s| s.project_id == "a"));
    assert!(b.iter().all(|s| s.project_id == "b"));
}

#[test]
fn test_payments_scoped_to_requested_project() {
    let repo = common::two_project_repo();
    let a = repo.list_payments("a").unwrap();
    let b = repo.list_payments("b").unwrap();
    assert_eq!(common::ids(&a, |p| p.id.as_str()), vec!["pa1", "pa2"]);
    assert_eq!(common::ids(&b, |p| p.id.as_str()), vec!["pb1"]);
}

#[test]
fn test_each_project_has_its_own_active_stage() {
    let repo = common::two_project_repo();
    for project_id in ["a", "b"] {
        let stages = repo.list_stages(project_id).unwrap();
        let active: Vec<_> = stages.iter().filter(|s| s.shows_progress_note()).collect();
        assert_eq!(active.len(), 1, "project {project_id}");
    }
}
