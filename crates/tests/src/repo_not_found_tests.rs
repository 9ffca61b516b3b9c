use crate::common;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;
use store::ProjectRepository;

#[test]
fn test_find_unknown_project_is_not_found() {
    let repo = common::test_repo();
    let err = repo.find_project("p404").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.friendly_message(), "Project p404 not found");
}

#[test]
fn test_stages_for_unknown_project_is_not_found() {
    let repo = common::test_repo();
    let err = repo.list_stages("nope").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn test_payments_for_unknown_project_is_not_found() {
    let repo = common::test_repo();
    let err = repo.list_payments("nope").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn test_blank_project_id_is_bad_request() {
    let repo = common::test_repo();
    for id in ["", "   "] {
        assert_eq!(repo.list_stages(id).unwrap_err().kind, AppErrorKind::BadRequest);
        assert_eq!(repo.list_payments(id).unwrap_err().kind, AppErrorKind::BadRequest);
        assert_eq!(repo.find_project(id).unwrap_err().kind, AppErrorKind::BadRequest);
    }
}

#[test]
fn test_empty_repository_lists_nothing() {
    let repo = store::FixtureRepository::with_data(vec![], vec![], vec![]);
    assert!(repo.list_projects().unwrap().is_empty());
    assert!(repo.list_stages("p1").unwrap_err().is_not_found());
}
