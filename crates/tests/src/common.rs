use chrono::NaiveDate;
use shared_types::{
    ConstructionStage, Payment, PaymentStatus, Project, ProjectStatus,
};
use store::FixtureRepository;

/// Repository over the bundled sample data.
pub fn test_repo() -> FixtureRepository {
    FixtureRepository::new()
}

/// Repository with two projects whose stages and payments are interleaved,
/// so per-project filtering is actually exercised.
pub fn two_project_repo() -> FixtureRepository {
    FixtureRepository::with_data(
        vec![make_project("a", 40), make_project("b", 90)],
        vec![
            make_stage("a1", "a", "Foundation", true, false),
            make_stage("b1", "b", "Foundation", true, false),
            make_stage("a2", "a", "Roofing", false, true),
            make_stage("b2", "b", "Finishing", false, true),
            make_stage("a3", "a", "Finishing", false, false),
        ],
        vec![
            make_payment("pa1", "a", 5_000_000, PaymentStatus::Paid),
            make_payment("pb1", "b", 7_500_000, PaymentStatus::Pending),
            make_payment("pa2", "a", 2_000_000, PaymentStatus::Pending),
        ],
    )
}

pub fn make_project(id: &str, progress: u8) -> Project {
    Project {
        id: id.to_string(),
        client_id: "2".to_string(),
        name: format!("Project {id}"),
        location: "Kumba".to_string(),
        status: ProjectStatus::InProgress,
        start_date: date(2024, 2, 1),
        progress,
    }
}

pub fn make_stage(
    id: &str,
    project_id: &str,
    name: &str,
    completed: bool,
    is_active: bool,
) -> ConstructionStage {
    ConstructionStage {
        id: id.to_string(),
        project_id: project_id.to_string(),
        name: name.to_string(),
        percentage: 25,
        completed,
        is_active,
        estimated_completion: None,
    }
}

pub fn make_payment(id: &str, project_id: &str, amount: u64, status: PaymentStatus) -> Payment {
    Payment {
        id: id.to_string(),
        project_id: project_id.to_string(),
        amount,
        status,
        date: date(2024, 3, 1),
        milestone: format!("Milestone {id}"),
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Ids of any slice of rows, in order.
pub fn ids<T>(rows: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    rows.iter().map(|row| id(row).to_string()).collect()
}
