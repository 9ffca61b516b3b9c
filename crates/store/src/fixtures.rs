//! Compiled-in sample data for the portal.
//!
//! Only [`crate::FixtureRepository`] reads these; views go through the
//! repository trait.

use chrono::NaiveDate;
use shared_types::{
    ConstructionStage, Payment, PaymentStatus, Project, ProjectStatus, StatTone, SummaryStat,
    UserProfile, UserRole,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn project(
    id: &str,
    client_id: &str,
    name: &str,
    location: &str,
    start_date: NaiveDate,
    progress: u8,
) -> Project {
    Project {
        id: id.to_string(),
        client_id: client_id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        status: ProjectStatus::InProgress,
        start_date,
        progress,
    }
}

fn stage(id: &str, project_id: &str, name: &str, percentage: u8, completed: bool) -> ConstructionStage {
    ConstructionStage {
        id: id.to_string(),
        project_id: project_id.to_string(),
        name: name.to_string(),
        percentage,
        completed,
        is_active: false,
        estimated_completion: None,
    }
}

fn payment(
    id: &str,
    project_id: &str,
    amount: u64,
    status: PaymentStatus,
    date: NaiveDate,
    milestone: &str,
) -> Payment {
    Payment {
        id: id.to_string(),
        project_id: project_id.to_string(),
        amount,
        status,
        date,
        milestone: milestone.to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "p1",
            "2",
            "Residential Villa - Tiko",
            "Golf Layout, Tiko",
            date(2023, 11, 15),
            65,
        ),
        project(
            "p2",
            "2",
            "Commercial Plaza - Buea",
            "Molyko, Buea",
            date(2024, 1, 10),
            30,
        ),
    ]
}

pub fn stages() -> Vec<ConstructionStage> {
    let mut roofing = stage("s3", "p1", "Roofing", 20, false);
    roofing.is_active = true;
    roofing.estimated_completion = Some(date(2024, 5, 31));

    vec![
        stage("s1", "p1", "Foundation", 25, true),
        stage("s2", "p1", "Blockwork", 35, true),
        roofing,
        stage("s4", "p1", "Finishing", 20, false),
    ]
}

pub fn payments() -> Vec<Payment> {
    vec![
        payment(
            "pay1",
            "p1",
            15_000_000,
            PaymentStatus::Paid,
            date(2023, 11, 10),
            "Advance / Land Title",
        ),
        payment(
            "pay2",
            "p1",
            8_000_000,
            PaymentStatus::Paid,
            date(2023, 12, 20),
            "Foundation Completion",
        ),
        payment(
            "pay3",
            "p1",
            12_000_000,
            PaymentStatus::Pending,
            date(2024, 4, 15),
            "Roofing Stage",
        ),
    ]
}

/// Headline figures for the admin dashboard. Static, not derived from
/// [`projects`].
pub fn summary_stats() -> Vec<SummaryStat> {
    [
        ("Active Projects", "24", StatTone::Projects),
        ("Total Clients", "89", StatTone::Clients),
        ("Ongoing Builds", "12", StatTone::Builds),
        ("Pending Payments", "6.5M", StatTone::Payments),
    ]
    .into_iter()
    .map(|(label, value, tone)| SummaryStat {
        label: label.to_string(),
        value: value.to_string(),
        tone,
    })
    .collect()
}

/// Profiles offered on the demo sign-in screen.
pub fn demo_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile::new("Fotabong Admin", UserRole::Admin),
        UserProfile::new("Ngwa Emmanuel", UserRole::Client),
    ]
}
