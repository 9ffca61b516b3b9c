use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound for any completion percentage.
pub const MAX_PROGRESS: u8 = 100;

/// Lifecycle state of a construction project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl ProjectStatus {
    /// Wire form, e.g. `IN_PROGRESS`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "NOT_STARTED",
            ProjectStatus::InProgress => "IN_PROGRESS",
            ProjectStatus::Completed => "COMPLETED",
        }
    }

    /// Wire form with the first word separator turned into a space.
    pub fn display_label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

/// A client's construction project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub location: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    /// Overall completion percent, independent of stage flags.
    pub progress: u8,
}

impl Project {
    /// Progress value safe to use as a CSS width percentage.
    pub fn clamped_progress(&self) -> u8 {
        self.progress.min(MAX_PROGRESS)
    }
}

/// A named construction phase belonging to one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionStage {
    pub id: String,
    pub project_id: String,
    pub name: String,
    /// Relative impact weight. Stage weights need not sum to 100.
    pub percentage: u8,
    pub completed: bool,
    /// Set by the data layer on the stage currently being worked on.
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_completion: Option<NaiveDate>,
}

impl ConstructionStage {
    /// Whether the timeline should surface the in-progress note.
    pub fn shows_progress_note(&self) -> bool {
        !self.completed && self.is_active
    }

    /// Inline note for the active stage, or `None` for every other stage.
    pub fn progress_note(&self) -> Option<String> {
        if !self.shows_progress_note() {
            return None;
        }
        Some(match self.estimated_completion {
            Some(date) => format!(
                "Currently in progress. Estimated completion by {}.",
                date.format("%B %Y")
            ),
            None => "Currently in progress.".to_string(),
        })
    }
}

/// Which icon and colour a summary card uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatTone {
    Projects,
    Clients,
    Builds,
    Payments,
}

impl StatTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatTone::Projects => "projects",
            StatTone::Clients => "clients",
            StatTone::Builds => "builds",
            StatTone::Payments => "payments",
        }
    }
}

/// A pre-computed headline figure on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryStat {
    pub label: String,
    pub value: String,
    pub tone: StatTone,
}
