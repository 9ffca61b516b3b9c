mod fixture;

pub use fixture::FixtureRepository;

use shared_types::{AppError, ConstructionStage, Payment, Project, SummaryStat, UserProfile};

/// Read access to portal data.
///
/// Views receive an implementation through context and never touch the
/// fixtures directly. Stage and payment queries are scoped to one project
/// by the implementation.
pub trait ProjectRepository {
    /// All projects in display order.
    fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    /// A single project, or `NotFound`.
    fn find_project(&self, id: &str) -> Result<Project, AppError>;

    /// Stages of one project in timeline order. `NotFound` for unknown ids.
    fn list_stages(&self, project_id: &str) -> Result<Vec<ConstructionStage>, AppError>;

    /// Payments of one project in milestone order. `NotFound` for unknown ids.
    fn list_payments(&self, project_id: &str) -> Result<Vec<Payment>, AppError>;

    /// Headline figures for the admin dashboard.
    fn summary_stats(&self) -> Result<Vec<SummaryStat>, AppError>;

    /// Profiles selectable on the demo sign-in screen.
    fn demo_profiles(&self) -> Vec<UserProfile>;
}
