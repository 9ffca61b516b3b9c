use shared_types::{AppError, ConstructionStage, Payment, Project, SummaryStat, UserProfile};

use super::ProjectRepository;
use crate::fixtures;

/// In-memory repository over the compiled-in fixtures.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureRepository {
    projects: Vec<Project>,
    stages: Vec<ConstructionStage>,
    payments: Vec<Payment>,
    stats: Vec<SummaryStat>,
    profiles: Vec<UserProfile>,
}

impl FixtureRepository {
    /// Repository seeded with the bundled sample data.
    pub fn new() -> Self {
        Self {
            projects: fixtures::projects(),
            stages: fixtures::stages(),
            payments: fixtures::payments(),
            stats: fixtures::summary_stats(),
            profiles: fixtures::demo_profiles(),
        }
    }

    /// Repository over caller-supplied rows. Used by tests that need
    /// shapes the bundled data does not have.
    pub fn with_data(
        projects: Vec<Project>,
        stages: Vec<ConstructionStage>,
        payments: Vec<Payment>,
    ) -> Self {
        Self {
            projects,
            stages,
            payments,
            stats: fixtures::summary_stats(),
            profiles: fixtures::demo_profiles(),
        }
    }

    fn ensure_project(&self, project_id: &str) -> Result<(), AppError> {
        if project_id.trim().is_empty() {
            return Err(AppError::bad_request("Project id must not be empty"));
        }
        if self.projects.iter().any(|p| p.id == project_id) {
            Ok(())
        } else {
            tracing::warn!(project_id, "Lookup for unknown project");
            Err(AppError::not_found(format!("Project {project_id} not found")))
        }
    }
}

impl Default for FixtureRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectRepository for FixtureRepository {
    fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        tracing::debug!(count = self.projects.len(), "Listing projects");
        Ok(self.projects.clone())
    }

    fn find_project(&self, id: &str) -> Result<Project, AppError> {
        self.ensure_project(id)?;
        self.projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))
    }

    fn list_stages(&self, project_id: &str) -> Result<Vec<ConstructionStage>, AppError> {
        self.ensure_project(project_id)?;
        let stages: Vec<ConstructionStage> = self
            .stages
            .iter()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect();
        tracing::debug!(project_id, count = stages.len(), "Listing stages");
        Ok(stages)
    }

    fn list_payments(&self, project_id: &str) -> Result<Vec<Payment>, AppError> {
        self.ensure_project(project_id)?;
        let payments: Vec<Payment> = self
            .payments
            .iter()
            .filter(|p| p.project_id == project_id)
            .cloned()
            .collect();
        tracing::debug!(project_id, count = payments.len(), "Listing payments");
        Ok(payments)
    }

    fn summary_stats(&self) -> Result<Vec<SummaryStat>, AppError> {
        Ok(self.stats.clone())
    }

    fn demo_profiles(&self) -> Vec<UserProfile> {
        self.profiles.clone()
    }
}
