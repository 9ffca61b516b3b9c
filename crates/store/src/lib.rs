pub mod config;
pub mod fixtures;
pub mod repo;

pub use repo::{FixtureRepository, ProjectRepository};
