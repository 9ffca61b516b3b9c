use dioxus::prelude::*;
use std::rc::Rc;
use store::ProjectRepository;

/// Repository handle provided as context to every view.
#[derive(Clone)]
pub struct DataSource {
    repo: Rc<dyn ProjectRepository>,
}

impl DataSource {
    pub fn new(repo: impl ProjectRepository + 'static) -> Self {
        Self {
            repo: Rc::new(repo),
        }
    }

    pub fn repo(&self) -> &dyn ProjectRepository {
        self.repo.as_ref()
    }
}

/// Hook to access the injected repository.
pub fn use_data_source() -> DataSource {
    use_context::<DataSource>()
}
