pub mod config;
pub mod error;
pub mod feature_flags;

// Portal domain modules
pub mod models;
pub mod payment;
pub mod project;

pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use payment::*;
pub use project::*;
