// Standalone components
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod page_header;
pub mod progress;

// Layout; used by the dashboard shell
pub mod sidebar;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use page_header::*;
pub use progress::*;
pub use sidebar::*;
