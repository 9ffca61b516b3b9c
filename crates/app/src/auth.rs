use dioxus::prelude::*;
use shared_types::UserProfile;

/// Session state shared across routes.
///
/// The signed-in profile comes from the demo sign-in screen; there is no
/// credential check behind it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<UserProfile>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn sign_in(&mut self, user: UserProfile) {
        tracing::info!(name = %user.name, role = user.role.as_str(), "Signed in");
        self.current_user.set(Some(user));
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.current_user.read().as_ref() {
            tracing::info!(name = %user.name, "Signed out");
        }
        self.current_user.set(None);
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
