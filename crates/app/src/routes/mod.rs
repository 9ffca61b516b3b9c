pub mod dashboard;
pub mod login;
pub mod not_found;

use crate::auth::use_session;
use dioxus::prelude::*;

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Dashboard wired to the live session and router.
///
/// Signing out clears the session; the dashboard's own guard then sends
/// the user back to the login page.
#[component]
fn Home() -> Element {
    let mut session = use_session();
    let user = session.current_user.read().clone();

    rsx! {
        Dashboard {
            user: user,
            on_logout: move |_| session.sign_out(),
            on_navigate: move |route: Route| {
                tracing::debug!(?route, "Navigating");
                navigator().push(route);
            },
        }
    }
}
