use dioxus::prelude::*;
use store::FixtureRepository;

mod auth;
mod data;
mod format_helpers;
mod routes;
use auth::SessionState;
use data::DataSource;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_hook(|| {
        let config = store::config::load_config();
        tracing::info!(
            platform = client_platform(),
            company = %config.branding.company_name,
            "Starting construction portal"
        );
    });

    use_context_provider(SessionState::new);
    use_context_provider(|| DataSource::new(FixtureRepository::new()));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
