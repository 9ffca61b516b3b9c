use crate::auth::use_session;
use crate::data::use_data_source;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::UserProfile;
use shared_ui::{Avatar, Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle};

/// Demo sign-in: pick one of the store's sample profiles.
/// Already signed-in users go straight to the dashboard.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let data = use_data_source();
    let profiles = use_hook(|| data.repo().demo_profiles());

    if session.is_authenticated() {
        navigator().push(Route::Home {});
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    div {
                        CardTitle { "Sign In" }
                        p { class: "auth-description", "Choose a profile to open the project portal" }
                    }
                }
                CardContent {
                    ProfilePicker {
                        profiles: profiles,
                        on_pick: move |user: UserProfile| {
                            session.sign_in(user);
                            navigator().push(Route::Home {});
                        },
                    }
                }
            }
        }
    }
}

/// One button per profile. Choosing one hands it to `on_pick`.
#[component]
pub fn ProfilePicker(profiles: Vec<UserProfile>, on_pick: EventHandler<UserProfile>) -> Element {
    if profiles.is_empty() {
        return rsx! {
            p { class: "auth-empty", "No demo profiles are configured." }
        };
    }

    rsx! {
        ul { class: "auth-profile-list",
            for profile in profiles {
                li { key: "{profile.name}",
                    button {
                        r#type: "button",
                        class: "auth-profile-option",
                        onclick: {
                            let profile = profile.clone();
                            move |_| on_pick.call(profile.clone())
                        },
                        Avatar { initial: profile.initial() }
                        span { class: "auth-profile-name", "{profile.name}" }
                        Badge { variant: BadgeVariant::Neutral, {profile.role.as_str()} }
                    }
                }
            }
        }
    }
}
