pub mod admin;
pub mod client;
pub mod tabs;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCreditCard, LdFileText, LdFolder, LdImage, LdLayoutDashboard, LdLogOut,
};
use dioxus_free_icons::Icon;
use shared_types::UserProfile;
use shared_ui::{
    Avatar, Badge, BadgeVariant, Button, ButtonVariant, Card, PageHeader, PageSubtitle,
    PageTitle, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset,
    SidebarLayout, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
};

use crate::data::use_data_source;
use crate::routes::Route;
use admin::AdminView;
use client::ClientView;
use tabs::DashboardTab;

/// Role-adaptive dashboard shell.
///
/// Without a user it asks `on_navigate` for the login route and renders
/// nothing. Otherwise it renders the sidebar and a main pane whose content
/// is picked by `user.role`; the selected tab only drives the header title
/// and the nav highlight.
#[component]
pub fn Dashboard(
    #[props(!optional)] user: Option<UserProfile>,
    on_logout: EventHandler,
    on_navigate: EventHandler<Route>,
) -> Element {
    let mut active_tab = use_signal(DashboardTab::default);
    let config = store::config::app_config();

    let Some(user) = user else {
        tracing::info!("No signed-in user, redirecting to login");
        on_navigate.call(Route::Login {});
        return rsx! {};
    };

    let animated = config.features.animations;
    let current = active_tab();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        SidebarLayout {
            Sidebar {
                SidebarHeader {
                    a { class: "dashboard-brand", href: "/",
                        if let Some(logo) = config.branding.logo_url.as_ref() {
                            img { class: "dashboard-brand-logo", src: "{logo}", alt: "Logo" }
                        }
                        div { class: "dashboard-brand-text",
                            span { class: "dashboard-brand-name", "{config.branding.company_name}" }
                            span { class: "dashboard-brand-tagline", "{config.branding.tagline}" }
                        }
                    }
                    ProfileCard { user: user.clone() }
                }

                SidebarContent {
                    SidebarMenu {
                        for tab in DashboardTab::ALL {
                            SidebarMenuItem { key: "{tab.id()}",
                                SidebarMenuButton {
                                    active: current == tab,
                                    onclick: move |_| {
                                        tracing::debug!(tab = tab.id(), "Dashboard tab selected");
                                        active_tab.set(tab);
                                    },
                                    TabIcon { tab: tab }
                                    "{tab.label()}"
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    Button {
                        variant: ButtonVariant::Danger,
                        full_width: true,
                        class: "dashboard-sign-out",
                        onclick: move |_| on_logout.call(()),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 20, height: 20 }
                        "Sign Out"
                    }
                }
            }

            SidebarInset {
                DashboardMain { user: user.clone(), tab: current, animated: animated }
            }
        }
    }
}

/// Header plus role-selected content for the main pane.
#[component]
pub fn DashboardMain(user: UserProfile, tab: DashboardTab, animated: bool) -> Element {
    let title = tab.title();
    let first_name = user.first_name().to_string();

    rsx! {
        PageHeader {
            div {
                PageTitle { "{title}" }
                PageSubtitle { "Welcome back, {first_name}" }
            }
        }
        // Keyed on the tab so the fade replays on every switch.
        for shown in [tab] {
            div {
                key: "{shown.id()}",
                class: "dashboard-panel",
                "data-animated": if animated { "true" } else { "false" },
                RoleContent { user: user.clone(), animated: animated }
            }
        }
    }
}

/// Admin sees the portfolio; everyone else sees the first project.
#[component]
fn RoleContent(user: UserProfile, animated: bool) -> Element {
    let data = use_data_source();

    if user.is_admin() {
        return rsx! { AdminView {} };
    }

    match data.repo().list_projects() {
        Ok(projects) => match projects.into_iter().next() {
            Some(project) => rsx! { ClientView { project: project, animated: animated } },
            None => rsx! { NoProject {} },
        },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to list projects for client view");
            rsx! { LoadError { message: e.friendly_message() } }
        }
    }
}

/// Avatar, name and role label shown under the brand.
#[component]
fn ProfileCard(user: UserProfile) -> Element {
    rsx! {
        div { class: "dashboard-profile",
            Avatar { initial: user.initial() }
            div { class: "dashboard-profile-text",
                p { class: "dashboard-profile-name", "{user.name}" }
                Badge { variant: BadgeVariant::Primary, {user.role.as_str()} }
            }
        }
    }
}

#[component]
fn TabIcon(tab: DashboardTab) -> Element {
    match tab {
        DashboardTab::Overview => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 20, height: 20 }
        },
        DashboardTab::Projects => rsx! {
            Icon::<LdFolder> { icon: LdFolder, width: 20, height: 20 }
        },
        DashboardTab::Payments => rsx! {
            Icon::<LdCreditCard> { icon: LdCreditCard, width: 20, height: 20 }
        },
        DashboardTab::Media => rsx! {
            Icon::<LdImage> { icon: LdImage, width: 20, height: 20 }
        },
        DashboardTab::Docs => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
        },
    }
}

#[component]
fn NoProject() -> Element {
    rsx! {
        Card {
            div { class: "dashboard-empty-state",
                p { class: "dashboard-empty-title", "No active project" }
                p { class: "dashboard-empty-description",
                    "Your project will appear here once it has been registered."
                }
            }
        }
    }
}

/// Inline card shown when the repository returns an error.
#[component]
pub fn LoadError(message: String) -> Element {
    rsx! {
        div { class: "dashboard-load-error",
            p { class: "dashboard-empty-title", "Could not load data." }
            p { class: "dashboard-empty-description", "{message}" }
        }
    }
}
