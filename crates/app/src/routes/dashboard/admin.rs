use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdFolder, LdPlus, LdUser, LdWallet};
use dioxus_free_icons::Icon;
use shared_types::{Project, StatTone, SummaryStat};
use shared_ui::{
    Button, ButtonVariant, Card, CardHeader, CardTitle, ProgressBar, ProgressSize,
};

use super::LoadError;
use crate::data::use_data_source;

/// Portfolio view for staff: headline stats and every client project.
#[component]
pub fn AdminView() -> Element {
    let data = use_data_source();
    let stats = data.repo().summary_stats();
    let projects = data.repo().list_projects();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }
        div { class: "admin-view",
            match stats {
                Ok(stats) => rsx! {
                    div { class: "admin-stat-grid",
                        for stat in stats {
                            StatCard { key: "{stat.label}", stat: stat }
                        }
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load summary stats");
                    rsx! { LoadError { message: e.friendly_message() } }
                }
            }

            Card { flush: true, class: "admin-projects",
                CardHeader {
                    CardTitle { "All Client Projects" }
                    // Project creation has no form yet.
                    Button { variant: ButtonVariant::Primary,
                        Icon::<LdPlus> { icon: LdPlus, width: 18, height: 18 }
                        "New Project"
                    }
                }
                match projects {
                    Ok(projects) => rsx! {
                        div { class: "admin-table-wrap",
                            table { class: "admin-table",
                                thead {
                                    tr {
                                        th { "Project Name" }
                                        th { "Location" }
                                        th { "Progress" }
                                        th { "Actions" }
                                    }
                                }
                                tbody {
                                    for project in projects {
                                        ProjectRow { key: "{project.id}", project: project }
                                    }
                                }
                            }
                        }
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to load project list");
                        rsx! { LoadError { message: e.friendly_message() } }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(stat: SummaryStat) -> Element {
    rsx! {
        Card { class: "admin-stat-card",
            div { class: "admin-stat-icon", "data-tone": stat.tone.as_str(),
                StatIcon { tone: stat.tone }
            }
            div {
                p { class: "admin-stat-label", "{stat.label}" }
                p { class: "admin-stat-value", "{stat.value}" }
            }
        }
    }
}

#[component]
fn StatIcon(tone: StatTone) -> Element {
    match tone {
        StatTone::Projects => rsx! {
            Icon::<LdFolder> { icon: LdFolder, width: 24, height: 24 }
        },
        StatTone::Clients => rsx! {
            Icon::<LdUser> { icon: LdUser, width: 24, height: 24 }
        },
        StatTone::Builds => rsx! {
            Icon::<LdBriefcase> { icon: LdBriefcase, width: 24, height: 24 }
        },
        StatTone::Payments => rsx! {
            Icon::<LdWallet> { icon: LdWallet, width: 24, height: 24 }
        },
    }
}

#[component]
fn ProjectRow(project: Project) -> Element {
    let progress = project.clamped_progress();

    rsx! {
        tr { class: "admin-table-row",
            td { class: "admin-project-name", "{project.name}" }
            td { class: "admin-project-location", "{project.location}" }
            td {
                div { class: "admin-progress",
                    ProgressBar { value: progress, animated: false, size: ProgressSize::Small }
                    span { class: "admin-progress-value", "{progress}%" }
                }
            }
            td {
                Button { variant: ButtonVariant::Link, "Update Details" }
            }
        }
    }
}
