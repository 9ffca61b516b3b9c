use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdClock, LdCreditCard, LdMapPin};
use dioxus_free_icons::Icon;
use shared_types::{ConstructionStage, CurrencyConfig, Payment, PaymentStatus, Project};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    ProgressBar,
};

use super::LoadError;
use crate::data::use_data_source;
use crate::format_helpers::{format_amount, format_date};

/// Single-project view for clients: progress, stage timeline and payment
/// milestones.
#[component]
pub fn ClientView(project: Project, #[props(default = true)] animated: bool) -> Element {
    let data = use_data_source();
    let currency = &store::config::app_config().currency;
    let progress = project.clamped_progress();
    let status = project.status.display_label();

    let stages = data.repo().list_stages(&project.id);
    let payments = data.repo().list_payments(&project.id);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./client.css") }
        div { class: "client-view",
            Card { class: "client-overview",
                div { class: "client-overview-head",
                    div {
                        h2 { class: "client-project-name", "{project.name}" }
                        p { class: "client-project-location",
                            Icon::<LdMapPin> { icon: LdMapPin, width: 18, height: 18 }
                            "{project.location}"
                        }
                    }
                    div { class: "client-status-pill", "Status: {status}" }
                }
                div { class: "client-completion",
                    div { class: "client-completion-row",
                        span { class: "client-completion-label", "Overall Completion" }
                        span { class: "client-completion-value", "{progress}%" }
                    }
                    ProgressBar { value: progress, animated: animated }
                }
            }

            div { class: "client-grid",
                Card { class: "client-stages",
                    CardHeader {
                        CardTitle {
                            Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                            "Construction Phases"
                        }
                    }
                    CardContent {
                        match stages {
                            Ok(stages) => rsx! {
                                ol { class: "stage-timeline",
                                    for stage in stages {
                                        StageRow { key: "{stage.id}", stage: stage }
                                    }
                                }
                            },
                            Err(e) => {
                                tracing::warn!(project_id = %project.id, error = %e, "Failed to load stages");
                                rsx! { LoadError { message: e.friendly_message() } }
                            }
                        }
                    }
                }

                Card { class: "client-payments",
                    CardHeader {
                        CardTitle {
                            Icon::<LdCreditCard> { icon: LdCreditCard, width: 20, height: 20 }
                            "Payment Tracking"
                        }
                    }
                    CardContent {
                        match payments {
                            Ok(payments) => rsx! {
                                ul { class: "payment-list",
                                    for payment in payments {
                                        PaymentRow {
                                            key: "{payment.id}",
                                            payment: payment,
                                            currency: currency.clone(),
                                        }
                                    }
                                }
                            },
                            Err(e) => {
                                tracing::warn!(project_id = %project.id, error = %e, "Failed to load payments");
                                rsx! { LoadError { message: e.friendly_message() } }
                            }
                        }
                        // Statement export is not wired up yet.
                        Button {
                            variant: ButtonVariant::Dark,
                            full_width: true,
                            class: "client-statement-button",
                            "Request Statement"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StageRow(stage: ConstructionStage) -> Element {
    let state = if stage.completed { "completed" } else { "pending" };
    let note = stage.progress_note();

    rsx! {
        li { class: "stage-row", "data-state": state,
            div { class: "stage-marker",
                if stage.completed {
                    Icon::<LdCheck> { icon: LdCheck, width: 18, height: 18 }
                } else {
                    span { class: "stage-marker-dot" }
                }
            }
            div { class: "stage-body",
                div { class: "stage-head",
                    h4 { class: "stage-name", "{stage.name}" }
                    span { class: "stage-impact", "{stage.percentage}% Impact" }
                }
                if stage.completed {
                    p { class: "stage-done", "Successfully Completed" }
                }
                if let Some(note) = note {
                    div { class: "stage-note",
                        p { "{note}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PaymentRow(payment: Payment, currency: CurrencyConfig) -> Element {
    let amount = format_amount(payment.amount, &currency);
    let date = format_date(payment.date);
    let variant = match payment.status {
        PaymentStatus::Paid => BadgeVariant::Success,
        PaymentStatus::Pending => BadgeVariant::Warning,
    };

    rsx! {
        li { class: "payment-row",
            div { class: "payment-head",
                div {
                    p { class: "payment-milestone", "{payment.milestone}" }
                    p { class: "payment-amount", "{amount}" }
                }
                Badge { variant: variant, {payment.status.as_str()} }
            }
            div { class: "payment-date",
                Icon::<LdClock> { icon: LdClock, width: 12, height: 12 }
                "{date}"
            }
        }
    }
}
