use dioxus::prelude::*;

/// Page header container: title block on the left, actions on the right.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            {children}
        }
    }
}

/// Page title rendered as an h1.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Muted line under the title.
#[component]
pub fn PageSubtitle(children: Element) -> Element {
    rsx! {
        p { class: "page-subtitle", {children} }
    }
}
