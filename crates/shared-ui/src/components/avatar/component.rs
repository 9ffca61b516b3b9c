use dioxus::prelude::*;

/// Square tile showing a single glyph, typically the user's initial.
#[component]
pub fn Avatar(
    initial: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "avatar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-hidden": "true",
            ..merged,
            "{initial}"
        }
    }
}
