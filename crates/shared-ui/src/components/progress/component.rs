use dioxus::prelude::*;

/// Track height for a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ProgressSize {
    #[default]
    Large,
    Small,
}

impl ProgressSize {
    fn class(&self) -> &'static str {
        match self {
            ProgressSize::Large => "lg",
            ProgressSize::Small => "sm",
        }
    }
}

/// Horizontal completion bar. The fill width is `value` percent, capped
/// at 100.
///
/// With `animated` the fill grows from zero when first mounted. The
/// animation is CSS-only and has no effect on state.
#[component]
pub fn ProgressBar(
    value: u8,
    #[props(default = true)] animated: bool,
    #[props(default)] size: ProgressSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let value = value.min(100);
    let base = vec![
        Attribute::new("class", "progress", None, false),
        Attribute::new("data-size", size.class(), None, false),
        Attribute::new("role", "progressbar", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{value}",
            ..merged,
            div {
                class: "progress-fill",
                "data-animated": if animated { "true" } else { "false" },
                style: "width: {value}%;",
            }
        }
    }
}
