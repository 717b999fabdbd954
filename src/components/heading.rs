//! Two-line heading: a small uppercase label above a larger uppercase title.

use dioxus::prelude::*;

use super::render::render_component;

pub(crate) const LABEL_CLASS: &str = "text-xs font-semibold tracking-widest uppercase text-muted";
pub(crate) const TITLE_CLASS: &str = "text-2xl font-bold uppercase";

/// The two display strings of a heading, supplied at render time.
pub type HeadingContent = HeadingDisplayProps;

/// Uppercasing comes from the `uppercase` class; the text is emitted as given.
/// Empty strings produce empty slots.
#[component]
pub fn HeadingDisplay(subheading: String, heading: String) -> Element {
    rsx! {
        div { class: "flex flex-col gap-1",
            span { class: LABEL_CLASS, "{subheading}" }
            h2 { class: TITLE_CLASS, "{heading}" }
        }
    }
}

/// Render a heading from a label and a title.
pub fn heading_display(subheading: &str, heading: &str) -> String {
    render_component(
        HeadingDisplay,
        HeadingDisplayProps::builder()
            .subheading(subheading.to_string())
            .heading(heading.to_string())
            .build(),
    )
}
