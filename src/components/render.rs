//! Server-side rendering of components to HTML strings.

use dioxus::dioxus_core::{ComponentFunction, VirtualDom};

/// Render `component` with `props` to an HTML string.
///
/// A component that renders nothing yields an empty string.
pub fn render_component<P: Clone + 'static, M: 'static>(
    component: impl ComponentFunction<P, M>,
    props: P,
) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
