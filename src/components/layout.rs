use dioxus::prelude::*;

use super::render::render_component;

/// Admin navigation entries: (href, label).
const NAV_LINKS: &[(&str, &str)] = &[
    ("/admin/customers", "Customers"),
    ("/admin/reports", "Reports"),
];

/// Document shell around an already-rendered page body.
#[component]
pub fn AdminLayout(title: String, body: String) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} | Storefront Admin" }
        }
        body {
            nav { class: "flex gap-4 p-4 border-b",
                for (href, label) in NAV_LINKS.iter() {
                    a { key: "{href}", class: "nav-link", href: "{href}", "{label}" }
                }
            }
            main { class: "p-6", dangerous_inner_html: "{body}" }
        }
    }
}

/// Render a full HTML document for a page body produced by another component.
pub fn render_document(title: &str, body: &str) -> String {
    let shell = render_component(
        AdminLayout,
        AdminLayoutProps::builder()
            .title(title.to_string())
            .body(body.to_string())
            .build(),
    );
    format!("<!doctype html><html lang=\"en\">{}</html>", shell)
}
