//! Static admin pages.
//!
//! Each page is a title, a subtitle and an empty-state panel. They take no
//! input and render the same markup on every call.

use dioxus::prelude::*;

pub const CUSTOMERS_TITLE: &str = "Customers";
pub const CUSTOMERS_PLACEHOLDER: &str = "Customer list placeholder.";
pub const REPORTS_TITLE: &str = "Reports & Analytics";
pub const REPORTS_PLACEHOLDER: &str = "Analytics dashboard coming soon.";

#[component]
fn PlaceholderPanel(title: String, subtitle: String, placeholder: String) -> Element {
    rsx! {
        section { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-bold", "{title}" }
                p { class: "text-sm text-muted", "{subtitle}" }
            }
            div { class: "rounded-lg border border-dashed p-12 text-center text-muted",
                "{placeholder}"
            }
        }
    }
}

#[component]
pub fn CustomersPage() -> Element {
    rsx! {
        PlaceholderPanel {
            title: CUSTOMERS_TITLE.to_string(),
            subtitle: "Manage storefront customer accounts.".to_string(),
            placeholder: CUSTOMERS_PLACEHOLDER.to_string(),
        }
    }
}

#[component]
pub fn ReportsPage() -> Element {
    rsx! {
        PlaceholderPanel {
            title: REPORTS_TITLE.to_string(),
            subtitle: "Sales and traffic insights for the storefront.".to_string(),
            placeholder: REPORTS_PLACEHOLDER.to_string(),
        }
    }
}

/// Placeholder for an admin path nothing is mounted at.
#[component]
pub fn NotFoundPage(path: String) -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Page not found".to_string(),
            subtitle: format!("Nothing lives at {}.", path),
            placeholder: "Use the navigation above to get back to a known page.".to_string(),
        }
    }
}
