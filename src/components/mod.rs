//! Presentation components for the storefront admin.
//!
//! Components are dioxus components rendered on the server with
//! `dioxus-ssr`. Anything a component needs from the host (route
//! parameters, navigation, delegate views) arrives through its props.

mod heading;
mod layout;
mod order_detail;
mod pages;
mod render;

pub use heading::*;
pub use layout::*;
pub use order_detail::*;
pub use pages::*;
pub use render::*;
