//! Routing context handed to pages: URL parameters and a navigator.
//!
//! Pages never read ambient routing state. The host resolves parameters and
//! supplies a [`Navigator`] explicitly at render time.

mod history;

pub use history::History;

use std::collections::HashMap;

/// Name of the path parameter carrying an order identifier.
pub const ORDER_ID: &str = "id";

/// Capability to move navigation history. History itself is owned by the
/// implementor, never by the page that holds the navigator.
pub trait Navigator: Send + Sync {
    /// Move back one step.
    fn back(&self);
}

/// Parameters extracted from the current URL path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Look up a parameter. Empty values are treated as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl From<HashMap<String, String>> for RouteParams {
    fn from(params: HashMap<String, String>) -> Self {
        Self { params }
    }
}
