use std::sync::atomic::{AtomicBool, Ordering};

use axum::http::{header, HeaderMap};

use crate::routing::Navigator;

/// Navigator for a single HTTP request.
///
/// The browser owns navigation history; the server only sees the previous
/// entry through the `Referer` header. A `back()` during render is answered
/// with a redirect to that entry. Without a referer there is no previous
/// entry to return to and `back()` has no effect.
#[derive(Debug, Default)]
pub struct RequestNavigator {
    referer: Option<String>,
    back_requested: AtomicBool,
}

impl RequestNavigator {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let referer = headers
            .get(header::REFERER)
            .and_then(|h| h.to_str().ok())
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        Self {
            referer,
            back_requested: AtomicBool::new(false),
        }
    }

    /// Where to send the client if `back()` was called during this request.
    pub fn redirect_target(&self) -> Option<&str> {
        if self.back_requested.load(Ordering::SeqCst) {
            self.referer.as_deref()
        } else {
            None
        }
    }
}

impl Navigator for RequestNavigator {
    fn back(&self) {
        if self.referer.is_some() {
            self.back_requested.store(true, Ordering::SeqCst);
        } else {
            tracing::debug!("Back requested without a referer; ignoring");
        }
    }
}
