//! Session lifecycle signals carried on HTTP responses
//!
//! The backend rotates short-lived bearer tokens by attaching a
//! replacement to the `x-new-token` header of an ordinary response, and
//! signals an invalid session with HTTP 401. Turning a response into one
//! of those events is a pure classification; applying the event (rewriting
//! the store, firing the login redirect) is a separate step, so either
//! half can be exercised on its own.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use tracing::{debug, warn};

use crate::token::TokenStore;

/// Response header carrying a rotated bearer token.
pub const NEW_TOKEN_HEADER: &str = "x-new-token";

/// Hook invoked when the server invalidates the session.
///
/// The redirect is fire-and-forget: implementations report nothing back,
/// and the caller's error flow continues regardless of what the navigation
/// did.
pub trait LoginRedirect: Send + Sync {
    /// Send the user to the login view.
    fn redirect_to_login(&self);
}

/// Session-affecting outcome of a single response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The server issued a replacement token; the stored credential must
    /// be overwritten before the next request goes out.
    Rotated(String),
    /// The server rejected the credential; the session is over.
    Expired,
}

/// Classify a response into a session event, if it carries one.
///
/// A 401 always classifies as [`SessionEvent::Expired`]. Rotation is only
/// honored on success responses; an error response never rotates the
/// token, whatever headers it carries.
pub fn classify(status: StatusCode, headers: &HeaderMap) -> Option<SessionEvent> {
    if status == StatusCode::UNAUTHORIZED {
        return Some(SessionEvent::Expired);
    }

    if status.is_success() {
        if let Some(token) = headers.get(NEW_TOKEN_HEADER).and_then(|v| v.to_str().ok()) {
            if !token.is_empty() {
                return Some(SessionEvent::Rotated(token.to_string()));
            }
        }
    }

    None
}

/// Apply a session event to the credential store and, on expiry, the
/// login-redirect hook. Each response produces at most one event, so the
/// redirect fires at most once per response.
pub fn apply(event: &SessionEvent, store: &dyn TokenStore, redirect: Option<&dyn LoginRedirect>) {
    match event {
        SessionEvent::Rotated(token) => {
            debug!("storing rotated bearer token from response header");
            store.set(token);
        }
        SessionEvent::Expired => {
            warn!("session rejected by server, clearing stored token");
            store.remove();
            if let Some(redirect) = redirect {
                redirect.redirect_to_login();
            }
        }
    }
}
