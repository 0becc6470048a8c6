//! Global login-redirect hook
//!
//! The HTTP client reacts to an expired session long before any component
//! sees the error, but navigation needs a router handle that only exists
//! inside the component tree. This module bridges the two: the app shell
//! registers a callback holding the navigator, and the client-facing
//! [`SessionRedirect`] triggers it from anywhere.

use std::cell::RefCell;
use std::rc::Rc;

use agronome_client::LoginRedirect;

thread_local! {
    /// Global login redirect callback
    static LOGIN_REDIRECT: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Set the global login redirect callback
pub fn set_login_redirect(callback: Rc<dyn Fn()>) {
    LOGIN_REDIRECT.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the login redirect callback
pub fn clear_login_redirect() {
    LOGIN_REDIRECT.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Trigger the login redirect callback
///
/// Fire-and-forget: if no callback is registered, nothing happens.
pub fn trigger_login_redirect() {
    LOGIN_REDIRECT.with(|cb| {
        if let Some(callback) = cb.borrow().as_ref() {
            callback();
        }
    });
}

/// [`LoginRedirect`] handed to the API client; forwards session expiry to
/// whatever callback the app shell registered.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionRedirect;

impl LoginRedirect for SessionRedirect {
    fn redirect_to_login(&self) {
        trigger_login_redirect();
    }
}
