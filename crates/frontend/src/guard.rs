//! Navigation guard
//!
//! Every route except the login view requires a stored session token. The
//! check runs when a route renders, against whatever the store holds right
//! then, so a 401 that just cleared the token diverts the very next
//! navigation.

use agronome_client::TokenStore;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{Route, switch};
use crate::storage::BrowserTokenStore;

/// Outcome of the pre-navigation check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavDecision {
    /// Render the requested route.
    Allow,
    /// Divert to the login view.
    RedirectToLogin,
}

/// Decide whether `target` may render given the stored token.
///
/// The login view is always reachable, token or not, so an expired
/// session cannot bounce the user in a redirect loop.
pub fn decide(target: &Route, token: Option<&str>) -> NavDecision {
    if *target != Route::Login && token.is_none() {
        NavDecision::RedirectToLogin
    } else {
        NavDecision::Allow
    }
}

/// Switch function wrapping [`switch`] with the token check.
pub fn guarded_switch(route: Route) -> Html {
    let token = BrowserTokenStore.get();
    match decide(&route, token.as_deref()) {
        NavDecision::Allow => switch(route),
        NavDecision::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
