//! Application shell

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::guarded_switch;
use crate::routes::Route;
use crate::session;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

/// Wires the session-expiry redirect to the router, then defers to the
/// guarded route table. Lives under [`BrowserRouter`] because that is
/// where a navigator exists.
#[function_component(Shell)]
fn shell() -> Html {
    let navigator = use_navigator().expect("navigator not available outside a router");

    use_effect_with((), move |_| {
        session::set_login_redirect(Rc::new(move || {
            navigator.push(&Route::Login);
        }));

        // Cleanup on unmount
        move || {
            session::clear_login_redirect();
        }
    });

    html! { <Switch<Route> render={guarded_switch} /> }
}
