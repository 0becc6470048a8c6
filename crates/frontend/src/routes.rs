//! Route table for the single-page application

use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::{Home, Knowledge, Login, Qa};

/// Application routes
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/knowledge")]
    Knowledge,
    #[at("/qa")]
    Qa,
}

/// Map a matched route to its view.
///
/// Views are constructed here, on match, so a view the user never visits
/// is never instantiated.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Knowledge => html! { <Knowledge /> },
        Route::Qa => html! { <Qa /> },
    }
}
