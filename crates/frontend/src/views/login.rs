use agronome_client::TokenStore;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::client;
use crate::routes::Route;
use crate::storage::BrowserTokenStore;

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator().expect("navigator not available outside a router");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_value = (*email).clone();
            let password_value = (*password).clone();
            if email_value.is_empty() || password_value.is_empty() || *is_loading {
                return;
            }

            let error = error.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match client::api_client() {
                    Ok(api) => match api.login(&email_value, &password_value).await {
                        Ok(token) => {
                            BrowserTokenStore.set(&token.access_token);
                            navigator.push(&Route::Home);
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("Login failed: {e}").into());
                            error.set(Some(format!("Login failed: {e}")));
                        }
                    },
                    Err(e) => {
                        error.set(Some(format!("Client unavailable: {e}")));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-green-50 dark:bg-gray-900 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-green-800 dark:text-green-300 mb-2">
                        {"Agronome"}
                    </h1>
                    <p class="text-gray-600 dark:text-gray-400">
                        {"Sign in to the advisory system"}
                    </p>
                </div>

                <form onsubmit={on_submit} class="bg-white dark:bg-gray-800 rounded-xl shadow p-8 space-y-4">
                    if let Some(err) = &*error {
                        <div class="bg-red-50 dark:bg-red-900 text-red-700 dark:text-red-300 p-3 rounded text-sm">
                            {err}
                        </div>
                    }

                    <input
                        type="email"
                        class="w-full px-4 py-3 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-lg focus:outline-none focus:border-green-500"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={on_email_input}
                    />
                    <input
                        type="password"
                        class="w-full px-4 py-3 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-lg focus:outline-none focus:border-green-500"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />

                    <button
                        type="submit"
                        class="w-full px-4 py-3 bg-green-600 hover:bg-green-700 text-white rounded-lg font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={(*email).is_empty() || (*password).is_empty() || *is_loading}
                    >
                        {if *is_loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
