use agronome_client::TokenStore;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::storage::BrowserTokenStore;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator().expect("navigator not available outside a router");

    let on_logout = Callback::from(move |_| {
        BrowserTokenStore.remove();
        navigator.push(&Route::Login);
    });

    html! {
        <div class="min-h-screen bg-green-50 dark:bg-gray-900">
            <div class="max-w-4xl mx-auto px-4 py-12">
                <div class="flex justify-between items-center mb-10">
                    <div>
                        <h1 class="text-3xl font-bold text-green-800 dark:text-green-300">
                            {"Agronome"}
                        </h1>
                        <p class="text-gray-600 dark:text-gray-400">
                            {"Agricultural knowledge and advisory"}
                        </p>
                    </div>
                    <button
                        onclick={on_logout}
                        class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 rounded-lg transition-colors"
                    >
                        {"Logout"}
                    </button>
                </div>

                <div class="grid md:grid-cols-2 gap-6">
                    <Link<Route> to={Route::Knowledge} classes="block bg-white dark:bg-gray-800 rounded-xl shadow p-6 hover:shadow-lg transition-shadow">
                        <h2 class="text-xl font-semibold text-gray-800 dark:text-gray-200 mb-2">
                            {"Knowledge base"}
                        </h2>
                        <p class="text-sm text-gray-600 dark:text-gray-400">
                            {"Browse and search agronomy documents by category."}
                        </p>
                    </Link<Route>>
                    <Link<Route> to={Route::Qa} classes="block bg-white dark:bg-gray-800 rounded-xl shadow p-6 hover:shadow-lg transition-shadow">
                        <h2 class="text-xl font-semibold text-gray-800 dark:text-gray-200 mb-2">
                            {"Ask an advisor"}
                        </h2>
                        <p class="text-sm text-gray-600 dark:text-gray-400">
                            {"Get answers grounded in the knowledge base."}
                        </p>
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
