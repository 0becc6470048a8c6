use agronome_client::types::{Category, Document, SearchHit};
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::client;
use crate::config::AppConfig;
use crate::routes::Route;

const PAGE_SIZE: i64 = 10;
const SEARCH_TOP_K: u32 = 5;

#[function_component(Knowledge)]
pub fn knowledge() -> Html {
    let documents = use_state(Vec::<Document>::new);
    let total = use_state(|| 0i64);
    let page = use_state(|| 1i64);
    let category = use_state(|| None::<String>);
    let categories = use_state(Vec::<Category>::new);
    let search_query = use_state(String::new);
    let search_hits = use_state(Vec::<SearchHit>::new);
    let flash = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    // Bumped after a delete so the listing effect refetches
    let refresh = use_state(|| 0u32);

    // Load the document listing whenever page, filter, or refresh changes
    {
        let documents = documents.clone();
        let total = total.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        use_effect_with(
            (*page, (*category).clone(), *refresh),
            move |(page, category, _)| {
                let page = *page;
                let category = category.clone();

                spawn_local(async move {
                    is_loading.set(true);
                    match client::api_client() {
                        Ok(api) => match api.documents(category.as_deref(), page, PAGE_SIZE).await {
                            Ok(listing) => {
                                documents.set(listing.items);
                                total.set(listing.total);
                                error.set(None);
                            }
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Failed to load documents: {e}").into(),
                                );
                                error.set(Some(format!("Failed to load documents: {e}")));
                            }
                        },
                        Err(e) => error.set(Some(format!("Client unavailable: {e}"))),
                    }
                    is_loading.set(false);
                });
                || ()
            },
        );
    }

    // Load the category tree once, for the filter dropdown
    {
        let categories = categories.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Ok(api) = client::api_client() {
                    match api.categories().await {
                        Ok(tree) => categories.set(tree.categories),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to load categories: {e}").into(),
                            );
                        }
                    }
                }
            });
            || ()
        });
    }

    let on_category_change = {
        let category = category.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            category.set(if value.is_empty() { None } else { Some(value) });
            page.set(1);
        })
    };

    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search_query.set(input.value());
        })
    };

    let on_search = {
        let search_query = search_query.clone();
        let search_hits = search_hits.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let query = (*search_query).clone();
            if query.trim().is_empty() {
                search_hits.set(Vec::new());
                return;
            }

            let search_hits = search_hits.clone();
            let error = error.clone();

            spawn_local(async move {
                match client::api_client() {
                    Ok(api) => match api.search_documents(&query, SEARCH_TOP_K).await {
                        Ok(hits) => search_hits.set(hits),
                        Err(e) => {
                            web_sys::console::error_1(&format!("Search failed: {e}").into());
                            error.set(Some(format!("Search failed: {e}")));
                        }
                    },
                    Err(e) => error.set(Some(format!("Client unavailable: {e}"))),
                }
            });
        })
    };

    let on_delete = {
        let refresh = refresh.clone();
        let flash = flash.clone();
        let error = error.clone();

        Callback::from(move |doc_id: i64| {
            let refresh = refresh.clone();
            let flash = flash.clone();
            let error = error.clone();

            spawn_local(async move {
                match client::api_client() {
                    Ok(api) => match api.delete_document(doc_id).await {
                        Ok(ack) => {
                            refresh.set(*refresh + 1);
                            flash.set(Some(ack.message));
                            let flash = flash.clone();
                            Timeout::new(AppConfig::FLASH_TIMEOUT_MS, move || {
                                flash.set(None);
                            })
                            .forget();
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("Delete failed: {e}").into());
                            error.set(Some(format!("Delete failed: {e}")));
                        }
                    },
                    Err(e) => error.set(Some(format!("Client unavailable: {e}"))),
                }
            });
        })
    };

    let on_prev = {
        let page = page.clone();
        Callback::from(move |_| {
            if *page > 1 {
                page.set(*page - 1);
            }
        })
    };

    let on_next = {
        let page = page.clone();
        let total = total.clone();
        Callback::from(move |_| {
            if *page * PAGE_SIZE < *total {
                page.set(*page + 1);
            }
        })
    };

    let total_pages = (*total + PAGE_SIZE - 1) / PAGE_SIZE;

    html! {
        <div class="min-h-screen bg-green-50 dark:bg-gray-900">
            <div class="max-w-5xl mx-auto px-4 py-8">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-2xl font-bold text-green-800 dark:text-green-300">
                        {"Knowledge base"}
                    </h1>
                    <Link<Route> to={Route::Home} classes="text-sm text-green-700 dark:text-green-400 hover:underline">
                        {"← Home"}
                    </Link<Route>>
                </div>

                if let Some(msg) = &*flash {
                    <div class="bg-green-100 dark:bg-green-900 text-green-800 dark:text-green-200 p-3 rounded text-sm mb-4">
                        {msg}
                    </div>
                }
                if let Some(err) = &*error {
                    <div class="bg-red-50 dark:bg-red-900 text-red-700 dark:text-red-300 p-3 rounded text-sm mb-4">
                        {err}
                    </div>
                }

                <div class="flex gap-3 mb-6">
                    <form onsubmit={on_search} class="flex-1 flex gap-2">
                        <input
                            type="text"
                            class="flex-1 px-4 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-lg focus:outline-none focus:border-green-500"
                            placeholder="Search the knowledge base"
                            value={(*search_query).clone()}
                            oninput={on_search_input}
                        />
                        <button
                            type="submit"
                            class="px-4 py-2 bg-green-600 hover:bg-green-700 text-white rounded-lg text-sm font-medium transition-colors"
                        >
                            {"Search"}
                        </button>
                    </form>

                    <select
                        onchange={on_category_change}
                        class="px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-lg text-sm"
                    >
                        <option value="" selected={category.is_none()}>{"All categories"}</option>
                        {categories.iter().map(|cat| {
                            html! {
                                <option
                                    value={cat.name.clone()}
                                    selected={Some(&cat.name) == (*category).as_ref()}
                                >
                                    {&cat.name}
                                </option>
                            }
                        }).collect::<Html>()}
                    </select>
                </div>

                if !search_hits.is_empty() {
                    <div class="bg-white dark:bg-gray-800 rounded-xl shadow p-4 mb-6">
                        <h2 class="text-sm font-semibold text-gray-700 dark:text-gray-300 mb-3">
                            {format!("{} matching passages", search_hits.len())}
                        </h2>
                        {search_hits.iter().map(|hit| {
                            html! {
                                <div class="border-b border-gray-100 dark:border-gray-700 last:border-0 py-2">
                                    <p class="text-sm text-gray-800 dark:text-gray-200">{&hit.content}</p>
                                    <p class="text-xs text-gray-500 dark:text-gray-400 mt-1">
                                        {format!("relevance {:.2}", hit.score)}
                                    </p>
                                </div>
                            }
                        }).collect::<Html>()}
                    </div>
                }

                <div class="bg-white dark:bg-gray-800 rounded-xl shadow overflow-hidden">
                    if *is_loading {
                        <div class="p-6 text-center text-gray-500 dark:text-gray-400">
                            {"Loading..."}
                        </div>
                    } else if documents.is_empty() {
                        <div class="p-6 text-center text-gray-500 dark:text-gray-400">
                            {"No documents yet"}
                        </div>
                    } else {
                        <table class="w-full text-sm">
                            <thead class="bg-gray-50 dark:bg-gray-900 text-left">
                                <tr>
                                    <th class="px-4 py-3 font-medium text-gray-700 dark:text-gray-300">{"Title"}</th>
                                    <th class="px-4 py-3 font-medium text-gray-700 dark:text-gray-300">{"Category"}</th>
                                    <th class="px-4 py-3 font-medium text-gray-700 dark:text-gray-300">{"Type"}</th>
                                    <th class="px-4 py-3 font-medium text-gray-700 dark:text-gray-300">{"Updated"}</th>
                                    <th class="px-4 py-3"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {documents.iter().map(|doc| {
                                    let doc_id = doc.id;
                                    let on_delete = on_delete.clone();
                                    html! {
                                        <tr class="border-t border-gray-100 dark:border-gray-700">
                                            <td class="px-4 py-3 text-gray-800 dark:text-gray-200">{&doc.title}</td>
                                            <td class="px-4 py-3 text-gray-600 dark:text-gray-400">{&doc.category}</td>
                                            <td class="px-4 py-3 text-gray-600 dark:text-gray-400">{&doc.file_type}</td>
                                            <td class="px-4 py-3 text-gray-600 dark:text-gray-400">
                                                {doc.updated_at.format("%Y-%m-%d").to_string()}
                                            </td>
                                            <td class="px-4 py-3 text-right">
                                                <button
                                                    onclick={on_delete.reform(move |_| doc_id)}
                                                    class="text-red-600 dark:text-red-400 hover:underline text-xs"
                                                >
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Html>()}
                            </tbody>
                        </table>
                    }
                </div>

                <div class="flex justify-between items-center mt-4 text-sm text-gray-600 dark:text-gray-400">
                    <button
                        onclick={on_prev}
                        disabled={*page <= 1}
                        class="px-3 py-1 rounded border border-gray-300 dark:border-gray-600 disabled:opacity-50"
                    >
                        {"Previous"}
                    </button>
                    <span>{format!("Page {} of {}", *page, total_pages.max(1))}</span>
                    <button
                        onclick={on_next}
                        disabled={*page >= total_pages}
                        class="px-3 py-1 rounded border border-gray-300 dark:border-gray-600 disabled:opacity-50"
                    >
                        {"Next"}
                    </button>
                </div>
            </div>
        </div>
    }
}
