use agronome_client::types::{ChatMessage, QuestionRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::client;
use crate::routes::Route;

#[function_component(Qa)]
pub fn qa() -> Html {
    let messages = use_state(Vec::<ChatMessage>::new);
    let question = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Restore the server-side conversation on mount
    {
        let messages = messages.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Ok(api) = client::api_client() {
                    match api.history().await {
                        Ok(history) => messages.set(history),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to load history: {e}").into(),
                            );
                        }
                    }
                }
            });
            || ()
        });
    }

    let on_question_input = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            question.set(input.value());
        })
    };

    let on_ask = {
        let messages = messages.clone();
        let question = question.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let asked = (*question).clone();
            if asked.trim().is_empty() || *is_loading {
                return;
            }

            let messages = messages.clone();
            let question = question.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();

            spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let mut updated = (*messages).clone();
                updated.push(ChatMessage {
                    role: "user".to_string(),
                    content: asked.clone(),
                });
                messages.set(updated.clone());
                question.set(String::new());

                match client::api_client() {
                    Ok(api) => match api.ask(QuestionRequest::new(asked)).await {
                        Ok(answer) => {
                            updated.push(ChatMessage {
                                role: "assistant".to_string(),
                                content: answer,
                            });
                            messages.set(updated);
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("Ask failed: {e}").into());
                            error.set(Some(format!("Ask failed: {e}")));
                        }
                    },
                    Err(e) => error.set(Some(format!("Client unavailable: {e}"))),
                }

                is_loading.set(false);
            });
        })
    };

    let on_clear = {
        let messages = messages.clone();
        let error = error.clone();

        Callback::from(move |_| {
            let messages = messages.clone();
            let error = error.clone();

            spawn_local(async move {
                match client::api_client() {
                    Ok(api) => match api.clear_context().await {
                        Ok(_) => {
                            messages.set(Vec::new());
                            error.set(None);
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to clear context: {e}").into(),
                            );
                            error.set(Some(format!("Failed to clear context: {e}")));
                        }
                    },
                    Err(e) => error.set(Some(format!("Client unavailable: {e}"))),
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-green-50 dark:bg-gray-900">
            <div class="max-w-3xl mx-auto px-4 py-8 flex flex-col h-screen">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-2xl font-bold text-green-800 dark:text-green-300">
                        {"Ask an advisor"}
                    </h1>
                    <div class="flex items-center gap-4">
                        <button
                            onclick={on_clear}
                            class="text-sm text-gray-600 dark:text-gray-400 hover:underline"
                        >
                            {"New conversation"}
                        </button>
                        <Link<Route> to={Route::Home} classes="text-sm text-green-700 dark:text-green-400 hover:underline">
                            {"← Home"}
                        </Link<Route>>
                    </div>
                </div>

                if let Some(err) = &*error {
                    <div class="bg-red-50 dark:bg-red-900 text-red-700 dark:text-red-300 p-3 rounded text-sm mb-4">
                        {err}
                    </div>
                }

                <div class="flex-1 overflow-y-auto space-y-3 mb-4">
                    if messages.is_empty() {
                        <p class="text-center text-gray-500 dark:text-gray-400 mt-12">
                            {"Ask about crops, soil, pests, or anything in the knowledge base."}
                        </p>
                    }
                    {messages.iter().map(|msg| {
                        let is_user = msg.role == "user";
                        html! {
                            <div class={if is_user { "flex justify-end" } else { "flex justify-start" }}>
                                <div class={if is_user {
                                    "max-w-[80%] bg-green-600 text-white rounded-xl px-4 py-2 text-sm"
                                } else {
                                    "max-w-[80%] bg-white dark:bg-gray-800 text-gray-800 dark:text-gray-200 rounded-xl px-4 py-2 text-sm shadow"
                                }}>
                                    {&msg.content}
                                </div>
                            </div>
                        }
                    }).collect::<Html>()}
                    if *is_loading {
                        <p class="text-sm text-gray-500 dark:text-gray-400">{"Thinking..."}</p>
                    }
                </div>

                <form onsubmit={on_ask} class="flex gap-2">
                    <textarea
                        class="flex-1 px-4 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-lg focus:outline-none focus:border-green-500 resize-none"
                        rows="2"
                        placeholder="When should I sow winter wheat?"
                        value={(*question).clone()}
                        oninput={on_question_input}
                    />
                    <button
                        type="submit"
                        class="px-5 py-2 bg-green-600 hover:bg-green-700 text-white rounded-lg font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={(*question).trim().is_empty() || *is_loading}
                    >
                        {"Ask"}
                    </button>
                </form>
            </div>
        </div>
    }
}
