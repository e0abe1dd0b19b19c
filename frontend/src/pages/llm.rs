use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api::{self, LlmAction, LlmSettings, PromptTemplate},
    components::{
        loading_spinner::LoadingSpinner,
        notice_banner::{NoticeBanner, NoticeLevel},
    },
    i18n::current::llm_page as t,
};

/// LLM pipeline admin: provider settings, a one-off test prompt, the
/// configured actions and the editable prompt templates.
///
/// The remote endpoints are opaque collaborators; this page only holds
/// the client side of their contracts.
#[function_component(LlmPage)]
pub fn llm_page() -> Html {
    let provider = use_state(String::new);
    let model = use_state(String::new);
    let api_base_url = use_state(String::new);
    let current = use_state(|| None::<LlmSettings>);
    let saving_settings = use_state(|| false);

    let test_prompt = use_state(String::new);
    let testing = use_state(|| false);
    let test_output = use_state(|| None::<Result<String, String>>);

    let prompts = use_state(Vec::<PromptTemplate>::new);
    let actions = use_state(Vec::<LlmAction>::new);
    let loading = use_state(|| true);
    // Template id plus the draft content while one template is open for
    // editing; `None` means read-only display.
    let editing = use_state(|| None::<(String, String)>);
    let saving_prompt = use_state(|| false);

    let notice = use_state(|| None::<(NoticeLevel, String)>);

    {
        let prompts = prompts.clone();
        let actions = actions.clone();
        let loading = loading.clone();
        let notice = notice.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let prompts_result = api::fetch_llm_prompts().await;
                let actions_result = api::fetch_llm_actions().await;
                match (prompts_result, actions_result) {
                    (Ok(prompt_list), Ok(action_list)) => {
                        prompts.set(prompt_list);
                        actions.set(action_list);
                    },
                    (prompts_err, actions_err) => {
                        web_sys::console::error_1(
                            &format!(
                                "LLM admin data unavailable. prompts={:?}, actions={:?}",
                                prompts_err.as_ref().err(),
                                actions_err.as_ref().err()
                            )
                            .into(),
                        );
                        notice.set(Some((
                            NoticeLevel::Error,
                            format!(
                                "LLM admin data unavailable. prompts={:?}, actions={:?}",
                                prompts_err.err(),
                                actions_err.err()
                            ),
                        )));
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_provider_input = {
        let provider = provider.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                provider.set(target.value());
            }
        })
    };

    let on_model_input = {
        let model = model.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                model.set(target.value());
            }
        })
    };

    let on_api_base_input = {
        let api_base_url = api_base_url.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                api_base_url.set(target.value());
            }
        })
    };

    let on_save_settings = {
        let provider = provider.clone();
        let model = model.clone();
        let api_base_url = api_base_url.clone();
        let current = current.clone();
        let saving_settings = saving_settings.clone();
        let notice = notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving_settings {
                return;
            }
            let settings = LlmSettings {
                provider: (*provider).trim().to_string(),
                model: (*model).trim().to_string(),
                api_base_url: (*api_base_url).trim().to_string(),
            };
            saving_settings.set(true);
            let current = current.clone();
            let saving_settings = saving_settings.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::update_llm_settings(&settings).await {
                    Ok(()) => {
                        current.set(Some(settings));
                        notice.set(Some((NoticeLevel::Success, t::SETTINGS_SAVED.to_string())));
                    },
                    Err(err) => {
                        notice.set(Some((
                            NoticeLevel::Error,
                            format!("Error updating settings: {}", err),
                        )));
                    },
                }
                saving_settings.set(false);
            });
        })
    };

    // Shared by the submit button and Enter in the textarea. The button
    // stays disabled while a test is outstanding.
    let run_test = {
        let test_prompt = test_prompt.clone();
        let testing = testing.clone();
        let test_output = test_output.clone();
        Callback::from(move |_: ()| {
            let prompt = (*test_prompt).trim().to_string();
            if prompt.is_empty() || *testing {
                return;
            }
            testing.set(true);
            test_output.set(None);
            let testing = testing.clone();
            let test_output = test_output.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::test_llm(&prompt).await;
                if let Err(err) = result.as_ref() {
                    web_sys::console::error_1(&format!("LLM test failed: {}", err).into());
                }
                test_output.set(Some(result));
                testing.set(false);
            });
        })
    };

    let on_test_submit = {
        let run_test = run_test.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            run_test.emit(());
        })
    };

    let on_test_keydown = {
        let run_test = run_test.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                run_test.emit(());
            }
        })
    };

    let on_test_input = {
        let test_prompt = test_prompt.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                test_prompt.set(target.value());
            }
        })
    };

    let on_edit_prompt = {
        let editing = editing.clone();
        Callback::from(move |(id, content): (String, String)| {
            editing.set(Some((id, content)));
        })
    };

    let on_editing_input = {
        let editing = editing.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                if let Some((id, _)) = (*editing).clone() {
                    editing.set(Some((id, target.value())));
                }
            }
        })
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_save_prompt = {
        let editing = editing.clone();
        let prompts = prompts.clone();
        let saving_prompt = saving_prompt.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            let Some((template_id, content)) = (*editing).clone() else {
                return;
            };
            if *saving_prompt {
                return;
            }
            saving_prompt.set(true);
            let editing = editing.clone();
            let prompts = prompts.clone();
            let saving_prompt = saving_prompt.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::update_llm_prompt(&template_id, &content).await {
                    Ok(()) => {
                        let mut next = (*prompts).clone();
                        if let Some(template) =
                            next.iter_mut().find(|template| template.id == template_id)
                        {
                            template.content = content;
                        }
                        prompts.set(next);
                        editing.set(None);
                        notice.set(Some((NoticeLevel::Success, t::PROMPT_SAVED.to_string())));
                    },
                    Err(err) => {
                        notice.set(Some((
                            NoticeLevel::Error,
                            format!("Error updating prompt template: {}", err),
                        )));
                    },
                }
                saving_prompt.set(false);
            });
        })
    };

    let current_settings_view = match current.as_ref() {
        Some(settings) => html! {
            <dl class={classes!("settings-summary")}>
                <dt>{ t::LABEL_PROVIDER }</dt>
                <dd>{ &settings.provider }</dd>
                <dt>{ t::LABEL_MODEL }</dt>
                <dd>{ &settings.model }</dd>
                <dt>{ t::LABEL_API_BASE }</dt>
                <dd>{ &settings.api_base_url }</dd>
            </dl>
        },
        None => html! {
            <p class={classes!("text-[var(--muted)]")}>{ t::CURRENT_NONE }</p>
        },
    };

    let test_result_view = match test_output.as_ref() {
        None => Html::default(),
        Some(Ok(response)) => html! {
            <pre class={classes!("test-result")}>{ response }</pre>
        },
        Some(Err(err)) => html! {
            <pre class={classes!("test-result", "test-result-error")}>
                { format!("Error: {}", err) }
            </pre>
        },
    };

    html! {
        <main class={classes!("container", "llm-page")}>
            <div class={classes!("page-heading")}>
                <h1>{ t::TITLE }</h1>
            </div>

            {
                if let Some((level, message)) = (*notice).clone() {
                    let notice = notice.clone();
                    let on_close = Callback::from(move |_| notice.set(None));
                    html! { <NoticeBanner message={message} level={level} on_close={on_close} /> }
                } else {
                    Html::default()
                }
            }

            <section class={classes!("llm-section")}>
                <h2>{ t::SETTINGS_HEADING }</h2>
                <form class={classes!("settings-form")} onsubmit={on_save_settings}>
                    <label class={classes!("form-label")}>
                        { t::LABEL_PROVIDER }
                        <input
                            type="text"
                            class={classes!("filter-input")}
                            value={(*provider).clone()}
                            oninput={on_provider_input}
                        />
                    </label>
                    <label class={classes!("form-label")}>
                        { t::LABEL_MODEL }
                        <input
                            type="text"
                            class={classes!("filter-input")}
                            value={(*model).clone()}
                            oninput={on_model_input}
                        />
                    </label>
                    <label class={classes!("form-label")}>
                        { t::LABEL_API_BASE }
                        <input
                            type="text"
                            class={classes!("filter-input")}
                            value={(*api_base_url).clone()}
                            oninput={on_api_base_input}
                        />
                    </label>
                    <button
                        type="submit"
                        class={classes!("btn-primary")}
                        disabled={*saving_settings}
                    >
                        { if *saving_settings { t::SAVING_SETTINGS } else { t::SAVE_SETTINGS } }
                    </button>
                </form>
                <h3>{ t::CURRENT_HEADING }</h3>
                { current_settings_view }
            </section>

            <section class={classes!("llm-section")}>
                <h2>{ t::TEST_HEADING }</h2>
                <form class={classes!("test-form")} onsubmit={on_test_submit}>
                    <textarea
                        class={classes!("filter-input", "test-prompt")}
                        rows="4"
                        placeholder={t::TEST_PLACEHOLDER}
                        value={(*test_prompt).clone()}
                        oninput={on_test_input}
                        onkeydown={on_test_keydown}
                    />
                    <button
                        type="submit"
                        class={classes!("btn-primary")}
                        disabled={*testing || test_prompt.trim().is_empty()}
                    >
                        { if *testing { t::TESTING } else { t::TEST_BUTTON } }
                    </button>
                </form>
                { test_result_view }
            </section>

            {
                if *loading {
                    html! { <LoadingSpinner /> }
                } else {
                    html! {
                        <>
                            <section class={classes!("llm-section")}>
                                <h2>{ t::ACTIONS_HEADING }</h2>
                                {
                                    if actions.is_empty() {
                                        html! { <p class={classes!("text-[var(--muted)]")}>{ t::ACTIONS_EMPTY }</p> }
                                    } else {
                                        html! {
                                            <ul class={classes!("actions-list")}>
                                                { for actions.iter().map(|action| html! {
                                                    <li key={action.name.clone()}>
                                                        <code>{ &action.name }</code>
                                                        <span class={classes!("text-[var(--muted)]")}>
                                                            { &action.description }
                                                        </span>
                                                    </li>
                                                }) }
                                            </ul>
                                        }
                                    }
                                }
                            </section>

                            <section class={classes!("llm-section")}>
                                <h2>{ t::PROMPTS_HEADING }</h2>
                                {
                                    if prompts.is_empty() {
                                        html! { <p class={classes!("text-[var(--muted)]")}>{ t::PROMPTS_EMPTY }</p> }
                                    } else {
                                        html! {
                                            <>
                                            { for prompts.iter().map(|template| {
                                                let is_editing = editing
                                                    .as_ref()
                                                    .map(|(id, _)| id == &template.id)
                                                    .unwrap_or(false);
                                                html! {
                                                    <div class={classes!("prompt-card")} key={template.id.clone()}>
                                                        <div class={classes!("prompt-card-head")}>
                                                            <h3>{ &template.name }</h3>
                                                            {
                                                                if is_editing {
                                                                    html! {
                                                                        <div class={classes!("prompt-card-buttons")}>
                                                                            <button
                                                                                type="button"
                                                                                class={classes!("btn-primary")}
                                                                                onclick={on_save_prompt.clone()}
                                                                                disabled={*saving_prompt}
                                                                            >
                                                                                { t::SAVE }
                                                                            </button>
                                                                            <button
                                                                                type="button"
                                                                                class={classes!("btn-toggle")}
                                                                                onclick={on_cancel_edit.clone()}
                                                                                disabled={*saving_prompt}
                                                                            >
                                                                                { t::CANCEL }
                                                                            </button>
                                                                        </div>
                                                                    }
                                                                } else {
                                                                    let on_edit_prompt = on_edit_prompt.clone();
                                                                    let id = template.id.clone();
                                                                    let content = template.content.clone();
                                                                    let onclick = Callback::from(move |_| {
                                                                        on_edit_prompt.emit((id.clone(), content.clone()));
                                                                    });
                                                                    html! {
                                                                        <button
                                                                            type="button"
                                                                            class={classes!("btn-toggle")}
                                                                            {onclick}
                                                                        >
                                                                            <i class={classes!("fas", "fa-pen")} aria-hidden="true"></i>
                                                                            { t::EDIT }
                                                                        </button>
                                                                    }
                                                                }
                                                            }
                                                        </div>
                                                        {
                                                            if is_editing {
                                                                let draft = editing
                                                                    .as_ref()
                                                                    .map(|(_, content)| content.clone())
                                                                    .unwrap_or_default();
                                                                html! {
                                                                    <textarea
                                                                        class={classes!("filter-input", "prompt-editor")}
                                                                        rows="10"
                                                                        value={draft}
                                                                        oninput={on_editing_input.clone()}
                                                                    />
                                                                }
                                                            } else {
                                                                html! {
                                                                    <pre class={classes!("prompt-content")}>{ &template.content }</pre>
                                                                }
                                                            }
                                                        }
                                                    </div>
                                                }
                                            }) }
                                            </>
                                        }
                                    }
                                }
                            </section>
                        </>
                    }
                }
            }
        </main>
    }
}
