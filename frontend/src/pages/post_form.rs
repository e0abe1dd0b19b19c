use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    api::{self, NewPostRequest},
    components::notice_banner::NoticeBanner,
    i18n::current::post_form as t,
    router::Route,
};

/// New-post form.
///
/// The save control stays disabled until every required field is filled,
/// so a validation failure never reaches the network.
#[function_component(PostFormPage)]
pub fn post_form_page() -> Html {
    let working_title = use_state(String::new);
    let author = use_state(String::new);
    let concept = use_state(String::new);
    let saving = use_state(|| false);
    let save_error = use_state(|| None::<String>);
    let navigator = use_navigator();

    let can_save = !working_title.trim().is_empty()
        && !author.trim().is_empty()
        && !concept.trim().is_empty();

    let on_title_input = {
        let working_title = working_title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                working_title.set(target.value());
            }
        })
    };

    let on_author_input = {
        let author = author.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                author.set(target.value());
            }
        })
    };

    let on_concept_input = {
        let concept = concept.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                concept.set(target.value());
            }
        })
    };

    let onsubmit = {
        let working_title = working_title.clone();
        let author = author.clone();
        let concept = concept.clone();
        let saving = saving.clone();
        let save_error = save_error.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            let request = NewPostRequest {
                working_title: working_title.trim().to_string(),
                author: author.trim().to_string(),
                concept: concept.trim().to_string(),
            };
            if request.working_title.is_empty()
                || request.author.is_empty()
                || request.concept.is_empty()
            {
                return;
            }
            saving.set(true);
            let saving = saving.clone();
            let save_error = save_error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::create_post(&request).await {
                    Ok(created) => {
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.push(&Route::PostDetail {
                                id: created.id,
                            });
                        }
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to create post: {}", err).into(),
                        );
                        save_error.set(Some(format!("Failed to save post: {}", err)));
                        saving.set(false);
                    },
                }
            });
        })
    };

    html! {
        <main class={classes!("container", "post-form-page")}>
            <div class={classes!("page-heading")}>
                <h1>{ t::TITLE }</h1>
                <p class={classes!("text-[var(--muted)]")}>{ t::HINT_REQUIRED }</p>
            </div>

            {
                if let Some(message) = (*save_error).clone() {
                    let save_error = save_error.clone();
                    let on_close = Callback::from(move |_| save_error.set(None));
                    html! { <NoticeBanner message={message} on_close={on_close} /> }
                } else {
                    Html::default()
                }
            }

            <form class={classes!("post-form")} {onsubmit}>
                <label class={classes!("form-label")}>
                    { t::LABEL_TITLE }
                    <input
                        type="text"
                        class={classes!("filter-input")}
                        value={(*working_title).clone()}
                        oninput={on_title_input}
                        required={true}
                    />
                </label>

                <label class={classes!("form-label")}>
                    { t::LABEL_AUTHOR }
                    <input
                        type="text"
                        class={classes!("filter-input")}
                        value={(*author).clone()}
                        oninput={on_author_input}
                        required={true}
                    />
                </label>

                <label class={classes!("form-label")}>
                    { t::LABEL_CONCEPT }
                    <textarea
                        class={classes!("filter-input", "concept-input")}
                        rows="10"
                        value={(*concept).clone()}
                        oninput={on_concept_input}
                        required={true}
                    />
                </label>

                <button
                    type="submit"
                    class={classes!("btn-primary")}
                    disabled={!can_save || *saving}
                >
                    { if *saving { t::SAVING } else { t::SAVE } }
                </button>
            </form>
        </main>
    }
}
