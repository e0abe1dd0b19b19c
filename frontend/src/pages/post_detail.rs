use draftboard_shared::Post;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        loading_spinner::LoadingSpinner,
        markdown_view::MarkdownView,
        notice_banner::NoticeBanner,
        workflow_stage::WorkflowStage,
    },
    i18n::current::post_detail as t,
    pages::posts::status_badge_class,
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct PostDetailProps {
    pub id: String,
}

/// Single-post view: concept body with a rendered/raw toggle, plus the
/// workflow sections whose open state survives reloads.
#[function_component(PostDetailPage)]
pub fn post_detail_page(props: &PostDetailProps) -> Html {
    let post = use_state(|| None::<Post>);
    let not_found = use_state(|| false);
    let load_error = use_state(|| None::<String>);
    let show_raw = use_state(|| false);

    {
        let post = post.clone();
        let not_found = not_found.clone();
        let load_error = load_error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            post.set(None);
            not_found.set(false);
            load_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_post_detail(&id).await {
                    Ok(Some(found)) => post.set(Some(found)),
                    Ok(None) => not_found.set(true),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch post {}: {}", id, err).into(),
                        );
                        load_error.set(Some(format!("Failed to load post: {}", err)));
                    },
                }
            });
            || ()
        });
    }

    let toggle_raw = {
        let show_raw = show_raw.clone();
        Callback::from(move |_| show_raw.set(!*show_raw))
    };

    if *not_found {
        return html! {
            <main class={classes!("container", "post-detail")}>
                <div class={classes!("empty-state")}>
                    <i class={classes!("fas", "fa-ghost")} aria-hidden="true"></i>
                    <p>{ t::NOT_FOUND }</p>
                    <Link<Route> to={Route::Posts} classes={classes!("nav-link")}>
                        { t::BACK }
                    </Link<Route>>
                </div>
            </main>
        };
    }

    let body = match post.as_ref() {
        None => {
            if let Some(message) = (*load_error).clone() {
                html! { <NoticeBanner message={message} /> }
            } else {
                html! { <LoadingSpinner /> }
            }
        },
        Some(post) => {
            let concept_view = match post.concept.as_ref() {
                None => html! { <p class={classes!("text-[var(--muted)]")}>{ t::NO_CONCEPT }</p> },
                Some(concept) if *show_raw => html! {
                    <pre class={classes!("concept-raw")}>{ concept }</pre>
                },
                Some(concept) => html! {
                    <MarkdownView
                        markdown={concept.clone()}
                        class={classes!("concept-rendered")}
                    />
                },
            };

            html! {
                <article>
                    <header class={classes!("post-detail-header")}>
                        <h1>{ &post.title }</h1>
                        {
                            if let Some(subtitle) = post.subtitle.as_ref() {
                                html! { <p class={classes!("post-subtitle")}>{ subtitle }</p> }
                            } else {
                                Html::default()
                            }
                        }
                        <p class={classes!("post-meta", "text-[var(--muted)]")}>
                            <span class={status_badge_class(post.status)}>
                                { post.status.label() }
                            </span>
                            { " · " }
                            { &post.author }
                            { " · " }
                            <time>{ &post.date }</time>
                        </p>
                    </header>

                    <WorkflowStage stage="concept" title={t::STAGE_CONCEPT}>
                        <div class={classes!("concept-toolbar")}>
                            <button
                                type="button"
                                class={classes!("btn-toggle")}
                                onclick={toggle_raw}
                                aria-pressed={show_raw.to_string()}
                            >
                                <i
                                    class={classes!("fas", if *show_raw { "fa-eye" } else { "fa-code" })}
                                    aria-hidden="true"
                                ></i>
                                { if *show_raw { t::VIEW_RENDERED } else { t::VIEW_RAW } }
                            </button>
                        </div>
                        { concept_view }
                    </WorkflowStage>

                    <WorkflowStage stage="metadata" title={t::STAGE_METADATA}>
                        {
                            if post.tags.is_empty() {
                                html! { <p class={classes!("text-[var(--muted)]")}>{ t::NO_TAGS }</p> }
                            } else {
                                html! {
                                    <div class={classes!("cell-tags")}>
                                        { for post.tags.iter().map(|tag| html! {
                                            <span class={classes!("tag-chip")}>{ tag }</span>
                                        }) }
                                    </div>
                                }
                            }
                        }
                    </WorkflowStage>

                    <WorkflowStage stage="syndication" title={t::STAGE_SYNDICATION}>
                        <p>
                            {
                                post.clan_status
                                    .clone()
                                    .unwrap_or_else(|| t::NOT_SYNDICATED.to_string())
                            }
                        </p>
                    </WorkflowStage>
                </article>
            }
        },
    };

    html! {
        <main class={classes!("container", "post-detail")}>
            <Link<Route> to={Route::Posts} classes={classes!("back-link", "text-[var(--muted)]")}>
                <i class={classes!("fas", "fa-arrow-left")} aria-hidden="true"></i>
                { t::BACK }
            </Link<Route>>
            { body }
        </main>
    }
}
