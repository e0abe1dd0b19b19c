use std::collections::HashSet;

use draftboard_shared::{
    filter::{tag_vocabulary, visible_ids, FilterCriteria},
    moderation::{settle_dispatch, DispatchOutcome, ModerationAction},
    Post, PostStatus,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        help_tip::HelpTip,
        loading_spinner::LoadingSpinner,
        notice_banner::NoticeBanner,
    },
    i18n::{current::posts_page as t, fill_one, fill_two},
    prefs,
    router::Route,
};

pub(crate) fn status_badge_class(status: PostStatus) -> Classes {
    let base = classes!("badge");
    match status {
        PostStatus::Draft => classes!(base, "badge-draft"),
        PostStatus::Published => classes!(base, "badge-published"),
        PostStatus::Deleted => classes!(base, "badge-deleted"),
    }
}

fn action_icon(action: ModerationAction) -> &'static str {
    match action {
        ModerationAction::Delete => "fa-trash",
        ModerationAction::Restore => "fa-rotate-left",
        ModerationAction::Publish => "fa-upload",
        ModerationAction::Unpublish => "fa-box-archive",
    }
}

// Concept column shows only the start of the body.
fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// Admin post list: filter bar, visibility toggles and moderation
/// actions.
#[function_component(PostsPage)]
pub fn posts_page() -> Html {
    let posts = use_state(Vec::<Post>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let action_error = use_state(|| None::<String>);

    let author_filter = use_state(String::new);
    let date_filter = use_state(String::new);
    let status_filter = use_state(String::new);
    let search_filter = use_state(String::new);
    let tag_filter = use_state(String::new);
    let show_deleted = use_state(|| prefs::flag(prefs::SHOW_DELETED));
    let show_drafts = use_state(|| prefs::flag_or(prefs::SHOW_DRAFTS, true));
    let show_help = use_state(|| prefs::flag(prefs::SHOW_HELP));

    // One entry per outstanding `{post}:{action}` dispatch; the matching
    // button stays disabled until the awaited result lands.
    let action_inflight = use_state(HashSet::<String>::new);

    {
        let posts = posts.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_posts().await {
                    Ok(data) => {
                        posts.set(data);
                        load_error.set(None);
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch posts: {}", err).into(),
                        );
                        load_error.set(Some(format!("Failed to load posts: {}", err)));
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Tag vocabulary comes from the full unfiltered list, once per load.
    let tag_options = use_memo((*posts).clone(), |posts| tag_vocabulary(posts));

    let criteria = FilterCriteria {
        author: (*author_filter).clone(),
        date: (*date_filter).clone(),
        status: PostStatus::from_slug(&status_filter),
        search: (*search_filter).clone(),
        tag: {
            let tag = (*tag_filter).trim().to_string();
            if tag.is_empty() {
                None
            } else {
                Some(tag)
            }
        },
        show_deleted: *show_deleted,
        show_drafts: *show_drafts,
    };
    let visible: HashSet<String> = visible_ids(&posts, &criteria).into_iter().collect();

    let on_author_input = {
        let author_filter = author_filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                author_filter.set(target.value());
            }
        })
    };

    let on_date_input = {
        let date_filter = date_filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                date_filter.set(target.value());
            }
        })
    };

    let on_search_input = {
        let search_filter = search_filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search_filter.set(target.value());
            }
        })
    };

    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                status_filter.set(target.value());
            }
        })
    };

    let on_tag_change = {
        let tag_filter = tag_filter.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                tag_filter.set(target.value());
            }
        })
    };

    let on_toggle_deleted = {
        let show_deleted = show_deleted.clone();
        Callback::from(move |_| {
            let next = !*show_deleted;
            prefs::set_flag(prefs::SHOW_DELETED, next);
            show_deleted.set(next);
        })
    };

    let on_toggle_drafts = {
        let show_drafts = show_drafts.clone();
        Callback::from(move |_| {
            let next = !*show_drafts;
            prefs::set_flag(prefs::SHOW_DRAFTS, next);
            show_drafts.set(next);
        })
    };

    let on_toggle_help = {
        let show_help = show_help.clone();
        Callback::from(move |_| {
            let next = !*show_help;
            prefs::set_flag(prefs::SHOW_HELP, next);
            show_help.set(next);
        })
    };

    let run_post_action = {
        let posts = posts.clone();
        let action_error = action_error.clone();
        let action_inflight = action_inflight.clone();
        Callback::from(move |(post_id, action): (String, ModerationAction)| {
            let guard_key = format!("{}:{}", post_id, action.slug());
            if action_inflight.contains(&guard_key) {
                return;
            }
            {
                let mut next = (*action_inflight).clone();
                next.insert(guard_key.clone());
                action_inflight.set(next);
            }
            let posts = posts.clone();
            let action_error = action_error.clone();
            let action_inflight = action_inflight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let confirmation = api::moderate_post(&post_id, action).await;
                let mut next = (*posts).clone();
                match settle_dispatch(&mut next, &post_id, action, confirmation) {
                    DispatchOutcome::Applied(_) => {
                        // The server confirmed the transition and the local
                        // record mirrors it. Visibility recomputes on render.
                        posts.set(next);
                        action_error.set(None);
                    },
                    DispatchOutcome::Missing => {
                        // The list was reloaded while the request was in
                        // flight; nothing left to update.
                        action_error.set(None);
                    },
                    DispatchOutcome::Failed(err) => {
                        web_sys::console::error_1(
                            &format!("{} failed for {}: {}", action.slug(), post_id, err).into(),
                        );
                        action_error.set(Some(format!("{} failed: {}", action.label(), err)));
                    },
                }
                let mut next = (*action_inflight).clone();
                next.remove(&guard_key);
                action_inflight.set(next);
            });
        })
    };

    let rows = posts
        .iter()
        .filter(|post| visible.contains(&post.id))
        .map(|post| {
            let row_class = classes!("post-row", format!("row-{}", post.status.slug()));
            html! {
                <tr class={row_class} key={post.id.clone()}>
                    <td class={classes!("cell-title")}>
                        <Link<Route>
                            to={Route::PostDetail { id: post.id.clone() }}
                            classes={classes!("post-title-link")}
                        >
                            { &post.title }
                        </Link<Route>>
                        {
                            if let Some(subtitle) = post.subtitle.as_ref() {
                                html! { <small class={classes!("post-subtitle", "text-[var(--muted)]")}>{ subtitle }</small> }
                            } else {
                                Html::default()
                            }
                        }
                        {
                            if let Some(concept) = post.concept.as_ref() {
                                html! { <small class={classes!("post-concept", "text-[var(--muted)]")}>{ excerpt(concept, 100) }</small> }
                            } else {
                                Html::default()
                            }
                        }
                    </td>
                    <td>{ &post.author }</td>
                    <td><time>{ &post.date }</time></td>
                    <td>
                        <span class={status_badge_class(post.status)}>
                            { post.status.label() }
                        </span>
                    </td>
                    <td class={classes!("cell-tags")}>
                        { for post.tags.iter().map(|tag| html! {
                            <span class={classes!("tag-chip")}>{ tag }</span>
                        }) }
                    </td>
                    <td class={classes!("cell-actions")}>
                        { for ModerationAction::available_for(post.status).iter().map(|action| {
                            let action = *action;
                            let guard_key = format!("{}:{}", post.id, action.slug());
                            let is_busy = action_inflight.contains(&guard_key);
                            let onclick = {
                                let run_post_action = run_post_action.clone();
                                let post_id = post.id.clone();
                                Callback::from(move |_| {
                                    run_post_action.emit((post_id.clone(), action));
                                })
                            };
                            html! {
                                <button
                                    type="button"
                                    class={classes!("btn-action", format!("btn-{}", action.slug()))}
                                    {onclick}
                                    disabled={is_busy}
                                    title={action.label()}
                                    aria-label={fill_one(t::ACTION_ARIA_TEMPLATE, action.label())}
                                >
                                    <i class={classes!("fas", action_icon(action))} aria-hidden="true"></i>
                                </button>
                            }
                        }) }
                    </td>
                </tr>
            }
        })
        .collect::<Vec<Html>>();

    html! {
        <main class={classes!("container", "posts-page")}>
            <div class={classes!("page-heading")}>
                <h1>{ t::TITLE }</h1>
                <p class={classes!("text-[var(--muted)]")}>
                    { fill_two(t::COUNT_TEMPLATE, visible.len(), posts.len()) }
                </p>
            </div>

            {
                if let Some(message) = (*load_error).clone() {
                    html! { <NoticeBanner message={message} /> }
                } else {
                    Html::default()
                }
            }
            {
                if let Some(message) = (*action_error).clone() {
                    let action_error = action_error.clone();
                    let on_close = Callback::from(move |_| action_error.set(None));
                    html! { <NoticeBanner message={message} on_close={on_close} /> }
                } else {
                    Html::default()
                }
            }

            <div class={classes!("filter-bar")}>
                <input
                    type="text"
                    class={classes!("filter-input")}
                    placeholder={t::FILTER_AUTHOR}
                    value={(*author_filter).clone()}
                    oninput={on_author_input}
                />
                <input
                    type="text"
                    class={classes!("filter-input")}
                    placeholder={t::FILTER_DATE}
                    value={(*date_filter).clone()}
                    oninput={on_date_input}
                />
                <select class={classes!("filter-select")} onchange={on_status_change}>
                    <option value="" selected={status_filter.is_empty()}>{ t::STATUS_ANY }</option>
                    { for [PostStatus::Draft, PostStatus::Published, PostStatus::Deleted]
                        .iter()
                        .map(|status| html! {
                            <option
                                value={status.slug()}
                                selected={*status_filter == status.slug()}
                            >
                                { status.label() }
                            </option>
                        }) }
                </select>
                <input
                    type="search"
                    class={classes!("filter-input", "filter-search")}
                    placeholder={t::FILTER_SEARCH}
                    value={(*search_filter).clone()}
                    oninput={on_search_input}
                />
                <select class={classes!("filter-select")} onchange={on_tag_change}>
                    <option value="" selected={tag_filter.is_empty()}>{ t::TAG_ANY }</option>
                    { for tag_options.iter().map(|tag| html! {
                        <option value={tag.clone()} selected={*tag_filter == *tag}>{ tag }</option>
                    }) }
                </select>
                <HelpTip text={t::HELP_TAG} enabled={*show_help} />
            </div>

            <div class={classes!("toggle-bar")}>
                <button
                    type="button"
                    class={classes!("btn-toggle")}
                    onclick={on_toggle_deleted}
                    aria-pressed={show_deleted.to_string()}
                >
                    <i
                        class={classes!("fas", if *show_deleted { "fa-eye-slash" } else { "fa-eye" })}
                        aria-hidden="true"
                    ></i>
                    { if *show_deleted { t::HIDE_DELETED } else { t::SHOW_DELETED } }
                </button>
                <HelpTip text={t::HELP_DELETED} enabled={*show_help} />
                <button
                    type="button"
                    class={classes!("btn-toggle")}
                    onclick={on_toggle_drafts}
                    aria-pressed={show_drafts.to_string()}
                >
                    <i
                        class={classes!("fas", if *show_drafts { "fa-file-lines" } else { "fa-file" })}
                        aria-hidden="true"
                    ></i>
                    { if *show_drafts { t::HIDE_DRAFTS } else { t::SHOW_DRAFTS } }
                </button>
                <HelpTip text={t::HELP_DRAFTS} enabled={*show_help} />
                <button
                    type="button"
                    class={classes!("btn-toggle")}
                    onclick={on_toggle_help}
                    aria-pressed={show_help.to_string()}
                >
                    <i class={classes!("fas", "fa-circle-question")} aria-hidden="true"></i>
                    { t::HELP }
                </button>
            </div>

            {
                if *loading {
                    html! { <LoadingSpinner /> }
                } else if visible.is_empty() {
                    html! {
                        <div class={classes!("empty-state")}>
                            <i class={classes!("fas", "fa-inbox")} aria-hidden="true"></i>
                            <p>{ t::EMPTY }</p>
                        </div>
                    }
                } else {
                    html! {
                        <table class={classes!("posts-table")}>
                            <thead>
                                <tr>
                                    <th>{"Title"}</th>
                                    <th>{"Author"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Tags"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for rows.into_iter() }
                            </tbody>
                        </table>
                    }
                }
            }
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::excerpt;

    #[test]
    fn short_concepts_pass_through() {
        assert_eq!(excerpt("  A short note  ", 100), "A short note");
    }

    #[test]
    fn long_concepts_are_cut_on_a_char_boundary() {
        let long = "é".repeat(150);
        let cut = excerpt(&long, 100);
        assert_eq!(cut.chars().count(), 101);
        assert!(cut.ends_with('…'));
    }
}
