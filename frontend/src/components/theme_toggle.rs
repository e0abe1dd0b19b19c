use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::i18n::current::theme_toggle as t;
use crate::theme::{self, Theme};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Light/dark toggle button.
///
/// Owns the whole theme state machine: toggling stores an explicit
/// preference, while OS scheme changes only win for users who never
/// toggled.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme_state = use_state(theme::current);

    // Follow OS scheme changes until an explicit preference exists.
    {
        let theme_state = theme_state.clone();
        use_effect_with((), move |_| {
            let query = theme::media_query();
            let listener = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
                if theme::stored().is_none() {
                    let next = if event.matches() { Theme::Dark } else { Theme::Light };
                    theme::apply(next);
                    theme_state.set(next);
                }
            }) as Box<dyn FnMut(_)>);

            if let Some(query) = query.as_ref() {
                let _ = query
                    .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(query) = query.as_ref() {
                    let _ = query.remove_event_listener_with_callback(
                        "change",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    let onclick = {
        let theme_state = theme_state.clone();
        Callback::from(move |_| theme_state.set(theme::toggle()))
    };

    let is_dark = *theme_state == Theme::Dark;
    let label = if is_dark { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };
    let icon_class = if is_dark { "fa-sun" } else { "fa-moon" };

    html! {
        <button
            type="button"
            class={classes!("btn-icon", props.class.clone())}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={is_dark.to_string()}
        >
            <i class={classes!("fas", icon_class)} aria-hidden="true"></i>
            <span class="sr-only">{ label }</span>
        </button>
    }
}
