//! Draftboard admin frontend: post moderation, filtering and publishing
//! settings for a blog backed by an external server.

mod api;
mod components;
mod i18n;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod prefs;
mod router;
mod theme;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    // Resolve the theme before mounting so the first paint already has the
    // right `data-theme` attribute.
    theme::apply(theme::current());
    yew::Renderer::<App>::new().render();
}
