use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::theme_toggle::ThemeToggle,
    i18n::current::header as t,
    router::Route,
};

/// Top navigation bar: brand, section links and the theme toggle.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class={classes!("site-header", "border-b", "border-[var(--border)]")}>
            <div class={classes!("container", "header-inner")}>
                <Link<Route> to={Route::Posts} classes={classes!("brand")}>
                    <i class={classes!("fas", "fa-feather")} aria-hidden="true"></i>
                    <span>{ t::BRAND }</span>
                </Link<Route>>
                <nav class={classes!("header-nav")} aria-label={t::NAV_ARIA}>
                    <Link<Route> to={Route::Posts} classes={classes!("nav-link")}>
                        { t::NAV_POSTS }
                    </Link<Route>>
                    <Link<Route> to={Route::NewPost} classes={classes!("nav-link")}>
                        { t::NAV_NEW_POST }
                    </Link<Route>>
                    <Link<Route> to={Route::Llm} classes={classes!("nav-link")}>
                        { t::NAV_LLM }
                    </Link<Route>>
                </nav>
                <ThemeToggle />
            </div>
        </header>
    }
}
