use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("container")}>
            <div class={classes!("empty-state")}>
                <h2>{ t::TITLE }</h2>
                <p>{ t::BODY }</p>
                <Link<Route> to={Route::Posts} classes={classes!("nav-link")}>
                    { crate::i18n::current::post_detail::BACK }
                </Link<Route>>
            </div>
        </main>
    }
}
