use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::header::Header, pages};

/// Admin routes.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Posts,

    #[at("/posts/new")]
    NewPost,

    #[at("/posts/:id")]
    PostDetail { id: String },

    #[at("/llm")]
    Llm,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Posts => html! { <pages::PostsPage /> },
        Route::NewPost => html! { <pages::post_form::PostFormPage /> },
        Route::PostDetail {
            id,
        } => {
            html! { <pages::post_detail::PostDetailPage id={id} /> }
        },
        Route::Llm => html! { <pages::llm::LlmPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class={classes!("app-shell", "bg-[var(--bg)]")}>
                <Header />
                <div class={classes!("app-content")}>
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
