use yew::prelude::*;

use crate::i18n::current::common as t;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 20,
            SpinnerSize::Medium => 36,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
}

/// Inline busy indicator for pending fetches.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let style = format!(
        "width:{size}px;height:{size}px;",
        size = props.size.dimension()
    );

    html! {
        <div class={classes!("spinner-host")} role="status" aria-live="polite" aria-busy="true">
            <span class={classes!("spinner-ring")} {style}></span>
            <span class="sr-only">{ t::LOADING }</span>
        </div>
    }
}
