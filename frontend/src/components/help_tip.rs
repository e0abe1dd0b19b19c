use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HelpTipProps {
    pub text: AttrValue,
    /// Whether the help preference is on. An absent or disabled help
    /// region is valid configuration, not an error.
    pub enabled: bool,
}

/// Inline help marker, rendered only while help is enabled.
#[function_component(HelpTip)]
pub fn help_tip(props: &HelpTipProps) -> Html {
    if !props.enabled {
        return Html::default();
    }

    html! {
        <span class={classes!("help-tip")} role="note" title={props.text.clone()}>
            <i class={classes!("fas", "fa-circle-question")} aria-hidden="true"></i>
            <span class="sr-only">{ props.text.clone() }</span>
        </span>
    }
}
