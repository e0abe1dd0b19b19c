use web_sys::Element;
use yew::prelude::*;

use crate::utils;

#[derive(Properties, Clone, PartialEq)]
pub struct MarkdownViewProps {
    pub markdown: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Render a Markdown string into a host element without letting Yew diff
/// its children, so externally enhanced markup never fights the VDOM.
#[function_component(MarkdownView)]
pub fn markdown_view(props: &MarkdownViewProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        let markdown = props.markdown.clone();
        use_effect_with(markdown, move |markdown| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(&utils::markdown_to_html(markdown));
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={props.class.clone()} />
    }
}
