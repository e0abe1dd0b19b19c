use yew::prelude::*;

use crate::prefs;

#[derive(Properties, PartialEq)]
pub struct WorkflowStageProps {
    /// Stage identifier, also the suffix of the persisted
    /// `workflow-<stage>` preference key.
    pub stage: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Collapsible workflow section whose open state survives reloads.
#[function_component(WorkflowStage)]
pub fn workflow_stage(props: &WorkflowStageProps) -> Html {
    let key = prefs::workflow_stage_key(&props.stage);
    let open = {
        let key = key.clone();
        use_state(move || prefs::flag(&key))
    };

    let on_summary_click = {
        let open = open.clone();
        Callback::from(move |event: MouseEvent| {
            // The `open` attribute is controlled from state; keep the
            // native details toggle out of it.
            event.prevent_default();
            let next = !*open;
            prefs::set_flag(&key, next);
            open.set(next);
        })
    };

    html! {
        <details class={classes!("workflow-stage")} open={*open}>
            <summary onclick={on_summary_click}>
                <i
                    class={classes!("fas", if *open { "fa-chevron-down" } else { "fa-chevron-right" })}
                    aria-hidden="true"
                ></i>
                { props.title.clone() }
            </summary>
            <div class={classes!("workflow-stage-body")}>
                { for props.children.iter() }
            </div>
        </details>
    }
}
