use yew::prelude::*;
use yew::use_effect_with;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::notice_banner as t;

/// Visual tone of a notice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub message: String,
    #[prop_or(NoticeLevel::Error)]
    pub level: NoticeLevel,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

/// Transient notice shown after a remote call. Auto-dismisses after five
/// seconds; failures never escalate beyond this banner.
#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 5000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let (tone_class, icon) = match props.level {
        NoticeLevel::Success => ("notice-success", "fa-circle-check"),
        NoticeLevel::Error => ("notice-error", "fa-triangle-exclamation"),
    };

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div class={classes!("notice-banner", tone_class)} role="alert" aria-live="assertive">
            <i class={classes!("fas", icon)} aria-hidden="true"></i>
            <p class={classes!("notice-message")}>{ props.message.clone() }</p>
            <button
                type="button"
                class={classes!("notice-close")}
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
