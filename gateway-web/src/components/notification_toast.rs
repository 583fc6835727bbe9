use gloo_timers::callback::Timeout;
use shared::{Notification, NotificationKind};
use yew::{Callback, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    #[prop_or_default]
    pub notification: Option<Notification>,
    pub on_dismiss: Callback<()>,
}

/// Transient toast for the outcome of an admin call.
///
/// Dismisses itself once the notification's duration elapses; a newer
/// notification restarts the timer.
#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.notification.clone(), move |notification| {
            let timeout = notification.as_ref().map(|notification| {
                Timeout::new(notification.duration_millis(), move || on_dismiss.emit(()))
            });
            move || drop(timeout)
        });
    }

    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };

    let alert_class = match notification.kind {
        NotificationKind::Success => "alert-success",
        NotificationKind::Error => "alert-error",
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: yew::MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast toast-top toast-end z-50">
            <div class={classes!("alert", alert_class)} role="alert">
                <span>{ notification.message.clone() }</span>
                <button class="btn btn-ghost btn-xs" type="button" onclick={on_close}>
                    {"✕"}
                </button>
            </div>
        </div>
    }
}
