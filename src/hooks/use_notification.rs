use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::models::notification::Notification;

/// Handle returned by `use_notification` hook
#[derive(Clone, PartialEq)]
pub struct NotificationHandle {
    pub current: Option<Notification>,
    pub notify: Callback<Notification>,
    pub dismiss: Callback<()>,
}

/// Holds at most one notification and clears it after its duration.
#[hook]
pub fn use_notification() -> NotificationHandle {
    let current = use_state(|| None::<Notification>);

    // Effect: auto-dismiss; a newer notification cancels the older timer
    {
        let current = current.clone();
        let shown = (*current).clone();
        use_effect_with(shown, move |shown| {
            let timeout = shown.as_ref().map(|notification| {
                Timeout::new(notification.duration_ms, move || current.set(None))
            });
            move || drop(timeout)
        });
    }

    let notify = {
        let current = current.clone();
        Callback::from(move |notification: Notification| current.set(Some(notification)))
    };

    let dismiss = {
        let current = current.clone();
        Callback::from(move |()| current.set(None))
    };

    NotificationHandle {
        current: (*current).clone(),
        notify,
        dismiss,
    }
}
