use crate::models::notification::Notification;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Option<Notification>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notification) = &props.notification else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" role="status" aria-live="polite">
            <div class="toast-body">
                <strong>{notification.title.clone()}</strong>
                <p>{notification.description.clone()}</p>
            </div>
            <button class="toast-close" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}
