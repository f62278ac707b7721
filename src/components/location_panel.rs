use crate::models::schedule::GroupId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LocationPanelProps {
    pub group: Option<GroupId>,
    pub on_change: Callback<()>,
}

/// Shown in place of the selector once a location has been picked.
#[function_component(LocationPanel)]
pub fn location_panel(props: &LocationPanelProps) -> Html {
    let onclick = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(()))
    };

    let label = props
        .group
        .as_ref()
        .map_or_else(|| "All groups".to_string(), ToString::to_string);

    html! {
        <div class="location-panel">
            <div class="location-panel-header">
                <h3>{"Your Location"}</h3>
                <button class="link-button" {onclick}>{"Change"}</button>
            </div>
            <div class="location-current">{"📍 "}{label}</div>
            <div class="location-notice">
                <h4>{"Important Notice"}</h4>
                <p>
                    {"The schedule may change without prior notice. Please check regularly for the most up-to-date information."}
                </p>
            </div>
        </div>
    }
}
