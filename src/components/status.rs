use yew::prelude::*;

/// Non-ready renderings of the schedule.
#[derive(Clone, PartialEq, Debug)]
pub enum StatusKind {
    Loading,
    Error(String),
    Empty,
}

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub kind: StatusKind,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.kind {
        StatusKind::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading the latest load shedding schedule..."}</p>
            </div>
        },
        StatusKind::Error(msg) => html! {
            <div class="status error">
                <h3>{"⚠️ Failed to load schedule"}</h3>
                <p>{msg}</p>
            </div>
        },
        StatusKind::Empty => html! {
            <div class="status empty">
                <h3>{"ℹ️ No Schedule Available"}</h3>
                <p>
                    {"There is currently no load shedding schedule available. Please check back later."}
                </p>
            </div>
        },
    }
}
