use chrono::Local;
use yew::prelude::*;

use crate::components::schedule_card::ScheduleCard;
use crate::components::status::{Status, StatusKind};
use crate::models::schedule::{DayOfWeek, GroupId};
use crate::models::view::{GroupFilter, ReadyView, ScheduleView, format_last_updated, present};
use crate::services::cache::DataState;

#[derive(Properties, PartialEq)]
pub struct LoadSheddingScheduleProps {
    pub state: DataState,
    pub filter: GroupFilter,
    pub on_filter: Callback<GroupFilter>,
    pub today: DayOfWeek,
}

#[function_component(LoadSheddingSchedule)]
pub fn load_shedding_schedule(props: &LoadSheddingScheduleProps) -> Html {
    match present(&props.state, &props.filter, props.today) {
        ScheduleView::Loading => html! { <Status kind={StatusKind::Loading} /> },
        ScheduleView::Error { message } => html! { <Status kind={StatusKind::Error(message)} /> },
        ScheduleView::Empty => html! { <Status kind={StatusKind::Empty} /> },
        ScheduleView::Ready(ready) => ready_view(&ready, &props.filter, &props.on_filter),
    }
}

fn ready_view(ready: &ReadyView, filter: &GroupFilter, on_filter: &Callback<GroupFilter>) -> Html {
    let last_updated = format_last_updated(&ready.last_updated.with_timezone(&Local));

    let show_all = {
        let on_filter = on_filter.clone();
        Callback::from(move |_: MouseEvent| on_filter.emit(GroupFilter::all()))
    };
    let show_all_class = classes!("group-tab", filter.shows_all().then_some("active"));

    let missing = filter
        .selected
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    html! {
        <div class="schedule">
            <div class="schedule-meta">
                <span class="schedule-updated">{"ℹ️ Last Updated: "}{last_updated}</span>
                <span class="schedule-source">{"Source: "}{ready.source.clone()}</span>
            </div>

            <div class="group-tabs">
                <button class={show_all_class} onclick={show_all}>{"Show All Groups"}</button>
                { for ready.groups.iter().map(|group| group_tab(group, filter, on_filter)) }
            </div>

            if ready.cards.is_empty() {
                <p class="schedule-notice">{format!("No schedule published for {missing}")}</p>
            } else {
                <div class="schedule-grid">
                    { for ready.cards.iter().map(|card| html! {
                        <ScheduleCard key={card.group.to_string()} card={card.clone()} />
                    }) }
                </div>
            }
        </div>
    }
}

fn group_tab(group: &GroupId, filter: &GroupFilter, on_filter: &Callback<GroupFilter>) -> Html {
    let class = classes!("group-tab", filter.is_selected(group).then_some("active"));
    let onclick = {
        let on_filter = on_filter.clone();
        let group = group.clone();
        Callback::from(move |_: MouseEvent| on_filter.emit(GroupFilter::select(group.clone())))
    };

    html! {
        <button key={group.to_string()} {class} {onclick}>{group.to_string()}</button>
    }
}
