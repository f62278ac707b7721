use crate::models::view::{DayRow, GroupCard};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScheduleCardProps {
    pub card: GroupCard,
}

/// One group's week, with today's row highlighted.
#[function_component(ScheduleCard)]
pub fn schedule_card(props: &ScheduleCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="schedule-card">
            <div class="schedule-card-header">
                <h3>{"📍 "}{card.group.to_string()}</h3>
            </div>
            <table class="schedule-table">
                <thead>
                    <tr>
                        <th>{"Day"}</th>
                        <th>{"Load Shedding Times"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for card.rows.iter().map(day_row) }
                </tbody>
            </table>
        </div>
    }
}

fn day_row(row: &DayRow) -> Html {
    let class = classes!("schedule-row", row.is_today.then_some("today"));

    html! {
        <tr key={row.day.name()} {class}>
            <td class="schedule-day">
                <span>{row.day.name()}</span>
                if row.is_today {
                    <span class="today-badge">{"Today"}</span>
                }
            </td>
            <td class="schedule-times">
                { for row.times.iter().map(|time| html! {
                    <div class="schedule-time">{"🕒 "}{time.clone()}</div>
                }) }
            </td>
        </tr>
    }
}
