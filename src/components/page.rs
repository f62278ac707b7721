use chrono::Local;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::location_panel::LocationPanel;
use crate::components::location_selector::LocationSelector;
use crate::components::schedule::LoadSheddingSchedule;
use crate::components::status::{Status, StatusKind};
use crate::components::toast::Toast;
use crate::config::Config;
use crate::hooks::use_load_shedding::{PageQuery, use_load_shedding};
use crate::hooks::use_notification::use_notification;
use crate::models::{
    error::AppError, notification::Notification, schedule::GroupId, view::GroupFilter,
};
use crate::services::{
    api::{HttpSource, SourceConfig},
    query::ScheduleQuery,
};
use crate::utils::clock::{Clock, SystemClock};

/// Page-scoped query; props compare by identity.
#[derive(Clone)]
pub struct SharedQuery(Rc<PageQuery>);

impl PartialEq for SharedQuery {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Builds the page's query against the schedule published next to the app.
fn build_query() -> Result<SharedQuery, AppError> {
    let origin = gloo::utils::window()
        .location()
        .origin()
        .unwrap_or_default();
    let config = SourceConfig::builder().base_url(origin).build();
    let source = HttpSource::with_config(config)?;

    tracing::info!(url = %source.config().schedule_url(), "Schedule source configured");
    Ok(SharedQuery(Rc::new(ScheduleQuery::new(source, SystemClock))))
}

#[function_component(LoadSheddingPage)]
pub fn load_shedding_page() -> Html {
    // Lives exactly as long as the page
    let query = use_memo((), |_| build_query());
    let today = SystemClock.now().with_timezone(&Local).format("%B %d, %Y");

    html! {
        <div class="load-shedding-page">
            <div class="page-intro">
                <h1>{"Nepal Electricity Load Shedding Schedule"}</h1>
                <p>
                    {"Stay updated with the latest electricity load shedding schedules. "}
                    {"Data is automatically fetched daily from Nepal Electricity Authority."}
                </p>
                <div class="page-meta">
                    <span>{"🕒 Last updated: "}{today.to_string()}</span>
                    <span class="separator">{"•"}</span>
                    <span>{"📅 Auto-updates daily"}</span>
                </div>
            </div>

            {
                match &*query {
                    Ok(query) => html! { <ScheduleBoard query={query.clone()} /> },
                    Err(e) => html! { <Status kind={StatusKind::Error(e.to_string())} /> },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScheduleBoardProps {
    pub query: SharedQuery,
}

/// Selector on the side, schedule in the main column.
#[function_component(ScheduleBoard)]
pub fn schedule_board(props: &ScheduleBoardProps) -> Html {
    let schedule = use_load_shedding(props.query.0.clone());
    let notifications = use_notification();
    let filter = use_state(GroupFilter::default);
    let show_selector = use_state(|| true);

    let on_select_location = {
        let filter = filter.clone();
        let show_selector = show_selector.clone();
        let notify = notifications.notify.clone();
        let invalidate = schedule.invalidate.clone();
        Callback::from(move |group: GroupId| {
            tracing::info!(group = %group, "Location selected");
            notify.emit(Notification::location_selected(&group));
            filter.set(GroupFilter::select(group));
            show_selector.set(false);

            if Config::REFETCH_ON_LOCATION_CHANGE {
                invalidate.emit(());
            }
        })
    };

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |next: GroupFilter| filter.set(next))
    };

    let on_change_location = {
        let show_selector = show_selector.clone();
        Callback::from(move |()| show_selector.set(true))
    };

    // Derived at render time, never stored
    let today = SystemClock.today();

    html! {
        <div class="page-grid">
            <aside class="page-sidebar">
                if *show_selector {
                    <LocationSelector on_select={on_select_location} />
                } else {
                    <LocationPanel group={filter.selected.clone()} on_change={on_change_location} />
                }
            </aside>

            <section class="page-schedule">
                <LoadSheddingSchedule
                    state={schedule.state.clone()}
                    filter={(*filter).clone()}
                    {on_filter}
                    {today}
                />
            </section>

            <Toast
                notification={notifications.current.clone()}
                on_dismiss={notifications.dismiss.clone()}
            />
        </div>
    }
}
