use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::services::{api::HttpSource, cache::DataState, query::ScheduleQuery};
use crate::utils::clock::SystemClock;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

/// The query object a mounted page owns.
pub type PageQuery = ScheduleQuery<HttpSource, SystemClock>;

/// Handle returned by `use_load_shedding` hook
#[derive(Clone, PartialEq)]
pub struct LoadSheddingHandle {
    pub state: DataState,
    pub invalidate: Callback<()>,
}

/// Reads the schedule through `query` and re-renders on every cache update.
///
/// Refreshes on a fixed interval while mounted. Regaining focus does not
/// trigger a refetch.
#[hook]
pub fn use_load_shedding(query: Rc<PageQuery>) -> LoadSheddingHandle {
    let state = use_state(|| query.state());

    {
        let state = state.clone();
        let query = query.clone();

        use_effect_with((), move |_| {
            let subscription = {
                let state = state.clone();
                query
                    .cache()
                    .subscribe(move |update: &DataState| state.set(update.clone()))
            };
            state.set(query.state());

            {
                let query = query.clone();
                spawn_local(async move {
                    query.read().await;
                });
            }

            // Background refresh, dropped with the page
            let refresh = Config::ENABLE_AUTO_REFRESH.then(|| {
                Interval::new(Config::REFETCH_INTERVAL_MS, move || {
                    let query = query.clone();
                    spawn_local(async move {
                        query.refetch().await;
                    });
                })
            });

            move || {
                drop(refresh);
                drop(subscription);
            }
        });
    }

    let invalidate = Callback::from(move |()| {
        query.invalidate();
        let query = query.clone();
        spawn_local(async move {
            query.read().await;
        });
    });

    LoadSheddingHandle {
        state: (*state).clone(),
        invalidate,
    }
}
