use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::location::{Location, LocationDirectory};
use crate::models::schedule::GroupId;

#[derive(Properties, PartialEq)]
pub struct LocationSelectorProps {
    pub on_select: Callback<GroupId>,
}

/// Area search plus preset shortcuts; picking either emits the area's group.
#[function_component(LocationSelector)]
pub fn location_selector(props: &LocationSelectorProps) -> Html {
    let directory = use_memo((), |_| LocationDirectory::default());
    let query = use_state(String::new);
    let show_results = use_state(|| false);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onsubmit = {
        let show_results = show_results.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            show_results.set(true);
        })
    };

    // Emits exactly one group and resets the search
    let select = {
        let on_select = props.on_select.clone();
        let query = query.clone();
        let show_results = show_results.clone();
        Callback::from(move |location: Location| {
            on_select.emit(location.group_id());
            show_results.set(false);
            query.set(String::new());
        })
    };

    let results = directory.search(&query);

    html! {
        <div class="location-selector">
            <h3>{"Find Your Location"}</h3>

            <form class="location-search" {onsubmit}>
                <input
                    type="text"
                    placeholder="Enter your area name..."
                    aria-label="Search your area"
                    value={(*query).clone()}
                    {oninput}
                />
                <button type="submit" class="search-button">{"Search"}</button>
            </form>

            if *show_results {
                <div class="location-results">
                    if let Some(message) = results.empty_message() {
                        <div class="location-empty">{message}</div>
                    } else {
                        { for results.matches().iter().map(|location| result_item(*location, &select)) }
                    }
                </div>
            }

            <div class="location-presets">
                <h4>{"Popular Locations"}</h4>
                <div class="preset-list">
                    { for directory.presets().iter().map(|location| preset_button(*location, &select)) }
                </div>
            </div>
        </div>
    }
}

fn result_item(location: Location, select: &Callback<Location>) -> Html {
    let onclick = {
        let select = select.clone();
        Callback::from(move |_: MouseEvent| select.emit(location))
    };

    html! {
        <div class="location-result" key={location.name} {onclick}>
            <div class="location-name">{"📍 "}{location.name}</div>
            <div class="location-group">{location.group}</div>
        </div>
    }
}

fn preset_button(location: Location, select: &Callback<Location>) -> Html {
    let onclick = {
        let select = select.clone();
        Callback::from(move |_: MouseEvent| select.emit(location))
    };

    html! {
        <button class="preset-button" key={location.name} {onclick}>{location.name}</button>
    }
}
