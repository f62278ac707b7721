use super::schedule::{DayOfWeek, GroupId, GroupSchedule};
use crate::services::cache::DataState;
use chrono::{DateTime, TimeZone, Utc};

pub const GENERIC_ERROR: &str =
    "Unable to fetch the load shedding schedule. Please try again later.";

/// Which group cards the schedule shows.
///
/// An explicit selection always wins; otherwise `show_all` shows every
/// group, and the default shows only the first published group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFilter {
    pub selected: Option<GroupId>,
    pub show_all: bool,
}

impl GroupFilter {
    pub const fn select(group: GroupId) -> Self {
        Self {
            selected: Some(group),
            show_all: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            selected: None,
            show_all: true,
        }
    }

    pub fn apply<'a>(&self, groups: &'a [GroupSchedule]) -> Vec<&'a GroupSchedule> {
        match (&self.selected, self.show_all) {
            (Some(id), _) => groups.iter().filter(|g| g.group() == id).collect(),
            (None, true) => groups.iter().collect(),
            (None, false) => groups.first().into_iter().collect(),
        }
    }

    pub fn is_selected(&self, group: &GroupId) -> bool {
        self.selected.as_ref() == Some(group)
    }

    pub const fn shows_all(&self) -> bool {
        self.show_all && self.selected.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub day: DayOfWeek,
    pub times: Vec<String>,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupCard {
    pub group: GroupId,
    pub rows: Vec<DayRow>,
}

impl GroupCard {
    fn build(group: &GroupSchedule, today: DayOfWeek) -> Self {
        Self {
            group: group.group().clone(),
            rows: group
                .schedule()
                .iter()
                .map(|entry| DayRow {
                    day: entry.day,
                    times: entry.times.clone(),
                    is_today: entry.day == today,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadyView {
    pub last_updated: DateTime<Utc>,
    pub source: String,
    /// Every published group, in snapshot order, for the group buttons.
    pub groups: Vec<GroupId>,
    pub cards: Vec<GroupCard>,
}

/// Exactly one rendering of the schedule per query state.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleView {
    Loading,
    Error { message: String },
    Empty,
    Ready(ReadyView),
}

/// Decides what the schedule shows for `state`, `filter` and the viewer's `today`.
pub fn present(state: &DataState, filter: &GroupFilter, today: DayOfWeek) -> ScheduleView {
    match state {
        DataState::Loading => ScheduleView::Loading,
        DataState::Error(message) if message.trim().is_empty() => ScheduleView::Error {
            message: GENERIC_ERROR.to_string(),
        },
        DataState::Error(message) => ScheduleView::Error {
            message: message.clone(),
        },
        DataState::Loaded(snapshot) if snapshot.is_empty() => ScheduleView::Empty,
        DataState::Loaded(snapshot) => ScheduleView::Ready(ReadyView {
            last_updated: snapshot.last_updated(),
            source: snapshot.source().to_string(),
            groups: snapshot.groups().iter().map(|g| g.group().clone()).collect(),
            cards: filter
                .apply(snapshot.groups())
                .into_iter()
                .map(|g| GroupCard::build(g, today))
                .collect(),
        }),
    }
}

/// "October 08, 2025, 06:30" in the given time zone.
pub fn format_last_updated<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%B %d, %Y, %H:%M").to_string()
}
