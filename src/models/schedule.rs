use super::error::AppError;
use chrono::{DateTime, Utc, Weekday};
use std::collections::HashSet;
use std::fmt;

/// Day of the week as published in load-shedding schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// Every weekday, in schedule order (Sunday first).
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DayOfWeek {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::DataError(format!("Invalid day of week: {s}")))
    }
}

/// Label of a load-shedding group, e.g. "Group A".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub day: DayOfWeek,
    pub times: Vec<String>,
}

impl ScheduleEntry {
    pub fn new<T: Into<String>>(day: DayOfWeek, times: impl IntoIterator<Item = T>) -> Self {
        Self {
            day,
            times: times.into_iter().map(Into::into).collect(),
        }
    }
}

/// One group's weekly schedule: exactly one entry per weekday, Sunday first.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSchedule {
    group: GroupId,
    schedule: Vec<ScheduleEntry>,
}

impl GroupSchedule {
    pub fn new(group: GroupId, schedule: Vec<ScheduleEntry>) -> Result<Self, AppError> {
        if schedule.len() != DayOfWeek::ALL.len() {
            return Err(AppError::DataError(format!(
                "{group} has {} schedule entries, expected 7",
                schedule.len()
            )));
        }

        for (position, (entry, expected)) in schedule.iter().zip(DayOfWeek::ALL).enumerate() {
            if entry.day != expected {
                return Err(AppError::DataError(format!(
                    "{group} lists {} at position {position}, expected {expected}",
                    entry.day
                )));
            }
        }

        Ok(Self { group, schedule })
    }

    pub const fn group(&self) -> &GroupId {
        &self.group
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    pub fn entry_for(&self, day: DayOfWeek) -> Option<&ScheduleEntry> {
        self.schedule.iter().find(|entry| entry.day == day)
    }
}

/// A published load-shedding schedule at one point in time.
///
/// Snapshots are never modified; a refetch builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSheddingSnapshot {
    last_updated: DateTime<Utc>,
    source: String,
    groups: Vec<GroupSchedule>,
}

impl LoadSheddingSnapshot {
    pub fn new(
        last_updated: DateTime<Utc>,
        source: impl Into<String>,
        groups: Vec<GroupSchedule>,
    ) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(groups.len());
        if let Some(duplicate) = groups.iter().find(|g| !seen.insert(g.group())) {
            return Err(AppError::DataError(format!(
                "Duplicate group in schedule: {}",
                duplicate.group()
            )));
        }

        Ok(Self {
            last_updated,
            source: source.into(),
            groups,
        })
    }

    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn groups(&self) -> &[GroupSchedule] {
        &self.groups
    }

    pub fn group(&self, id: &GroupId) -> Option<&GroupSchedule> {
        self.groups.iter().find(|g| g.group() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> Vec<ScheduleEntry> {
        DayOfWeek::ALL
            .into_iter()
            .map(|day| ScheduleEntry::new(day, ["06:00 - 09:00"]))
            .collect()
    }

    #[test]
    fn test_day_parsing() {
        assert_eq!("Wednesday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Wednesday);
        assert_eq!("sunday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert!("Wed".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_day_from_chrono_weekday() {
        assert_eq!(DayOfWeek::from(Weekday::Sun), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::from(Weekday::Sat), DayOfWeek::Saturday);
    }

    #[test]
    fn test_group_schedule_rejects_short_week() {
        let mut schedule = week();
        schedule.pop();

        let err = GroupSchedule::new(GroupId::from("Group A"), schedule).unwrap_err();
        assert!(matches!(err, AppError::DataError(msg) if msg.contains("6 schedule entries")));
    }

    #[test]
    fn test_group_schedule_rejects_out_of_order_days() {
        let mut schedule = week();
        schedule.swap(0, 1);

        let err = GroupSchedule::new(GroupId::from("Group A"), schedule).unwrap_err();
        assert!(matches!(err, AppError::DataError(msg) if msg.contains("expected Sunday")));
    }

    #[test]
    fn test_group_schedule_rejects_duplicate_day() {
        let mut schedule = week();
        schedule[6].day = DayOfWeek::Friday;

        assert!(GroupSchedule::new(GroupId::from("Group A"), schedule).is_err());
    }

    #[test]
    fn test_snapshot_rejects_duplicate_groups() {
        let group = GroupSchedule::new(GroupId::from("Group A"), week()).unwrap();

        let err = LoadSheddingSnapshot::new(Utc::now(), "test", vec![group.clone(), group])
            .unwrap_err();
        assert_eq!(
            err,
            AppError::DataError("Duplicate group in schedule: Group A".to_string())
        );
    }

    #[test]
    fn test_snapshot_lookup_by_group() {
        let a = GroupSchedule::new(GroupId::from("Group A"), week()).unwrap();
        let b = GroupSchedule::new(GroupId::from("Group B"), week()).unwrap();
        let snapshot = LoadSheddingSnapshot::new(Utc::now(), "test", vec![a, b]).unwrap();

        let found = snapshot.group(&GroupId::from("Group B")).unwrap();
        assert_eq!(found.group().as_str(), "Group B");
        assert!(snapshot.group(&GroupId::from("Group Z")).is_none());
        assert!(found.entry_for(DayOfWeek::Tuesday).is_some());
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        let snapshot = LoadSheddingSnapshot::new(Utc::now(), "test", Vec::new()).unwrap();
        assert!(snapshot.is_empty());
    }
}
