use super::source::ScheduleDocument;
use crate::models::{
    error::AppError,
    schedule::{DayOfWeek, GroupId, GroupSchedule, ScheduleEntry},
};

pub const FALLBACK_SOURCE: &str = "Nepal Electricity Authority";

/// Three-hour outage windows; each day a group gets one morning and one
/// evening slot from the same pair.
const SLOT_PAIRS: [[&str; 2]; 4] = [
    ["00:00 - 03:00", "12:00 - 15:00"],
    ["03:00 - 06:00", "15:00 - 18:00"],
    ["06:00 - 09:00", "18:00 - 21:00"],
    ["09:00 - 12:00", "21:00 - 00:00"],
];

/// Slot pair each group starts the week on; every group advances one pair per day.
const ROTATION: [(&str, usize); 4] = [
    ("Group A", 2),
    ("Group B", 1),
    ("Group C", 0),
    ("Group D", 3),
];

fn rotating_week(start: usize) -> Vec<ScheduleEntry> {
    DayOfWeek::ALL
        .into_iter()
        .enumerate()
        .map(|(offset, day)| {
            ScheduleEntry::new(day, SLOT_PAIRS[(start + offset) % SLOT_PAIRS.len()])
        })
        .collect()
}

/// Built-in schedule used before anything has been fetched successfully.
pub fn fallback_document() -> Result<ScheduleDocument, AppError> {
    let groups = ROTATION
        .iter()
        .map(|&(label, start)| GroupSchedule::new(GroupId::from(label), rotating_week(start)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ScheduleDocument {
        source: FALLBACK_SOURCE.to_string(),
        groups,
        published_at: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_four_full_weeks() {
        let document = fallback_document().unwrap();

        assert_eq!(document.groups.len(), 4);
        for group in &document.groups {
            assert_eq!(group.schedule().len(), 7);
            assert!(group.schedule().iter().all(|entry| entry.times.len() == 2));
        }
    }

    #[test]
    fn test_fallback_rotation() {
        let document = fallback_document().unwrap();
        let group_a = &document.groups[0];

        assert_eq!(group_a.group().as_str(), "Group A");
        assert_eq!(
            group_a.schedule()[0].times,
            ["06:00 - 09:00", "18:00 - 21:00"]
        );
        assert_eq!(
            group_a.entry_for(DayOfWeek::Wednesday).unwrap().times,
            ["03:00 - 06:00", "15:00 - 18:00"]
        );

        let group_d = &document.groups[3];
        assert_eq!(
            group_d.entry_for(DayOfWeek::Saturday).unwrap().times,
            ["03:00 - 06:00", "15:00 - 18:00"]
        );
    }
}
