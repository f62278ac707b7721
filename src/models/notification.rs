use super::schedule::GroupId;
use crate::config::Config;

/// A transient message shown to the user; nothing waits on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub duration_ms: u32,
}

impl Notification {
    pub fn location_selected(group: &GroupId) -> Self {
        Self {
            title: "Location Selected".to_string(),
            description: format!("Showing load shedding schedule for {group}"),
            duration_ms: Config::NOTIFICATION_DURATION_MS,
        }
    }
}
