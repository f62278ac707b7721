use chrono::Duration;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable the daily background refresh of the schedule
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Background refresh interval in milliseconds (24 hours)
    pub const REFETCH_INTERVAL_MS: u32 = 86_400_000;

    /// How long a fetched schedule is served from cache
    pub const STALE_TIME_HOURS: i64 = 24;

    /// Invalidate the cached schedule when the user picks a location
    pub const REFETCH_ON_LOCATION_CHANGE: bool = true;

    /// How long the "Location Selected" notification stays up
    pub const NOTIFICATION_DURATION_MS: u32 = 3_000;

    /// Number of directory entries offered as shortcuts
    pub const PRESET_LOCATIONS: usize = 4;

    /// Attempts per HTTP fetch when rate limited
    pub const FETCH_ATTEMPTS: u32 = 3;

    pub fn stale_time() -> Duration {
        Duration::hours(Self::STALE_TIME_HOURS)
    }
}
