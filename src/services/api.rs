use super::{
    retry::retry_with_backoff,
    source::{ScheduleDocument, ScheduleSource},
};
use crate::config::Config;
use crate::models::{
    error::AppError,
    schedule::{DayOfWeek, GroupId, GroupSchedule, ScheduleEntry},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

// CONSTANTS
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_SCHEDULE_PATH: &str = "/data/loadshedding.json";

// SOURCE CONFIGURATION
/// Configuration for the HTTP schedule source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    base_url: String,
    schedule_path: String,
    max_attempts: u32,
}

impl SourceConfig {
    /// Creates a builder for constructing a `SourceConfig`.
    pub fn builder() -> SourceConfigBuilder {
        SourceConfigBuilder::default()
    }

    /// Full URL of the published schedule document.
    pub fn schedule_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.schedule_path.trim_start_matches('/')
        )
    }

    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfigBuilder::default().build()
    }
}

// SOURCE CONFIGURATION BUILDER
/// Builder for constructing a `SourceConfig` with custom settings.
#[derive(Debug, Default)]
pub struct SourceConfigBuilder {
    base_url: Option<String>,
    schedule_path: Option<String>,
    max_attempts: Option<u32>,
}

impl SourceConfigBuilder {
    /// Sets the origin serving the schedule (the page origin in the browser).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the path of the schedule document.
    pub fn schedule_path(mut self, path: impl Into<String>) -> Self {
        self.schedule_path = Some(path.into());
        self
    }

    /// Sets how many attempts are made when rate limited.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Builds the `SourceConfig`.
    pub fn build(self) -> SourceConfig {
        SourceConfig {
            base_url: self
                .base_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            schedule_path: self
                .schedule_path
                .unwrap_or_else(|| DEFAULT_SCHEDULE_PATH.to_string()),
            max_attempts: self.max_attempts.unwrap_or(Config::FETCH_ATTEMPTS).max(1),
        }
    }
}

// WIRE TYPES
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ApiDocument {
    source: String,
    #[serde(default)]
    last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    groups: Vec<ApiGroup>,
}

#[derive(Deserialize, Debug)]
struct ApiGroup {
    group: String,
    schedule: Vec<ApiDay>,
}

#[derive(Deserialize, Debug)]
struct ApiDay {
    day: String,
    #[serde(default)]
    times: Vec<String>,
}

impl TryFrom<ApiGroup> for GroupSchedule {
    type Error = AppError;

    fn try_from(g: ApiGroup) -> Result<Self, Self::Error> {
        let schedule = g
            .schedule
            .into_iter()
            .map(|d| Ok(ScheduleEntry::new(d.day.parse::<DayOfWeek>()?, d.times)))
            .collect::<Result<Vec<_>, AppError>>()?;

        Self::new(GroupId::new(g.group), schedule)
    }
}

impl TryFrom<ApiDocument> for ScheduleDocument {
    type Error = AppError;

    fn try_from(doc: ApiDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            source: doc.source,
            groups: doc
                .groups
                .into_iter()
                .map(GroupSchedule::try_from)
                .collect::<Result<_, _>>()?,
            published_at: doc.last_updated,
        })
    }
}

/// Parses a schedule document body.
pub fn parse_document(body: &str) -> Result<ScheduleDocument, AppError> {
    let document: ApiDocument = serde_json::from_str(body)
        .map_err(|e| AppError::DataError(format!("Failed to parse schedule: {e}")))?;
    document.try_into()
}

// HTTP SOURCE
/// Reads the published schedule document over HTTP.
pub struct HttpSource {
    http: reqwest::Client,
    config: SourceConfig,
}

impl HttpSource {
    /// Creates a new source with the specified configuration.
    pub fn with_config(config: SourceConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the source's configuration.
    pub const fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Executes a single fetch attempt.
    async fn fetch_once(&self, url: &str) -> Result<ScheduleDocument, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to read response: {e}")))?;

        parse_document(&body)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::FetchError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::FetchError(format!("Request error: {error}"))
        } else {
            AppError::FetchError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            404 => AppError::NotFound(format!("Schedule not published: {body}")),
            400..=499 => AppError::FetchError(format!("Client error {status}: {body}")),
            500..=599 => AppError::FetchError(format!("Server error {status}: {body}")),
            _ => AppError::FetchError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl ScheduleSource for HttpSource {
    async fn fetch_document(&self) -> Result<ScheduleDocument, AppError> {
        let url = self.config.schedule_url();
        let url = url.as_str();
        retry_with_backoff(move || self.fetch_once(url), self.config.max_attempts).await
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn week_json(day_override: Option<&str>) -> String {
        let days: Vec<String> = DayOfWeek::ALL
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let name = match (i, day_override) {
                    (0, Some(name)) => name.to_string(),
                    _ => d.name().to_string(),
                };
                format!(r#"{{"day": "{name}", "times": ["06:00 - 09:00", "18:00 - 21:00"]}}"#)
            })
            .collect();
        days.join(",")
    }

    #[test]
    fn test_schedule_url_construction() {
        let config = SourceConfig::builder()
            .base_url("https://neptools.example/")
            .schedule_path("/data/loadshedding.json")
            .build();

        assert_eq!(
            config.schedule_url(),
            "https://neptools.example/data/loadshedding.json"
        );
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = SourceConfig::builder().base_url("").max_attempts(0).build();

        assert_eq!(
            config.schedule_url(),
            "http://localhost:8080/data/loadshedding.json"
        );
        assert_eq!(config.max_attempts(), 1);
        assert_eq!(SourceConfig::default().max_attempts(), Config::FETCH_ATTEMPTS);
    }

    #[test]
    fn test_parse_document() {
        let body = format!(
            r#"{{
                "source": "Nepal Electricity Authority",
                "lastUpdated": "2025-10-08T04:15:00Z",
                "groups": [{{"group": "Group A", "schedule": [{}]}}]
            }}"#,
            week_json(None)
        );

        let document = parse_document(&body).unwrap();

        assert_eq!(document.source, "Nepal Electricity Authority");
        assert_eq!(
            document.published_at,
            Some(Utc.with_ymd_and_hms(2025, 10, 8, 4, 15, 0).unwrap())
        );
        assert_eq!(document.groups.len(), 1);
        assert_eq!(document.groups[0].schedule()[3].day, DayOfWeek::Wednesday);
    }

    #[test]
    fn test_parse_document_without_groups() {
        let document = parse_document(r#"{"source": "NEA"}"#).unwrap();

        assert!(document.groups.is_empty());
        assert!(document.published_at.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_day() {
        let body = format!(
            r#"{{"source": "NEA", "groups": [{{"group": "Group A", "schedule": [{}]}}]}}"#,
            week_json(Some("Funday"))
        );

        let err = parse_document(&body).unwrap_err();
        assert_eq!(err, AppError::DataError("Invalid day of week: Funday".to_string()));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_document("<html>maintenance</html>").unwrap_err();
        assert!(matches!(err, AppError::DataError(msg) if msg.starts_with("Failed to parse schedule")));
    }

    #[test]
    fn test_status_classification() {
        let source = HttpSource::with_config(SourceConfig::default()).unwrap();

        assert_eq!(
            source.error_for_status(reqwest::StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::RateLimited
        );
        assert!(matches!(
            source.error_for_status(reqwest::StatusCode::NOT_FOUND, "gone"),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            source.error_for_status(reqwest::StatusCode::BAD_GATEWAY, ""),
            AppError::FetchError(msg) if msg.starts_with("Server error")
        ));
    }
}
