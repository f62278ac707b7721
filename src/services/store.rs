use super::{
    fallback::fallback_document,
    source::{ScheduleDocument, ScheduleSource},
};
use crate::models::{error::AppError, schedule::LoadSheddingSnapshot};
use crate::utils::clock::Clock;
use std::cell::RefCell;

/// Produces snapshots from a [`ScheduleSource`], degrading to the last good
/// snapshot (or the built-in schedule) whenever the source fails.
pub struct ScheduleStore<S, C> {
    source: S,
    clock: C,
    last_good: RefCell<Option<LoadSheddingSnapshot>>,
}

impl<S: ScheduleSource, C: Clock> ScheduleStore<S, C> {
    pub const fn new(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
            last_good: RefCell::new(None),
        }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the current schedule.
    ///
    /// Source failures are logged and answered with fallback data; an error
    /// is only returned if the fallback itself cannot be built.
    pub async fn fetch_snapshot(&self) -> Result<LoadSheddingSnapshot, AppError> {
        let fetched = self
            .source
            .fetch_document()
            .await
            .and_then(|document| self.stamp(document));

        match fetched {
            Ok(snapshot) => {
                tracing::info!(
                    source = self.source.name(),
                    groups = snapshot.groups().len(),
                    "Fetched load shedding schedule"
                );
                *self.last_good.borrow_mut() = Some(snapshot.clone());
                Ok(snapshot)
            }
            Err(e) => {
                tracing::error!(
                    source = self.source.name(),
                    error = %e,
                    "Error fetching load shedding data, serving fallback"
                );
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> Result<LoadSheddingSnapshot, AppError> {
        if let Some(snapshot) = self.last_good.borrow().as_ref() {
            return Ok(snapshot.clone());
        }
        self.stamp(fallback_document()?)
    }

    fn stamp(&self, document: ScheduleDocument) -> Result<LoadSheddingSnapshot, AppError> {
        let last_updated = document.published_at.unwrap_or_else(|| self.clock.now());
        LoadSheddingSnapshot::new(last_updated, document.source, document.groups)
    }
}
