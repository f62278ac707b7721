use super::{
    cache::{DataState, FetchTicket, ScheduleCache},
    source::ScheduleSource,
    store::ScheduleStore,
};
use crate::config::Config;
use crate::utils::clock::Clock;
use chrono::Duration;
use std::rc::Rc;

/// Schedule store behind a single-key cache.
///
/// One instance is created per mounted page and dropped with it.
pub struct ScheduleQuery<S, C> {
    store: ScheduleStore<S, C>,
    cache: Rc<ScheduleCache<C>>,
}

impl<S: ScheduleSource, C: Clock + Clone> ScheduleQuery<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self::with_stale_time(source, clock, Config::stale_time())
    }

    pub fn with_stale_time(source: S, clock: C, stale_time: Duration) -> Self {
        Self {
            store: ScheduleStore::new(source, clock.clone()),
            cache: Rc::new(ScheduleCache::new(clock, stale_time)),
        }
    }

    pub const fn cache(&self) -> &Rc<ScheduleCache<C>> {
        &self.cache
    }

    pub const fn store(&self) -> &ScheduleStore<S, C> {
        &self.store
    }

    pub fn state(&self) -> DataState {
        self.cache.state()
    }

    /// Returns the cached state, fetching first if the entry is missing,
    /// stale or invalidated.
    ///
    /// A fetch already in flight is awaited rather than duplicated. If an
    /// invalidation lands while a fetch runs, one more fetch follows it.
    pub async fn read(&self) -> DataState {
        while self.cache.is_stale() {
            match self.cache.begin_fetch() {
                Some(ticket) => {
                    if !self.fetch(ticket).await {
                        break;
                    }
                }
                None => self.cache.settled().await,
            }
        }
        self.cache.state()
    }

    /// Fetches regardless of freshness. Used by the background refresh.
    pub async fn refetch(&self) -> DataState {
        match self.cache.begin_fetch() {
            Some(ticket) => {
                self.fetch(ticket).await;
            }
            None => self.cache.settled().await,
        }
        self.read().await
    }

    pub fn invalidate(&self) {
        self.cache.invalidate();
    }

    /// Runs one fetch. True when it was superseded by an invalidation.
    async fn fetch(&self, ticket: FetchTicket) -> bool {
        let result = self.store.fetch_snapshot().await;
        self.cache.complete(ticket, result)
    }
}
