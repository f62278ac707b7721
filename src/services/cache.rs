use crate::models::{error::AppError, schedule::LoadSheddingSnapshot};
use crate::utils::clock::Clock;
use chrono::{DateTime, Duration, Utc};
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<LoadSheddingSnapshot>),
    Error(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QueryStatus {
    Loading,
    Error,
    Ready,
}

impl DataState {
    /// Returns true if the state is loading
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn status(&self) -> QueryStatus {
        match self {
            Self::Loading => QueryStatus::Loading,
            Self::Loaded(_) => QueryStatus::Ready,
            Self::Error(_) => QueryStatus::Error,
        }
    }

    /// Returns the snapshot if it is loaded
    pub const fn snapshot(&self) -> Option<&Rc<LoadSheddingSnapshot>> {
        match self {
            Self::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

struct CacheEntry {
    snapshot: Rc<LoadSheddingSnapshot>,
    fetched_at: DateTime<Utc>,
}

#[derive(Default)]
struct CacheInner {
    entry: Option<CacheEntry>,
    error: Option<String>,
    in_flight: bool,
    invalidated: bool,
    generation: u64,
}

type Listener = Rc<dyn Fn(&DataState)>;

/// Permission to run the one fetch allowed in flight.
#[must_use = "a ticket must be handed back through `complete`"]
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
}

/// Single-entry cache for the load-shedding schedule.
///
/// Entries stay fresh for `stale_time`. At most one fetch is in flight; a
/// second caller gets no ticket and awaits `settled` instead.
pub struct ScheduleCache<C> {
    clock: C,
    stale_time: Duration,
    inner: RefCell<CacheInner>,
    listeners: RefCell<Vec<(usize, Listener)>>,
    next_listener: Cell<usize>,
    waiters: RefCell<Vec<oneshot::Sender<()>>>,
}

impl<C: Clock> ScheduleCache<C> {
    pub fn new(clock: C, stale_time: Duration) -> Self {
        Self {
            clock,
            stale_time,
            inner: RefCell::new(CacheInner::default()),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
            waiters: RefCell::new(Vec::new()),
        }
    }

    pub fn state(&self) -> DataState {
        let inner = self.inner.borrow();
        match (&inner.error, &inner.entry) {
            (Some(message), _) => DataState::Error(message.clone()),
            (None, Some(entry)) => DataState::Loaded(entry.snapshot.clone()),
            (None, None) => DataState::Loading,
        }
    }

    /// True when the next read has to go to the store.
    pub fn is_stale(&self) -> bool {
        let inner = self.inner.borrow();
        match &inner.entry {
            None => true,
            Some(entry) => {
                inner.invalidated || self.clock.now() - entry.fetched_at >= self.stale_time
            }
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.inner.borrow().in_flight
    }

    /// Marks the cached snapshot stale so the next read refetches.
    pub fn invalidate(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.invalidated = true;
        inner.generation += 1;
        tracing::debug!(generation = inner.generation, "Schedule cache invalidated");
    }

    /// Claims the in-flight slot, or returns `None` if a fetch is already running.
    pub fn begin_fetch(&self) -> Option<FetchTicket> {
        let mut inner = self.inner.borrow_mut();
        if inner.in_flight {
            tracing::debug!("Schedule fetch already in flight");
            return None;
        }
        inner.in_flight = true;
        Some(FetchTicket {
            generation: inner.generation,
        })
    }

    /// Stores the outcome of a fetch, notifies subscribers and wakes
    /// everyone waiting in `settled`.
    ///
    /// An invalidation issued while the fetch was running survives it; the
    /// return value is true in that case.
    pub fn complete(
        &self,
        ticket: FetchTicket,
        result: Result<LoadSheddingSnapshot, AppError>,
    ) -> bool {
        let superseded = {
            let mut inner = self.inner.borrow_mut();
            inner.in_flight = false;
            match result {
                Ok(snapshot) => {
                    inner.entry = Some(CacheEntry {
                        snapshot: Rc::new(snapshot),
                        fetched_at: self.clock.now(),
                    });
                    inner.error = None;
                    if ticket.generation == inner.generation {
                        inner.invalidated = false;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Schedule query failed");
                    inner.error = Some(e.to_string());
                }
            }
            ticket.generation != inner.generation
        };
        self.notify();

        for waiter in self.waiters.take() {
            // The receiver is gone if its reader was dropped
            let _ = waiter.send(());
        }
        superseded
    }

    /// Resolves once the fetch currently in flight completes, or at once
    /// when nothing is in flight.
    pub async fn settled(&self) {
        let receiver = {
            if !self.is_fetching() {
                return;
            }
            let (sender, receiver) = oneshot::channel();
            self.waiters.borrow_mut().push(sender);
            receiver
        };
        // Cancelled only when the cache itself is dropped
        let _ = receiver.await;
    }

    /// Registers `listener` for state changes until the subscription drops.
    pub fn subscribe(self: &Rc<Self>, listener: impl Fn(&DataState) + 'static) -> Subscription
    where
        C: 'static,
    {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));

        let cache: Weak<Self> = Rc::downgrade(self);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(cache) = cache.upgrade() {
                    cache.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        let state = self.state();
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&state);
        }
    }
}

/// Keeps a cache listener registered; dropping it unsubscribes.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
