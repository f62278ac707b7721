use crate::models::schedule::DayOfWeek;
use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, Offset, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the current time.
///
/// The store stamps snapshots with `now`, the cache measures staleness with
/// it, and the schedule view derives the "Today" row from `today`.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Weekday in the viewer's local time zone.
    fn today(&self) -> DayOfWeek;
}

/// Wall clock of the host (the browser when compiled to wasm).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> DayOfWeek {
        Local::now().weekday().into()
    }
}

/// Hand-driven clock for tests. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
    offset: FixedOffset,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::with_offset(start, Utc.fix())
    }

    /// Clock whose local time zone is `offset` (Nepal is UTC+05:45).
    pub fn with_offset(start: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
            offset,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn today(&self) -> DayOfWeek {
        self.now.get().with_timezone(&self.offset).weekday().into()
    }
}
