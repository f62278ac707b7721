use crate::models::{error::AppError, schedule::GroupSchedule};
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};

/// Schedule content as delivered by a source, before the store stamps it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDocument {
    pub source: String,
    pub groups: Vec<GroupSchedule>,
    /// Update time published by the authority, when the source knows it.
    pub published_at: Option<DateTime<Utc>>,
}

/// Where load-shedding schedules come from.
#[allow(async_fn_in_trait)]
pub trait ScheduleSource {
    async fn fetch_document(&self) -> Result<ScheduleDocument, AppError>;

    /// Short name used in log output.
    fn name(&self) -> &str;
}

/// In-memory source serving a fixed document or a fixed failure.
#[derive(Debug)]
pub struct StaticSource {
    response: RefCell<Result<ScheduleDocument, AppError>>,
    calls: Cell<usize>,
}

impl StaticSource {
    pub const fn new(document: ScheduleDocument) -> Self {
        Self {
            response: RefCell::new(Ok(document)),
            calls: Cell::new(0),
        }
    }

    pub const fn failing(error: AppError) -> Self {
        Self {
            response: RefCell::new(Err(error)),
            calls: Cell::new(0),
        }
    }

    /// Replaces what subsequent fetches return.
    pub fn respond_with(&self, response: Result<ScheduleDocument, AppError>) {
        *self.response.borrow_mut() = response;
    }

    /// Number of fetches served so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ScheduleSource for StaticSource {
    async fn fetch_document(&self) -> Result<ScheduleDocument, AppError> {
        self.calls.set(self.calls.get() + 1);
        self.response.borrow().clone()
    }

    fn name(&self) -> &str {
        "static"
    }
}

impl<S: ScheduleSource> ScheduleSource for std::rc::Rc<S> {
    async fn fetch_document(&self) -> Result<ScheduleDocument, AppError> {
        (**self).fetch_document().await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
