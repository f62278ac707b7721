pub mod api;
pub mod cache;
pub mod fallback;
pub mod query;
pub mod retry;
pub mod source;
pub mod store;
