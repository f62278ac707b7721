pub mod error;
pub mod location;
pub mod notification;
pub mod schedule;
pub mod view;
