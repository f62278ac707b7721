pub mod location_panel;
pub mod location_selector;
pub mod page;
pub mod schedule;
pub mod schedule_card;
pub mod status;
pub mod toast;

pub use page::LoadSheddingPage;
