pub mod use_load_shedding;
pub mod use_notification;
