// Module exports for models

pub mod day;
pub mod event;
pub mod layout;
pub mod settings;
