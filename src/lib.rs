// Month Grid Library
// Lays out all-day and timed events on a month calendar grid

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::LayoutError;
pub use models::event::CalendarEvent;
pub use models::layout::MonthLayout;
pub use models::settings::LayoutSettings;
pub use services::layout::{layout_month, LayoutEngine};
