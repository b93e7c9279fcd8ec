//! Layout settings loaded from a TOML config file.

mod service;

pub use service::SettingsService;
