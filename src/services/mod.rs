// Service module exports
// Grid, indexing and layout passes plus the file-backed inputs they read

pub mod day_index;
pub mod event;
pub mod grid;
pub mod lanes;
pub mod layout;
pub mod settings;
pub mod span;
