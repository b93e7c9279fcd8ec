//! Reading event lists supplied by the caller.
//!
//! Events arrive as a JSON array of objects with `name`, `start`, `end`,
//! optional `fullDay` and optional `type`. Files are only ever read.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Error as SerdeError;

use crate::models::event::CalendarEvent;

/// Load and validate every event in the JSON file at `path`.
pub fn load_events(path: &Path) -> Result<Vec<CalendarEvent>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events = parse_events(&data).map_err(|err| map_deser_error(err, path))?;
    validate_events(&events)?;

    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

pub fn parse_events(data: &str) -> std::result::Result<Vec<CalendarEvent>, SerdeError> {
    serde_json::from_str(data)
}

/// Reject the first event that breaks the input contract.
pub fn validate_events(events: &[CalendarEvent]) -> Result<()> {
    for (position, event) in events.iter().enumerate() {
        event
            .validate()
            .with_context(|| format!("event #{} is invalid", position))?;
    }
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize events from {}",
        path.display()
    ))
}
