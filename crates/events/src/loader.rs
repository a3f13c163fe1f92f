use tracing::info;

use crate::event::{Event, EventsFile};
use crate::store::EventStore;

/// Default location of the events file, relative to the page.
pub const EVENTS_FILE_PATH: &str = "data/events.json";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("events file parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("event #{index} ({name:?}) has invalid location {lat}, {lng}")]
    InvalidLocation {
        index: usize,
        name: String,
        lat: f64,
        lng: f64,
    },
}

/// A decoded events file plus the fingerprint of the bytes it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub id: String,
    pub store: EventStore,
}

/// Fingerprint of a raw events file; persisted view state is only valid
/// against the dataset it was captured on.
pub fn dataset_id(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

pub fn decode_events(bytes: &[u8]) -> Result<EventStore, LoadError> {
    let file: EventsFile = serde_json::from_slice(bytes)?;

    let mut events = Vec::with_capacity(file.events.len());
    for (index, rec) in file.events.into_iter().enumerate() {
        let ev = Event::from(rec);
        if !ev.location.is_valid() {
            return Err(LoadError::InvalidLocation {
                index,
                name: ev.name,
                lat: ev.location.lat,
                lng: ev.location.lng,
            });
        }
        events.push(ev);
    }

    Ok(EventStore::new(events))
}

pub fn load_dataset(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let store = decode_events(bytes)?;
    let id = dataset_id(bytes);
    info!(events = store.len(), dataset = %id, "decoded events file");
    Ok(Dataset { id, store })
}
