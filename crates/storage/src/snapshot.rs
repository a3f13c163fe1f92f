use foundation::LatLng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{KeyValueStore, StorageError};

pub const DEFAULT_VIEW_KEY: &str = "chronomap.view";

/// Persisted view state.
///
/// `currentEventIndex` is `-1` when no event is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub current_event_index: i64,
    pub map_center: LatLng,
    pub map_zoom: u8,
    /// Fingerprint of the dataset the index refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
}

impl ViewSnapshot {
    pub fn new(current: Option<usize>, map_center: LatLng, map_zoom: u8) -> Self {
        Self {
            current_event_index: current.map_or(-1, |i| i as i64),
            map_center,
            map_zoom,
            dataset: None,
        }
    }

    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    pub fn current(&self) -> Option<usize> {
        usize::try_from(self.current_event_index).ok()
    }

    fn is_well_formed(&self) -> bool {
        self.current_event_index >= -1 && self.map_center.is_valid()
    }
}

/// Reads and writes the single view snapshot under a fixed key.
#[derive(Debug)]
pub struct ViewStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ViewStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Replaces any prior snapshot.
    pub fn save(&mut self, snapshot: &ViewSnapshot) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(snapshot).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.store.set(&self.key, &raw)
    }

    /// `None` means "no prior state": the key is absent, empty, unreadable,
    /// or holds something that is not a well-formed snapshot.
    pub fn restore(&self) -> Option<ViewSnapshot> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no saved view state");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read saved view state");
                return None;
            }
        };
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<ViewSnapshot>(&raw) {
            Ok(snap) if snap.is_well_formed() => Some(snap),
            Ok(snap) => {
                warn!(key = %self.key, ?snap, "ignoring out-of-range view state");
                None
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring malformed view state");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_VIEW_KEY, ViewSnapshot, ViewStore};
    use crate::{InMemoryStore, KeyValueStore};
    use foundation::LatLng;
    use pretty_assertions::assert_eq;

    fn store_with(raw: &str) -> ViewStore<InMemoryStore> {
        let mut mem = InMemoryStore::new();
        mem.set(DEFAULT_VIEW_KEY, raw).unwrap();
        ViewStore::new(mem, DEFAULT_VIEW_KEY)
    }

    #[test]
    fn save_then_restore_round_trips() {
        let mut vs = ViewStore::new(InMemoryStore::new(), DEFAULT_VIEW_KEY);
        let snap = ViewSnapshot::new(Some(2), LatLng::new(31.2, 121.5), 8).with_dataset("abc");
        vs.save(&snap).unwrap();
        assert_eq!(vs.restore(), Some(snap));

        let none = ViewSnapshot::new(None, LatLng::new(35.0, 105.0), 4);
        vs.save(&none).unwrap();
        let back = vs.restore().unwrap();
        assert_eq!(back.current(), None);
        assert_eq!(back.current_event_index, -1);
    }

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let snap = ViewSnapshot::new(Some(1), LatLng::new(1.0, 2.0), 5);
        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(
            json,
            r#"{"currentEventIndex":1,"mapCenter":{"lat":1.0,"lng":2.0},"mapZoom":5}"#
        );
    }

    #[test]
    fn absent_or_malformed_state_restores_as_none() {
        let vs = ViewStore::new(InMemoryStore::new(), DEFAULT_VIEW_KEY);
        assert_eq!(vs.restore(), None);

        for raw in [
            "",
            "   ",
            "not json",
            "{}",
            r#"{"currentEventIndex": 1, "mapZoom": 4}"#,
            r#"{"currentEventIndex": "1", "mapCenter": {"lat": 0, "lng": 0}, "mapZoom": 4}"#,
            r#"{"currentEventIndex": -7, "mapCenter": {"lat": 0, "lng": 0}, "mapZoom": 4}"#,
            r#"{"currentEventIndex": 0, "mapCenter": {"lat": 120, "lng": 0}, "mapZoom": 4}"#,
            r#"{"currentEventIndex": 0, "mapCenter": {"lat": 0, "lng": 0}, "mapZoom": -1}"#,
        ] {
            assert_eq!(store_with(raw).restore(), None, "raw: {raw:?}");
        }
    }
}
