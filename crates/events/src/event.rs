use chrono::NaiveDate;
use foundation::LatLng;
use serde::{Deserialize, Serialize};

/// Top-level shape of `events.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventsFile {
    pub events: Vec<EventRecord>,
}

/// One event exactly as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub event_name: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub location: WireLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// A loaded event. Immutable once the store is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: LatLng,
    /// Ordered image references; `image` (if any) comes before `images`.
    pub images: Vec<String>,
    pub source: Option<String>,
}

impl From<EventRecord> for Event {
    fn from(rec: EventRecord) -> Self {
        let images = rec
            .image
            .into_iter()
            .chain(rec.images)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let source = rec
            .source
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Event {
            name: rec.event_name,
            description: rec.description,
            date: rec.date,
            location: LatLng::new(rec.location.latitude, rec.location.longitude),
            images,
            source,
        }
    }
}
