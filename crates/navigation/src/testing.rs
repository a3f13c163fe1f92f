use std::collections::BTreeSet;

use chrono::NaiveDate;
use events::{Event, EventStore};
use foundation::{DateRange, LatLng};

use crate::commands::{ViewCommand, ViewSink};

/// A, B, C on 2020-01-01, 2020-06-15 and 2021-03-10.
pub(crate) fn store_abc() -> EventStore {
    let ev = |name: &str, date: &str, lat: f64, lng: f64| Event {
        name: name.to_string(),
        description: format!("event {name}"),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        location: LatLng::new(lat, lng),
        images: Vec::new(),
        source: None,
    };
    EventStore::new(vec![
        ev("A", "2020-01-01", 39.9, 116.4),
        ev("B", "2020-06-15", 30.6, 114.3),
        ev("C", "2021-03-10", 31.2, 121.5),
    ])
}

/// Models what the map, timeline and buttons would show after a command stream.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub markers: BTreeSet<usize>,
    pub open_popups: BTreeSet<usize>,
    pub highlighted: Option<usize>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub center: Option<LatLng>,
    pub zoom: Option<u8>,
    pub domain: Option<DateRange>,
    pub zoom_resets: usize,
    pub persists: usize,
}

impl RecordingView {
    pub fn check_consistent_with(&self, current: Option<usize>) {
        let expected: BTreeSet<usize> = current.into_iter().collect();
        assert_eq!(self.open_popups, expected, "open popups disagree with selection");
        assert_eq!(self.highlighted, current, "highlight disagrees with selection");
        if let Some(i) = current {
            assert!(self.markers.contains(&i), "selected marker {i} is hidden");
        }
    }
}

impl ViewSink for RecordingView {
    fn apply(&mut self, command: &ViewCommand) {
        match command {
            ViewCommand::ShowMarkers(indices) => {
                self.markers = indices.iter().copied().collect();
                // Removing a marker from the map closes its popup.
                let markers = &self.markers;
                self.open_popups.retain(|i| markers.contains(i));
            }
            ViewCommand::OpenPopup(i) => {
                assert!(self.markers.contains(i), "popup opened on hidden marker {i}");
                self.open_popups.insert(*i);
            }
            ViewCommand::ClosePopup(i) => {
                self.open_popups.remove(i);
            }
            ViewCommand::SetView { center, zoom } => {
                self.center = Some(*center);
                self.zoom = Some(*zoom);
            }
            ViewCommand::PanTo { center } => self.center = Some(*center),
            ViewCommand::Highlight(h) => self.highlighted = *h,
            ViewCommand::NavButtons {
                prev_disabled,
                next_disabled,
            } => {
                self.prev_disabled = *prev_disabled;
                self.next_disabled = *next_disabled;
            }
            ViewCommand::TimelineDomain(range) => self.domain = Some(*range),
            ViewCommand::ResetTimelineZoom => self.zoom_resets += 1,
            ViewCommand::Persist => self.persists += 1,
        }
    }
}
