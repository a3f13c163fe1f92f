use chrono::NaiveDate;
use foundation::DateRange;

use crate::event::Event;

/// Events sorted ascending by date.
///
/// Ordering contract:
/// - The sort is stable; events sharing a date keep their load order.
/// - An event's identity is its index in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new(mut events: Vec<Event>) -> Self {
        events.sort_by_key(|e| e.date);
        Self { events }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter()
    }

    /// Index of the first event on `date`.
    pub fn first_index_on(&self, date: NaiveDate) -> Option<usize> {
        // Sorted by date, so the first match is the lower bound.
        let idx = self.events.partition_point(|e| e.date < date);
        (self.events.get(idx)?.date == date).then_some(idx)
    }

    /// Indices of events whose date lies in `range` (inclusive), ascending.
    pub fn indices_in(&self, range: DateRange) -> std::ops::Range<usize> {
        let lo = self.events.partition_point(|e| e.date < range.start());
        let hi = self.events.partition_point(|e| e.date <= range.end());
        lo..hi.max(lo)
    }

    /// Earliest to latest event date, `None` when empty.
    pub fn date_extent(&self) -> Option<DateRange> {
        let first = self.events.first()?.date;
        let last = self.events.last()?.date;
        Some(DateRange::day(first).extended_to(last))
    }
}
