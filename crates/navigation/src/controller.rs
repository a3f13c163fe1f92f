//! Event navigation and view synchronization.
//!
//! The controller owns the event store and the view state. Every operation
//! mutates state and queues [`ViewCommand`]s; the host drains the queue and
//! applies it to the map, the timeline and the navigation controls. Nothing
//! in here touches a rendering environment.
//!
//! Every selection change goes through `apply_selection`, which keeps three
//! views in agreement: at most one popup open, at most one timeline point
//! highlighted, and both referring to `ViewState::current`.

use chrono::NaiveDate;
use events::{Event, EventStore};
use foundation::{DateRange, LatLng, RangeError};
use storage::ViewSnapshot;
use tracing::{debug, info, warn};

use crate::commands::{CommandBuffer, ViewCommand};
use crate::config::{FocusPolicy, NavigationConfig};
use crate::markers::MarkerSet;
use crate::view_state::ViewState;

/// Result of a timeline date click.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DateSelection {
    Selected(usize),
    /// The clicked date belonged to the selected event; selection cleared.
    Deselected,
    NoMatch,
}

/// Result of a date-range filter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RangeOutcome {
    Filtered { shown: usize },
    /// Nothing matched, every marker is shown instead.
    ShowingAll,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Focus {
    Move,
    Stay,
}

#[derive(Debug)]
pub struct NavigationController {
    store: EventStore,
    dataset: Option<String>,
    config: NavigationConfig,
    state: ViewState,
    visible: MarkerSet,
    timeline_extent: Option<DateRange>,
    commands: CommandBuffer,
}

impl NavigationController {
    pub fn new(store: EventStore, config: NavigationConfig) -> Self {
        let center = config.clamp_center(config.default_center);
        let zoom = config.clamp_zoom(config.default_zoom);
        let timeline_extent = store.date_extent();
        Self {
            store,
            dataset: None,
            config,
            state: ViewState::new(center, zoom),
            visible: MarkerSet::new(),
            timeline_extent,
            commands: CommandBuffer::new(),
        }
    }

    /// Tags snapshots with the dataset fingerprint and rejects snapshots
    /// taken against another dataset.
    pub fn with_dataset(mut self, id: impl Into<String>) -> Self {
        self.dataset = Some(id.into());
        self
    }

    /// Stretches the timeline extent to reach `today`.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.timeline_extent = self.timeline_extent.map(|r| r.extended_to(today));
        self
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn visible(&self) -> &MarkerSet {
        &self.visible
    }

    /// Full span of the timeline axis, also the bounds of the date pickers.
    pub fn timeline_extent(&self) -> Option<DateRange> {
        self.timeline_extent
    }

    pub fn current_event(&self) -> Option<&Event> {
        self.state.current.and_then(|i| self.store.get(i))
    }

    pub fn pending(&self) -> &[ViewCommand] {
        self.commands.commands()
    }

    pub fn drain_commands(&mut self) -> Vec<ViewCommand> {
        self.commands.drain()
    }

    /// Initial state: restores `saved` when it fits this dataset, otherwise
    /// falls back to the default viewport with the earliest event selected.
    pub fn start(&mut self, saved: Option<ViewSnapshot>) {
        self.set_visible(MarkerSet::all(self.store.len()));

        match saved.filter(|s| self.accepts(s)) {
            Some(snap) => {
                info!(index = snap.current_event_index, "restoring saved view");
                self.state.center = self.config.clamp_center(snap.map_center);
                self.state.zoom = self.config.clamp_zoom(snap.map_zoom);
                self.push_set_view();
                // Keep the saved viewport rather than re-centering on the event.
                self.apply_selection(snap.current(), Focus::Stay);
            }
            None => {
                self.state.center = self.config.clamp_center(self.config.default_center);
                self.state.zoom = self.config.clamp_zoom(self.config.default_zoom);
                self.push_set_view();
                let first = (!self.store.is_empty()).then_some(0);
                self.apply_selection(first, Focus::Move);
            }
        }
    }

    /// Selects event `index`. Out-of-range indices are ignored.
    pub fn show_event_by_index(&mut self, index: usize) -> bool {
        if index >= self.store.len() {
            debug!(index, len = self.store.len(), "ignoring out-of-range selection");
            return false;
        }
        self.apply_selection(Some(index), Focus::Move);
        true
    }

    pub fn show_next(&mut self) -> bool {
        let next = self.state.current.map_or(0, |i| i + 1);
        if next >= self.store.len() {
            debug!(current = ?self.state.current, "already at last event");
            return false;
        }
        self.show_event_by_index(next)
    }

    pub fn show_previous(&mut self) -> bool {
        let Some(prev) = self.state.current.and_then(|i| i.checked_sub(1)) else {
            debug!(current = ?self.state.current, "already at first event");
            return false;
        };
        self.show_event_by_index(prev)
    }

    pub fn show_all_markers(&mut self) {
        self.apply_selection(None, Focus::Stay);
        self.set_visible(MarkerSet::all(self.store.len()));
        self.reset_timeline();
    }

    /// Timeline click: selects the first event on `date`, or clears the
    /// selection if the selected event is already on that date.
    pub fn filter_markers_by_date(&mut self, date: NaiveDate) -> DateSelection {
        let Some(index) = self.store.first_index_on(date) else {
            debug!(%date, "no event on clicked date");
            return DateSelection::NoMatch;
        };

        if self.current_event().is_some_and(|e| e.date == date) {
            self.apply_selection(None, Focus::Stay);
            return DateSelection::Deselected;
        }

        self.apply_selection(Some(index), Focus::Move);
        DateSelection::Selected(index)
    }

    /// The map closed the popup of `index` by itself (close button or a
    /// map click). Clears the selection if it was the selected event.
    ///
    /// Closes caused by this controller arrive after `current` has moved on
    /// and are ignored.
    pub fn popup_closed(&mut self, index: usize) -> bool {
        if !self.state.is_selected(index) {
            return false;
        }
        debug!(index, "popup closed from the map");
        // Already closed on screen; no `ClosePopup` for it.
        self.state.current = None;
        self.apply_selection(None, Focus::Stay);
        true
    }

    /// Shows only markers dated inside `range`; an empty match shows all.
    pub fn filter_by_range(&mut self, range: DateRange) -> RangeOutcome {
        let hits = self.store.indices_in(range);
        let (next_visible, outcome) = if hits.is_empty() {
            warn!(
                start = %range.start(),
                end = %range.end(),
                "no events in range, showing all markers"
            );
            (MarkerSet::all(self.store.len()), RangeOutcome::ShowingAll)
        } else {
            let shown = hits.len();
            (MarkerSet::from_range(hits), RangeOutcome::Filtered { shown })
        };

        // Close the popup before its marker leaves the map.
        if let Some(current) = self.state.current {
            if !next_visible.contains(current) {
                self.apply_selection(None, Focus::Stay);
            }
        }
        self.set_visible(next_visible);

        match outcome {
            RangeOutcome::Filtered { .. } => {
                self.commands.push(ViewCommand::TimelineDomain(range));
                self.commands.push(ViewCommand::ResetTimelineZoom);
            }
            RangeOutcome::ShowingAll => self.reset_timeline(),
        }
        outcome
    }

    /// Range filter from raw picker values. Invalid input changes nothing.
    pub fn filter_by_range_input(
        &mut self,
        start: &str,
        end: &str,
    ) -> Result<RangeOutcome, RangeError> {
        let range = DateRange::parse(start, end)?;
        Ok(self.filter_by_range(range))
    }

    /// Map finished a pan or zoom.
    pub fn on_viewport_settled(&mut self, center: LatLng, zoom: u8) {
        if !center.lat.is_finite() || !center.lng.is_finite() {
            debug!(?center, "ignoring non-finite viewport");
            return;
        }
        let reported = center.wrapped();
        let clamped = self.config.clamp_center(reported);
        if clamped != reported {
            debug!(?reported, ?clamped, "viewport outside max bounds");
            self.commands.push(ViewCommand::PanTo { center: clamped });
        }
        self.state.center = clamped;
        self.state.zoom = self.config.clamp_zoom(zoom);
        self.commands.push(ViewCommand::Persist);
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let snap = ViewSnapshot::new(self.state.current, self.state.center, self.state.zoom);
        match &self.dataset {
            Some(id) => snap.with_dataset(id.clone()),
            None => snap,
        }
    }

    fn accepts(&self, snap: &ViewSnapshot) -> bool {
        if let (Some(ours), Some(theirs)) = (&self.dataset, &snap.dataset) {
            if ours != theirs {
                warn!("saved view belongs to another dataset, ignoring it");
                return false;
            }
        }
        if snap.current_event_index < -1 {
            return false;
        }
        match snap.current() {
            Some(i) if i >= self.store.len() => {
                warn!(index = i, len = self.store.len(), "saved event index out of range");
                false
            }
            _ => true,
        }
    }

    fn apply_selection(&mut self, next: Option<usize>, focus: Focus) {
        let prev = self.state.current;
        if let Some(p) = prev {
            if prev != next {
                self.commands.push(ViewCommand::ClosePopup(p));
            }
        }

        if let Some(i) = next {
            if self.visible.insert(i) {
                self.commands
                    .push(ViewCommand::ShowMarkers(self.visible.to_vec()));
            }
            if focus == Focus::Move {
                self.focus_event(i);
            }
            self.commands.push(ViewCommand::OpenPopup(i));
        }

        self.state.current = next;
        self.commands.push(ViewCommand::Highlight(next));
        let (prev_disabled, next_disabled) = self.state.nav_disabled(self.store.len());
        self.commands.push(ViewCommand::NavButtons {
            prev_disabled,
            next_disabled,
        });
        self.commands.push(ViewCommand::Persist);
    }

    fn focus_event(&mut self, index: usize) {
        let Some(event) = self.store.get(index) else {
            return;
        };
        let center = self.config.clamp_center(event.location);
        self.state.center = center;
        match self.config.focus {
            FocusPolicy::SetView => self.push_set_view(),
            FocusPolicy::PanTo => self.commands.push(ViewCommand::PanTo { center }),
        }
    }

    fn push_set_view(&mut self) {
        self.commands.push(ViewCommand::SetView {
            center: self.state.center,
            zoom: self.state.zoom,
        });
    }

    fn set_visible(&mut self, visible: MarkerSet) {
        self.commands.push(ViewCommand::ShowMarkers(visible.to_vec()));
        self.visible = visible;
    }

    fn reset_timeline(&mut self) {
        if let Some(extent) = self.timeline_extent {
            self.commands.push(ViewCommand::TimelineDomain(extent));
        }
        self.commands.push(ViewCommand::ResetTimelineZoom);
    }
}

#[cfg(test)]
mod tests {
    use super::{DateSelection, NavigationController, RangeOutcome};
    use crate::commands::{ViewCommand, dispatch};
    use crate::config::{FocusPolicy, NavigationConfig};
    use crate::testing::{RecordingView, store_abc};
    use chrono::NaiveDate;
    use foundation::{DateRange, GeoBounds, LatLng};
    use pretty_assertions::assert_eq;
    use storage::{InMemoryStore, KeyValueStore, ViewSnapshot, ViewStore};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn started() -> (NavigationController, RecordingView) {
        let mut ctl = NavigationController::new(store_abc(), NavigationConfig::default());
        let mut view = RecordingView::default();
        ctl.start(None);
        flush(&mut ctl, &mut view);
        (ctl, view)
    }

    fn flush(ctl: &mut NavigationController, view: &mut RecordingView) {
        dispatch(&ctl.drain_commands(), view);
        view.check_consistent_with(ctl.state().current);
    }

    #[test]
    fn walks_forward_through_abc() {
        let (mut ctl, mut view) = started();

        assert!(ctl.show_event_by_index(0));
        flush(&mut ctl, &mut view);
        assert_eq!(ctl.current_event().unwrap().name, "A");
        assert_eq!((view.prev_disabled, view.next_disabled), (true, false));

        assert!(ctl.show_next());
        flush(&mut ctl, &mut view);
        assert_eq!(ctl.current_event().unwrap().name, "B");
        assert_eq!((view.prev_disabled, view.next_disabled), (false, false));

        assert!(ctl.show_next());
        flush(&mut ctl, &mut view);
        assert_eq!(ctl.current_event().unwrap().name, "C");
        assert_eq!((view.prev_disabled, view.next_disabled), (false, true));
        assert_eq!(view.center, Some(ctl.store().get(2).unwrap().location));
    }

    #[test]
    fn boundary_navigation_is_a_no_op() {
        let (mut ctl, mut view) = started();
        assert_eq!(ctl.state().current, Some(0));

        assert!(!ctl.show_previous());
        assert!(ctl.pending().is_empty());

        ctl.show_event_by_index(2);
        flush(&mut ctl, &mut view);
        assert!(!ctl.show_next());
        assert!(ctl.pending().is_empty());
        assert_eq!(ctl.state().current, Some(2));

        assert!(!ctl.show_event_by_index(3));
        assert!(ctl.pending().is_empty());
    }

    #[test]
    fn any_two_selections_leave_exactly_one_popup_and_highlight() {
        let (mut ctl, mut view) = started();
        for i in 0..3 {
            for j in 0..3 {
                ctl.show_event_by_index(i);
                ctl.show_event_by_index(j);
                flush(&mut ctl, &mut view);
                assert_eq!(view.open_popups.iter().copied().collect::<Vec<_>>(), vec![j]);
                assert_eq!(view.highlighted, Some(j));
            }
        }
    }

    #[test]
    fn switching_selection_closes_before_opening() {
        let (mut ctl, _) = started();
        ctl.show_event_by_index(1);
        let cmds = ctl.drain_commands();
        let close = cmds.iter().position(|c| *c == ViewCommand::ClosePopup(0));
        let open = cmds.iter().position(|c| *c == ViewCommand::OpenPopup(1));
        assert!(close.unwrap() < open.unwrap());
        assert_eq!(cmds.last(), Some(&ViewCommand::Persist));
    }

    #[test]
    fn clicking_the_selected_date_twice_toggles_off() {
        let (mut ctl, mut view) = started();
        assert_eq!(
            ctl.filter_markers_by_date(d("2020-06-15")),
            DateSelection::Selected(1)
        );
        flush(&mut ctl, &mut view);
        assert_eq!(
            ctl.filter_markers_by_date(d("2020-06-15")),
            DateSelection::Deselected
        );
        flush(&mut ctl, &mut view);
        assert_eq!(ctl.state().current, None);
        assert!(view.open_popups.is_empty());
        assert_eq!(view.highlighted, None);
        assert_eq!((view.prev_disabled, view.next_disabled), (true, false));

        assert_eq!(
            ctl.filter_markers_by_date(d("1999-01-01")),
            DateSelection::NoMatch
        );
        assert!(ctl.pending().is_empty());
    }

    #[test]
    fn popup_closed_on_the_map_clears_selection_and_highlight() {
        let (mut ctl, mut view) = started();
        assert_eq!(ctl.state().current, Some(0));
        // The map closes its popup without asking.
        view.open_popups.remove(&0);

        assert!(ctl.popup_closed(0));
        let cmds = ctl.drain_commands();
        assert!(!cmds.iter().any(|c| matches!(c, ViewCommand::ClosePopup(_))));
        dispatch(&cmds, &mut view);
        assert_eq!(ctl.state().current, None);
        view.check_consistent_with(None);
        assert_eq!((view.prev_disabled, view.next_disabled), (true, false));

        assert!(ctl.show_next());
        flush(&mut ctl, &mut view);
        view.check_consistent_with(Some(0));
    }

    #[test]
    fn popup_closed_by_a_selection_change_is_ignored() {
        let (mut ctl, mut view) = started();
        ctl.show_event_by_index(2);
        flush(&mut ctl, &mut view);
        // The map reports the close of the previous popup afterwards.
        assert!(!ctl.popup_closed(0));
        assert!(ctl.pending().is_empty());
        assert_eq!(ctl.state().current, Some(2));
        view.check_consistent_with(Some(2));
    }

    #[test]
    fn show_all_clears_selection_and_resets_timeline() {
        let (mut ctl, mut view) = started();
        ctl.filter_by_range(DateRange::parse("2020-06-01", "2020-06-30").unwrap());
        flush(&mut ctl, &mut view);
        assert_eq!(view.markers.len(), 1);

        ctl.show_all_markers();
        flush(&mut ctl, &mut view);
        assert_eq!(view.markers.len(), 3);
        assert_eq!(ctl.state().current, None);
        assert!(view.open_popups.is_empty());
        assert_eq!(view.domain, ctl.timeline_extent());
        assert!(view.zoom_resets >= 1);
        assert_eq!((view.prev_disabled, view.next_disabled), (true, false));

        // From nothing selected, next lands on the first event.
        assert!(!ctl.show_previous());
        assert!(ctl.show_next());
        assert_eq!(ctl.state().current, Some(0));
    }

    #[test]
    fn empty_range_falls_back_to_all_markers() {
        let (mut ctl, mut view) = started();
        let outcome = ctl.filter_by_range(DateRange::parse("2030-01-01", "2031-01-01").unwrap());
        flush(&mut ctl, &mut view);
        assert_eq!(outcome, RangeOutcome::ShowingAll);
        assert_eq!(view.markers.len(), 3);
        assert_eq!(ctl.state().current, Some(0));
    }

    #[test]
    fn range_filter_hides_and_deselects_outside_events() {
        let (mut ctl, mut view) = started();
        let range = DateRange::parse("2020-06-01", "2021-12-31").unwrap();
        assert_eq!(ctl.filter_by_range(range), RangeOutcome::Filtered { shown: 2 });
        flush(&mut ctl, &mut view);
        assert_eq!(view.markers.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(ctl.state().current, None);
        assert_eq!(view.domain, Some(range));

        // Selecting keeps the filter while the event is inside it.
        ctl.show_event_by_index(2);
        flush(&mut ctl, &mut view);
        assert_eq!(view.markers.len(), 2);

        // An event outside the filter is put back on the map first.
        ctl.show_event_by_index(0);
        flush(&mut ctl, &mut view);
        assert_eq!(view.markers.len(), 3);
        assert_eq!(view.highlighted, Some(0));
    }

    #[test]
    fn invalid_range_input_changes_nothing() {
        let (mut ctl, _) = started();
        let before = *ctl.state();
        assert!(ctl.filter_by_range_input("2021-01-01", "2020-01-01").is_err());
        assert!(ctl.filter_by_range_input("yesterday", "2020-01-01").is_err());
        assert!(ctl.pending().is_empty());
        assert_eq!(*ctl.state(), before);
        assert_eq!(ctl.visible().len(), 3);

        assert_eq!(
            ctl.filter_by_range_input("2020-01-01", "2020-01-01").unwrap(),
            RangeOutcome::Filtered { shown: 1 }
        );
    }

    #[test]
    fn persist_then_restore_reproduces_the_view() {
        let (mut ctl, mut view) = started();
        ctl.show_event_by_index(1);
        ctl.on_viewport_settled(LatLng::new(28.0, 112.0), 7);
        flush(&mut ctl, &mut view);
        assert!(view.persists >= 2);

        let mut views = ViewStore::new(InMemoryStore::new(), "k");
        views.save(&ctl.snapshot()).unwrap();

        let mut next = NavigationController::new(store_abc(), NavigationConfig::default());
        let mut next_view = RecordingView::default();
        next.start(views.restore());
        flush(&mut next, &mut next_view);

        assert_eq!(next.state().current, Some(1));
        assert_eq!(next.state().center, LatLng::new(28.0, 112.0));
        assert_eq!(next.state().zoom, 7);
        assert_eq!(next_view.center, Some(LatLng::new(28.0, 112.0)));
        assert_eq!(next_view.zoom, Some(7));
        assert_eq!(next_view.open_popups.iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(next_view.highlighted, Some(1));
    }

    #[test]
    fn restoring_no_selection_shows_everything() {
        let mut ctl = NavigationController::new(store_abc(), NavigationConfig::default());
        let mut view = RecordingView::default();
        ctl.start(Some(ViewSnapshot::new(None, LatLng::new(10.0, 20.0), 5)));
        flush(&mut ctl, &mut view);
        assert_eq!(ctl.state().current, None);
        assert_eq!(view.markers.len(), 3);
        assert!(view.open_popups.is_empty());
    }

    #[test]
    fn malformed_or_missing_snapshot_selects_earliest_event() {
        let mut mem = InMemoryStore::new();
        mem.set("k", "{\"currentEventIndex\": oops").unwrap();
        let views = ViewStore::new(mem, "k");

        let mut ctl = NavigationController::new(store_abc(), NavigationConfig::default());
        let mut view = RecordingView::default();
        ctl.start(views.restore());
        flush(&mut ctl, &mut view);
        assert_eq!(ctl.state().current, Some(0));
        assert_eq!(ctl.state().zoom, 4);
        assert_eq!(view.highlighted, Some(0));
    }

    #[test]
    fn stale_snapshots_are_treated_as_absent() {
        let out_of_range = ViewSnapshot::new(Some(9), LatLng::new(1.0, 1.0), 6);
        let mut ctl = NavigationController::new(store_abc(), NavigationConfig::default());
        ctl.start(Some(out_of_range));
        assert_eq!(ctl.state().current, Some(0));
        assert_eq!(ctl.state().zoom, 4);

        let other = ViewSnapshot::new(Some(2), LatLng::new(1.0, 1.0), 6).with_dataset("other");
        let mut ctl = NavigationController::new(store_abc(), NavigationConfig::default())
            .with_dataset("mine");
        ctl.start(Some(other));
        assert_eq!(ctl.state().current, Some(0));
        assert_eq!(ctl.snapshot().dataset.as_deref(), Some("mine"));

        let same = ViewSnapshot::new(Some(2), LatLng::new(1.0, 1.0), 6).with_dataset("mine");
        let mut ctl = NavigationController::new(store_abc(), NavigationConfig::default())
            .with_dataset("mine");
        ctl.start(Some(same));
        assert_eq!(ctl.state().current, Some(2));
    }

    #[test]
    fn empty_store_starts_with_nothing_selected() {
        let mut ctl =
            NavigationController::new(events::EventStore::empty(), NavigationConfig::default());
        let mut view = RecordingView::default();
        ctl.start(None);
        flush(&mut ctl, &mut view);
        assert_eq!(ctl.state().current, None);
        assert_eq!((view.prev_disabled, view.next_disabled), (true, true));
        assert!(!ctl.show_next());
        assert_eq!(ctl.timeline_extent(), None);
    }

    #[test]
    fn pan_to_policy_keeps_zoom_and_animates() {
        let cfg = NavigationConfig {
            focus: FocusPolicy::PanTo,
            ..NavigationConfig::default()
        };
        let mut ctl = NavigationController::new(store_abc(), cfg);
        ctl.start(None);
        ctl.drain_commands();
        ctl.show_event_by_index(2);
        let cmds = ctl.drain_commands();
        let target = ctl.store().get(2).unwrap().location;
        assert!(cmds.contains(&ViewCommand::PanTo { center: target }));
        assert!(!cmds.iter().any(|c| matches!(c, ViewCommand::SetView { .. })));
    }

    #[test]
    fn settled_viewport_is_clamped_into_max_bounds() {
        let cfg = NavigationConfig {
            max_bounds: Some(GeoBounds::new(LatLng::new(0.0, 60.0), LatLng::new(60.0, 150.0))),
            ..NavigationConfig::default()
        };
        let mut ctl = NavigationController::new(store_abc(), cfg);
        ctl.start(None);
        ctl.drain_commands();

        ctl.on_viewport_settled(LatLng::new(75.0, 20.0), 30);
        let cmds = ctl.drain_commands();
        assert_eq!(
            cmds,
            vec![
                ViewCommand::PanTo {
                    center: LatLng::new(60.0, 60.0)
                },
                ViewCommand::Persist
            ]
        );
        assert_eq!(ctl.state().zoom, 18);

        ctl.on_viewport_settled(LatLng::new(f64::NAN, 0.0), 5);
        assert!(ctl.pending().is_empty());
    }

    #[test]
    fn today_extends_timeline_extent() {
        let ctl = NavigationController::new(store_abc(), NavigationConfig::default())
            .with_today(d("2026-10-14"));
        let ext = ctl.timeline_extent().unwrap();
        assert_eq!(ext.start(), d("2020-01-01"));
        assert_eq!(ext.end(), d("2026-10-14"));
    }
}
