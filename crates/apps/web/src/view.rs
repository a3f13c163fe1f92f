use navigation::{ViewCommand, ViewSink};
use tracing::warn;
use wasm_bindgen::JsValue;

use crate::dom::NavButtons;
use crate::map_view::MapView;
use crate::timeline_svg::TimelineView;

/// Every browser-side view the controller drives.
pub struct WebView {
    pub map: MapView,
    pub timeline: Option<TimelineView>,
    pub buttons: NavButtons,
}

impl WebView {
    pub fn new(map: MapView, buttons: NavButtons) -> Self {
        Self {
            map,
            timeline: None,
            buttons,
        }
    }

    fn with_timeline(&mut self, f: impl FnOnce(&mut TimelineView) -> Result<(), JsValue>) {
        if let Some(timeline) = &mut self.timeline {
            if let Err(err) = f(timeline) {
                warn!(?err, "timeline update failed");
            }
        }
    }
}

impl ViewSink for WebView {
    fn apply(&mut self, command: &ViewCommand) {
        match command {
            ViewCommand::ShowMarkers(indices) => self.map.show_markers(indices),
            ViewCommand::OpenPopup(i) => self.map.open_popup(*i),
            ViewCommand::ClosePopup(i) => self.map.close_popup(*i),
            ViewCommand::SetView { center, zoom } => self.map.set_view(*center, *zoom),
            ViewCommand::PanTo { center } => self.map.pan_to(*center),
            ViewCommand::Highlight(index) => self.with_timeline(|t| t.highlight(*index)),
            ViewCommand::NavButtons {
                prev_disabled,
                next_disabled,
            } => self.buttons.set_disabled(*prev_disabled, *next_disabled),
            ViewCommand::TimelineDomain(range) => self.with_timeline(|t| t.set_domain(*range)),
            ViewCommand::ResetTimelineZoom => self.with_timeline(TimelineView::reset_zoom),
            // Written by the host loop, which owns the controller.
            ViewCommand::Persist => {}
        }
    }
}
