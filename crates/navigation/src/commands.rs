use foundation::{DateRange, LatLng};

/// A side effect the controller asks the host views to perform.
///
/// Commands are emitted in the order they must be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Replace the set of markers on the map; ascending event indices.
    ShowMarkers(Vec<usize>),
    OpenPopup(usize),
    ClosePopup(usize),
    SetView { center: LatLng, zoom: u8 },
    PanTo { center: LatLng },
    /// Active timeline point; `None` clears every highlight.
    Highlight(Option<usize>),
    NavButtons { prev_disabled: bool, next_disabled: bool },
    TimelineDomain(DateRange),
    ResetTimelineZoom,
    /// Snapshot the view state now.
    Persist,
}

/// Host side of the command stream: map, timeline and DOM updates.
pub trait ViewSink {
    fn apply(&mut self, command: &ViewCommand);
}

pub fn dispatch<S: ViewSink + ?Sized>(commands: &[ViewCommand], sink: &mut S) {
    for cmd in commands {
        sink.apply(cmd);
    }
}

#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<ViewCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: ViewCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[ViewCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn drain(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.commands)
    }
}
