//! Per-frame registry of the picker's interactive screen regions.
//!
//! Every rendered widget registers its rectangle under a stable
//! [`SurfaceId`]. The registry serves two consumers: mouse dispatch (which
//! region was clicked) and render tests (locate a widget by id instead of
//! hard-coded coordinates).

use ratatui::layout::Rect;

/// Stable identifier for an interactive region of the picker surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceId {
    SearchInput,
    SuggestionList,
    /// One suggestion row; the index is absolute within the match list.
    SuggestionRow(usize),
    NoMatchNotice,
    SelectionCard,
}

/// Zones registered while drawing a frame, resolved on mouse clicks.
///
/// Cleared at the start of every draw; zones registered later sit on top,
/// so rows win over the list that contains them.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    zones: Vec<(Rect, SurfaceId)>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    /// Remove all registered zones so the registry can be reused for the
    /// next frame.
    pub fn clear(&mut self) {
        self.zones.clear();
    }

    /// Register a region under its identifier.
    pub fn register(&mut self, rect: Rect, id: SurfaceId) {
        self.zones.push((rect, id));
    }

    /// The top-most zone containing the given terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<SurfaceId> {
        self.zones
            .iter()
            .rev()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, id)| *id)
    }

    /// The registered rectangle for an identifier, if it was drawn this
    /// frame.
    pub fn rect_of(&self, id: SurfaceId) -> Option<Rect> {
        self.zones
            .iter()
            .find(|(_, zone_id)| *zone_id == id)
            .map(|(rect, _)| *rect)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && column < rect.x.saturating_add(rect.width)
        && row < rect.y.saturating_add(rect.height)
}
