//! Interaction session: armed link endpoints and the active drag.

use crate::element::ElementRef;
use kurbo::{Point, Vec2};

/// Maximum number of armed elements (the two ends of a link).
pub const MAX_ARMED: usize = 2;

/// Coarse state of the interaction, derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Nothing is being dragged and nothing is armed.
    Idle,
    /// An element is being dragged.
    Dragging,
    /// One element is armed as a pending link start.
    Armed1,
    /// Two elements are armed; a link is pending.
    Armed2,
}

/// Per-editor interaction state, passed explicitly to every event handler.
///
/// Armed elements and the drag are tracked independently: the same press can
/// start a drag and arm a link endpoint.
#[derive(Debug, Clone, Default)]
pub struct InteractionSession {
    /// Armed elements in click order.
    armed: Vec<ElementRef>,
    /// Element being dragged.
    dragged: Option<ElementRef>,
    /// Last pointer position of the active drag.
    drag_anchor: Option<Point>,
    /// Whether a link preview segment is showing.
    preview_active: bool,
}

impl InteractionSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode. An active drag takes precedence over armed elements.
    pub fn mode(&self) -> InteractionMode {
        if self.dragged.is_some() {
            return InteractionMode::Dragging;
        }
        match self.armed.len() {
            0 => InteractionMode::Idle,
            1 => InteractionMode::Armed1,
            _ => InteractionMode::Armed2,
        }
    }

    /// Armed elements in click order.
    pub fn armed(&self) -> &[ElementRef] {
        &self.armed
    }

    /// Element being dragged, if any.
    pub fn dragged(&self) -> Option<ElementRef> {
        self.dragged
    }

    /// Last pointer position of the active drag.
    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag_anchor
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Arm an element as a link endpoint.
    ///
    /// Returns false once two elements are armed. The same element may be
    /// armed twice.
    pub fn arm(&mut self, element: ElementRef) -> bool {
        if self.armed.len() >= MAX_ARMED {
            return false;
        }
        self.armed.push(element);
        true
    }

    /// Disarm everything.
    pub fn clear_armed(&mut self) {
        self.armed.clear();
    }

    /// Keep only the armed elements matching a predicate.
    /// Returns the ones that were dropped.
    pub fn retain_armed(&mut self, mut keep: impl FnMut(&ElementRef) -> bool) -> Vec<ElementRef> {
        let (kept, dropped): (Vec<_>, Vec<_>) = self.armed.drain(..).partition(|r| keep(r));
        self.armed = kept;
        dropped
    }

    /// Start dragging an element from a pointer position.
    pub fn begin_drag(&mut self, element: ElementRef, point: Point) {
        self.dragged = Some(element);
        self.drag_anchor = Some(point);
    }

    /// Move the drag anchor to `point`, returning the delta from the last one.
    pub fn advance_drag(&mut self, point: Point) -> Option<(ElementRef, Vec2)> {
        let element = self.dragged?;
        let anchor = self.drag_anchor.replace(point)?;
        Some((element, point - anchor))
    }

    /// Finish the drag. Armed elements are untouched.
    pub fn end_drag(&mut self) {
        self.dragged = None;
        self.drag_anchor = None;
    }

    pub(crate) fn preview_active(&self) -> bool {
        self.preview_active
    }

    pub(crate) fn set_preview_active(&mut self, active: bool) {
        self.preview_active = active;
    }
}
