//! Drawing surface boundary.
//!
//! The core never draws. It decides positions and topology and issues
//! commands to a [`DiagramSurface`], which owns the actual rendering
//! (and image decoding, if it draws bitmaps).

use crate::element::ElementKind;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Opaque handle to an item drawn on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceHandle(pub u64);

/// Commands the core issues to the drawable canvas.
pub trait DiagramSurface {
    /// Draw an element icon with its top-left corner at `position`.
    fn draw_icon(&mut self, kind: ElementKind, position: Point) -> SurfaceHandle;

    /// Draw a name label whose bottom-left corner is at `position`.
    fn draw_label(&mut self, text: &str, position: Point) -> SurfaceHandle;

    /// Replace the text of a previously drawn label.
    fn set_label_text(&mut self, handle: SurfaceHandle, text: &str);

    /// Move a drawn item by a delta.
    fn move_by_handle(&mut self, handle: SurfaceHandle, delta: Vec2);

    /// Draw a straight segment with an arrowhead at `end`.
    fn draw_arrow_segment(&mut self, start: Point, end: Point) -> SurfaceHandle;

    /// Topmost item at a point, if the surface can tell.
    ///
    /// The default defers picking to the core's own geometry.
    fn pick_topmost_at(&self, _point: Point) -> Option<SurfaceHandle> {
        None
    }

    /// Show (or move) the rubber-band segment used while a link is pending.
    fn show_preview_segment(&mut self, _start: Point, _end: Point) {}

    /// Remove the rubber-band segment, if any.
    fn clear_preview(&mut self) {}

    /// Request a repaint.
    fn redraw(&mut self) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A command received by [`RecordingSurface`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum Command {
        Icon(SurfaceHandle, ElementKind, Point),
        Label(SurfaceHandle, String, Point),
        SetLabel(SurfaceHandle, String),
        Move(SurfaceHandle, Vec2),
        Arrow(SurfaceHandle, Point, Point),
        Preview(Point, Point),
        ClearPreview,
    }

    /// Surface that records every command it receives.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub commands: Vec<Command>,
        /// Handle returned by `pick_topmost_at`, when set.
        pub pick: Option<SurfaceHandle>,
        next: u64,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        fn next_handle(&mut self) -> SurfaceHandle {
            self.next += 1;
            SurfaceHandle(self.next)
        }

        pub fn arrows(&self) -> Vec<(Point, Point)> {
            self.commands
                .iter()
                .filter_map(|c| match c {
                    Command::Arrow(_, start, end) => Some((*start, *end)),
                    _ => None,
                })
                .collect()
        }

        pub fn moves(&self) -> Vec<(SurfaceHandle, Vec2)> {
            self.commands
                .iter()
                .filter_map(|c| match c {
                    Command::Move(handle, delta) => Some((*handle, *delta)),
                    _ => None,
                })
                .collect()
        }
    }

    impl DiagramSurface for RecordingSurface {
        fn draw_icon(&mut self, kind: ElementKind, position: Point) -> SurfaceHandle {
            let handle = self.next_handle();
            self.commands.push(Command::Icon(handle, kind, position));
            handle
        }

        fn draw_label(&mut self, text: &str, position: Point) -> SurfaceHandle {
            let handle = self.next_handle();
            self.commands
                .push(Command::Label(handle, text.to_string(), position));
            handle
        }

        fn set_label_text(&mut self, handle: SurfaceHandle, text: &str) {
            self.commands
                .push(Command::SetLabel(handle, text.to_string()));
        }

        fn move_by_handle(&mut self, handle: SurfaceHandle, delta: Vec2) {
            self.commands.push(Command::Move(handle, delta));
        }

        fn draw_arrow_segment(&mut self, start: Point, end: Point) -> SurfaceHandle {
            let handle = self.next_handle();
            self.commands.push(Command::Arrow(handle, start, end));
            handle
        }

        fn pick_topmost_at(&self, _point: Point) -> Option<SurfaceHandle> {
            self.pick
        }

        fn show_preview_segment(&mut self, start: Point, end: Point) {
            self.commands.push(Command::Preview(start, end));
        }

        fn clear_preview(&mut self) {
            self.commands.push(Command::ClearPreview);
        }
    }
}
