//! Directed links between elements.

use crate::element::ElementId;
use crate::surface::SurfaceHandle;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a link.
pub type LinkId = Uuid;

/// A directed link, drawn as a straight arrow from `start` to `end`.
///
/// The endpoints are the anchor points of both elements at the time the
/// link was created. They are not updated when an element moves later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub(crate) id: LinkId,
    /// Element the link starts at (first armed).
    pub from: ElementId,
    /// Element the arrowhead points at (second armed).
    pub to: ElementId,
    /// Start point.
    pub start: Point,
    /// End point (where the arrowhead is).
    pub end: Point,
    /// Size of the arrowhead.
    pub head_size: f64,
    #[serde(skip)]
    pub(crate) handle: Option<SurfaceHandle>,
}

impl Link {
    /// Create a new link.
    pub fn new(from: ElementId, to: ElementId, start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
            start,
            end,
            head_size: 10.0,
            handle: None,
        }
    }

    /// Set the arrowhead size.
    pub fn with_head_size(mut self, head_size: f64) -> Self {
        self.head_size = head_size;
        self
    }

    pub fn id(&self) -> LinkId {
        self.id
    }

    /// Surface handle of the drawn arrow, once drawn.
    pub fn handle(&self) -> Option<SurfaceHandle> {
        self.handle
    }

    /// Whether both ends are the same element.
    pub fn is_self_link(&self) -> bool {
        self.from == self.to
    }

    /// Whether the link touches the given element.
    pub fn involves(&self, id: ElementId) -> bool {
        self.from == id || self.to == id
    }

    /// Get the direction vector (normalized).
    pub fn direction(&self) -> Vec2 {
        direction(self.start, self.end)
    }

    /// Get the length of the shaft.
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    /// Arrowhead triangle: tip, left barb, right barb.
    pub fn arrowhead(&self) -> [Point; 3] {
        arrowhead(self.start, self.end, self.head_size)
    }

    /// Bounds of the shaft and arrowhead.
    pub fn bounds(&self) -> Rect {
        self.arrowhead()
            .iter()
            .fold(Rect::from_points(self.start, self.end), |acc, p| {
                acc.union_pt(*p)
            })
    }
}

/// Unit vector from `start` to `end`; points right for a zero-length segment.
fn direction(start: Point, end: Point) -> Vec2 {
    let delta = end - start;
    let len = delta.hypot();
    if len < f64::EPSILON {
        Vec2::new(1.0, 0.0)
    } else {
        delta / len
    }
}

/// Arrowhead triangle for a segment ending at `end`: tip, left barb, right barb.
pub fn arrowhead(start: Point, end: Point, head_size: f64) -> [Point; 3] {
    let dir = direction(start, end);
    let perp = Vec2::new(-dir.y, dir.x);
    let head_back = end - dir * head_size;
    [
        end,
        head_back + perp * (head_size * 0.5),
        head_back - perp * (head_size * 0.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let link = Link::new(a, b, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((link.length() - 100.0).abs() < f64::EPSILON);
        assert!(!link.is_self_link());
        assert!(link.involves(a));
        assert!(link.involves(b));
    }

    #[test]
    fn test_arrowhead_at_end() {
        let link = Link::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        let [tip, left, right] = link.arrowhead();
        assert_eq!(tip, Point::new(100.0, 0.0));
        assert!((left.x - 90.0).abs() < 1e-9);
        assert!((right.x - 90.0).abs() < 1e-9);
        assert!((left.y - 5.0).abs() < 1e-9);
        assert!((right.y + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_self_link_direction_is_finite() {
        let id = Uuid::new_v4();
        let link = Link::new(id, id, Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert!(link.is_self_link());
        let dir = link.direction();
        assert!((dir.x - 1.0).abs() < f64::EPSILON);
        assert!(link.bounds().width().is_finite());
    }
}
