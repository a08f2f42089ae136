//! Network element definitions.

use crate::surface::SurfaceHandle;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an element.
pub type ElementId = Uuid;

/// Label width per character, as a fraction of the font size.
const LABEL_CHAR_WIDTH_RATIO: f64 = 0.6;

/// The kind of network device an element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Client,
    Switch,
    Router,
}

impl ElementKind {
    /// All kinds, in toolbar order.
    pub const ALL: [ElementKind; 3] = [ElementKind::Client, ElementKind::Switch, ElementKind::Router];

    /// Display name, also used as the prefix of generated element names.
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Client => "Client",
            ElementKind::Switch => "Switch",
            ElementKind::Router => "Router",
        }
    }

    /// Number of ports an element of this kind carries.
    pub fn port_count(self) -> usize {
        match self {
            ElementKind::Client => 1,
            ElementKind::Switch | ElementKind::Router => 4,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed reference to an element: its stable id plus its kind.
///
/// This is what hit-testing hands out and what the selection holds on to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub id: ElementId,
    pub kind: ElementKind,
}

/// An attachment slot on an element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Port {
    /// Offset relative to the element position.
    pub offset: Vec2,
}

/// Which part of an element a point landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementPart {
    Icon,
    Label,
}

/// Sizes used to lay out an element's icon and name label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementGeometry {
    /// Edge length of the square icon.
    pub icon_size: f64,
    /// Label font size, which is also the label height.
    pub label_font_size: f64,
}

impl Default for ElementGeometry {
    fn default() -> Self {
        Self {
            icon_size: 50.0,
            label_font_size: 12.0,
        }
    }
}

impl ElementGeometry {
    /// Icon rectangle with its top-left corner at `origin`.
    pub fn icon_rect(&self, origin: Point) -> Rect {
        Rect::from_origin_size(origin, (self.icon_size, self.icon_size))
    }

    /// Label rectangle for `text` with its bottom-left corner at `origin`.
    pub fn label_rect(&self, text: &str, origin: Point) -> Rect {
        let width = text.chars().count() as f64 * self.label_font_size * LABEL_CHAR_WIDTH_RATIO;
        Rect::new(
            origin.x,
            origin.y - self.label_font_size,
            origin.x + width,
            origin.y,
        )
    }
}

/// A placed network device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) kind: ElementKind,
    /// Display name.
    pub name: String,
    /// Top-left corner of the icon; also the link anchor point.
    pub position: Point,
    ports: Vec<Port>,
    #[serde(skip)]
    pub(crate) icon_handle: Option<SurfaceHandle>,
    #[serde(skip)]
    pub(crate) label_handle: Option<SurfaceHandle>,
}

impl Element {
    /// Create a new element with the port layout of its kind.
    pub fn new(kind: ElementKind, name: impl Into<String>, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            position,
            ports: vec![Port::default(); kind.port_count()],
            icon_handle: None,
            label_handle: None,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Typed reference to this element.
    pub fn reference(&self) -> ElementRef {
        ElementRef {
            id: self.id,
            kind: self.kind,
        }
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// The point links attach to.
    pub fn anchor(&self) -> Point {
        self.position
    }

    /// Surface handle of the icon, once drawn.
    pub fn icon_handle(&self) -> Option<SurfaceHandle> {
        self.icon_handle
    }

    /// Surface handle of the name label, once drawn.
    pub fn label_handle(&self) -> Option<SurfaceHandle> {
        self.label_handle
    }

    /// Handles of everything drawn for this element.
    pub fn handles(&self) -> impl Iterator<Item = SurfaceHandle> + '_ {
        self.icon_handle.into_iter().chain(self.label_handle)
    }

    /// Bounds of the icon (anchored at its top-left corner).
    pub fn icon_bounds(&self, geometry: &ElementGeometry) -> Rect {
        geometry.icon_rect(self.position)
    }

    /// Bounds of the name label, which sits directly above the icon.
    pub fn label_bounds(&self, geometry: &ElementGeometry) -> Rect {
        geometry.label_rect(&self.name, self.position)
    }

    /// Find which part of the element (if any) contains the point.
    pub fn hit_test(
        &self,
        point: Point,
        tolerance: f64,
        geometry: &ElementGeometry,
    ) -> Option<ElementPart> {
        if self
            .icon_bounds(geometry)
            .inflate(tolerance, tolerance)
            .contains(point)
        {
            Some(ElementPart::Icon)
        } else if self
            .label_bounds(geometry)
            .inflate(tolerance, tolerance)
            .contains(point)
        {
            Some(ElementPart::Label)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_layout() {
        let client = Element::new(ElementKind::Client, "Client1", Point::ZERO);
        let switch = Element::new(ElementKind::Switch, "Switch1", Point::ZERO);
        let router = Element::new(ElementKind::Router, "Router1", Point::ZERO);

        assert_eq!(client.ports().len(), 1);
        assert_eq!(switch.ports().len(), 4);
        assert_eq!(router.ports().len(), 4);
        assert!(router.ports().iter().all(|p| p.offset == Vec2::ZERO));
    }

    #[test]
    fn test_icon_bounds() {
        let geometry = ElementGeometry::default();
        let element = Element::new(ElementKind::Switch, "Switch1", Point::new(10.0, 20.0));
        let bounds = element.icon_bounds(&geometry);
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 60.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_label_sits_above_icon() {
        let geometry = ElementGeometry::default();
        let element = Element::new(ElementKind::Client, "Client1", Point::new(100.0, 100.0));
        let label = element.label_bounds(&geometry);
        assert!((label.y1 - 100.0).abs() < f64::EPSILON);
        assert!((label.y0 - 88.0).abs() < f64::EPSILON);
        assert!(label.width() > 0.0);
    }

    #[test]
    fn test_hit_test_parts() {
        let geometry = ElementGeometry::default();
        let element = Element::new(ElementKind::Router, "Router1", Point::new(100.0, 100.0));

        assert_eq!(
            element.hit_test(Point::new(125.0, 125.0), 0.0, &geometry),
            Some(ElementPart::Icon)
        );
        assert_eq!(
            element.hit_test(Point::new(105.0, 95.0), 0.0, &geometry),
            Some(ElementPart::Label)
        );
        assert_eq!(element.hit_test(Point::new(300.0, 300.0), 0.0, &geometry), None);
        // Just outside the icon, within tolerance
        assert_eq!(
            element.hit_test(Point::new(152.0, 125.0), 3.0, &geometry),
            Some(ElementPart::Icon)
        );
    }

    #[test]
    fn test_anchor_is_position() {
        let element = Element::new(ElementKind::Client, "Client1", Point::new(7.0, 9.0));
        assert_eq!(element.anchor(), Point::new(7.0, 9.0));
        assert_eq!(element.reference().kind, ElementKind::Client);
    }
}
