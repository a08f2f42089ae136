//! Retained display list.
//!
//! [`Scene`] keeps every item the core asked it to draw, in paint order, and
//! answers picking queries against them.

use kurbo::{Line, ParamCurveNearest, Point, Rect, Vec2};
use netdraw_core::{DiagramSurface, EditorConfig, ElementGeometry, ElementKind, SurfaceHandle};

/// What a scene item draws.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItemKind {
    /// Element icon, top-left corner at `origin`.
    Icon { kind: ElementKind, origin: Point },
    /// Name label, bottom-left corner at `origin`.
    Label { text: String, origin: Point },
    /// Link arrow with its head at `end`.
    Arrow { start: Point, end: Point },
}

/// A drawn item and the handle the core knows it by.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub handle: SurfaceHandle,
    pub kind: SceneItemKind,
}

impl SceneItem {
    /// Translate the item.
    fn translate(&mut self, delta: Vec2) {
        match &mut self.kind {
            SceneItemKind::Icon { origin, .. } | SceneItemKind::Label { origin, .. } => {
                *origin += delta;
            }
            SceneItemKind::Arrow { start, end } => {
                *start += delta;
                *end += delta;
            }
        }
    }
}

/// Display list implementing [`DiagramSurface`].
#[derive(Debug, Clone)]
pub struct Scene {
    /// Items in paint order (last is topmost).
    items: Vec<SceneItem>,
    /// Rubber-band segment of a pending link.
    preview: Option<Line>,
    geometry: ElementGeometry,
    hit_tolerance: f64,
    arrow_head_size: f64,
    next_handle: u64,
    /// Number of redraw requests received.
    frames: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Scene {
    /// Create an empty scene laid out with the editor's sizes.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            items: Vec::new(),
            preview: None,
            geometry: config.geometry,
            hit_tolerance: config.hit_tolerance,
            arrow_head_size: config.arrow_head_size,
            next_handle: 0,
            frames: 0,
        }
    }

    /// Items in paint order.
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    /// Look up an item by handle.
    pub fn item(&self, handle: SurfaceHandle) -> Option<&SceneItem> {
        self.items.iter().find(|item| item.handle == handle)
    }

    /// The pending-link preview segment, if showing.
    pub fn preview(&self) -> Option<Line> {
        self.preview
    }

    pub fn geometry(&self) -> &ElementGeometry {
        &self.geometry
    }

    pub fn arrow_head_size(&self) -> f64 {
        self.arrow_head_size
    }

    /// Number of redraws requested so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bounding box of an item.
    pub fn item_bounds(&self, item: &SceneItem) -> Rect {
        match &item.kind {
            SceneItemKind::Icon { origin, .. } => self.geometry.icon_rect(*origin),
            SceneItemKind::Label { text, origin } => self.geometry.label_rect(text, *origin),
            SceneItemKind::Arrow { start, end } => {
                netdraw_core::arrowhead(*start, *end, self.arrow_head_size)
                    .iter()
                    .fold(Rect::from_points(*start, *end), |acc, p| acc.union_pt(*p))
            }
        }
    }

    /// Bounding box of everything drawn, including the preview.
    pub fn bounds(&self) -> Option<Rect> {
        let items = self.items.iter().map(|item| self.item_bounds(item));
        let preview = self.preview.map(|line| Rect::from_points(line.p0, line.p1));
        items.chain(preview).reduce(|acc, r| acc.union(r))
    }

    fn item_contains(&self, item: &SceneItem, point: Point) -> bool {
        match &item.kind {
            SceneItemKind::Arrow { start, end } => {
                let nearest = Line::new(*start, *end).nearest(point, 1e-6);
                nearest.distance_sq <= self.hit_tolerance * self.hit_tolerance
            }
            _ => self
                .item_bounds(item)
                .inflate(self.hit_tolerance, self.hit_tolerance)
                .contains(point),
        }
    }

    fn allocate(&mut self, kind: SceneItemKind) -> SurfaceHandle {
        self.next_handle += 1;
        let handle = SurfaceHandle(self.next_handle);
        self.items.push(SceneItem { handle, kind });
        handle
    }

    fn item_mut(&mut self, handle: SurfaceHandle) -> Option<&mut SceneItem> {
        self.items.iter_mut().find(|item| item.handle == handle)
    }
}

impl DiagramSurface for Scene {
    fn draw_icon(&mut self, kind: ElementKind, position: Point) -> SurfaceHandle {
        self.allocate(SceneItemKind::Icon {
            kind,
            origin: position,
        })
    }

    fn draw_label(&mut self, text: &str, position: Point) -> SurfaceHandle {
        self.allocate(SceneItemKind::Label {
            text: text.to_string(),
            origin: position,
        })
    }

    fn set_label_text(&mut self, handle: SurfaceHandle, new_text: &str) {
        match self.item_mut(handle).map(|item| &mut item.kind) {
            Some(SceneItemKind::Label { text, .. }) => *text = new_text.to_string(),
            _ => log::warn!("No label with handle {handle:?}"),
        }
    }

    fn move_by_handle(&mut self, handle: SurfaceHandle, delta: Vec2) {
        match self.item_mut(handle) {
            Some(item) => item.translate(delta),
            None => log::warn!("No scene item with handle {handle:?}"),
        }
    }

    fn draw_arrow_segment(&mut self, start: Point, end: Point) -> SurfaceHandle {
        self.allocate(SceneItemKind::Arrow { start, end })
    }

    fn pick_topmost_at(&self, point: Point) -> Option<SurfaceHandle> {
        self.items
            .iter()
            .rev()
            .find(|item| self.item_contains(item, point))
            .map(|item| item.handle)
    }

    fn show_preview_segment(&mut self, start: Point, end: Point) {
        self.preview = Some(Line::new(start, end));
    }

    fn clear_preview(&mut self) {
        self.preview = None;
    }

    fn redraw(&mut self) {
        self.frames += 1;
    }
}
