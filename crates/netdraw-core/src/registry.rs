//! Element registry: owns placed elements and hands out their names.

use crate::element::{Element, ElementGeometry, ElementId, ElementKind, ElementRef};
use crate::error::{DiagramError, DiagramResult};
use crate::surface::SurfaceHandle;
use kurbo::{Point, Vec2};
use std::collections::HashMap;

/// All placed elements, in z-order, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    /// All elements, keyed by ID.
    elements: HashMap<ElementId, Element>,
    /// Z-order of elements (back to front). Creation order.
    z_order: Vec<ElementId>,
    /// Last name suffix issued per kind.
    counters: HashMap<ElementKind, u32>,
    /// Surface items drawn for each element.
    handles: HashMap<SurfaceHandle, ElementId>,
}

impl ElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new element of the given kind.
    ///
    /// The name is the kind's label followed by the next per-kind counter
    /// value, starting at 1. Overlapping positions are allowed.
    pub fn add(&mut self, kind: ElementKind, position: Point) -> ElementRef {
        let name = self.next_name(kind);
        let element = Element::new(kind, name, position);
        let reference = element.reference();
        log::debug!("Registered {} at ({}, {})", element.name, position.x, position.y);
        self.z_order.push(reference.id);
        self.elements.insert(reference.id, element);
        reference
    }

    fn next_name(&mut self, kind: ElementKind) -> String {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        format!("{}{}", kind.label(), counter)
    }

    /// Overwrite an element's name. Duplicates are allowed.
    pub fn rename(&mut self, id: ElementId, name: impl Into<String>) -> DiagramResult<()> {
        let element = self.get_mut(id).ok_or(DiagramError::UnknownElement(id))?;
        element.name = name.into();
        Ok(())
    }

    /// Move an element to a new position.
    /// Returns the delta that was applied.
    pub fn set_position(&mut self, id: ElementId, position: Point) -> DiagramResult<Vec2> {
        let element = self.get_mut(id).ok_or(DiagramError::UnknownElement(id))?;
        let delta = position - element.position;
        element.position = position;
        Ok(delta)
    }

    /// Remember which surface items belong to an element.
    pub fn bind_handles(
        &mut self,
        id: ElementId,
        icon: SurfaceHandle,
        label: SurfaceHandle,
    ) -> DiagramResult<()> {
        let element = self.elements.get_mut(&id).ok_or(DiagramError::UnknownElement(id))?;
        for old in element.handles() {
            self.handles.remove(&old);
        }
        element.icon_handle = Some(icon);
        element.label_handle = Some(label);
        self.handles.insert(icon, id);
        self.handles.insert(label, id);
        Ok(())
    }

    /// Map a surface item back to the element it belongs to.
    pub fn element_for_handle(&self, handle: SurfaceHandle) -> Option<ElementRef> {
        self.handles
            .get(&handle)
            .and_then(|id| self.elements.get(id))
            .map(Element::reference)
    }

    /// Get an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Resolve a reference, checking that its kind still matches.
    pub fn resolve(&self, reference: ElementRef) -> Option<&Element> {
        self.get(reference.id)
            .filter(|element| element.kind == reference.kind)
    }

    /// Check whether a reference points at a registered element.
    pub fn contains(&self, reference: ElementRef) -> bool {
        self.resolve(reference).is_some()
    }

    /// Get elements in z-order (back to front).
    pub fn elements_ordered(&self) -> impl Iterator<Item = &Element> {
        self.z_order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Find elements at a point.
    pub fn elements_at_point(
        &self,
        point: Point,
        tolerance: f64,
        geometry: &ElementGeometry,
    ) -> Vec<ElementRef> {
        // Return in reverse z-order (front to back) for selection priority
        self.z_order
            .iter()
            .rev()
            .filter_map(|id| self.elements.get(id))
            .filter(|element| element.hit_test(point, tolerance, geometry).is_some())
            .map(Element::reference)
            .collect()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_per_kind() {
        let mut registry = ElementRegistry::new();
        let c1 = registry.add(ElementKind::Client, Point::ZERO);
        let s1 = registry.add(ElementKind::Switch, Point::ZERO);
        let c2 = registry.add(ElementKind::Client, Point::ZERO);
        let r1 = registry.add(ElementKind::Router, Point::ZERO);
        let s2 = registry.add(ElementKind::Switch, Point::ZERO);

        let name = |r: ElementRef| registry.get(r.id).unwrap().name.clone();
        assert_eq!(name(c1), "Client1");
        assert_eq!(name(c2), "Client2");
        assert_eq!(name(s1), "Switch1");
        assert_eq!(name(s2), "Switch2");
        assert_eq!(name(r1), "Router1");
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_rename_allows_duplicates() {
        let mut registry = ElementRegistry::new();
        let a = registry.add(ElementKind::Client, Point::ZERO);
        let b = registry.add(ElementKind::Client, Point::ZERO);

        registry.rename(b.id, "Client1").unwrap();
        assert_eq!(registry.get(a.id).unwrap().name, "Client1");
        assert_eq!(registry.get(b.id).unwrap().name, "Client1");

        // Renaming does not rewind the counter
        let c = registry.add(ElementKind::Client, Point::ZERO);
        assert_eq!(registry.get(c.id).unwrap().name, "Client3");
    }

    #[test]
    fn test_rename_unknown() {
        let mut registry = ElementRegistry::new();
        let stray = uuid::Uuid::new_v4();
        assert!(matches!(
            registry.rename(stray, "x"),
            Err(DiagramError::UnknownElement(id)) if id == stray
        ));
    }

    #[test]
    fn test_set_position_returns_delta() {
        let mut registry = ElementRegistry::new();
        let a = registry.add(ElementKind::Switch, Point::new(10.0, 10.0));
        let delta = registry.set_position(a.id, Point::new(40.0, 0.0)).unwrap();
        assert_eq!(delta, Vec2::new(30.0, -10.0));
        assert_eq!(registry.get(a.id).unwrap().position, Point::new(40.0, 0.0));
    }

    #[test]
    fn test_elements_at_point_front_first() {
        let geometry = ElementGeometry::default();
        let mut registry = ElementRegistry::new();
        let back = registry.add(ElementKind::Client, Point::new(0.0, 0.0));
        let front = registry.add(ElementKind::Router, Point::new(25.0, 25.0));

        let hits = registry.elements_at_point(Point::new(40.0, 40.0), 0.0, &geometry);
        assert_eq!(hits, vec![front, back]);

        let hits = registry.elements_at_point(Point::new(10.0, 10.0), 0.0, &geometry);
        assert_eq!(hits, vec![back]);
    }

    #[test]
    fn test_handles_map_back_to_element() {
        let mut registry = ElementRegistry::new();
        let a = registry.add(ElementKind::Client, Point::ZERO);
        registry
            .bind_handles(a.id, SurfaceHandle(1), SurfaceHandle(2))
            .unwrap();

        assert_eq!(registry.element_for_handle(SurfaceHandle(1)), Some(a));
        assert_eq!(registry.element_for_handle(SurfaceHandle(2)), Some(a));
        assert_eq!(registry.element_for_handle(SurfaceHandle(3)), None);
    }

    #[test]
    fn test_resolve_checks_kind() {
        let mut registry = ElementRegistry::new();
        let a = registry.add(ElementKind::Client, Point::ZERO);
        let wrong = ElementRef {
            id: a.id,
            kind: ElementKind::Router,
        };
        assert!(registry.contains(a));
        assert!(!registry.contains(wrong));
    }
}
