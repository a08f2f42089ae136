//! The diagram aggregate: elements plus the links between them.

use crate::element::{Element, ElementId};
use crate::link::{Link, LinkId};
use crate::registry::ElementRegistry;

/// A network diagram. Lives in memory for the lifetime of the editor.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    registry: ElementRegistry,
    /// Links in creation order.
    links: Vec<Link>,
}

impl Diagram {
    /// Create an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ElementRegistry {
        &mut self.registry
    }

    /// Get an element by ID.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.registry.get(id)
    }

    /// Record a new link. Identical links may coexist.
    pub fn push_link(&mut self, link: Link) -> LinkId {
        let id = link.id();
        self.links.push(link);
        id
    }

    /// All links in creation order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Get a link by ID.
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.iter().find(|link| link.id() == id)
    }

    /// Links starting or ending at an element.
    pub fn links_involving(&self, id: ElementId) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |link| link.involves(id))
    }

    /// Check if the diagram has no elements.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
