//! NetDraw Core Library
//!
//! Platform-agnostic data model and interaction logic for the NetDraw network
//! diagram editor. Rendering happens behind the [`DiagramSurface`] trait.

pub mod config;
pub mod controller;
pub mod diagram;
pub mod element;
pub mod error;
pub mod input;
pub mod link;
pub mod link_builder;
pub mod property_editor;
pub mod registry;
pub mod selection;
pub mod surface;

pub use config::{EditorConfig, LinkTrigger};
pub use controller::{EventOutcome, SelectionController};
pub use diagram::Diagram;
pub use element::{Element, ElementGeometry, ElementId, ElementKind, ElementPart, ElementRef, Port};
pub use error::{ConfigError, DiagramError, DiagramResult};
pub use hit_test::{Hit, pick, pick_geometry};
pub use input::{Gesture, InputState, MouseButton, PointerEvent};
pub use link::{Link, LinkId, arrowhead};
pub use link_builder::try_build_link;
pub use property_editor::{
    ElementProperties, PromptResponse, QueuedPrompt, RenameOutcome, RenamePrompt, prompt_rename,
};
pub use registry::ElementRegistry;
pub use selection::{InteractionMode, InteractionSession, MAX_ARMED};
pub use surface::{DiagramSurface, SurfaceHandle};
