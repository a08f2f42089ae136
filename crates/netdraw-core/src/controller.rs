//! Selection controller: the click/drag/release state machine.
//!
//! The controller owns the [`Diagram`] and reacts to pointer gestures and
//! user commands. Interaction state lives in an [`InteractionSession`] that
//! the caller passes to every handler.

use crate::config::{EditorConfig, LinkTrigger};
use crate::diagram::Diagram;
use crate::element::{ElementKind, ElementRef};
use crate::hit_test;
use crate::input::{Gesture, InputState, PointerEvent};
use crate::link::LinkId;
use crate::link_builder::try_build_link;
use crate::property_editor::{RenameOutcome, RenamePrompt, prompt_rename};
use crate::selection::{InteractionSession, MAX_ARMED};
use crate::surface::DiagramSurface;
use kurbo::{Point, Vec2};

/// What handling an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Nothing under the pointer, or nothing to do.
    Ignored,
    /// An element was pressed: a drag started, and it may have been armed.
    /// `link` is set when this press completed a link.
    Pressed {
        element: ElementRef,
        armed: bool,
        link: Option<LinkId>,
    },
    /// The dragged element moved.
    Moved { element: ElementRef, delta: Vec2 },
    /// A drag ended.
    Released { element: ElementRef },
    /// An element got a new name.
    Renamed { element: ElementRef, name: String },
    /// The rename prompt was cancelled.
    RenameCancelled { element: ElementRef },
    /// The pending-link preview was drawn to the pointer.
    PreviewUpdated,
}

/// Reacts to user input on a single diagram.
#[derive(Debug, Clone)]
pub struct SelectionController {
    diagram: Diagram,
    config: EditorConfig,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(Diagram::new(), EditorConfig::default())
    }
}

impl SelectionController {
    /// Create a controller for a diagram.
    pub fn new(diagram: Diagram, config: EditorConfig) -> Self {
        Self { diagram, config }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Give the diagram back.
    pub fn into_diagram(self) -> Diagram {
        self.diagram
    }

    /// `AddElement` command: place an element and draw it.
    ///
    /// Without a position, the configured default placement is used.
    pub fn add_element(
        &mut self,
        kind: ElementKind,
        position: Option<Point>,
        surface: &mut dyn DiagramSurface,
    ) -> ElementRef {
        let position = position.unwrap_or(self.config.default_position);
        let registry = self.diagram.registry_mut();
        let reference = registry.add(kind, position);

        if let Some(element) = registry.get(reference.id) {
            let icon = surface.draw_icon(kind, position);
            let label = surface.draw_label(&element.name, position);
            log::info!("Added {} at ({}, {})", element.name, position.x, position.y);
            if let Err(err) = registry.bind_handles(reference.id, icon, label) {
                log::warn!("Could not bind surface items: {err}");
            }
        }
        surface.redraw();
        reference
    }

    /// `DrawLink` command: link the two armed elements, if there are two.
    pub fn draw_link(
        &mut self,
        session: &mut InteractionSession,
        surface: &mut dyn DiagramSurface,
    ) -> Option<LinkId> {
        try_build_link(
            &mut self.diagram,
            session,
            self.config.arrow_head_size,
            surface,
        )
    }

    /// Element under the pointer, if any.
    pub fn pick(&self, point: Point, surface: &dyn DiagramSurface) -> Option<ElementRef> {
        hit_test::pick(
            self.diagram.registry(),
            surface,
            point,
            self.config.hit_tolerance,
            &self.config.geometry,
        )
    }

    /// Primary button pressed.
    ///
    /// Starts dragging the element under the pointer and arms it as a link
    /// endpoint while fewer than two are armed. Arming the second element
    /// builds the link right away unless links are triggered explicitly.
    pub fn primary_press(
        &mut self,
        session: &mut InteractionSession,
        point: Point,
        surface: &mut dyn DiagramSurface,
    ) -> EventOutcome {
        let Some(element) = self.pick(point, surface) else {
            log::debug!("Press at ({}, {}) hit the background", point.x, point.y);
            clear_preview(session, surface);
            return EventOutcome::Ignored;
        };

        session.begin_drag(element, point);
        let armed = session.arm(element);
        log::debug!(
            "Pressed {}; armed {}/{}",
            element.id,
            session.armed().len(),
            MAX_ARMED
        );

        let complete = armed && session.armed().len() == MAX_ARMED;
        if complete {
            clear_preview(session, surface);
        }
        let link = if complete && self.config.link_trigger == LinkTrigger::OnSecondArm {
            self.draw_link(session, surface)
        } else {
            None
        };

        EventOutcome::Pressed {
            element,
            armed,
            link,
        }
    }

    /// Pointer moved with the primary button held.
    ///
    /// Moves the dragged element by the pointer delta since the last event.
    /// There is no clamping; elements may leave the visible canvas.
    pub fn primary_drag(
        &mut self,
        session: &mut InteractionSession,
        point: Point,
        surface: &mut dyn DiagramSurface,
    ) -> EventOutcome {
        let Some((element, delta)) = session.advance_drag(point) else {
            return EventOutcome::Ignored;
        };

        let Some(current) = self.diagram.registry().resolve(element) else {
            log::warn!("Dragged element {} is gone; ending drag", element.id);
            session.end_drag();
            return EventOutcome::Ignored;
        };
        let target = current.position + delta;
        let handles: Vec<_> = current.handles().collect();

        if let Err(err) = self.diagram.registry_mut().set_position(element.id, target) {
            log::warn!("{err}");
            session.end_drag();
            return EventOutcome::Ignored;
        }

        if delta != Vec2::ZERO {
            for handle in handles {
                surface.move_by_handle(handle, delta);
            }
            surface.redraw();
        }

        EventOutcome::Moved { element, delta }
    }

    /// Primary button released. Ends the drag; armed elements stay armed.
    pub fn primary_release(&mut self, session: &mut InteractionSession) -> EventOutcome {
        match session.dragged() {
            Some(element) => {
                session.end_drag();
                EventOutcome::Released { element }
            }
            None => EventOutcome::Ignored,
        }
    }

    /// Secondary button pressed: edit the properties of the element under the
    /// pointer. Armed elements and the drag are untouched.
    pub fn secondary_press(
        &mut self,
        point: Point,
        prompt: &mut dyn RenamePrompt,
        surface: &mut dyn DiagramSurface,
    ) -> EventOutcome {
        let Some(element) = self.pick(point, surface) else {
            return EventOutcome::Ignored;
        };

        match prompt_rename(&mut self.diagram, element, prompt, surface) {
            Ok(RenameOutcome::Renamed(name)) => EventOutcome::Renamed { element, name },
            Ok(RenameOutcome::Cancelled) => EventOutcome::RenameCancelled { element },
            Err(err) => {
                log::warn!("{err}");
                EventOutcome::Ignored
            }
        }
    }

    /// Pointer moved with no button held.
    ///
    /// While exactly one element is armed, shows a preview segment from its
    /// anchor to the pointer. Otherwise any stale preview is removed.
    pub fn hover(
        &mut self,
        session: &mut InteractionSession,
        point: Point,
        surface: &mut dyn DiagramSurface,
    ) -> EventOutcome {
        if session.is_dragging() {
            return EventOutcome::Ignored;
        }
        if session.armed().len() != 1 {
            clear_preview(session, surface);
            return EventOutcome::Ignored;
        }
        let [armed] = session.armed() else {
            return EventOutcome::Ignored;
        };
        let Some(anchor) = self.diagram.registry().resolve(*armed).map(|e| e.anchor()) else {
            return EventOutcome::Ignored;
        };

        surface.show_preview_segment(anchor, point);
        session.set_preview_active(true);
        EventOutcome::PreviewUpdated
    }

    /// Route a gesture to its handler.
    pub fn dispatch(
        &mut self,
        session: &mut InteractionSession,
        gesture: Gesture,
        prompt: &mut dyn RenamePrompt,
        surface: &mut dyn DiagramSurface,
    ) -> EventOutcome {
        match gesture {
            Gesture::PrimaryPress { position } => self.primary_press(session, position, surface),
            Gesture::PrimaryDrag { position } => self.primary_drag(session, position, surface),
            Gesture::PrimaryRelease { .. } => self.primary_release(session),
            Gesture::SecondaryPress { position } => {
                self.secondary_press(position, prompt, surface)
            }
            Gesture::Hover { position } => self.hover(session, position, surface),
        }
    }

    /// Feed a raw pointer event through the input tracker.
    pub fn handle_pointer_event(
        &mut self,
        session: &mut InteractionSession,
        input: &mut InputState,
        event: PointerEvent,
        prompt: &mut dyn RenamePrompt,
        surface: &mut dyn DiagramSurface,
    ) -> EventOutcome {
        match input.handle_pointer_event(event) {
            Some(gesture) => self.dispatch(session, gesture, prompt, surface),
            None => EventOutcome::Ignored,
        }
    }
}

/// Remove the pending-link preview, if one is showing.
fn clear_preview(session: &mut InteractionSession, surface: &mut dyn DiagramSurface) {
    if session.preview_active() {
        surface.clear_preview();
        session.set_preview_active(false);
    }
}
