//! Editing element properties through a prompt.
//!
//! The prompt is a synchronous request/response: the caller blocks until the
//! user answers or cancels. Only the name is editable; whatever string comes
//! back is applied as-is, including an empty one.

use crate::diagram::Diagram;
use crate::element::{ElementKind, ElementRef};
use crate::error::{DiagramError, DiagramResult};
use crate::surface::DiagramSurface;
use std::collections::VecDeque;
use std::fmt;

/// Current properties of an element, shown to seed the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementProperties {
    pub name: String,
    pub kind: ElementKind,
}

impl fmt::Display for ElementProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Icon: {}", self.name, self.kind)
    }
}

/// The user's answer to a rename prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Submitted(String),
    Cancelled,
}

/// Something that can ask the user for a new element name.
pub trait RenamePrompt {
    /// Block until the user submits a name or cancels.
    fn prompt_name(&mut self, properties: &ElementProperties) -> PromptResponse;
}

impl<F> RenamePrompt for F
where
    F: FnMut(&ElementProperties) -> PromptResponse,
{
    fn prompt_name(&mut self, properties: &ElementProperties) -> PromptResponse {
        self(properties)
    }
}

/// Prompt that answers from a queue; cancels once the queue runs dry.
#[derive(Debug, Clone, Default)]
pub struct QueuedPrompt {
    responses: VecDeque<PromptResponse>,
}

impl QueuedPrompt {
    pub fn new(responses: impl IntoIterator<Item = PromptResponse>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
        }
    }

    /// Queue another answer.
    pub fn push(&mut self, response: PromptResponse) {
        self.responses.push_back(response);
    }
}

impl RenamePrompt for QueuedPrompt {
    fn prompt_name(&mut self, _properties: &ElementProperties) -> PromptResponse {
        self.responses.pop_front().unwrap_or(PromptResponse::Cancelled)
    }
}

/// What a rename attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed(String),
    Cancelled,
}

/// Ask for a new name for `element` and apply it.
///
/// On cancel the element is left unchanged.
pub fn prompt_rename(
    diagram: &mut Diagram,
    element: ElementRef,
    prompt: &mut dyn RenamePrompt,
    surface: &mut dyn DiagramSurface,
) -> DiagramResult<RenameOutcome> {
    let current = diagram
        .registry()
        .resolve(element)
        .ok_or(DiagramError::UnknownElement(element.id))?;
    let properties = ElementProperties {
        name: current.name.clone(),
        kind: current.kind(),
    };
    let label_handle = current.label_handle();

    match prompt.prompt_name(&properties) {
        PromptResponse::Cancelled => {
            log::debug!("Rename of {} cancelled", properties.name);
            Ok(RenameOutcome::Cancelled)
        }
        PromptResponse::Submitted(name) => {
            diagram.registry_mut().rename(element.id, name.clone())?;
            if let Some(handle) = label_handle {
                surface.set_label_text(handle, &name);
                surface.redraw();
            }
            log::info!("Renamed {} to {}", properties.name, name);
            Ok(RenameOutcome::Renamed(name))
        }
    }
}
