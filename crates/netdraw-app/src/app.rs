//! Session runner.

use crate::args::Args;
use crate::error::{AppError, AppResult};
use crate::prompt::LinePrompt;
use crate::script::{self, ScriptCommand};
use netdraw_core::{
    Diagram, EditorConfig, Element, ElementRef, EventOutcome, InputState, InteractionMode,
    InteractionSession, Link, LinkId, PromptResponse, QueuedPrompt, RenamePrompt,
    SelectionController,
};
use netdraw_render::{RenderContext, Renderer, Scene, SvgRenderer};
use serde::Serialize;
use std::fs;

/// What a script step did.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Added(ElementRef),
    Event(EventOutcome),
    Link(Option<LinkId>),
}

/// The diagram after a session, as printed on stdout.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub elements: Vec<&'a Element>,
    pub links: &'a [Link],
    pub armed: Vec<ElementRef>,
}

/// One editing session: the controller, its interaction state and the scene
/// it draws on.
pub struct App {
    controller: SelectionController,
    session: InteractionSession,
    input: InputState,
    scene: Scene,
    prompt: Box<dyn RenamePrompt>,
}

impl App {
    /// Create a session. `prompt` answers renames the script leaves open.
    pub fn new(config: EditorConfig, prompt: Box<dyn RenamePrompt>) -> Self {
        let scene = Scene::new(&config);
        Self {
            controller: SelectionController::new(Diagram::new(), config),
            session: InteractionSession::new(),
            input: InputState::new(),
            scene,
            prompt,
        }
    }

    pub fn diagram(&self) -> &Diagram {
        self.controller.diagram()
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Apply one script command.
    pub fn apply(&mut self, command: ScriptCommand) -> StepOutcome {
        match command {
            ScriptCommand::Add { kind, at } => {
                StepOutcome::Added(self.controller.add_element(kind, at, &mut self.scene))
            }
            ScriptCommand::DrawLink => {
                StepOutcome::Link(self.controller.draw_link(&mut self.session, &mut self.scene))
            }
            ScriptCommand::Pointer { event } => {
                StepOutcome::Event(self.controller.handle_pointer_event(
                    &mut self.session,
                    &mut self.input,
                    event,
                    &mut *self.prompt,
                    &mut self.scene,
                ))
            }
            ScriptCommand::SecondaryPress {
                at,
                answer: Some(answer),
                ..
            } => {
                let mut prompt = QueuedPrompt::new([PromptResponse::Submitted(answer)]);
                StepOutcome::Event(self.controller.secondary_press(at, &mut prompt, &mut self.scene))
            }
            ScriptCommand::SecondaryPress {
                at, cancel: true, ..
            } => {
                let mut prompt = QueuedPrompt::default();
                StepOutcome::Event(self.controller.secondary_press(at, &mut prompt, &mut self.scene))
            }
            other => match other.gesture() {
                Some(gesture) => StepOutcome::Event(self.controller.dispatch(
                    &mut self.session,
                    gesture,
                    &mut *self.prompt,
                    &mut self.scene,
                )),
                None => StepOutcome::Event(EventOutcome::Ignored),
            },
        }
    }

    /// Apply every command in order.
    pub fn run_script(&mut self, commands: Vec<ScriptCommand>) -> Vec<StepOutcome> {
        commands
            .into_iter()
            .map(|command| {
                let outcome = self.apply(command);
                log::debug!("{outcome:?}; mode {:?}", self.session.mode());
                outcome
            })
            .collect()
    }

    /// Current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.session.mode()
    }

    /// Snapshot of the diagram.
    pub fn summary(&self) -> Summary<'_> {
        let diagram = self.controller.diagram();
        Summary {
            elements: diagram.registry().elements_ordered().collect(),
            links: diagram.links(),
            armed: self.session.armed().to_vec(),
        }
    }

    /// Render the scene to SVG.
    pub fn render_svg(&self) -> AppResult<String> {
        let ctx = RenderContext::new(&self.scene);
        Ok(SvgRenderer::new().render(&ctx)?)
    }
}

fn read(path: &str) -> AppResult<String> {
    fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_string(),
        source,
    })
}

/// Run the command-line session described by `args`.
pub fn run(args: &Args) -> AppResult<()> {
    let config = match &args.config {
        Some(path) => EditorConfig::from_json(&read(path)?)?,
        None => EditorConfig::default(),
    };
    log::debug!("Editor config: {config:?}");

    let commands = script::parse(&read(&args.script)?).map_err(AppError::Script)?;
    log::info!("Replaying {} commands from {}", commands.len(), args.script);

    let mut app = App::new(config, Box::new(LinePrompt::stdio()));
    app.run_script(commands);

    let summary = serde_json::to_string_pretty(&app.summary()).map_err(AppError::Summary)?;
    println!("{summary}");

    if let Some(path) = &args.output {
        let svg = app.render_svg()?;
        fs::write(path, svg).map_err(|source| AppError::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("Wrote {path}");
    }
    Ok(())
}
