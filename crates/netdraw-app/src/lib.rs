//! NetDraw application shell.
//!
//! Drives the editor core from a scripted session: a JSON list of pointer
//! gestures and commands, replayed against a [`netdraw_render::Scene`].

mod app;
mod args;
mod error;
pub mod prompt;
pub mod script;

pub use app::{App, StepOutcome, Summary, run};
pub use args::Args;
pub use error::{AppError, AppResult};
pub use prompt::LinePrompt;
pub use script::ScriptCommand;
