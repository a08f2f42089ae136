//! NetDraw Render Library
//!
//! A retained display list that implements the core's drawing surface, and
//! an SVG renderer for it.

mod renderer;
pub mod scene;
mod svg;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, SceneStyle};
pub use scene::{Scene, SceneItem, SceneItemKind};
pub use svg::SvgRenderer;
