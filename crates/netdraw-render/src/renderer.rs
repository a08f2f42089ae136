//! Renderer trait abstraction.

use crate::scene::Scene;
use netdraw_core::ElementKind;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Output formatting failed")]
    Format(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Colors and strokes used to draw a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub background_color: Color,
    pub client_color: Color,
    pub switch_color: Color,
    pub router_color: Color,
    pub label_color: Color,
    pub link_color: Color,
    pub preview_color: Color,
    pub stroke_width: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgba8(250, 250, 250, 255),
            client_color: Color::from_rgba8(59, 130, 246, 255), // Blue
            switch_color: Color::from_rgba8(16, 185, 129, 255), // Emerald
            router_color: Color::from_rgba8(245, 158, 11, 255), // Amber
            label_color: Color::from_rgba8(30, 30, 30, 255),
            link_color: Color::from_rgba8(60, 60, 60, 255),
            preview_color: Color::from_rgba8(236, 72, 153, 180), // Pink
            stroke_width: 2.0,
        }
    }
}

impl SceneStyle {
    /// Fill color of an element icon.
    pub fn icon_color(&self, kind: ElementKind) -> Color {
        match kind {
            ElementKind::Client => self.client_color,
            ElementKind::Switch => self.switch_color,
            ElementKind::Router => self.router_color,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the link stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }
}

/// Context for a single render pass.
pub struct RenderContext<'a> {
    /// The scene to render.
    pub scene: &'a Scene,
    /// Colors and strokes.
    pub style: SceneStyle,
    /// Margin around the scene bounds.
    pub padding: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with the default style.
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            style: SceneStyle::default(),
            padding: 20.0,
        }
    }

    /// Set the style.
    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the padding around the scene.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// The rendered artifact.
    type Output;

    /// Render a scene.
    fn render(&mut self, ctx: &RenderContext) -> RenderResult<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors_distinct() {
        let style = SceneStyle::default();
        assert_ne!(style.icon_color(ElementKind::Client), style.icon_color(ElementKind::Switch));
        assert_ne!(style.icon_color(ElementKind::Switch), style.icon_color(ElementKind::Router));
    }

    #[test]
    fn test_context_builder() {
        let scene = Scene::default();
        let ctx = RenderContext::new(&scene)
            .with_padding(5.0)
            .with_style(SceneStyle::default().with_stroke_width(3.0));
        assert!((ctx.padding - 5.0).abs() < f64::EPSILON);
        assert!((ctx.style.stroke_width - 3.0).abs() < f64::EPSILON);
    }
}
