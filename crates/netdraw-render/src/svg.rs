//! SVG output.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use crate::scene::SceneItemKind;
use kurbo::{Point, Rect};
use peniko::Color;
use std::fmt::Write;

/// Renders a scene to a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    out: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&mut self, view: Rect, background: Color) -> RenderResult<()> {
        self.out.clear();
        writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view.x0,
            view.y0,
            view.width(),
            view.height(),
            view.width(),
            view.height()
        )?;
        writeln!(
            self.out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
            view.x0,
            view.y0,
            view.width(),
            view.height(),
            fill(background)
        )?;
        Ok(())
    }

    fn icon(&mut self, rect: Rect, color: Color, initial: char) -> RenderResult<()> {
        writeln!(
            self.out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="6" {}/>"#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            fill(color)
        )?;
        let center = rect.center();
        writeln!(
            self.out,
            r#"  <text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="central" fill="white">{}</text>"#,
            center.x,
            center.y,
            rect.height() * 0.5,
            initial
        )?;
        Ok(())
    }

    fn label(&mut self, text: &str, origin: Point, size: f64, color: Color) -> RenderResult<()> {
        writeln!(
            self.out,
            r#"  <text x="{}" y="{}" font-size="{}" font-family="sans-serif" {}>{}</text>"#,
            origin.x,
            origin.y,
            size,
            fill(color),
            escape(text)
        )?;
        Ok(())
    }

    fn arrow(
        &mut self,
        start: Point,
        end: Point,
        head_size: f64,
        color: Color,
        width: f64,
    ) -> RenderResult<()> {
        writeln!(
            self.out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}"/>"#,
            start.x,
            start.y,
            end.x,
            end.y,
            stroke(color),
            width
        )?;
        let [tip, left, right] = netdraw_core::arrowhead(start, end, head_size);
        writeln!(
            self.out,
            r#"  <polygon points="{},{} {},{} {},{}" {}/>"#,
            tip.x,
            tip.y,
            left.x,
            left.y,
            right.x,
            right.y,
            fill(color)
        )?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&mut self, ctx: &RenderContext) -> RenderResult<String> {
        if !(ctx.padding.is_finite() && ctx.padding >= 0.0) {
            return Err(RendererError::RenderFailed(format!(
                "padding must be finite and non-negative, got {}",
                ctx.padding
            )));
        }

        let scene = ctx.scene;
        let style = &ctx.style;
        let view = scene
            .bounds()
            .unwrap_or(Rect::new(0.0, 0.0, 100.0, 100.0))
            .inflate(ctx.padding, ctx.padding);
        self.begin(view, style.background_color)?;

        for item in scene.items() {
            match &item.kind {
                SceneItemKind::Icon { kind, .. } => {
                    let initial = kind.label().chars().next().unwrap_or('?');
                    self.icon(scene.item_bounds(item), style.icon_color(*kind), initial)?;
                }
                SceneItemKind::Label { text, origin } => {
                    self.label(
                        text,
                        *origin,
                        scene.geometry().label_font_size,
                        style.label_color,
                    )?;
                }
                SceneItemKind::Arrow { start, end } => {
                    self.arrow(
                        *start,
                        *end,
                        scene.arrow_head_size(),
                        style.link_color,
                        style.stroke_width,
                    )?;
                }
            }
        }

        if let Some(line) = scene.preview() {
            writeln!(
                self.out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}" stroke-dasharray="4 4"/>"#,
                line.p0.x,
                line.p0.y,
                line.p1.x,
                line.p1.y,
                stroke(style.preview_color),
                style.stroke_width
            )?;
        }

        self.out.push_str("</svg>\n");
        log::debug!("Rendered {} scene items to SVG", scene.items().len());
        Ok(std::mem::take(&mut self.out))
    }
}

fn hex(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    (
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
        f64::from(rgba.a) / 255.0,
    )
}

fn fill(color: Color) -> String {
    let (hex, opacity) = hex(color);
    if opacity < 1.0 {
        format!(r#"fill="{hex}" fill-opacity="{opacity:.3}""#)
    } else {
        format!(r#"fill="{hex}""#)
    }
}

fn stroke(color: Color) -> String {
    let (hex, opacity) = hex(color);
    if opacity < 1.0 {
        format!(r#"stroke="{hex}" stroke-opacity="{opacity:.3}""#)
    } else {
        format!(r#"stroke="{hex}""#)
    }
}

/// Escape text for XML content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scene, SceneStyle};
    use netdraw_core::{DiagramSurface, ElementKind};

    #[test]
    fn test_empty_scene() {
        let scene = Scene::default();
        let svg = SvgRenderer::new().render(&RenderContext::new(&scene)).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_items_rendered_in_order() {
        let mut scene = Scene::default();
        scene.draw_icon(ElementKind::Router, Point::new(0.0, 0.0));
        scene.draw_label("R&D <core>", Point::new(0.0, 0.0));
        scene.draw_arrow_segment(Point::new(0.0, 0.0), Point::new(100.0, 0.0));

        let svg = SvgRenderer::new().render(&RenderContext::new(&scene)).unwrap();
        assert!(svg.contains("R&amp;D &lt;core&gt;"));
        assert!(svg.contains("#f59e0b"));
        let label_at = svg.find("R&amp;D").unwrap();
        let line_at = svg.find("<line").unwrap();
        assert!(label_at < line_at);
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn test_preview_dashed() {
        let mut scene = Scene::default();
        scene.show_preview_segment(Point::ZERO, Point::new(50.0, 50.0));
        let svg = SvgRenderer::new().render(&RenderContext::new(&scene)).unwrap();
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains("stroke-opacity"));
    }

    #[test]
    fn test_background_color() {
        let scene = Scene::default();
        let style = SceneStyle::default().with_background(Color::from_rgba8(16, 32, 48, 255));
        let ctx = RenderContext::new(&scene).with_style(style);
        let svg = SvgRenderer::new().render(&ctx).unwrap();
        assert!(svg.contains(r##"fill="#102030""##));
    }

    #[test]
    fn test_rejects_negative_padding() {
        let scene = Scene::default();
        let ctx = RenderContext::new(&scene).with_padding(-1.0);
        assert!(matches!(
            SvgRenderer::new().render(&ctx),
            Err(RendererError::RenderFailed(_))
        ));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&apos;");
    }
}
