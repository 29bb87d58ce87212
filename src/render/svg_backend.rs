use std::fmt::Write as _;

use crate::error::RadarResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Renderer backend producing a standalone SVG document per frame.
///
/// The renderer keeps the last produced document so hosts can embed or
/// persist it after each pass.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG markup from the most recent render pass.
    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()> {
        frame.validate()?;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            frame.viewport.width, frame.viewport.height, frame.viewport.width, frame.viewport.height
        );

        for circle in &frame.circles {
            let fill = circle.fill.map_or_else(|| "none".to_owned(), svg_color);
            let _ = writeln!(
                svg,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                fill,
                svg_color(circle.stroke),
                circle.stroke_width
            );
        }

        for polygon in &frame.polygons {
            let points = polygon
                .vertices
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(
                svg,
                r#"  <polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                points,
                svg_color(polygon.fill),
                svg_color(polygon.stroke),
                polygon.stroke_width
            );
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}">{}</text>"#,
                text.x,
                text.y,
                text.font_size_px,
                svg_color(text.color),
                anchor,
                escape_text(&text.text)
            );
        }

        svg.push_str("</svg>\n");
        self.last_document = Some(svg);
        Ok(())
    }
}

fn svg_color(color: Color) -> String {
    format!(
        "rgba({},{},{},{})",
        (color.red * 255.0).round() as u8,
        (color.green * 255.0).round() as u8,
        (color.blue * 255.0).round() as u8,
        color.alpha
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
