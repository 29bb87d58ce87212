use smallvec::SmallVec;

use crate::core::{RadarLayout, SkillCategory, Viewport};
use crate::error::RadarResult;
use crate::render::{
    CirclePrimitive, PolygonPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::RadarStyle;

/// Builds the full draw scene for one category's radar chart.
///
/// The frame contains, in paint order: background rings, the skill polygon
/// (only for three or more vertices), one marker per vertex, one label per
/// vertex at the configured label distance, and the center dot. Output is
/// deterministic for identical inputs.
pub fn build_radar_frame(
    category: &SkillCategory,
    layout: &RadarLayout,
    style: RadarStyle,
    hovered_skill: Option<&str>,
) -> RadarResult<RenderFrame> {
    let accent = category.accent()?;
    let mut frame = RenderFrame::new(Viewport::square_for_radius(layout.radius));

    for i in 1..=style.ring_count {
        let ring_radius = layout.radius * i as f64 / style.ring_count as f64;
        frame = frame.with_circle(CirclePrimitive::stroked(
            layout.center_x,
            layout.center_y,
            ring_radius,
            style.ring_stroke_width,
            style.ring_color,
        ));
    }

    if layout.points.len() >= 3 {
        let mut vertices: SmallVec<[(f64, f64); 8]> = SmallVec::new();
        for point in &layout.points {
            vertices.push((point.x, point.y));
        }
        frame = frame.with_polygon(PolygonPrimitive::new(
            vertices.into_vec(),
            style.polygon_stroke_width,
            accent,
            accent.with_alpha(style.polygon_fill_alpha),
        ));
    }

    for point in &layout.points {
        frame = frame.with_circle(
            CirclePrimitive::stroked(
                point.x,
                point.y,
                style.marker_radius_px,
                style.marker_stroke_width,
                accent,
            )
            .with_fill(style.marker_fill_color),
        );
    }

    for point in &layout.points {
        let (label_x, label_y) = layout.label_position(point, style.label_distance_px)?;
        let color = if hovered_skill == Some(point.skill.name.as_str()) {
            style.highlight_color
        } else {
            style.label_color
        };
        frame = frame.with_text(TextPrimitive::new(
            point.skill.name.clone(),
            label_x,
            label_y,
            style.label_font_size_px,
            color,
            TextHAlign::Center,
        ));
    }

    frame = frame.with_circle(
        CirclePrimitive::stroked(
            layout.center_x,
            layout.center_y,
            style.center_dot_radius_px,
            0.0,
            accent,
        )
        .with_fill(accent),
    );

    Ok(frame)
}
