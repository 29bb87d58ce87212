use crate::render::Color;

/// Style contract used by the frame builder.
///
/// Category accent colors come from the catalog; this type carries everything
/// else the frame builder needs to turn a layout into draw primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarStyle {
    /// Number of evenly spaced background rings.
    pub ring_count: usize,
    pub ring_color: Color,
    pub ring_stroke_width: f64,
    /// Alpha applied to the category accent when filling the polygon.
    pub polygon_fill_alpha: f64,
    pub polygon_stroke_width: f64,
    pub marker_radius_px: f64,
    pub marker_fill_color: Color,
    pub marker_stroke_width: f64,
    pub label_font_size_px: f64,
    pub label_color: Color,
    /// Label color while the corresponding skill is hovered.
    pub highlight_color: Color,
    /// Distance of labels from center, independent of animation progress.
    pub label_distance_px: f64,
    pub center_dot_radius_px: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            ring_count: 5,
            ring_color: Color::rgba(0.5, 0.5, 0.5, 0.3),
            ring_stroke_width: 1.0,
            polygon_fill_alpha: 0.125,
            polygon_stroke_width: 2.0,
            marker_radius_px: 6.0,
            marker_fill_color: Color::rgb(1.0, 1.0, 1.0),
            marker_stroke_width: 2.0,
            label_font_size_px: 12.0,
            label_color: Color::rgb(0.1, 0.1, 0.1),
            // #e9c46a, the default accent of the reference theme.
            highlight_color: Color::rgb(233.0 / 255.0, 196.0 / 255.0, 106.0 / 255.0),
            label_distance_px: 160.0,
            center_dot_radius_px: 2.0,
        }
    }
}
