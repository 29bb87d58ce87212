use crate::error::{RadarError, RadarResult};

use super::{RadarEngineConfig, RadarStyle};

pub(super) fn validate_engine_config(config: RadarEngineConfig) -> RadarResult<RadarEngineConfig> {
    if !config.radius.is_finite() || config.radius <= 0.0 {
        return Err(RadarError::InvalidArgument(
            "config radius must be finite and > 0".to_owned(),
        ));
    }
    if !config.initial_progress.is_finite() || !(0.0..=1.0).contains(&config.initial_progress) {
        return Err(RadarError::InvalidArgument(
            "config initial_progress must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_radar_style(style: RadarStyle) -> RadarResult<RadarStyle> {
    if style.ring_count == 0 || style.ring_count > 16 {
        return Err(RadarError::InvalidArgument(
            "style `ring_count` must be in 1..=16".to_owned(),
        ));
    }

    style.ring_color.validate()?;
    style.marker_fill_color.validate()?;
    style.label_color.validate()?;
    style.highlight_color.validate()?;

    if !style.polygon_fill_alpha.is_finite() || !(0.0..=1.0).contains(&style.polygon_fill_alpha) {
        return Err(RadarError::InvalidArgument(
            "style `polygon_fill_alpha` must be finite and in [0, 1]".to_owned(),
        ));
    }

    for (name, value) in [
        ("ring_stroke_width", style.ring_stroke_width),
        ("polygon_stroke_width", style.polygon_stroke_width),
        ("marker_radius_px", style.marker_radius_px),
        ("marker_stroke_width", style.marker_stroke_width),
        ("label_font_size_px", style.label_font_size_px),
        ("label_distance_px", style.label_distance_px),
        ("center_dot_radius_px", style.center_dot_radius_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(RadarError::InvalidArgument(format!(
                "style `{name}` must be finite and > 0"
            )));
        }
    }

    Ok(style)
}
