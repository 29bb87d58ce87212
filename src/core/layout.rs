use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::core::SkillLevel;
use crate::error::{RadarError, RadarResult};

/// One computed radar vertex in local pixel coordinates.
///
/// Carries the originating angle and an owned copy of the source record so
/// hover/label logic can correlate vertices back to their skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub skill: SkillLevel,
}

/// Full radar layout for one skill sequence.
///
/// Coordinates live in a local space whose origin is the top-left corner of
/// the `2r x 2r` bounding square; the center is always `(radius, radius)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarLayout {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub points: Vec<RadarPoint>,
}

impl RadarLayout {
    /// Returns the polygon vertices in input order.
    #[must_use]
    pub fn polygon_vertices(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|point| (point.x, point.y)).collect()
    }

    /// Vertices formatted as an SVG `points` attribute value.
    #[must_use]
    pub fn svg_points_attribute(&self) -> String {
        self.points
            .iter()
            .map(|point| format!("{},{}", point.x, point.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Looks up a vertex by its skill name.
    #[must_use]
    pub fn point_by_name(&self, name: &str) -> Option<&RadarPoint> {
        self.points.iter().find(|point| point.skill.name == name)
    }

    /// Places a text label along the point's angular ray.
    ///
    /// Labels stay at full distance regardless of animation progress so label
    /// layout is stable while the polygon animates inward.
    pub fn label_position(
        &self,
        point: &RadarPoint,
        label_distance: f64,
    ) -> RadarResult<(f64, f64)> {
        if !label_distance.is_finite() || label_distance <= 0.0 {
            return Err(RadarError::InvalidArgument(
                "label distance must be finite and > 0".to_owned(),
            ));
        }

        Ok((
            self.center_x + label_distance * point.angle.cos(),
            self.center_y + label_distance * point.angle.sin(),
        ))
    }
}

/// Computes radar-chart geometry for an ordered skill sequence.
///
/// Vertices are distributed evenly around a full turn starting at the top
/// (12 o'clock) position and proceeding clockwise in screen coordinates.
/// The distance of vertex `i` from center is
/// `radius * progress * (level / 100)`, so a 100%-level skill at full
/// progress lands exactly on the bounding circle and a 0%-level skill stays
/// on the center.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn compute_radar_layout(
    skills: &[SkillLevel],
    radius: f64,
    progress: f64,
) -> RadarResult<RadarLayout> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(RadarError::InvalidArgument(
            "radius must be finite and > 0".to_owned(),
        ));
    }
    if !progress.is_finite() || !(0.0..=1.0).contains(&progress) {
        return Err(RadarError::InvalidArgument(
            "progress must be finite and in [0, 1]".to_owned(),
        ));
    }
    for skill in skills {
        skill.validate()?;
    }

    let center_x = radius;
    let center_y = radius;

    let mut points = Vec::with_capacity(skills.len());
    if !skills.is_empty() {
        // For a single skill the step is a full turn, leaving the vertex at
        // the top position.
        let angle_step = (2.0 * PI) / skills.len() as f64;
        for (i, skill) in skills.iter().enumerate() {
            let angle = -FRAC_PI_2 + i as f64 * angle_step;
            let distance = radius * progress * (skill.level / 100.0);
            points.push(RadarPoint {
                x: center_x + distance * angle.cos(),
                y: center_y + distance * angle.sin(),
                angle,
                skill: skill.clone(),
            });
        }
    }

    Ok(RadarLayout {
        center_x,
        center_y,
        radius,
        points,
    })
}
