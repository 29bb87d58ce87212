use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square viewport spanning the `2r x 2r` bounding box of a chart radius.
    #[must_use]
    pub fn square_for_radius(radius: f64) -> Self {
        let side = (radius * 2.0).ceil().max(1.0) as u32;
        Self::new(side, side)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One labeled proficiency sample, the input record of the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub name: String,
    /// Percentage proficiency in `[0, 100]`.
    pub level: f64,
}

impl SkillLevel {
    pub fn new(name: impl Into<String>, level: f64) -> RadarResult<Self> {
        let skill = Self {
            name: name.into(),
            level,
        };
        skill.validate()?;
        Ok(skill)
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.name.is_empty() {
            return Err(RadarError::InvalidArgument(
                "skill name must not be empty".to_owned(),
            ));
        }
        if !self.level.is_finite() || !(0.0..=100.0).contains(&self.level) {
            return Err(RadarError::InvalidArgument(format!(
                "skill `{}` level must be finite and in [0, 100]",
                self.name
            )));
        }
        Ok(())
    }
}
