use crate::error::{RadarError, RadarResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses a CSS-style `#rrggbb` or `#rrggbbaa` hex color.
    pub fn from_hex(input: &str) -> RadarResult<Self> {
        let digits = input.strip_prefix('#').ok_or_else(|| {
            RadarError::InvalidArgument(format!("hex color `{input}` must start with `#`"))
        })?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(RadarError::InvalidArgument(format!(
                "hex color `{input}` must have 6 or 8 digits"
            )));
        }

        let channel = |range: std::ops::Range<usize>| -> RadarResult<f64> {
            let value = u8::from_str_radix(&digits[range], 16).map_err(|_| {
                RadarError::InvalidArgument(format!("hex color `{input}` has invalid digits"))
            })?;
            Ok(f64::from(value) / 255.0)
        };

        let red = channel(0..2)?;
        let green = channel(2..4)?;
        let blue = channel(4..6)?;
        let alpha = if digits.len() == 8 { channel(6..8)? } else { 1.0 };
        Ok(Self::rgba(red, green, blue, alpha))
    }

    /// Same color with a replaced alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> RadarResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RadarError::InvalidArgument(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one circle in pixel space.
///
/// Used for background rings (no fill), vertex markers, and the center dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub stroke: Color,
    pub fill: Option<Color>,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn stroked(cx: f64, cy: f64, radius: f64, stroke_width: f64, stroke: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            stroke_width,
            stroke,
            fill: None,
        }
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(RadarError::InvalidArgument(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(RadarError::InvalidArgument(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(RadarError::InvalidArgument(
                "circle stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.stroke.validate()?;
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one closed polygon in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub vertices: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub stroke: Color,
    pub fill: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(vertices: Vec<(f64, f64)>, stroke_width: f64, stroke: Color, fill: Color) -> Self {
        Self {
            vertices,
            stroke_width,
            stroke,
            fill,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.vertices.len() < 3 {
            return Err(RadarError::InvalidArgument(
                "polygon must have at least 3 vertices".to_owned(),
            ));
        }
        for (x, y) in &self.vertices {
            if !x.is_finite() || !y.is_finite() {
                return Err(RadarError::InvalidArgument(
                    "polygon vertices must be finite".to_owned(),
                ));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RadarError::InvalidArgument(
                "polygon stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke.validate()?;
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.text.is_empty() {
            return Err(RadarError::InvalidArgument(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(RadarError::InvalidArgument(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(RadarError::InvalidArgument(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
