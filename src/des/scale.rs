//! Continuous color scales.
//!
//! A [`ColorScale`] maps a numeric domain to colors, and is consumed two
//! ways by the continuous legend: color-per-domain-value for the gradient,
//! and domain-value-per-position for the ticks.
use crate::ColorU8;

/// A numeric domain, from start to end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    start: f64,
    end: f64,
}

impl Domain {
    /// Create a domain from its start and end values
    pub fn new(start: f64, end: f64) -> Self {
        Domain { start, end }
    }

    /// The domain start
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The domain end
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The signed extent of the domain
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Normalize a domain value into [0, 1].
    ///
    /// A zero-span domain maps every value to 0 (degenerate but valid).
    /// Values outside the domain are clamped.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            0.0
        } else {
            ((value - self.start) / span).clamp(0.0, 1.0)
        }
    }

    /// The domain value at normalized position `t`
    pub fn value_at(&self, t: f64) -> f64 {
        self.start + t * self.span()
    }
}

impl From<(f64, f64)> for Domain {
    fn from((start, end): (f64, f64)) -> Self {
        Domain::new(start, end)
    }
}

/// The color progression of a scale
#[derive(Debug, Clone, PartialEq)]
pub enum Ramp {
    /// Evenly spaced color knots, interpolated linearly in between
    Interpolated(Vec<ColorU8>),
    /// Discrete color bands of equal domain share, no interpolation
    Stepped(Vec<ColorU8>),
}

impl Ramp {
    /// The color knots or bands of the ramp
    pub fn colors(&self) -> &[ColorU8] {
        match self {
            Ramp::Interpolated(colors) => colors,
            Ramp::Stepped(colors) => colors,
        }
    }

    /// Whether the ramp is made of discrete bands
    pub fn is_stepped(&self) -> bool {
        matches!(self, Ramp::Stepped(..))
    }
}

/// A continuous mapping from a numeric domain to colors
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: Domain,
    ramp: Ramp,
}

impl ColorScale {
    /// Create a scale interpolating linearly between evenly spaced color knots
    pub fn interpolated(domain: impl Into<Domain>, colors: Vec<ColorU8>) -> Self {
        ColorScale {
            domain: domain.into(),
            ramp: Ramp::Interpolated(colors),
        }
    }

    /// Create a scale of discrete color bands of equal domain share
    pub fn stepped(domain: impl Into<Domain>, colors: Vec<ColorU8>) -> Self {
        ColorScale {
            domain: domain.into(),
            ramp: Ramp::Stepped(colors),
        }
    }

    /// The numeric domain of the scale
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// The color progression of the scale
    pub fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    /// The color at normalized position `t` in [0, 1].
    ///
    /// Panics if the ramp is empty; [`crate::drawing`] rejects empty ramps
    /// before geometry is computed.
    pub fn color_at(&self, t: f64) -> ColorU8 {
        let t = t.clamp(0.0, 1.0) as f32;
        match &self.ramp {
            Ramp::Interpolated(colors) => {
                assert!(!colors.is_empty(), "empty color ramp");
                if colors.len() == 1 {
                    return colors[0];
                }
                let segments = (colors.len() - 1) as f32;
                let pos = t * segments;
                let idx = (pos.floor() as usize).min(colors.len() - 2);
                colors[idx].lerp(&colors[idx + 1], pos - idx as f32)
            }
            Ramp::Stepped(colors) => {
                assert!(!colors.is_empty(), "empty color ramp");
                let idx = ((t * colors.len() as f32).floor() as usize).min(colors.len() - 1);
                colors[idx]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn normalize_and_clamp() {
        let d = Domain::new(0.0, 100.0);
        assert_eq!(d.normalize(0.0), 0.0);
        assert_eq!(d.normalize(50.0), 0.5);
        assert_eq!(d.normalize(100.0), 1.0);
        assert_eq!(d.normalize(150.0), 1.0);
        assert_eq!(d.normalize(-50.0), 0.0);
    }

    #[test]
    fn normalize_zero_span() {
        let d = Domain::new(5.0, 5.0);
        assert_eq!(d.normalize(5.0), 0.0);
        assert_eq!(d.normalize(100.0), 0.0);
    }

    #[test]
    fn interpolated_color_at() {
        let scale = ColorScale::interpolated((0.0, 1.0), vec![color::BLACK, color::WHITE]);
        assert_eq!(scale.color_at(0.0), color::BLACK);
        assert_eq!(scale.color_at(1.0), color::WHITE);
        assert_eq!(scale.color_at(0.5).rgba(), [128, 128, 128, 255]);
    }

    #[test]
    fn stepped_color_at() {
        let scale = ColorScale::stepped((0.0, 1.0), vec![color::RED, color::GREEN, color::BLUE]);
        assert_eq!(scale.color_at(0.0), color::RED);
        assert_eq!(scale.color_at(0.4), color::GREEN);
        assert_eq!(scale.color_at(1.0), color::BLUE);
    }
}
