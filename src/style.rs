//! Style definitions for lines, fills and themes.
pub(crate) mod defaults;
pub mod theme;

pub use crate::style::theme::Theme;
use crate::color::{Color, ResolveColor};
use crate::render;

/// Dash pattern for dashed lines
///
/// A dash pattern is a sequence of lengths that specify the lengths of
/// alternating dashes and gaps. The lengths are relative to the line
/// width, so a pattern scales with the line width and remains visually
/// consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Dash(pub Vec<f32>);

impl Default for Dash {
    fn default() -> Self {
        Dash(vec![5.0, 5.0])
    }
}

/// Line pattern defines how the line is drawn
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LinePattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line. The pattern is relative to the line width.
    Dash(Dash),
    /// Dotted line. Equivalent to Dash(1.0, 1.0)
    Dot,
}

impl From<Dash> for LinePattern {
    fn from(dash: Dash) -> Self {
        LinePattern::Dash(dash)
    }
}

const DOT_DASH: &[f32] = &[1.0, 1.0];

/// Line style definition
///
/// The color is a generic parameter to support different color resolution
/// strategies, such as fixed colors or theme-based colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<C: Color> {
    /// Line color
    pub color: C,
    /// Line width in layout units
    pub width: f32,
    /// Line pattern
    pub pattern: LinePattern,
}

impl<C: Color> Line<C> {
    /// Set the line width, returning self for chaining
    pub fn with_width(self, width: f32) -> Self {
        Line { width, ..self }
    }

    /// Set the line pattern, returning self for chaining
    pub fn with_pattern(self, pattern: LinePattern) -> Self {
        Line { pattern, ..self }
    }

    /// Convert to a renderable stroke, resolving colors with the provided resolver
    pub fn as_stroke<'a, R>(&'a self, rc: &R) -> render::Stroke<'a>
    where
        R: ResolveColor<C>,
    {
        let pattern = match &self.pattern {
            LinePattern::Solid => render::LinePattern::Solid,
            LinePattern::Dash(Dash(a)) => render::LinePattern::Dash(a.as_slice()),
            LinePattern::Dot => render::LinePattern::Dash(DOT_DASH),
        };

        render::Stroke {
            color: self.color.resolve(rc),
            width: self.width,
            pattern,
        }
    }
}

impl<C: Color> From<C> for Line<C> {
    fn from(color: C) -> Self {
        Line {
            color,
            width: 1.0,
            pattern: LinePattern::default(),
        }
    }
}

impl<C: Color> From<(C, f32)> for Line<C> {
    fn from((color, width): (C, f32)) -> Self {
        Line {
            color,
            width,
            pattern: LinePattern::default(),
        }
    }
}

/// Fill style definition
///
/// The color is a generic parameter to support different color resolution
/// strategies, such as fixed colors or theme-based colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill<C: Color> {
    /// Fill color
    pub color: C,
    /// Fill opacity (0.0 to 1.0)
    pub opacity: Option<f32>,
}

impl<C: Color> Fill<C> {
    /// Set the fill opacity (0.0 to 1.0), returning self for chaining
    pub fn with_opacity(self, opacity: f32) -> Self {
        Fill {
            opacity: Some(opacity),
            ..self
        }
    }

    /// Convert to a renderable paint, resolving colors with the provided resolver
    pub fn as_paint<R>(&self, rc: &R) -> render::Paint<'static>
    where
        R: ResolveColor<C>,
    {
        let color = match self.opacity {
            None => self.color.resolve(rc),
            Some(opacity) => self.color.resolve(rc).with_opacity(opacity),
        };
        render::Paint::Solid(color)
    }
}

impl<C: Color> From<C> for Fill<C> {
    fn from(color: C) -> Self {
        Fill {
            color,
            opacity: None,
        }
    }
}
