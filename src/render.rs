//! Render module: provides abstraction over rendering surfaces, like pixel-based or SVG.
//!
//! All rendering surfaces must implement the `Surface` trait.
//! See the `guidon-pxl` and `guidon-svg` crates for examples.
//!
//! The drawing code speaks an abstract alignment vocabulary
//! ([`TextAlign`], [`TextBaseline`]); each surface owns the mapping from
//! that vocabulary to its concrete alignment primitives, so that surfaces
//! remain substitutable.

use crate::{ColorU8, geom, text};

/// Surface trait: defines the rendering surface API
///
/// Surfaces are the only stateful stage of a render pass. All state
/// scoping goes through [`push_group`](Surface::push_group) /
/// [`pop_group`](Surface::pop_group) pairs, which must balance on every
/// drawing path.
pub trait Surface {
    /// Prepare the surface for drawing, with the given size in layout units
    fn prepare(&mut self, size: geom::Size);

    /// Fill the entire surface with the given paint
    fn fill(&mut self, paint: &Paint);

    /// Draw a rectangle
    ///
    /// Default implementation converts the rectangle to a path and calls
    /// [`draw_path`](Surface::draw_path)
    fn draw_rect(&mut self, rect: &Rect) {
        let path = rect.rect.to_path();
        let rpath = self::Path {
            path: &path,
            fill: rect.fill.clone(),
            stroke: rect.stroke,
            transform: rect.transform,
        };
        self.draw_path(&rpath);
    }

    /// Draw a path
    fn draw_path(&mut self, path: &Path);

    /// Draw a single line of text
    fn draw_text(&mut self, text: &Text);

    /// Open a group carrying a transform.
    /// Subsequent draw operations happen in the group coordinate space,
    /// until the matching [`pop_group`](Surface::pop_group) is called.
    fn push_group(&mut self, group: &Group);

    /// Close a group previously opened with [`push_group`](Surface::push_group)
    fn pop_group(&mut self);
}

/// A color stop of a gradient paint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Normalized position of the stop along the gradient vector, in [0, 1]
    pub offset: f32,
    /// Color of the stop
    pub color: ColorU8,
}

/// Paint pattern, used for fill operations
#[derive(Debug, Clone)]
pub enum Paint<'a> {
    /// Solid color fill
    Solid(ColorU8),
    /// Linear gradient fill, in the coordinate space of the painted element
    LinearGradient {
        /// Start point of the gradient vector
        start: geom::Point,
        /// End point of the gradient vector
        end: geom::Point,
        /// Color stops, ordered by non-decreasing offset
        stops: &'a [GradientStop],
    },
}

impl<'a> From<ColorU8> for Paint<'a> {
    fn from(value: ColorU8) -> Self {
        Paint::Solid(value)
    }
}

/// Line pattern defines how the line is drawn
#[derive(Debug, Clone, Copy, Default)]
pub enum LinePattern<'a> {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line. The pattern is relative to the line width.
    Dash(&'a [f32]),
}

/// Stroke style definition
#[derive(Debug, Clone, Copy)]
pub struct Stroke<'a> {
    /// Line color
    pub color: ColorU8,
    /// Line width in layout units
    pub width: f32,
    /// Line pattern
    pub pattern: LinePattern<'a>,
}

/// Rectangle to draw
#[derive(Debug, Clone)]
pub struct Rect<'a> {
    /// Rectangle geometry
    pub rect: geom::Rect,
    /// Fill style
    pub fill: Option<Paint<'a>>,
    /// Stroke style
    pub stroke: Option<Stroke<'a>>,
    /// Optional transform to apply to the rectangle
    pub transform: Option<&'a geom::Transform>,
}

/// Path to draw
#[derive(Debug, Clone)]
pub struct Path<'a> {
    /// Path geometry
    pub path: &'a geom::Path,
    /// Fill style
    pub fill: Option<Paint<'a>>,
    /// Stroke style
    pub stroke: Option<Stroke<'a>>,
    /// Optional transform to apply to the path
    pub transform: Option<&'a geom::Transform>,
}

/// Horizontal text alignment, relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at the anchor point
    #[default]
    Start,
    /// Text is centered on the anchor point
    Middle,
    /// Text ends at the anchor point
    End,
}

/// Vertical text alignment, relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// The alphabetic baseline sits on the anchor point
    #[default]
    Base,
    /// Text is vertically centered on the anchor point
    Center,
    /// Text hangs below the anchor point
    Hanging,
}

/// Position and alignment of a text run
#[derive(Debug, Clone, Copy)]
pub struct TextAnchor {
    /// Anchor point
    pub pos: geom::Point,
    /// Horizontal alignment relative to the anchor point
    pub align: TextAlign,
    /// Vertical alignment relative to the anchor point
    pub baseline: TextBaseline,
}

/// A single line of text to draw
#[derive(Debug, Clone)]
pub struct Text<'a> {
    /// The text content
    pub text: &'a str,
    /// The font
    pub font: &'a text::Font,
    /// Font size in layout units
    pub font_size: f32,
    /// Fill color
    pub fill: ColorU8,
    /// Position and alignment
    pub anchor: TextAnchor,
    /// Optional transform, applied around the anchor point
    pub transform: Option<&'a geom::Transform>,
}

/// A drawing group carrying a transform
#[derive(Debug, Clone, Copy)]
pub struct Group {
    /// Transform from group space to parent space
    pub transform: geom::Transform,
}

impl Group {
    /// A group that translates its content by (tx, ty)
    pub fn from_translate(tx: f32, ty: f32) -> Self {
        Group {
            transform: geom::Transform::from_translate(tx, ty),
        }
    }

    /// A group that translates its content to (tx, ty) then rotates it by
    /// `deg` degrees around that point
    pub fn from_translate_rotate(tx: f32, ty: f32, deg: f32) -> Self {
        Group {
            transform: geom::Transform::from_translate(tx, ty)
                .pre_concat(geom::Transform::from_rotate(deg)),
        }
    }
}
