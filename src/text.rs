//! Text measurement and outlining.
//!
//! Layout engines never touch a rendering surface, but some of their
//! decisions depend on text extents (e.g. tick label overlap resolution).
//! The [`Measure`] trait is the injection point for that dependency:
//! [`FontData`] measures from real font metrics through ttf-parser, and
//! [`HeuristicMetrics`] estimates from average advance widths when no font
//! is available.
//!
//! [`FontData`] can also outline a text run into a path, which is how the
//! raster surface draws glyphs.

use std::{error, fmt};

use ttf_parser as ttf;

use crate::geom::{self, PathBuilder, Transform};
use crate::render;

/// Font selection for a text run.
///
/// The family is meaningful to surfaces that defer font resolution to a
/// later consumer (SVG); the raster surface draws with the font data it was
/// created with and ignores the family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    family: String,
}

impl Default for Font {
    fn default() -> Self {
        Font {
            family: "sans-serif".to_string(),
        }
    }
}

impl Font {
    /// Create a font with the given family name
    pub fn new(family: impl Into<String>) -> Self {
        Font {
            family: family.into(),
        }
    }

    /// The font family name
    pub fn family(&self) -> &str {
        &self.family
    }
}

/// Font metrics scaled to a font size, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledMetrics {
    /// Distance from baseline to the top of the tallest glyphs
    pub ascent: f32,
    /// Distance from baseline to the bottom of the deepest glyphs (positive)
    pub descent: f32,
    /// Height of capital letters above the baseline
    pub cap_height: f32,
    /// Height of lowercase letters above the baseline
    pub x_height: f32,
}

/// Text extent estimation, injected into layout computations
pub trait Measure {
    /// Width of a single line of text at the given font size
    fn text_width(&self, text: &str, size: f32) -> f32;

    /// Vertical metrics at the given font size
    fn metrics(&self, size: f32) -> ScaledMetrics;

    /// Height of a single line of text at the given font size
    fn line_height(&self, size: f32) -> f32 {
        let m = self.metrics(size);
        m.ascent + m.descent
    }
}

/// Metrics estimated from average glyph proportions.
///
/// Good enough for overlap resolution when no font data is available;
/// the ratios match common sans-serif faces.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicMetrics {
    /// Average glyph advance, as a ratio of the font size
    pub advance: f32,
}

impl Default for HeuristicMetrics {
    fn default() -> Self {
        HeuristicMetrics { advance: 0.6 }
    }
}

impl Measure for HeuristicMetrics {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * self.advance * size
    }

    fn metrics(&self, size: f32) -> ScaledMetrics {
        ScaledMetrics {
            ascent: 0.76 * size,
            descent: 0.24 * size,
            cap_height: 0.7 * size,
            x_height: 0.52 * size,
        }
    }
}

/// Font or text related error
#[derive(Debug)]
pub enum Error {
    /// The font data could not be parsed
    FaceParsing(ttf::FaceParsingError),
}

impl From<ttf::FaceParsingError> for Error {
    fn from(err: ttf::FaceParsingError) -> Self {
        Error::FaceParsing(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FaceParsing(err) => write!(f, "font face parsing error: {}", err),
        }
    }
}

impl error::Error for Error {}

/// An owned font file, measured and outlined through ttf-parser
#[derive(Debug, Clone)]
pub struct FontData {
    data: Vec<u8>,
    index: u32,
}

impl FontData {
    /// Take ownership of a font file content.
    /// `index` selects the face for collection files, and is 0 for
    /// regular font files.
    ///
    /// The data is parsed once upfront to reject invalid fonts early.
    pub fn from_vec(data: Vec<u8>, index: u32) -> Result<Self, Error> {
        ttf::Face::parse(&data, index)?;
        Ok(FontData { data, index })
    }

    fn with_face<T>(&self, f: impl FnOnce(&ttf::Face) -> T) -> T {
        let face = ttf::Face::parse(&self.data, self.index).expect("Data was parsed before");
        f(&face)
    }

    /// Outline a single line of text into a path, scaled to `size`.
    ///
    /// The path is in a Y-up coordinate space with the origin on the
    /// baseline at the start of the run;
    /// [`OutlinedText::anchor_transform`] flips and aligns it for drawing.
    pub fn outline_text(&self, text: &str, size: f32) -> OutlinedText {
        self.with_face(|face| {
            let units_per_em = face.units_per_em() as f32;
            let scale = size / units_per_em;
            let ts_scale = Transform::from_scale(scale, scale);

            // path builder for the entire run
            let mut run_pb = PathBuilder::new();
            // path builder for each glyph
            let mut gl_pb = PathBuilder::new();

            let mut x_cursor = 0.0f32;

            for c in text.chars() {
                let Some(glyph_id) = face.glyph_index(c) else {
                    x_cursor += units_per_em * 0.5;
                    continue;
                };

                {
                    let mut builder = Outliner(&mut gl_pb);
                    face.outline_glyph(glyph_id, &mut builder);
                }

                if let Some(path) = gl_pb.finish() {
                    let transform =
                        ts_scale.pre_concat(Transform::from_translate(x_cursor, 0.0));
                    let path = path.transform(transform).unwrap();
                    run_pb.push_path(&path);
                    gl_pb = path.clear();
                } else {
                    gl_pb = PathBuilder::new();
                }

                x_cursor += face
                    .glyph_hor_advance(glyph_id)
                    .map(|a| a as f32)
                    .unwrap_or(units_per_em * 0.5);
            }

            OutlinedText {
                path: run_pb.finish(),
                width: x_cursor * scale,
                metrics: scaled_metrics(face, scale),
            }
        })
    }
}

fn scaled_metrics(face: &ttf::Face, scale: f32) -> ScaledMetrics {
    let ascent = face.ascender() as f32;
    ScaledMetrics {
        ascent: ascent * scale,
        descent: -face.descender() as f32 * scale,
        cap_height: face
            .capital_height()
            .map(|v| v as f32)
            .unwrap_or(ascent * 0.8)
            * scale,
        x_height: face
            .x_height()
            .map(|v| v as f32)
            .unwrap_or(ascent * 0.6)
            * scale,
    }
}

impl Measure for FontData {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        self.with_face(|face| {
            let units_per_em = face.units_per_em() as f32;
            let width: f32 = text
                .chars()
                .map(|c| {
                    face.glyph_index(c)
                        .and_then(|id| face.glyph_hor_advance(id))
                        .map(|a| a as f32)
                        .unwrap_or(units_per_em * 0.5)
                })
                .sum();
            width * size / units_per_em
        })
    }

    fn metrics(&self, size: f32) -> ScaledMetrics {
        self.with_face(|face| scaled_metrics(face, size / face.units_per_em() as f32))
    }
}

/// A text run outlined to a path, with the metrics needed to anchor it
#[derive(Debug, Clone)]
pub struct OutlinedText {
    path: Option<geom::Path>,
    width: f32,
    metrics: ScaledMetrics,
}

impl OutlinedText {
    /// The outlined path, None for runs with no visible glyph
    pub fn path(&self) -> Option<&geom::Path> {
        self.path.as_ref()
    }

    /// The advance width of the run
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The transform placing the outlined run at the given anchor,
    /// in a Y-down coordinate space
    pub fn anchor_transform(&self, anchor: &render::TextAnchor) -> Transform {
        let ts_flip = Transform::from_scale(1.0, -1.0);

        let ts_point = Transform::from_translate(anchor.pos.x, anchor.pos.y);

        let ts_align = match anchor.align {
            render::TextAlign::Start => Transform::identity(),
            render::TextAlign::Middle => Transform::from_translate(-self.width / 2.0, 0.0),
            render::TextAlign::End => Transform::from_translate(-self.width, 0.0),
        };

        let ts_baseline = match anchor.baseline {
            render::TextBaseline::Base => Transform::identity(),
            render::TextBaseline::Center => {
                Transform::from_translate(0.0, self.metrics.x_height / 2.0)
            }
            render::TextBaseline::Hanging => {
                Transform::from_translate(0.0, self.metrics.cap_height)
            }
        };

        ts_point
            .pre_concat(ts_align)
            .pre_concat(ts_baseline)
            .pre_concat(ts_flip)
    }
}

struct Outliner<'a>(&'a mut PathBuilder);

impl ttf::OutlineBuilder for Outliner<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_scales_with_text_and_size() {
        let m = HeuristicMetrics::default();
        assert_eq!(m.text_width("abcd", 10.0), 24.0);
        assert_eq!(m.text_width("abcd", 20.0), 48.0);
        assert_eq!(m.text_width("", 20.0), 0.0);
    }

    #[test]
    fn heuristic_line_height() {
        let m = HeuristicMetrics::default();
        let lh = m.line_height(10.0);
        assert!((lh - 10.0).abs() < 1e-6);
    }
}
