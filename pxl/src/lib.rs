//! Raster rendering surface for guidon.
//!
//! [`PxlSurface`] draws the primitives emitted by the drawing code
//! immediately onto a tiny-skia pixmap. Groups push and pop entries of a
//! transform stack, so that one legend can never leak its transform into
//! the next draw on the same shared surface. Text is drawn by outlining
//! glyphs into paths with the font data the surface was created with; a
//! surface without font data skips glyphs and keeps all other geometry.

use std::io;
use std::sync::Arc;

use guidon::render::{self, Surface};
use guidon::text::FontData;
use guidon::{ColorU8, geom};
use tiny_skia::{FillRule, Pixmap, PixmapMut};

/// A rendering surface drawing on an owned pixmap
#[derive(Debug, Clone)]
pub struct PxlSurface {
    pixmap: Pixmap,
    state: State,
}

impl PxlSurface {
    /// Create a surface of the given pixel size.
    ///
    /// `font` supplies the glyph outlines for text drawing; without it,
    /// text is skipped. Returns None for a zero-sized pixmap.
    pub fn new(width: u32, height: u32, font: Option<Arc<FontData>>) -> Option<Self> {
        let pixmap = Pixmap::new(width, height)?;
        let state = State::new(width, height, font);
        Some(Self { pixmap, state })
    }

    /// Save the pixmap to a PNG file
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> io::Result<()> {
        self.pixmap.save_png(path)?;
        Ok(())
    }

    /// The backing pixmap
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consume the surface and return the backing pixmap
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

#[derive(Debug, Clone)]
struct State {
    width: u32,
    height: u32,
    ctm_stack: Vec<geom::Transform>,
    font: Option<Arc<FontData>>,
    missing_font_warned: bool,
}

impl State {
    fn new(width: u32, height: u32, font: Option<Arc<FontData>>) -> Self {
        Self {
            width,
            height,
            ctm_stack: vec![geom::Transform::identity()],
            font,
            missing_font_warned: false,
        }
    }

    fn ctm(&self) -> geom::Transform {
        *self.ctm_stack.last().expect("Stack holds at least the base")
    }

    fn prepare(&mut self, size: geom::Size) {
        let sx = self.width as f32 / size.width();
        let sy = self.height as f32 / size.height();
        self.ctm_stack = vec![geom::Transform::from_scale(sx, sy)];
    }

    fn fill(&mut self, px: &mut PixmapMut<'_>, paint: &render::Paint) {
        match paint {
            render::Paint::Solid(color) => {
                px.fill(ts_color(*color));
            }
            render::Paint::LinearGradient { .. } => {
                let rect = geom::Rect::from_xywh(0.0, 0.0, self.width as f32, self.height as f32);
                let path = rect.to_path();
                let mut ts_paint = tiny_skia::Paint::default();
                set_paint(paint, &mut ts_paint);
                px.fill_path(
                    &path,
                    &ts_paint,
                    FillRule::Winding,
                    geom::Transform::identity(),
                    None,
                );
            }
        }
    }

    fn draw_path(&mut self, px: &mut PixmapMut<'_>, path: &render::Path) {
        let transform = path
            .transform
            .map(|t| t.post_concat(self.ctm()))
            .unwrap_or_else(|| self.ctm());

        if let Some(fill) = &path.fill {
            let mut paint = tiny_skia::Paint::default();
            set_paint(fill, &mut paint);

            px.fill_path(path.path, &paint, FillRule::Winding, transform, None);
        }
        if let Some(stroke) = path.stroke {
            let mut paint = tiny_skia::Paint::default();
            let stroke = ts_stroke(stroke, &mut paint);
            px.stroke_path(path.path, &paint, &stroke, transform, None);
        }
    }

    fn draw_text(&mut self, px: &mut PixmapMut<'_>, text: &render::Text) {
        let Some(font) = self.font.clone() else {
            if !self.missing_font_warned {
                log::warn!("no font data, text is skipped on this surface");
                self.missing_font_warned = true;
            }
            return;
        };

        let outlined = font.outline_text(text.text, text.font_size);
        let Some(path) = outlined.path() else {
            return;
        };

        let transform = outlined.anchor_transform(&text.anchor).post_concat(self.ctm());

        let mut paint = tiny_skia::Paint::default();
        set_paint(&render::Paint::Solid(text.fill), &mut paint);
        px.fill_path(path, &paint, FillRule::Winding, transform, None);
    }

    fn push_group(&mut self, group: &render::Group) {
        self.ctm_stack.push(group.transform.post_concat(self.ctm()));
    }

    fn pop_group(&mut self) {
        if self.ctm_stack.len() <= 1 {
            panic!("Unbalanced group stack");
        }
        self.ctm_stack.pop();
    }
}

impl Surface for PxlSurface {
    fn prepare(&mut self, size: geom::Size) {
        self.state.prepare(size)
    }

    fn fill(&mut self, paint: &render::Paint) {
        let mut px = self.pixmap.as_mut();
        self.state.fill(&mut px, paint)
    }

    fn draw_path(&mut self, path: &render::Path) {
        let mut px = self.pixmap.as_mut();
        self.state.draw_path(&mut px, path)
    }

    fn draw_text(&mut self, text: &render::Text) {
        let mut px = self.pixmap.as_mut();
        self.state.draw_text(&mut px, text)
    }

    fn push_group(&mut self, group: &render::Group) {
        self.state.push_group(group)
    }

    fn pop_group(&mut self) {
        self.state.pop_group()
    }
}

fn ts_color(color: ColorU8) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red(), color.green(), color.blue(), color.alpha())
}

fn set_paint(paint: &render::Paint, ts_paint: &mut tiny_skia::Paint) {
    match paint {
        render::Paint::Solid(color) => {
            ts_paint.set_color(ts_color(*color));
        }
        render::Paint::LinearGradient { start, end, stops } => {
            let stops: Vec<tiny_skia::GradientStop> = stops
                .iter()
                .map(|stop| tiny_skia::GradientStop::new(stop.offset, ts_color(stop.color)))
                .collect();
            // the draw transform is passed to fill_path, which moves the
            // shader along with the geometry
            if let Some(shader) = tiny_skia::LinearGradient::new(
                *start,
                *end,
                stops,
                tiny_skia::SpreadMode::Pad,
                geom::Transform::identity(),
            ) {
                ts_paint.shader = shader;
            }
        }
    }
    ts_paint.force_hq_pipeline = true;
}

fn ts_stroke(stroke: render::Stroke, paint: &mut tiny_skia::Paint) -> tiny_skia::Stroke {
    paint.force_hq_pipeline = true;
    paint.set_color(ts_color(stroke.color));

    let mut ts = tiny_skia::Stroke {
        width: stroke.width,
        ..Default::default()
    };

    match stroke.pattern {
        render::LinePattern::Solid => (),
        render::LinePattern::Dash(dash) => {
            let array = dash.iter().map(|d| d * stroke.width).collect();
            ts.dash = tiny_skia::StrokeDash::new(array, 0.0);
        }
    }
    ts
}
