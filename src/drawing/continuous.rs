use crate::color::Color as _;
use crate::des::{self, Align, BarDirection, TickPosition};
use crate::des::continuous::{ContinuousLegend, TickMode};
use crate::drawing::{self, Error, anchor, ticks};
use crate::geom::{PathBuilder, Point, Size};
use crate::render::{self, GradientStop, Surface, TextAlign, TextAnchor, TextBaseline};
use crate::style::{Theme, defaults, theme};
use crate::text::Measure;

/// One tick of a continuous legend: a domain value, its mark segment and
/// its label placement
#[derive(Debug, Clone)]
pub struct Tick {
    /// The domain value of the tick
    pub value: f64,
    /// The formatted label
    pub text: String,
    /// The mark segment endpoints, perpendicular to the bar
    pub line: (Point, Point),
    /// The label anchor point
    pub text_pos: Point,
    /// Horizontal label alignment
    pub align: TextAlign,
    /// Vertical label alignment
    pub baseline: TextBaseline,
}

/// The title of a continuous legend, with its placement and rotation
#[derive(Debug, Clone)]
pub struct Title {
    /// The title text
    pub text: String,
    /// The anchor point, relative to the bar origin
    pub pos: Point,
    /// The rotation in degrees around the anchor point
    pub rotation: f32,
    /// Horizontal alignment
    pub align: TextAlign,
    /// Vertical alignment
    pub baseline: TextBaseline,
}

/// Computed geometry of a continuous legend, ready to draw on any surface.
///
/// The anchored block is the gradient bar itself; ticks and title hang
/// around it in bar-local coordinates.
#[derive(Debug, Clone)]
pub struct Colorbar {
    origin: Point,
    size: Size,
    gradient_start: Point,
    gradient_end: Point,
    stops: Vec<GradientStop>,
    ticks: Vec<Tick>,
    title: Option<Title>,
    tick_line: Option<theme::Line>,
    tick_font: des::FontSpec,
    title_font: des::FontSpec,
}

impl Colorbar {
    /// Compute the colorbar geometry for the given design within a
    /// container.
    ///
    /// `measure` estimates tick label extents for overlap resolution; the
    /// layout never touches a rendering surface. Fails on non-finite or
    /// negative dimensions and on an empty color ramp; a zero-span domain
    /// is valid and collapses all ticks onto the bar start.
    pub fn compute<M>(des: &ContinuousLegend, container: Size, measure: &M) -> Result<Colorbar, Error>
    where
        M: Measure,
    {
        drawing::check_dim("length", des.length())?;
        drawing::check_dim("thickness", des.thickness())?;
        drawing::check_dim("tick_size", des.tick_size())?;
        drawing::check_dim("tick_spacing", des.tick_spacing())?;
        drawing::check_dim("tick_font_size", des.tick_font().size)?;
        drawing::check_dim("title_offset", des.title_offset())?;
        drawing::check_offset("translate_x", des.translate().0)?;
        drawing::check_offset("translate_y", des.translate().1)?;
        if des.scale().ramp().colors().is_empty() {
            return Err(Error::InconsistentDesign("empty color ramp".into()));
        }

        let length = des.length();
        let thickness = des.thickness();

        let (size, gradient_start, gradient_end) = match des.direction() {
            BarDirection::Horizontal => (
                Size::new(length, thickness),
                Point { x: 0.0, y: 0.0 },
                Point { x: length, y: 0.0 },
            ),
            // domain start at the bottom
            BarDirection::Vertical => (
                Size::new(thickness, length),
                Point { x: 0.0, y: length },
                Point { x: 0.0, y: 0.0 },
            ),
        };

        let origin = anchor::position_from_anchor(des.anchor(), container, size, des.translate());

        let stops = color_stops(des.scale());
        let ticks = compute_ticks(des, measure)?;
        let title = des.title().map(|text| compute_title(des, text));

        Ok(Colorbar {
            origin,
            size,
            gradient_start,
            gradient_end,
            stops,
            ticks,
            title,
            tick_line: des.tick_line().cloned(),
            tick_font: des.tick_font().clone(),
            title_font: des.title_font().clone(),
        })
    }

    /// The bar origin within the container
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The bar size
    pub fn size(&self) -> Size {
        self.size
    }

    /// The gradient vector endpoints, in bar-local coordinates
    pub fn gradient(&self) -> (Point, Point) {
        (self.gradient_start, self.gradient_end)
    }

    /// The gradient color stops, ordered by non-decreasing offset
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// The ticks, in generation order
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// The title geometry, if the design has a title
    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    /// Draw the colorbar on a surface, resolving themed colors.
    ///
    /// Draw order: gradient bar, tick marks (skipped unless the tick line
    /// width is positive), tick labels, then the title in its own nested
    /// group carrying the rotation. Groups are balanced on every path.
    pub fn draw<S>(&self, surface: &mut S, theme: &Theme)
    where
        S: Surface,
    {
        surface.push_group(&render::Group::from_translate(self.origin.x, self.origin.y));

        let bar = crate::geom::Rect::from_xywh(0.0, 0.0, self.size.width(), self.size.height());
        surface.draw_rect(&render::Rect {
            rect: bar,
            fill: Some(render::Paint::LinearGradient {
                start: self.gradient_start,
                end: self.gradient_end,
                stops: &self.stops,
            }),
            stroke: None,
            transform: None,
        });

        let tick_line = self.tick_line.as_ref().filter(|line| line.width > 0.0);
        if let Some(line) = tick_line {
            let stroke = line.as_stroke(theme);
            for tick in &self.ticks {
                let mut pb = PathBuilder::new();
                pb.move_to(tick.line.0.x, tick.line.0.y);
                pb.line_to(tick.line.1.x, tick.line.1.y);
                if let Some(path) = pb.finish() {
                    surface.draw_path(&render::Path {
                        path: &path,
                        fill: None,
                        stroke: Some(stroke),
                        transform: None,
                    });
                }
            }
        }

        let tick_fill = self.tick_font.color.resolve(theme);
        for tick in &self.ticks {
            surface.draw_text(&render::Text {
                text: &tick.text,
                font: &self.tick_font.font,
                font_size: self.tick_font.size,
                fill: tick_fill,
                anchor: TextAnchor {
                    pos: tick.text_pos,
                    align: tick.align,
                    baseline: tick.baseline,
                },
                transform: None,
            });
        }

        if let Some(title) = &self.title {
            surface.push_group(&render::Group::from_translate_rotate(
                title.pos.x,
                title.pos.y,
                title.rotation,
            ));
            surface.draw_text(&render::Text {
                text: &title.text,
                font: &self.title_font.font,
                font_size: self.title_font.size,
                fill: self.title_font.color.resolve(theme),
                anchor: TextAnchor {
                    pos: Point { x: 0.0, y: 0.0 },
                    align: title.align,
                    baseline: title.baseline,
                },
                transform: None,
            });
            surface.pop_group();
        }

        surface.pop_group();
    }
}

/// Sample the scale into gradient stops covering [0, 1].
///
/// Interpolated ramps are sampled at a fixed resolution; stepped ramps
/// emit two stops per band so the gradient renders hard edges.
fn color_stops(scale: &des::ColorScale) -> Vec<GradientStop> {
    if scale.ramp().is_stepped() {
        let colors = scale.ramp().colors();
        let bands = colors.len() as f32;
        let mut stops = Vec::with_capacity(colors.len() * 2);
        for (i, color) in colors.iter().enumerate() {
            stops.push(GradientStop {
                offset: i as f32 / bands,
                color: *color,
            });
            stops.push(GradientStop {
                offset: (i + 1) as f32 / bands,
                color: *color,
            });
        }
        stops
    } else {
        let resolution = defaults::GRADIENT_RESOLUTION.max(2);
        (0..resolution)
            .map(|i| {
                let t = i as f64 / (resolution - 1) as f64;
                GradientStop {
                    offset: t as f32,
                    color: scale.color_at(t),
                }
            })
            .collect()
    }
}

fn compute_ticks<M>(des: &ContinuousLegend, measure: &M) -> Result<Vec<Tick>, Error>
where
    M: Measure,
{
    let domain = des.scale().domain();

    let values = match des.ticks() {
        TickMode::Auto => ticks::sample_even(domain, ticks::auto_tick_count(des.length())),
        TickMode::Count(count) => ticks::sample_even(domain, *count),
        TickMode::Values(values) => {
            for v in values {
                if !v.is_finite() {
                    return Err(Error::InconsistentDesign(format!(
                        "non-finite tick value: {v}"
                    )));
                }
            }
            values.clone()
        }
    };

    let formatter = ticks::label_formatter(des.tick_format(), domain);
    let labels: Vec<String> = values.iter().map(|v| formatter.format_label(*v)).collect();

    // position along the main axis; vertical bars flip so the domain
    // start sits at the bottom
    let main_pos = |value: f64| -> f32 {
        let p = domain.normalize(value) as f32 * des.length();
        match des.direction() {
            BarDirection::Horizontal => p,
            BarDirection::Vertical => des.length() - p,
        }
    };
    let positions: Vec<f32> = values.iter().map(|v| main_pos(*v)).collect();

    let kept: Vec<usize> = if des.tick_overlap() {
        let extents: Vec<f32> = match des.direction() {
            BarDirection::Horizontal => labels
                .iter()
                .map(|label| measure.text_width(label, des.tick_font().size))
                .collect(),
            BarDirection::Vertical => {
                let line_height = measure.line_height(des.tick_font().size);
                vec![line_height; labels.len()]
            }
        };
        ticks::thin_to_fit(&positions, &extents, des.tick_spacing())
    } else {
        (0..values.len()).collect()
    };

    let thickness = des.thickness();
    let tick_size = des.tick_size();
    let label_gap = tick_size + des.tick_spacing();

    let ticks = kept
        .into_iter()
        .map(|i| {
            let p = positions[i];
            let (line, text_pos, align, baseline) =
                match (des.direction(), des.tick_position()) {
                    (BarDirection::Horizontal, TickPosition::After) => (
                        (
                            Point { x: p, y: thickness },
                            Point {
                                x: p,
                                y: thickness + tick_size,
                            },
                        ),
                        Point {
                            x: p,
                            y: thickness + label_gap,
                        },
                        TextAlign::Middle,
                        TextBaseline::Hanging,
                    ),
                    (BarDirection::Horizontal, TickPosition::Before) => (
                        (Point { x: p, y: 0.0 }, Point { x: p, y: -tick_size }),
                        Point { x: p, y: -label_gap },
                        TextAlign::Middle,
                        TextBaseline::Base,
                    ),
                    (BarDirection::Vertical, TickPosition::After) => (
                        (
                            Point { x: thickness, y: p },
                            Point {
                                x: thickness + tick_size,
                                y: p,
                            },
                        ),
                        Point {
                            x: thickness + label_gap,
                            y: p,
                        },
                        TextAlign::Start,
                        TextBaseline::Center,
                    ),
                    (BarDirection::Vertical, TickPosition::Before) => (
                        (Point { x: 0.0, y: p }, Point { x: -tick_size, y: p }),
                        Point { x: -label_gap, y: p },
                        TextAlign::End,
                        TextBaseline::Center,
                    ),
                };
            Tick {
                value: values[i],
                text: labels[i].clone(),
                line,
                text_pos,
                align,
                baseline,
            }
        })
        .collect();

    Ok(ticks)
}

fn compute_title(des: &ContinuousLegend, text: &str) -> Title {
    let length = des.length();
    let offset = des.title_offset();

    match des.direction() {
        BarDirection::Horizontal => {
            let (x, align) = match des.title_align() {
                Align::Start => (0.0, TextAlign::Start),
                Align::Middle => (length / 2.0, TextAlign::Middle),
                Align::End => (length, TextAlign::End),
            };
            Title {
                text: text.to_string(),
                pos: Point { x, y: -offset },
                rotation: 0.0,
                align,
                baseline: TextBaseline::Base,
            }
        }
        // the title runs along the left edge; Start and Middle read
        // bottom-up from the domain start, End reads top-down from the
        // domain end
        BarDirection::Vertical => {
            let (y, rotation, align) = match des.title_align() {
                Align::Start => (length, -90.0, TextAlign::Start),
                Align::Middle => (length / 2.0, -90.0, TextAlign::Middle),
                Align::End => (0.0, 90.0, TextAlign::Start),
            };
            Title {
                text: text.to_string(),
                pos: Point { x: -offset, y },
                rotation,
                align,
                baseline: TextBaseline::Base,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::des::ColorScale;
    use crate::tests::{Near, assert_near};
    use crate::text::HeuristicMetrics;

    fn scale() -> ColorScale {
        ColorScale::interpolated((0.0, 100.0), vec![color::BLACK, color::WHITE])
    }

    fn compute(des: &ContinuousLegend) -> Colorbar {
        Colorbar::compute(des, Size::new(500.0, 300.0), &HeuristicMetrics::default()).unwrap()
    }

    #[test]
    fn horizontal_auto_ticks_cover_domain() {
        let des = ContinuousLegend::new(scale()).with_length(200.0);
        let bar = compute(&des);

        let ticks = bar.ticks();
        assert_eq!(ticks.first().unwrap().value, 0.0);
        assert_eq!(ticks.last().unwrap().value, 100.0);
        assert_near!(abs, ticks.first().unwrap().line.0.x, 0.0);
        assert_near!(abs, ticks.last().unwrap().line.0.x, 200.0);
    }

    #[test]
    fn stops_are_ordered_and_cover_unit_range() {
        for scale in [
            scale(),
            ColorScale::stepped((0.0, 1.0), vec![color::RED, color::GREEN, color::BLUE]),
        ] {
            let des = ContinuousLegend::new(scale);
            let bar = compute(&des);
            let stops = bar.stops();

            assert_eq!(stops.first().unwrap().offset, 0.0);
            assert_eq!(stops.last().unwrap().offset, 1.0);
            assert!(stops.windows(2).all(|w| w[0].offset <= w[1].offset));
        }
    }

    #[test]
    fn vertical_flips_positions() {
        let des = ContinuousLegend::new(scale())
            .with_length(200.0)
            .with_direction(BarDirection::Vertical);
        let bar = compute(&des);

        assert_eq!(bar.size(), Size::new(des.thickness(), 200.0));
        // domain start at the bottom of the bar
        let first = bar.ticks().first().unwrap();
        assert_eq!(first.value, 0.0);
        assert_near!(abs, first.line.0.y, 200.0);
        let last = bar.ticks().last().unwrap();
        assert_near!(abs, last.line.0.y, 0.0);

        // gradient vector runs bottom to top
        let (start, end) = bar.gradient();
        assert_eq!(start.y, 200.0);
        assert_eq!(end.y, 0.0);
    }

    #[test]
    fn explicit_ticks_used_verbatim() {
        let des = ContinuousLegend::new(scale())
            .with_ticks(TickMode::Values(vec![10.0, 42.0, 90.0]));
        let bar = compute(&des);

        let values: Vec<f64> = bar.ticks().iter().map(|t| t.value).collect();
        assert_eq!(values, vec![10.0, 42.0, 90.0]);
    }

    #[test]
    fn overlap_thinning_is_monotonic() {
        // short bar, many ticks: labels cannot all fit
        let des = ContinuousLegend::new(scale())
            .with_length(60.0)
            .with_ticks(TickMode::Count(7));
        let dense = compute(&des);
        let thinned = compute(&des.clone().with_tick_overlap(true));

        assert!(thinned.ticks().len() <= dense.ticks().len());
        assert!(thinned.ticks().len() >= 2);
        assert_eq!(thinned.ticks().first().unwrap().value, 0.0);
        assert_eq!(thinned.ticks().last().unwrap().value, 100.0);
    }

    #[test]
    fn tick_marks_before_and_after() {
        let des = ContinuousLegend::new(scale()).with_tick_size(4.0);
        let after = compute(&des);
        let t = &after.ticks()[0];
        assert_eq!(t.line.0.y, des.thickness());
        assert_eq!(t.line.1.y, des.thickness() + 4.0);
        assert_eq!(t.baseline, TextBaseline::Hanging);

        let before = compute(&des.clone().with_tick_position(TickPosition::Before));
        let t = &before.ticks()[0];
        assert_eq!(t.line.0.y, 0.0);
        assert_eq!(t.line.1.y, -4.0);
        assert_eq!(t.baseline, TextBaseline::Base);
    }

    #[test]
    fn title_placement() {
        let des = ContinuousLegend::new(scale())
            .with_length(200.0)
            .with_title("level")
            .with_title_align(Align::Middle)
            .with_title_offset(4.0);
        let bar = compute(&des);
        let title = bar.title().unwrap();
        assert_eq!(title.rotation, 0.0);
        assert_eq!(title.pos, Point { x: 100.0, y: -4.0 });
        assert_eq!(title.align, TextAlign::Middle);

        let bar = compute(&des.clone().with_direction(BarDirection::Vertical));
        let title = bar.title().unwrap();
        assert_eq!(title.rotation, -90.0);
        assert_eq!(title.pos, Point { x: -4.0, y: 100.0 });

        let bar = compute(
            &des.clone()
                .with_direction(BarDirection::Vertical)
                .with_title_align(Align::End),
        );
        assert_eq!(bar.title().unwrap().rotation, 90.0);
    }

    #[test]
    fn zero_span_domain_is_valid() {
        let scale = ColorScale::interpolated((5.0, 5.0), vec![color::BLACK, color::WHITE]);
        let des = ContinuousLegend::new(scale);
        let bar = compute(&des);
        // every tick collapses onto the domain start position
        assert!(bar.ticks().iter().all(|t| t.line.0.x == 0.0));
    }

    #[test]
    fn empty_ramp_is_rejected() {
        let scale = ColorScale::interpolated((0.0, 1.0), vec![]);
        let des = ContinuousLegend::new(scale);
        let res = Colorbar::compute(&des, Size::new(500.0, 300.0), &HeuristicMetrics::default());
        assert!(matches!(res, Err(Error::InconsistentDesign(..))));
    }

    #[test]
    fn anchored_like_any_block() {
        let des = ContinuousLegend::new(scale())
            .with_anchor(des::Anchor::TopLeft)
            .with_translate(10.0, 20.0);
        let bar = compute(&des);
        assert_eq!(bar.origin(), Point { x: 10.0, y: 20.0 });
    }
}
