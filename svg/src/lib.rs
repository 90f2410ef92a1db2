//! SVG rendering surface for guidon.
//!
//! [`SvgSurface`] builds a retained-mode SVG document out of the
//! primitives emitted by the drawing code. Groups map to `<g>` nodes,
//! gradient paints to `<linearGradient>` definitions, and the engine's
//! abstract text alignment vocabulary maps to the `text-anchor` /
//! `dominant-baseline` attributes.

use std::io;

use guidon::geom::{self, Transform};
use guidon::render::{self, Surface, TextAlign, TextBaseline};
use svg::Node;
use svg::node::element;

/// A rendering surface building an SVG document
pub struct SvgSurface {
    doc: svg::Document,
    gradient_num: u32,
    group_stack: Vec<element::Group>,
}

impl SvgSurface {
    /// Create a surface for a document of the given pixel size
    pub fn new(width: u32, height: u32) -> Self {
        let doc = svg::Document::new()
            .set("width", width)
            .set("height", height);
        SvgSurface {
            doc,
            gradient_num: 0,
            group_stack: vec![],
        }
    }

    /// Save the document to a file.
    ///
    /// Panics if a group is still open.
    pub fn save_svg<P: AsRef<std::path::Path>>(&self, path: P) -> io::Result<()> {
        if !self.group_stack.is_empty() {
            panic!("Unbalanced group stack");
        }
        svg::save(path, &self.doc)
    }

    /// Write the document to a writer.
    ///
    /// Panics if a group is still open.
    pub fn write<W>(&self, dest: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        if !self.group_stack.is_empty() {
            panic!("Unbalanced group stack");
        }
        svg::write(dest, &self.doc)
    }
}

impl Surface for SvgSurface {
    fn prepare(&mut self, size: geom::Size) {
        self.doc
            .assign("viewBox", (0, 0, size.width(), size.height()));
    }

    fn fill(&mut self, paint: &render::Paint) {
        let mut node = element::Rectangle::new()
            .set("width", "100%")
            .set("height", "100%");
        self.assign_fill(&mut node, Some(paint));
        self.append_node(node);
    }

    fn draw_rect(&mut self, rect: &render::Rect) {
        let mut node = rectangle_node(&rect.rect);
        self.assign_fill(&mut node, rect.fill.as_ref());
        assign_stroke(&mut node, rect.stroke.as_ref());
        assign_transform(&mut node, rect.transform);
        self.append_node(node);
    }

    fn draw_path(&mut self, path: &render::Path) {
        let mut node = element::Path::new();
        self.assign_fill(&mut node, path.fill.as_ref());
        assign_stroke(&mut node, path.stroke.as_ref());
        assign_transform(&mut node, path.transform);
        node.assign("d", path_data(path.path));
        self.append_node(node);
    }

    fn draw_text(&mut self, text: &render::Text) {
        let mut node = element::Text::new(text.text)
            .set("x", text.anchor.pos.x)
            .set("y", text.anchor.pos.y)
            .set("text-anchor", text_anchor(text.anchor.align))
            .set("dominant-baseline", dominant_baseline(text.anchor.baseline))
            .set("font-family", text.font.family())
            .set("font-size", text.font_size);
        node.assign("fill", text.fill.html());
        if let Some(opacity) = text.fill.opacity() {
            node.assign("fill-opacity", opacity);
        }
        self.append_node(node);
    }

    fn push_group(&mut self, group: &render::Group) {
        self.group_stack
            .push(element::Group::new().set("transform", transform_attr(&group.transform)));
    }

    fn pop_group(&mut self) {
        let g = self.group_stack.pop();
        if g.is_none() {
            panic!("Unbalanced group stack");
        }
        self.append_node(g.unwrap());
    }
}

impl SvgSurface {
    fn append_node<T>(&mut self, node: T)
    where
        T: Node,
    {
        if self.group_stack.is_empty() {
            self.doc.append(node);
        } else {
            self.group_stack.last_mut().unwrap().append(node);
        }
    }

    fn bump_gradient_id(&mut self) -> String {
        self.gradient_num += 1;
        format!("guidon-gradient{}", self.gradient_num)
    }

    fn assign_fill<N>(&mut self, node: &mut N, fill: Option<&render::Paint>)
    where
        N: Node,
    {
        match fill {
            None => node.assign("fill", "none"),
            Some(render::Paint::Solid(color)) => {
                node.assign("fill", color.html());
                if let Some(opacity) = color.opacity() {
                    node.assign("fill-opacity", opacity);
                }
            }
            Some(render::Paint::LinearGradient { start, end, stops }) => {
                let id = self.bump_gradient_id();
                let mut gradient = element::LinearGradient::new()
                    .set("id", id.clone())
                    .set("gradientUnits", "userSpaceOnUse")
                    .set("x1", start.x)
                    .set("y1", start.y)
                    .set("x2", end.x)
                    .set("y2", end.y);
                for stop in stops.iter() {
                    let mut stop_node = element::Stop::new()
                        .set("offset", stop.offset)
                        .set("stop-color", stop.color.html());
                    if let Some(opacity) = stop.color.opacity() {
                        stop_node.assign("stop-opacity", opacity);
                    }
                    gradient.append(stop_node);
                }
                self.append_node(gradient);
                node.assign("fill", format!("url(#{})", id));
            }
        }
    }
}

fn assign_transform<N>(node: &mut N, transform: Option<&Transform>)
where
    N: Node,
{
    if let Some(transform) = transform {
        node.assign("transform", transform_attr(transform));
    }
}

fn transform_attr(transform: &Transform) -> String {
    let Transform {
        sx,
        kx,
        ky,
        sy,
        tx,
        ty,
    } = transform;
    format!("matrix({sx} {ky} {kx} {sy} {tx} {ty})")
}

fn assign_stroke<N>(node: &mut N, stroke: Option<&render::Stroke>)
where
    N: Node,
{
    if let Some(stroke) = stroke {
        let w = stroke.width;
        node.assign("stroke", stroke.color.html());
        node.assign("stroke-width", w);
        if let Some(opacity) = stroke.color.opacity() {
            node.assign("stroke-opacity", opacity);
        }
        match stroke.pattern {
            render::LinePattern::Solid => (),
            render::LinePattern::Dash(dash) => {
                let array: Vec<f32> = dash.iter().map(|d| d * w).collect();
                node.assign("stroke-dasharray", array)
            }
        }
    } else {
        node.assign("stroke", "none");
    }
}

fn path_data(path: &geom::Path) -> element::path::Data {
    let mut data = element::path::Data::new();
    for segment in path.segments() {
        match segment {
            geom::PathSegment::MoveTo(p) => {
                data = data.move_to((p.x, p.y));
            }
            geom::PathSegment::LineTo(p) => {
                data = data.line_to((p.x, p.y));
            }
            geom::PathSegment::QuadTo(p1, p2) => {
                data = data.quadratic_curve_to((p1.x, p1.y, p2.x, p2.y));
            }
            geom::PathSegment::CubicTo(p1, p2, p3) => {
                data = data.cubic_curve_to((p1.x, p1.y, p2.x, p2.y, p3.x, p3.y));
            }
            geom::PathSegment::Close => {
                data = data.close();
            }
        }
    }
    data
}

fn rectangle_node(rect: &geom::Rect) -> element::Rectangle {
    element::Rectangle::new()
        .set("x", rect.x())
        .set("y", rect.y())
        .set("width", rect.width())
        .set("height", rect.height())
}

fn text_anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Start => "start",
        TextAlign::Middle => "middle",
        TextAlign::End => "end",
    }
}

fn dominant_baseline(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Base => "alphabetic",
        TextBaseline::Center => "central",
        TextBaseline::Hanging => "hanging",
    }
}
