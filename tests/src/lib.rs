#![cfg(test)]

use guidon::geom::Size;
use guidon::render::Surface;
use guidon_pxl::PxlSurface;
use guidon_svg::SvgSurface;

mod tests;

const CONTAINER: Size = Size::new(500.0, 300.0);

fn svg_string<F>(draw: F) -> String
where
    F: FnOnce(&mut SvgSurface),
{
    let mut svg = SvgSurface::new(500, 300);
    svg.prepare(CONTAINER);
    draw(&mut svg);
    let mut buf = Vec::new();
    svg.write(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn pxl_pixmap<F>(draw: F) -> tiny_skia::Pixmap
where
    F: FnOnce(&mut PxlSurface),
{
    let mut pxl = PxlSurface::new(500, 300, None).unwrap();
    pxl.prepare(CONTAINER);
    draw(&mut pxl);
    pxl.into_pixmap()
}

fn pixel(pixmap: &tiny_skia::Pixmap, x: u32, y: u32) -> [u8; 4] {
    let p = pixmap.pixel(x, y).expect("Pixel should be in bounds");
    [p.red(), p.green(), p.blue(), p.alpha()]
}

fn assert_same_svg(actual: &str, expected: &str) {
    if actual != expected {
        let diff = similar::TextDiff::from_lines(expected, actual);
        panic!("SVG output differs:\n{}", diff.unified_diff());
    }
}
