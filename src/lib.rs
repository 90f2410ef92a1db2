#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
/*!
 * # guidon
 * _chart guides, computed once, drawn anywhere_. A legend layout engine
 * written in Rust.
 *
 * Guidon separates legend design from geometry computation and from
 * rendering surfaces.
 *
 * ## Supported guide types
 *  - discrete legends (swatch-per-category items)
 *  - continuous legends (gradient bar with ticks and title)
 *
 * ## Get started
 *
 * Add `guidon` to your project, as well as one of the surface backend
 * crates (here `guidon-svg`).
 *
 * ```text
 * cargo add guidon
 * cargo add guidon-svg
 * ```
 *
 * ```no_run
 * // We start with the legend design. We need the `des` module for that.
 * use guidon::des;
 * use guidon::color;
 *
 * // Three items, in display order. Each item carries a stable id,
 * // a label and a symbol color.
 * let items = vec![
 *     des::legend::Item::new("a", "group A", color::STEELBLUE),
 *     des::legend::Item::new("b", "group B", color::TOMATO),
 *     des::legend::Item::new("c", "group C", color::GOLD),
 * ];
 *
 * // Anchor the legend at the bottom-right of its container,
 * // pushed 10 units to the right.
 * let legend = des::Legend::new(items)
 *     .with_anchor(des::Anchor::BottomRight)
 *     .with_translate(10.0, 0.0)
 *     .with_item_size(100.0, 16.0)
 *     .with_items_spacing(3.0);
 *
 * // Compute the geometry for a 500x300 container...
 * use guidon::drawing;
 * use guidon::geom::Size;
 *
 * let layout = drawing::Legend::compute(&legend, Size::new(500.0, 300.0)).unwrap();
 *
 * // ...and draw it on any surface.
 * use guidon::render::Surface;
 * use guidon::style::Theme;
 *
 * let mut svg = guidon_svg::SvgSurface::new(500, 300);
 * svg.prepare(Size::new(500.0, 300.0));
 * layout.draw(&mut svg, &Theme::Light);
 * svg.save_svg("legend.svg").unwrap();
 * ```
 *
 * ## Notes about guidon's design
 *
 * The legend design lies in the [`des`] module. This module describes
 * legends in a declarative way and ignores everything about rendering
 * surfaces.
 *
 * The rendering surfaces implement the [`render::Surface`] trait and live
 * in separate crates (see `guidon-pxl` for raster output and `guidon-svg`
 * for SVG documents). The surfaces themselves ignore everything about
 * legend design; they only see rendering primitives like rects, paths and
 * anchored text.
 *
 * [`des`] and [`render`] are bridged by the [`drawing`] module, which
 * computes pure geometry records ([`drawing::Legend`],
 * [`drawing::Colorbar`]) out of designs. Geometry is recomputed from
 * scratch on every layout call and can be drawn any number of times on
 * any surface; both surfaces consuming the same record produce the same
 * picture.
 */

pub mod des;
pub mod drawing;
pub mod render;
pub mod style;
pub mod text;

pub use style::Theme;

/// Re-exports of [`guidon_base::color`] items
pub mod color {
    pub use guidon_base::color::*;
}
pub use color::ColorU8;

/// Re-exports of [`guidon_base::geom`] items
pub mod geom {
    pub use guidon_base::geom::*;
}

#[cfg(test)]
pub(crate) mod tests {
    pub trait Near {
        fn near_abs(&self, other: &Self, tol: f64) -> bool;
        fn near_rel(&self, other: &Self, err: f64) -> bool;
    }

    impl Near for f64 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() <= tol
        }

        fn near_rel(&self, other: &Self, err: f64) -> bool {
            let diff = (self - other).abs();
            let largest = self.abs().max(other.abs());
            diff <= largest * err
        }
    }

    impl Near for f32 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() as f64 <= tol
        }

        fn near_rel(&self, other: &Self, err: f64) -> bool {
            let diff = (self - other).abs() as f64;
            let largest = self.abs().max(other.abs()) as f64;
            diff <= largest * err
        }
    }

    macro_rules! assert_near {
        (abs, $a:expr, $b:expr, $tol:expr) => {
            assert!($a.near_abs(&$b, $tol), "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nTolerance: {}", $a, $b, $tol);
        };
        (abs, $a:expr, $b:expr) => {
            assert_near!(abs, $a, $b, 1e-5);
        };
        (rel, $a:expr, $b:expr, $err:expr) => {
            assert!($a.near_rel(&$b, $err), "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nRelative error: {}", $a, $b, $err);
        };
        (rel, $a:expr, $b:expr) => {
            assert_near!(rel, $a, $b, 1e-5);
        };
    }

    pub(crate) use assert_near;

    #[test]
    fn test_near() {
        let a = 1.0;
        let b = 1.0 + 1e-6;
        assert_near!(abs, a, b);
        assert!(!a.near_abs(&b, 1e-7));
        assert_near!(rel, a, b);
        assert!(!a.near_rel(&b, 1e-7));
    }
}
