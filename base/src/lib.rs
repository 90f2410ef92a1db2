/*!
 * Base primitives shared by the guidon engine and its rendering surfaces.
 *
 * The [`geom`] module provides sizes, rectangles and padding boxes; paths,
 * points and transforms are re-exported from tiny-skia-path so that layout
 * output can be consumed by any surface without conversion.
 *
 * The [`color`] module provides an 8-bit RGBA color with CSS-style parsing
 * and the interpolation support needed by gradient ramps.
 */

pub mod color;
pub mod geom;

pub use color::ColorU8;
