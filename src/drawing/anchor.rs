use crate::des::Anchor;
use crate::geom::{Point, Size};

/// Resolve the origin of a block of known size within a container.
///
/// The anchor picks the container edge or center the block snaps to; the
/// translation offsets are added afterwards. Pure function of its inputs.
pub fn position_from_anchor(
    anchor: Anchor,
    container: Size,
    block: Size,
    translate: (f32, f32),
) -> Point {
    let (tx, ty) = translate;

    let x = match anchor {
        Anchor::TopLeft | Anchor::Left | Anchor::BottomLeft => tx,
        Anchor::Top | Anchor::Center | Anchor::Bottom => {
            tx + (container.width() - block.width()) / 2.0
        }
        Anchor::TopRight | Anchor::Right | Anchor::BottomRight => {
            tx + container.width() - block.width()
        }
    };

    let y = match anchor {
        Anchor::TopLeft | Anchor::Top | Anchor::TopRight => ty,
        Anchor::Left | Anchor::Center | Anchor::Right => {
            ty + (container.height() - block.height()) / 2.0
        }
        Anchor::BottomLeft | Anchor::Bottom | Anchor::BottomRight => {
            ty + container.height() - block.height()
        }
    };

    Point { x, y }
}
