use crate::ColorU8;
use crate::color::Color as _;
use crate::des::{self, Direction, ItemDirection};
use crate::drawing::{self, Error, anchor};
use crate::geom::{Padding, Point, Size};
use crate::render::{self, Surface, TextAlign, TextAnchor, TextBaseline};
use crate::style::{Theme, theme};

/// Overall dimensions of a discrete legend block
#[derive(Debug, Clone, Copy)]
pub struct Dimensions {
    size: Size,
    padding: Padding,
}

impl Dimensions {
    /// Compute the block dimensions containing `item_count` items of
    /// `item_size`, separated by `items_spacing` along the flow axis,
    /// surrounded by `padding`.
    ///
    /// A zero item count collapses the flow axis to its padding; the
    /// cross axis always reserves one item extent.
    pub fn compute(
        item_count: usize,
        item_size: Size,
        items_spacing: f32,
        direction: Direction,
        padding: Padding,
    ) -> Dimensions {
        let n = item_count as f32;
        let gaps = item_count.saturating_sub(1) as f32;

        let (w, h) = match direction {
            Direction::Row => (
                n * item_size.width() + gaps * items_spacing + padding.sum_hor(),
                item_size.height() + padding.sum_ver(),
            ),
            Direction::Column => (
                item_size.width() + padding.sum_hor(),
                n * item_size.height() + gaps * items_spacing + padding.sum_ver(),
            ),
        };

        Dimensions {
            size: Size::new(w, h),
            padding,
        }
    }

    /// The block size
    pub fn size(&self) -> Size {
        self.size
    }

    /// The block width
    pub fn width(&self) -> f32 {
        self.size.width()
    }

    /// The block height
    pub fn height(&self) -> f32 {
        self.size.height()
    }

    /// The padding around the item grid
    pub fn padding(&self) -> Padding {
        self.padding
    }
}

/// Placement of symbol and label within one item box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    /// Local offset of the symbol's top-left corner
    pub symbol: Point,
    /// Local position of the label anchor point
    pub label: Point,
    /// Horizontal label alignment
    pub label_align: TextAlign,
    /// Vertical label alignment
    pub label_baseline: TextBaseline,
}

impl ItemLayout {
    /// Compute the intra-item placement for one item box of `size`.
    ///
    /// The symbol sits at the edge the direction starts from; the label
    /// sits `symbol_spacing` after it, or at the opposite edge when
    /// `justify` is set. Justify only ever moves the label.
    pub fn compute(
        direction: ItemDirection,
        justify: bool,
        symbol_size: f32,
        symbol_spacing: f32,
        size: Size,
    ) -> ItemLayout {
        let (w, h) = (size.width(), size.height());
        let s = symbol_size;

        match direction {
            ItemDirection::LeftToRight => {
                let (label_x, label_align) = if justify {
                    (w, TextAlign::End)
                } else {
                    (s + symbol_spacing, TextAlign::Start)
                };
                ItemLayout {
                    symbol: Point {
                        x: 0.0,
                        y: (h - s) / 2.0,
                    },
                    label: Point {
                        x: label_x,
                        y: h / 2.0,
                    },
                    label_align,
                    label_baseline: TextBaseline::Center,
                }
            }
            ItemDirection::RightToLeft => {
                let (label_x, label_align) = if justify {
                    (0.0, TextAlign::Start)
                } else {
                    (w - s - symbol_spacing, TextAlign::End)
                };
                ItemLayout {
                    symbol: Point {
                        x: w - s,
                        y: (h - s) / 2.0,
                    },
                    label: Point {
                        x: label_x,
                        y: h / 2.0,
                    },
                    label_align,
                    label_baseline: TextBaseline::Center,
                }
            }
            ItemDirection::TopToBottom => {
                let (label_y, label_baseline) = if justify {
                    (h, TextBaseline::Base)
                } else {
                    (s + symbol_spacing, TextBaseline::Hanging)
                };
                ItemLayout {
                    symbol: Point {
                        x: (w - s) / 2.0,
                        y: 0.0,
                    },
                    label: Point {
                        x: w / 2.0,
                        y: label_y,
                    },
                    label_align: TextAlign::Middle,
                    label_baseline,
                }
            }
            ItemDirection::BottomToTop => {
                let (label_y, label_baseline) = if justify {
                    (0.0, TextBaseline::Hanging)
                } else {
                    (h - s - symbol_spacing, TextBaseline::Base)
                };
                ItemLayout {
                    symbol: Point {
                        x: (w - s) / 2.0,
                        y: h - s,
                    },
                    label: Point {
                        x: w / 2.0,
                        y: label_y,
                    },
                    label_align: TextAlign::Middle,
                    label_baseline,
                }
            }
        }
    }
}

/// A legend item with its resolved offset in the block
#[derive(Debug, Clone)]
struct LegendItem {
    label: String,
    color: ColorU8,
    text_color: Option<ColorU8>,
    x: f32,
    y: f32,
}

/// Computed geometry of a discrete legend, ready to draw on any surface
#[derive(Debug, Clone)]
pub struct Legend {
    origin: Point,
    dims: Dimensions,
    item_layout: ItemLayout,
    symbol_size: f32,
    font: des::FontSpec,
    fill: Option<theme::Fill>,
    border: Option<theme::Line>,
    items: Vec<LegendItem>,
}

impl Legend {
    /// Compute the legend geometry for the given design within a container.
    ///
    /// Fails if the design carries non-finite or negative dimensions;
    /// an empty item list is valid and yields a degenerate block.
    pub fn compute(des: &des::Legend, container: Size) -> Result<Legend, Error> {
        drawing::check_dim("item_width", des.item_width())?;
        drawing::check_dim("item_height", des.item_height())?;
        drawing::check_dim("items_spacing", des.items_spacing())?;
        drawing::check_dim("symbol_size", des.symbol_size())?;
        drawing::check_dim("symbol_spacing", des.symbol_spacing())?;
        drawing::check_dim("font_size", des.font().size)?;
        drawing::check_offset("translate_x", des.translate().0)?;
        drawing::check_offset("translate_y", des.translate().1)?;

        let item_size = Size::new(des.item_width(), des.item_height());
        let dims = Dimensions::compute(
            des.items().len(),
            item_size,
            des.items_spacing(),
            des.direction(),
            des.padding(),
        );

        let origin =
            anchor::position_from_anchor(des.anchor(), container, dims.size(), des.translate());

        let item_layout = ItemLayout::compute(
            des.item_direction(),
            des.justify(),
            des.symbol_size(),
            des.symbol_spacing(),
            item_size,
        );

        let (x_step, y_step) = match des.direction() {
            Direction::Row => (des.item_width() + des.items_spacing(), 0.0),
            Direction::Column => (0.0, des.item_height() + des.items_spacing()),
        };

        let padding = dims.padding();
        let items = des
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| LegendItem {
                label: item.label().to_string(),
                color: item.color(),
                text_color: item.text_color().or(des.item_text_color()),
                x: i as f32 * x_step + padding.left(),
                y: i as f32 * y_step + padding.top(),
            })
            .collect();

        Ok(Legend {
            origin,
            dims,
            item_layout,
            symbol_size: des.symbol_size(),
            font: des.font().clone(),
            fill: des.fill().cloned(),
            border: des.border().cloned(),
            items,
        })
    }

    /// The block origin within the container
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The block size
    pub fn size(&self) -> Size {
        self.dims.size()
    }

    /// The shared intra-item placement
    pub fn item_layout(&self) -> &ItemLayout {
        &self.item_layout
    }

    /// The local offset of the item box at `index`
    pub fn item_offset(&self, index: usize) -> Option<Point> {
        self.items.get(index).map(|item| Point {
            x: item.x,
            y: item.y,
        })
    }

    /// Draw the legend on a surface, resolving themed colors.
    ///
    /// The block box comes first when the design has a fill or border,
    /// then the items in index order, symbol before label. All state
    /// scoping goes through a single surface group, balanced on every
    /// path.
    pub fn draw<S>(&self, surface: &mut S, theme: &Theme)
    where
        S: Surface,
    {
        surface.push_group(&render::Group::from_translate(self.origin.x, self.origin.y));

        if self.fill.is_some() || self.border.is_some() {
            let block = crate::geom::Rect::from_xywh(
                0.0,
                0.0,
                self.dims.width(),
                self.dims.height(),
            );
            surface.draw_rect(&render::Rect {
                rect: block,
                fill: self.fill.as_ref().map(|f| f.as_paint(theme)),
                stroke: self.border.as_ref().map(|b| b.as_stroke(theme)),
                transform: None,
            });
        }

        for item in &self.items {
            let symbol = crate::geom::Rect::from_xywh(
                item.x + self.item_layout.symbol.x,
                item.y + self.item_layout.symbol.y,
                self.symbol_size,
                self.symbol_size,
            );
            surface.draw_rect(&render::Rect {
                rect: symbol,
                fill: Some(render::Paint::Solid(item.color)),
                stroke: None,
                transform: None,
            });

            let fill = match item.text_color {
                Some(color) => color,
                None => self.font.color.resolve(theme),
            };
            surface.draw_text(&render::Text {
                text: &item.label,
                font: &self.font.font,
                font_size: self.font.size,
                fill,
                anchor: TextAnchor {
                    pos: Point {
                        x: item.x + self.item_layout.label.x,
                        y: item.y + self.item_layout.label.y,
                    },
                    align: self.item_layout.label_align,
                    baseline: self.item_layout.label_baseline,
                },
                transform: None,
            });
        }

        surface.pop_group();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::des;
    use crate::geom::Padding;

    fn items(n: usize) -> Vec<des::legend::Item> {
        (0..n)
            .map(|i| {
                des::legend::Item::new(
                    format!("id-{i}"),
                    format!("item {i}"),
                    ColorU8::from_rgb(10 * i as u8, 0, 0),
                )
            })
            .collect()
    }

    #[test]
    fn dimensions_row() {
        let dims = Dimensions::compute(
            3,
            Size::new(100.0, 16.0),
            3.0,
            Direction::Row,
            Padding::Even(0.0),
        );
        assert_eq!(dims.width(), 306.0);
        assert_eq!(dims.height(), 16.0);
    }

    #[test]
    fn dimensions_column_with_padding() {
        let dims = Dimensions::compute(
            4,
            Size::new(80.0, 20.0),
            5.0,
            Direction::Column,
            Padding::Custom {
                t: 1.0,
                r: 2.0,
                b: 3.0,
                l: 4.0,
            },
        );
        assert_eq!(dims.width(), 80.0 + 6.0);
        assert_eq!(dims.height(), 4.0 * 20.0 + 3.0 * 5.0 + 4.0);
    }

    #[test]
    fn dimensions_zero_items() {
        let dims = Dimensions::compute(
            0,
            Size::new(100.0, 16.0),
            3.0,
            Direction::Row,
            Padding::Even(2.0),
        );
        assert_eq!(dims.width(), 4.0);
        assert_eq!(dims.height(), 20.0);
    }

    #[test]
    fn item_layout_left_to_right() {
        let layout = ItemLayout::compute(
            ItemDirection::LeftToRight,
            false,
            16.0,
            8.0,
            Size::new(100.0, 20.0),
        );
        assert_eq!(layout.symbol, Point { x: 0.0, y: 2.0 });
        assert_eq!(layout.label, Point { x: 24.0, y: 10.0 });
        assert_eq!(layout.label_align, TextAlign::Start);
        assert_eq!(layout.label_baseline, TextBaseline::Center);
    }

    #[test]
    fn item_layout_justify_moves_label_only() {
        for direction in [
            ItemDirection::LeftToRight,
            ItemDirection::RightToLeft,
            ItemDirection::TopToBottom,
            ItemDirection::BottomToTop,
        ] {
            let size = Size::new(100.0, 20.0);
            let plain = ItemLayout::compute(direction, false, 16.0, 8.0, size);
            let justified = ItemLayout::compute(direction, true, 16.0, 8.0, size);
            assert_eq!(plain.symbol, justified.symbol);
            assert_ne!(plain.label, justified.label);
        }
    }

    #[test]
    fn item_layout_justify_far_edge() {
        let layout = ItemLayout::compute(
            ItemDirection::LeftToRight,
            true,
            16.0,
            8.0,
            Size::new(100.0, 20.0),
        );
        assert_eq!(layout.label.x, 100.0);
        assert_eq!(layout.label_align, TextAlign::End);
    }

    #[test]
    fn item_layout_is_deterministic() {
        let a = ItemLayout::compute(
            ItemDirection::BottomToTop,
            true,
            12.0,
            6.0,
            Size::new(60.0, 40.0),
        );
        let b = ItemLayout::compute(
            ItemDirection::BottomToTop,
            true,
            12.0,
            6.0,
            Size::new(60.0, 40.0),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn legend_item_offsets_row() {
        let des = des::Legend::new(items(3))
            .with_item_size(100.0, 16.0)
            .with_items_spacing(3.0)
            .with_padding((2.0, 5.0));
        let legend = Legend::compute(&des, Size::new(500.0, 300.0)).unwrap();

        assert_eq!(legend.item_offset(0), Some(Point { x: 5.0, y: 2.0 }));
        assert_eq!(legend.item_offset(1), Some(Point { x: 108.0, y: 2.0 }));
        assert_eq!(legend.item_offset(2), Some(Point { x: 211.0, y: 2.0 }));
        assert_eq!(legend.item_offset(3), None);
    }

    #[test]
    fn legend_anchored_bottom_right() {
        let des = des::Legend::new(items(3))
            .with_anchor(des::Anchor::BottomRight)
            .with_item_size(100.0, 16.0)
            .with_items_spacing(3.0)
            .with_translate(10.0, 0.0);
        let legend = Legend::compute(&des, Size::new(500.0, 300.0)).unwrap();

        assert_eq!(legend.size(), Size::new(306.0, 16.0));
        assert_eq!(legend.origin(), Point { x: 204.0, y: 284.0 });
    }

    #[test]
    fn legend_rejects_non_finite_dimension() {
        let des = des::Legend::new(items(1)).with_item_size(f32::NAN, 16.0);
        assert!(matches!(
            Legend::compute(&des, Size::new(500.0, 300.0)),
            Err(Error::InvalidDimension {
                what: "item_width",
                ..
            })
        ));
    }

    #[test]
    fn legend_empty_items_is_valid() {
        let des = des::Legend::new(Vec::new()).with_item_size(100.0, 16.0);
        let legend = Legend::compute(&des, Size::new(500.0, 300.0)).unwrap();
        assert_eq!(legend.size().width(), 0.0);
    }
}
