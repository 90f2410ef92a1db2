//! Discrete legend design.
//!
//! A discrete legend is a block of swatch-per-category items, each made of
//! a colored symbol and a label, anchored within a container.
use crate::ColorU8;
use crate::des::{Anchor, Direction, FontSpec, ItemDirection};
use crate::geom::Padding;
use crate::style::{defaults, theme};

/// One legend item: a stable identifier, a display label and a fill color.
/// Item order determines layout order.
#[derive(Debug, Clone)]
pub struct Item {
    id: String,
    label: String,
    color: ColorU8,
    text_color: Option<ColorU8>,
}

impl Item {
    /// Create an item from its identifier, label and symbol color
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: ColorU8) -> Self {
        Item {
            id: id.into(),
            label: label.into(),
            color,
            text_color: None,
        }
    }

    /// The stable identifier of the item
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display label of the item
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The symbol fill color of the item
    pub fn color(&self) -> ColorU8 {
        self.color
    }

    /// The label color override of the item, if any
    pub fn text_color(&self) -> Option<ColorU8> {
        self.text_color
    }

    /// Override the label color for this item, returning self for chaining
    pub fn with_text_color(self, color: ColorU8) -> Self {
        Item {
            text_color: Some(color),
            ..self
        }
    }
}

/// Discrete legend design
#[derive(Debug, Clone)]
pub struct Legend {
    items: Vec<Item>,
    anchor: Anchor,
    translate: (f32, f32),
    direction: Direction,
    padding: Padding,
    justify: bool,
    item_width: f32,
    item_height: f32,
    items_spacing: f32,
    item_direction: ItemDirection,
    item_text_color: Option<ColorU8>,
    symbol_size: f32,
    symbol_spacing: f32,
    font: FontSpec,
    fill: Option<theme::Fill>,
    border: Option<theme::Line>,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            anchor: Anchor::default(),
            translate: (0.0, 0.0),
            direction: Direction::default(),
            padding: Padding::Even(0.0),
            justify: false,
            item_width: defaults::ITEM_WIDTH,
            item_height: defaults::ITEM_HEIGHT,
            items_spacing: defaults::ITEMS_SPACING,
            item_direction: ItemDirection::default(),
            item_text_color: None,
            symbol_size: defaults::SYMBOL_SIZE,
            symbol_spacing: defaults::SYMBOL_SPACING,
            font: FontSpec::default(),
            fill: None,
            border: None,
        }
    }
}

impl Legend {
    /// Create a legend design with the given items and default properties
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// The legend items, in layout order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The anchor placing the legend block in its container
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The translation offsets applied after anchoring
    pub fn translate(&self) -> (f32, f32) {
        self.translate
    }

    /// The axis along which items are laid out
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The padding around the item grid
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Whether labels are pushed to the far edge of their item box
    pub fn justify(&self) -> bool {
        self.justify
    }

    /// The width of one item box
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// The height of one item box
    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    /// The spacing between consecutive item boxes
    pub fn items_spacing(&self) -> f32 {
        self.items_spacing
    }

    /// The arrangement of symbol and label within one item box
    pub fn item_direction(&self) -> ItemDirection {
        self.item_direction
    }

    /// The label color applied to all items, unless overridden per item
    pub fn item_text_color(&self) -> Option<ColorU8> {
        self.item_text_color
    }

    /// The side length of the square symbol
    pub fn symbol_size(&self) -> f32 {
        self.symbol_size
    }

    /// The spacing between symbol and label
    pub fn symbol_spacing(&self) -> f32 {
        self.symbol_spacing
    }

    /// The font configuration for item labels
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// The fill style of the legend block background, if any
    pub fn fill(&self) -> Option<&theme::Fill> {
        self.fill.as_ref()
    }

    /// The border style of the legend block, if any
    pub fn border(&self) -> Option<&theme::Line> {
        self.border.as_ref()
    }

    /// Set the anchor and return self for chaining
    pub fn with_anchor(self, anchor: Anchor) -> Self {
        Self { anchor, ..self }
    }

    /// Set the translation offsets and return self for chaining
    pub fn with_translate(self, tx: f32, ty: f32) -> Self {
        Self {
            translate: (tx, ty),
            ..self
        }
    }

    /// Set the flow direction and return self for chaining
    pub fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    /// Set the padding and return self for chaining
    pub fn with_padding(self, padding: impl Into<Padding>) -> Self {
        Self {
            padding: padding.into(),
            ..self
        }
    }

    /// Set justified label placement and return self for chaining
    pub fn with_justify(self, justify: bool) -> Self {
        Self { justify, ..self }
    }

    /// Set the item box size and return self for chaining
    pub fn with_item_size(self, width: f32, height: f32) -> Self {
        Self {
            item_width: width,
            item_height: height,
            ..self
        }
    }

    /// Set the spacing between item boxes and return self for chaining
    pub fn with_items_spacing(self, spacing: f32) -> Self {
        Self {
            items_spacing: spacing,
            ..self
        }
    }

    /// Set the intra-item arrangement and return self for chaining
    pub fn with_item_direction(self, item_direction: ItemDirection) -> Self {
        Self {
            item_direction,
            ..self
        }
    }

    /// Set the label color for all items and return self for chaining
    pub fn with_item_text_color(self, color: ColorU8) -> Self {
        Self {
            item_text_color: Some(color),
            ..self
        }
    }

    /// Set the symbol size and return self for chaining
    pub fn with_symbol_size(self, size: f32) -> Self {
        Self {
            symbol_size: size,
            ..self
        }
    }

    /// Set the symbol to label spacing and return self for chaining
    pub fn with_symbol_spacing(self, spacing: f32) -> Self {
        Self {
            symbol_spacing: spacing,
            ..self
        }
    }

    /// Set the label font and return self for chaining
    pub fn with_font(self, font: FontSpec) -> Self {
        Self { font, ..self }
    }

    /// Set the block background fill and return self for chaining
    pub fn with_fill(self, fill: impl Into<Option<theme::Fill>>) -> Self {
        Self {
            fill: fill.into(),
            ..self
        }
    }

    /// Set the block border and return self for chaining
    pub fn with_border(self, border: impl Into<Option<theme::Line>>) -> Self {
        Self {
            border: border.into(),
            ..self
        }
    }
}
