//! Continuous legend design.
//!
//! A continuous legend is a gradient bar representing a [`ColorScale`],
//! with tick marks and an optional title, as opposed to the discrete
//! swatch-per-category [`crate::des::Legend`].
use crate::des::{Align, Anchor, BarDirection, ColorScale, FontSpec, TickPosition};
use crate::style::{defaults, theme};

/// How tick values are produced
#[derive(Debug, Clone, Default)]
pub enum TickMode {
    /// Sample the domain evenly; the tick count follows the bar length
    #[default]
    Auto,
    /// Sample the domain evenly with a fixed tick count
    Count(usize),
    /// Use these domain values verbatim, in the given order
    Values(Vec<f64>),
}

/// Tick label formatting
#[derive(Debug, Clone, Copy, Default)]
pub enum Formatter {
    /// Pick a precision from the domain magnitude, or scientific notation
    /// for very large or very small domains
    #[default]
    Auto,
    /// Fixed number of decimal places
    Prec(usize),
    /// Percentage of 1.0, with the given number of decimal places
    Percent(usize),
    /// Scientific notation
    Sci,
}

/// Continuous legend design
#[derive(Debug, Clone)]
pub struct ContinuousLegend {
    scale: ColorScale,
    anchor: Anchor,
    translate: (f32, f32),
    length: f32,
    thickness: f32,
    direction: BarDirection,
    ticks: TickMode,
    tick_position: TickPosition,
    tick_size: f32,
    tick_spacing: f32,
    tick_overlap: bool,
    tick_format: Formatter,
    tick_line: Option<theme::Line>,
    tick_font: FontSpec,
    title: Option<String>,
    title_align: Align,
    title_offset: f32,
    title_font: FontSpec,
}

impl ContinuousLegend {
    /// Create a continuous legend for the given scale, with default properties
    pub fn new(scale: ColorScale) -> Self {
        Self {
            scale,
            anchor: Anchor::default(),
            translate: (0.0, 0.0),
            length: defaults::BAR_LENGTH,
            thickness: defaults::BAR_THICKNESS,
            direction: BarDirection::default(),
            ticks: TickMode::default(),
            tick_position: TickPosition::default(),
            tick_size: defaults::TICK_SIZE,
            tick_spacing: defaults::TICK_SPACING,
            tick_overlap: false,
            tick_format: Formatter::default(),
            tick_line: Some(theme::Line {
                color: theme::Col::TickLine.into(),
                width: defaults::TICK_LINE_WIDTH,
                pattern: Default::default(),
            }),
            tick_font: FontSpec::sized(defaults::TICK_LABEL_FONT_SIZE),
            title: None,
            title_align: Align::default(),
            title_offset: defaults::TITLE_OFFSET,
            title_font: FontSpec::sized(defaults::TITLE_FONT_SIZE),
        }
    }

    /// The color scale represented by the legend
    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// The anchor placing the legend in its container
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The translation offsets applied after anchoring
    pub fn translate(&self) -> (f32, f32) {
        self.translate
    }

    /// The bar extent along its main axis
    pub fn length(&self) -> f32 {
        self.length
    }

    /// The bar extent across its main axis
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// The main axis of the bar
    pub fn direction(&self) -> BarDirection {
        self.direction
    }

    /// How tick values are produced
    pub fn ticks(&self) -> &TickMode {
        &self.ticks
    }

    /// The side of the bar that tick marks are drawn on
    pub fn tick_position(&self) -> TickPosition {
        self.tick_position
    }

    /// The length of tick marks, perpendicular to the bar
    pub fn tick_size(&self) -> f32 {
        self.tick_size
    }

    /// The spacing between tick marks and their labels, also the minimum
    /// gap enforced between labels by overlap resolution
    pub fn tick_spacing(&self) -> f32 {
        self.tick_spacing
    }

    /// Whether overlapping tick labels are resolved by thinning
    pub fn tick_overlap(&self) -> bool {
        self.tick_overlap
    }

    /// The tick label formatter
    pub fn tick_format(&self) -> Formatter {
        self.tick_format
    }

    /// The tick mark line style; None or a zero width disables tick marks
    pub fn tick_line(&self) -> Option<&theme::Line> {
        self.tick_line.as_ref()
    }

    /// The font configuration for tick labels
    pub fn tick_font(&self) -> &FontSpec {
        &self.tick_font
    }

    /// The legend title, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The alignment of the title along the bar
    pub fn title_align(&self) -> Align {
        self.title_align
    }

    /// The distance between the title and the bar edge
    pub fn title_offset(&self) -> f32 {
        self.title_offset
    }

    /// The font configuration for the title
    pub fn title_font(&self) -> &FontSpec {
        &self.title_font
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

    /// Set the bar length and return self for chaining
    pub fn with_length(self, length: f32) -> Self {
        Self { length, ..self }
    }

    /// Set the bar thickness and return self for chaining
    pub fn with_thickness(self, thickness: f32) -> Self {
        Self { thickness, ..self }
    }

    /// Set the bar direction and return self for chaining
    pub fn with_direction(self, direction: BarDirection) -> Self {
        Self { direction, ..self }
    }

    /// Set the tick production mode and return self for chaining
    pub fn with_ticks(self, ticks: TickMode) -> Self {
        Self { ticks, ..self }
    }

    /// Set the tick mark side and return self for chaining
    pub fn with_tick_position(self, tick_position: TickPosition) -> Self {
        Self {
            tick_position,
            ..self
        }
    }

    /// Set the tick mark length and return self for chaining
    pub fn with_tick_size(self, tick_size: f32) -> Self {
        Self { tick_size, ..self }
    }

    /// Set the tick label spacing and return self for chaining
    pub fn with_tick_spacing(self, tick_spacing: f32) -> Self {
        Self {
            tick_spacing,
            ..self
        }
    }

    /// Enable or disable overlap resolution and return self for chaining
    pub fn with_tick_overlap(self, tick_overlap: bool) -> Self {
        Self {
            tick_overlap,
            ..self
        }
    }

    /// Set the tick label formatter and return self for chaining
    pub fn with_tick_format(self, tick_format: Formatter) -> Self {
        Self {
            tick_format,
            ..self
        }
    }

    /// Set the tick mark line style and return self for chaining
    pub fn with_tick_line(self, tick_line: impl Into<Option<theme::Line>>) -> Self {
        Self {
            tick_line: tick_line.into(),
            ..self
        }
    }

    /// Set the tick label font and return self for chaining
    pub fn with_tick_font(self, tick_font: FontSpec) -> Self {
        Self { tick_font, ..self }
    }

    /// Set the title and return self for chaining
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// Set the title alignment and return self for chaining
    pub fn with_title_align(self, title_align: Align) -> Self {
        Self {
            title_align,
            ..self
        }
    }

    /// Set the title offset and return self for chaining
    pub fn with_title_offset(self, title_offset: f32) -> Self {
        Self {
            title_offset,
            ..self
        }
    }

    /// Set the title font and return self for chaining
    pub fn with_title_font(self, title_font: FontSpec) -> Self {
        Self { title_font, ..self }
    }
}
