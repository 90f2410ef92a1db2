/*!
 * # Declarative design module for guidon
 *
 * This module contains the data structures describing legends and color
 * guides: what to show, where to anchor it, how to flow its items. Designs
 * are plain data, ignorant of any rendering surface; the [`crate::drawing`]
 * module turns them into concrete geometry.
 *
 * Enumerated design values parse from their configuration names with
 * [`std::str::FromStr`]; unknown names are rejected with a [`ParseError`]
 * naming the valid set, never silently defaulted.
 */
use std::{error, fmt};

pub mod continuous;
pub mod legend;
pub mod scale;

pub use continuous::ContinuousLegend;
pub use legend::Legend;
pub use scale::ColorScale;

use crate::style::{defaults, theme};
use crate::text;

/// A named position placing a rectangular block within a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Horizontally centered, at the top
    Top,
    /// Top-right corner
    TopRight,
    /// At the right, vertically centered
    Right,
    /// Bottom-right corner
    #[default]
    BottomRight,
    /// Horizontally centered, at the bottom
    Bottom,
    /// Bottom-left corner
    BottomLeft,
    /// At the left, vertically centered
    Left,
    /// Top-left corner
    TopLeft,
    /// Centered both ways
    Center,
}

/// The axis along which legend items are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Items flow horizontally
    #[default]
    Row,
    /// Items flow vertically
    Column,
}

/// The arrangement of a single item's symbol and label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemDirection {
    /// Symbol at the left, label at the right
    #[default]
    LeftToRight,
    /// Symbol at the right, label at the left
    RightToLeft,
    /// Symbol at the top, label below
    TopToBottom,
    /// Symbol at the bottom, label above
    BottomToTop,
}

/// The main axis of a continuous legend bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarDirection {
    /// The bar runs horizontally, domain start at the left
    #[default]
    Horizontal,
    /// The bar runs vertically, domain start at the bottom
    Vertical,
}

/// The side of the bar that tick marks are drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickPosition {
    /// Above a horizontal bar, left of a vertical bar
    Before,
    /// Below a horizontal bar, right of a vertical bar
    #[default]
    After,
}

/// Alignment of the title along the bar main axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// At the domain start
    #[default]
    Start,
    /// Centered on the bar
    Middle,
    /// At the domain end
    End,
}

/// The font configuration for a text role of a legend
#[derive(Debug, Clone)]
pub struct FontSpec {
    /// The font size in layout units
    pub size: f32,
    /// The font
    pub font: text::Font,
    /// The text color
    pub color: theme::Color,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: defaults::LEGEND_LABEL_FONT_SIZE,
            font: text::Font::new(defaults::FONT_FAMILY),
            color: theme::Col::Foreground.into(),
        }
    }
}

impl FontSpec {
    /// A default font specification at the given size
    pub fn sized(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

/// Error raised when parsing an enumerated design value from its
/// configuration name
#[derive(Debug, Clone)]
pub struct ParseError {
    what: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseError {
    fn new(what: &'static str, value: &str, expected: &'static str) -> Self {
        ParseError {
            what,
            value: value.to_string(),
            expected,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} \"{}\", expected one of: {}",
            self.what, self.value, self.expected
        )
    }
}

impl error::Error for ParseError {}

impl std::str::FromStr for Anchor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Anchor::Top),
            "top-right" => Ok(Anchor::TopRight),
            "right" => Ok(Anchor::Right),
            "bottom-right" => Ok(Anchor::BottomRight),
            "bottom" => Ok(Anchor::Bottom),
            "bottom-left" => Ok(Anchor::BottomLeft),
            "left" => Ok(Anchor::Left),
            "top-left" => Ok(Anchor::TopLeft),
            "center" => Ok(Anchor::Center),
            _ => Err(ParseError::new(
                "anchor",
                s,
                "top, top-right, right, bottom-right, bottom, bottom-left, left, top-left, center",
            )),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Direction::Row),
            "column" => Ok(Direction::Column),
            _ => Err(ParseError::new("direction", s, "row, column")),
        }
    }
}

impl std::str::FromStr for ItemDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left-to-right" => Ok(ItemDirection::LeftToRight),
            "right-to-left" => Ok(ItemDirection::RightToLeft),
            "top-to-bottom" => Ok(ItemDirection::TopToBottom),
            "bottom-to-top" => Ok(ItemDirection::BottomToTop),
            _ => Err(ParseError::new(
                "item direction",
                s,
                "left-to-right, right-to-left, top-to-bottom, bottom-to-top",
            )),
        }
    }
}

impl std::str::FromStr for BarDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(BarDirection::Horizontal),
            "vertical" => Ok(BarDirection::Vertical),
            _ => Err(ParseError::new(
                "bar direction",
                s,
                "horizontal, vertical",
            )),
        }
    }
}

impl std::str::FromStr for TickPosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(TickPosition::Before),
            "after" => Ok(TickPosition::After),
            _ => Err(ParseError::new("tick position", s, "before, after")),
        }
    }
}

impl std::str::FromStr for Align {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Align::Start),
            "middle" => Ok(Align::Middle),
            "end" => Ok(Align::End),
            _ => Err(ParseError::new("alignment", s, "start, middle, end")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_anchor() {
        assert_eq!("bottom-right".parse::<Anchor>().unwrap(), Anchor::BottomRight);
        assert_eq!("center".parse::<Anchor>().unwrap(), Anchor::Center);

        let err = "botom-right".parse::<Anchor>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("botom-right"));
        assert!(msg.contains("bottom-right"));
    }

    #[test]
    fn parse_directions() {
        assert_eq!("row".parse::<Direction>().unwrap(), Direction::Row);
        assert_eq!(
            "bottom-to-top".parse::<ItemDirection>().unwrap(),
            ItemDirection::BottomToTop
        );
        assert_eq!(
            "vertical".parse::<BarDirection>().unwrap(),
            BarDirection::Vertical
        );
        assert!("diagonal".parse::<BarDirection>().is_err());
    }
}
