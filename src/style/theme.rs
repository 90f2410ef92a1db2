//! Theme definitions and implementations

use crate::color::{self, ColorU8, ResolveColor};
use crate::style;

/// A theme, supplying the colors that designs reference symbolically
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Theme {
    #[default]
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// A custom theme
    Custom(ThemePalette),
}

impl Theme {
    /// Get the background color of the theme
    pub const fn background(&self) -> ColorU8 {
        self.palette().background
    }

    /// Get the foreground color of the theme
    pub const fn foreground(&self) -> ColorU8 {
        self.palette().foreground
    }

    /// Get the tick line color of the theme
    pub const fn tick_line(&self) -> ColorU8 {
        self.palette().tick_line
    }

    /// Get the theme palette
    pub const fn palette(&self) -> &ThemePalette {
        match self {
            Theme::Light => &ThemePalette::LIGHT,
            Theme::Dark => &ThemePalette::DARK,
            Theme::Custom(palette) => palette,
        }
    }

    /// Check whether the theme is dark or light.
    /// A theme is considered dark if its background color has a luminance < 0.5
    pub fn is_dark(&self) -> bool {
        self.background().luminance() < 0.5
    }
}

/// The colors used in a theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    /// Background color
    pub background: ColorU8,
    /// Foreground color, used for text by default
    pub foreground: ColorU8,
    /// Tick line color
    pub tick_line: ColorU8,
}

impl ThemePalette {
    /// The light built-in theme palette
    pub const LIGHT: Self = Self {
        background: color::WHITE,
        foreground: color::BLACK,
        tick_line: ColorU8::from_html(b"#808080"),
    };

    /// The dark built-in theme palette
    pub const DARK: Self = Self {
        background: ColorU8::from_html(b"#1e1e2e"),
        foreground: color::WHITE,
        tick_line: ColorU8::from_html(b"#c0c0c0"),
    };

    /// Create a custom palette from background and foreground colors.
    /// The tick line color is derived automatically.
    pub fn new_back_and_fore(background: ColorU8, foreground: ColorU8) -> Self {
        let tick_line = if background.luminance() < 0.5 {
            ColorU8::from_rgb(192, 192, 192)
        } else {
            ColorU8::from_rgb(128, 128, 128)
        };

        Self {
            background,
            foreground,
            tick_line,
        }
    }
}

/// Symbolic theme colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Col {
    /// Background color
    Background,
    /// Foreground color
    Foreground,
    /// Tick line color
    TickLine,
}

impl color::Color for Col {}

impl std::str::FromStr for Col {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "background" => Ok(Col::Background),
            "foreground" => Ok(Col::Foreground),
            "tick_line" => Ok(Col::TickLine),
            _ => Err(()),
        }
    }
}

impl ResolveColor<Col> for Theme {
    fn resolve_color(&self, col: &Col) -> ColorU8 {
        match col {
            Col::Background => self.background(),
            Col::Foreground => self.foreground(),
            Col::TickLine => self.tick_line(),
        }
    }
}

/// A flexible color for themed elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// A color from the theme
    Theme(Col),
    /// A fixed RGBA color
    Fixed(ColorU8),
}

impl From<Col> for Color {
    fn from(color: Col) -> Self {
        Color::Theme(color)
    }
}

impl From<ColorU8> for Color {
    fn from(color: ColorU8) -> Self {
        Color::Fixed(color)
    }
}

impl color::Color for Color {}

impl std::str::FromStr for Color {
    type Err = <ColorU8 as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(col) = s.parse::<Col>() {
            Ok(Color::Theme(col))
        } else {
            let c = s.parse::<ColorU8>()?;
            Ok(Color::Fixed(c))
        }
    }
}

impl ResolveColor<Color> for Theme {
    fn resolve_color(&self, col: &Color) -> ColorU8 {
        match col {
            Color::Theme(col) => self.resolve_color(col),
            Color::Fixed(c) => *c,
        }
    }
}

/// Line style for themed elements
pub type Line = style::Line<Color>;

// From<Color> for Line is already defined in style.rs, using generics.
// We just add From<Col> for Line here.
impl From<Col> for Line {
    fn from(col: Col) -> Self {
        Line {
            color: col.into(),
            width: 1.0,
            pattern: style::LinePattern::default(),
        }
    }
}

/// Fill style for themed elements
pub type Fill = style::Fill<Color>;

// From<Color> for Fill is already defined in style.rs, using generics.
// We just add From<Col> for Fill here.
impl From<Col> for Fill {
    fn from(col: Col) -> Self {
        Fill {
            color: col.into(),
            opacity: None,
        }
    }
}
