use std::str::FromStr;
use std::{error, fmt};

mod named;

pub use named::*;

/// Resolve an abstract color description into a concrete [`ColorU8`]
pub trait ResolveColor<Color> {
    fn resolve_color(&self, color: &Color) -> ColorU8;
}

/// An abstract color that can be resolved with a matching [`ResolveColor`]
pub trait Color: Clone + Copy {
    #[inline]
    fn resolve<R>(&self, rc: &R) -> ColorU8
    where
        R: ResolveColor<Self>,
        Self: Sized,
    {
        rc.resolve_color(self)
    }
}

impl Color for ColorU8 {}

impl ResolveColor<ColorU8> for () {
    fn resolve_color(&self, color: &ColorU8) -> ColorU8 {
        *color
    }
}

/// An 8-bit per channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Parse a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` color.
    ///
    /// Panics on malformed input, which makes it suitable for color
    /// constants only. Use [`FromStr`] for runtime parsing.
    pub const fn from_html(hex: &[u8]) -> Self {
        if hex[0] != b'#' {
            panic!("Invalid hex color");
        }
        match hex.len() {
            4 => {
                let r = hex_to_u8(hex[1]);
                let g = hex_to_u8(hex[2]);
                let b = hex_to_u8(hex[3]);
                ColorU8::from_rgb(r << 4 | r, g << 4 | g, b << 4 | b)
            }
            5 => {
                let r = hex_to_u8(hex[1]);
                let g = hex_to_u8(hex[2]);
                let b = hex_to_u8(hex[3]);
                let a = hex_to_u8(hex[4]);
                ColorU8::from_rgba(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)
            }
            7 => {
                let r = hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]);
                let g = hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]);
                let b = hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]);
                ColorU8::from_rgb(r, g, b)
            }
            9 => {
                let r = hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]);
                let g = hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]);
                let b = hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]);
                let a = hex_to_u8(hex[7]) << 4 | hex_to_u8(hex[8]);
                ColorU8::from_rgba(r, g, b, a)
            }
            _ => panic!("Invalid hex color"),
        }
    }

    pub const fn red(&self) -> u8 {
        self.r
    }

    pub const fn green(&self) -> u8 {
        self.g
    }

    pub const fn blue(&self) -> u8 {
        self.b
    }

    pub const fn alpha(&self) -> u8 {
        self.a
    }

    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The opacity, or None when the color is fully opaque
    pub const fn opacity(&self) -> Option<f32> {
        if self.a == 255 {
            None
        } else {
            Some(self.a as f32 / 255.0)
        }
    }

    /// Relative luminance in [0, 1], using the BT.709 coefficients
    pub fn luminance(&self) -> f32 {
        let [r, g, b, _] = self.rgba();
        (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0
    }

    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        ColorU8 { a, ..self }
    }

    pub const fn with_opacity(self, opacity: f32) -> Self {
        assert!(0.0 <= opacity && opacity <= 1.0);
        ColorU8 {
            a: (self.a as f32 * opacity) as u8,
            ..self
        }
    }

    /// Interpolate linearly towards `other`, per channel.
    ///
    /// `t` is clamped to [0, 1]: 0 yields `self`, 1 yields `other`.
    pub fn lerp(&self, other: &ColorU8, t: f32) -> ColorU8 {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        ColorU8 {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: ch(self.a, other.a),
        }
    }
}

const fn hex_to_u8(hex: u8) -> u8 {
    match hex {
        b'0'..=b'9' => hex - b'0',
        b'a'..=b'f' => hex - b'a' + 10,
        b'A'..=b'F' => hex - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}

/// Color parsing error
#[derive(Debug)]
pub enum ParseError {
    InvalidFormat,
    InvalidComponent,
    InvalidHex,
    UnknownName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidComponent => write!(f, "invalid color component"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
            ParseError::UnknownName => write!(f, "unknown color name"),
        }
    }
}

impl error::Error for ParseError {}

fn parse_component(s: &str) -> Result<u8, ParseError> {
    let v: i32 = s.trim().parse().map_err(|_| ParseError::InvalidComponent)?;
    if !(0..=255).contains(&v) {
        return Err(ParseError::InvalidComponent);
    }
    Ok(v as u8)
}

fn parse_alpha(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Ok(f) = s.parse::<f32>() {
        if (0.0..=1.0).contains(&f) {
            return Ok((f * 255.0).round() as u8);
        }
    }
    parse_component(s)
}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::InvalidFormat);
        }

        if raw.starts_with('#') {
            let bytes = raw.as_bytes();
            match bytes.len() {
                4 | 5 | 7 | 9 => {
                    if bytes[1..].iter().all(|b| b.is_ascii_hexdigit()) {
                        Ok(ColorU8::from_html(bytes))
                    } else {
                        Err(ParseError::InvalidHex)
                    }
                }
                _ => Err(ParseError::InvalidHex),
            }
        } else if let Some(inner) = raw
            .strip_prefix("rgb(")
            .and_then(|r| r.strip_suffix(')'))
        {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() != 3 {
                return Err(ParseError::InvalidFormat);
            }
            Ok(ColorU8::from_rgb(
                parse_component(parts[0])?,
                parse_component(parts[1])?,
                parse_component(parts[2])?,
            ))
        } else if let Some(inner) = raw
            .strip_prefix("rgba(")
            .and_then(|r| r.strip_suffix(')'))
        {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() != 4 {
                return Err(ParseError::InvalidFormat);
            }
            Ok(ColorU8::from_rgba(
                parse_component(parts[0])?,
                parse_component(parts[1])?,
                parse_component(parts[2])?,
                parse_alpha(parts[3])?,
            ))
        } else {
            named::lookup_name(raw).ok_or(ParseError::UnknownName)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_html_hex() {
        assert_eq!("#ff0000".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("#f00".parse::<ColorU8>().unwrap(), RED);

        let c = "#ff000080".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);
    }

    #[test]
    fn parse_css_rgb_rgba() {
        assert_eq!("rgb(255,0,0)".parse::<ColorU8>().unwrap(), RED);

        let c = "rgba(255, 0, 0, 0.5)".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);
    }

    #[test]
    fn parse_named() {
        assert_eq!("red".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("SteelBlue".parse::<ColorU8>().unwrap(), STEELBLUE);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "#12345".parse::<ColorU8>(),
            Err(ParseError::InvalidHex)
        ));
        assert!(matches!(
            "rgb(300,0,0)".parse::<ColorU8>(),
            Err(ParseError::InvalidComponent)
        ));
        assert!(matches!(
            "notacolor".parse::<ColorU8>(),
            Err(ParseError::UnknownName)
        ));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let mid = BLACK.lerp(&WHITE, 0.5);
        assert_eq!(mid.rgba(), [128, 128, 128, 255]);
        assert_eq!(BLACK.lerp(&WHITE, 0.0), BLACK);
        assert_eq!(BLACK.lerp(&WHITE, 1.0), WHITE);
        // out of range is clamped
        assert_eq!(BLACK.lerp(&WHITE, 2.0), WHITE);
    }
}
