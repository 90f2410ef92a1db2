use super::ColorU8;

pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
pub const RED: ColorU8 = ColorU8::from_rgb(255, 0, 0);
pub const GREEN: ColorU8 = ColorU8::from_rgb(0, 128, 0);
pub const BLUE: ColorU8 = ColorU8::from_rgb(0, 0, 255);
pub const YELLOW: ColorU8 = ColorU8::from_rgb(255, 255, 0);
pub const CYAN: ColorU8 = ColorU8::from_rgb(0, 255, 255);
pub const MAGENTA: ColorU8 = ColorU8::from_rgb(255, 0, 255);
pub const GRAY: ColorU8 = ColorU8::from_rgb(128, 128, 128);
pub const SILVER: ColorU8 = ColorU8::from_rgb(192, 192, 192);
pub const ORANGE: ColorU8 = ColorU8::from_rgb(255, 165, 0);
pub const PURPLE: ColorU8 = ColorU8::from_rgb(128, 0, 128);
pub const BROWN: ColorU8 = ColorU8::from_rgb(165, 42, 42);
pub const PINK: ColorU8 = ColorU8::from_rgb(255, 192, 203);
pub const STEELBLUE: ColorU8 = ColorU8::from_rgb(70, 130, 180);
pub const TOMATO: ColorU8 = ColorU8::from_rgb(255, 99, 71);
pub const GOLD: ColorU8 = ColorU8::from_rgb(255, 215, 0);
pub const TEAL: ColorU8 = ColorU8::from_rgb(0, 128, 128);
pub const NAVY: ColorU8 = ColorU8::from_rgb(0, 0, 128);
pub const OLIVE: ColorU8 = ColorU8::from_rgb(128, 128, 0);

/// Look up a CSS color name, case-insensitively
pub fn lookup_name(name: &str) -> Option<ColorU8> {
    let name = name.to_ascii_lowercase();
    let col = match name.as_str() {
        "black" => BLACK,
        "white" => WHITE,
        "red" => RED,
        "green" => GREEN,
        "blue" => BLUE,
        "yellow" => YELLOW,
        "cyan" => CYAN,
        "magenta" => MAGENTA,
        "gray" | "grey" => GRAY,
        "silver" => SILVER,
        "orange" => ORANGE,
        "purple" => PURPLE,
        "brown" => BROWN,
        "pink" => PINK,
        "steelblue" => STEELBLUE,
        "tomato" => TOMATO,
        "gold" => GOLD,
        "teal" => TEAL,
        "navy" => NAVY,
        "olive" => OLIVE,
        _ => return None,
    };
    Some(col)
}
