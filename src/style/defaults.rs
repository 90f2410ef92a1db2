pub const FONT_FAMILY: &str = "sans-serif";

pub const LEGEND_LABEL_FONT_SIZE: f32 = 12.0;
pub const ITEM_WIDTH: f32 = 100.0;
pub const ITEM_HEIGHT: f32 = 20.0;
pub const ITEMS_SPACING: f32 = 0.0;
pub const SYMBOL_SIZE: f32 = 16.0;
pub const SYMBOL_SPACING: f32 = 8.0;

pub const BAR_LENGTH: f32 = 200.0;
pub const BAR_THICKNESS: f32 = 10.0;

pub const TICK_LABEL_FONT_SIZE: f32 = 11.0;
pub const TICK_SIZE: f32 = 4.0;
pub const TICK_SPACING: f32 = 3.0;
pub const TICK_LINE_WIDTH: f32 = 1.0;

pub const TITLE_FONT_SIZE: f32 = 12.0;
pub const TITLE_OFFSET: f32 = 4.0;

// bar length units per auto-generated tick
pub const TICK_DENSITY: f32 = 40.0;
pub const MIN_AUTO_TICKS: usize = 2;
pub const MAX_AUTO_TICKS: usize = 11;

pub const GRADIENT_RESOLUTION: usize = 16;
