//! Dark palette shared by every widget. Applied once, before the first frame.

use ratatui::style::Color;

pub const BRAND: Color = Color::Rgb(0x90, 0xca, 0xf9);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const CARD_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const INPUT_FOCUS: Color = Color::Rgb(0x90, 0xca, 0xf9);
pub const BUTTON_BG: Color = Color::Rgb(0x90, 0xca, 0xf9);
pub const BUTTON_TEXT: Color = Color::Rgb(0x12, 0x12, 0x12);
pub const BUTTON_DISABLED_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const LINK: Color = Color::Rgb(0x90, 0xca, 0xf9);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
