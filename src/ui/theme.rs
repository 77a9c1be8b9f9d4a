use ratatui::style::Color;

pub const TITLE_GREEN: Color = Color::Rgb(0x00, 0xc8, 0x53);
pub const SUBTITLE_GRAY: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACCENT_BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const SPLASH_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SPLASH_BG: Color = Color::Rgb(0x0f, 0x17, 0x2a);
pub const FOOTER_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
