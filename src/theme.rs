use ratatui::style::Color;

use crate::domain::MagnitudeBucket;

// Backgrounds
pub const BG_DARK: Color = Color::Rgb(13, 13, 23);
pub const BG_BAR: Color = Color::Rgb(17, 17, 30);
pub const BG_SURFACE: Color = Color::Rgb(22, 22, 38);
pub const BG_HIGHLIGHT: Color = Color::Rgb(30, 30, 58);

// Primary accent
pub const ACCENT: Color = Color::Rgb(232, 95, 64);

// Text
pub const TEXT: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 130, 155);
pub const TEXT_MUTED: Color = Color::Rgb(75, 75, 100);

// Semantic
pub const GREEN: Color = Color::Rgb(52, 211, 153);
pub const RED: Color = Color::Rgb(248, 113, 113);
pub const YELLOW: Color = Color::Rgb(251, 191, 36);
pub const CYAN: Color = Color::Rgb(103, 232, 249);

// Magnitude badges, cool to hot
const MAGNITUDE_1: Color = Color::Rgb(0x4A, 0x7B, 0xA7);
const MAGNITUDE_2: Color = Color::Rgb(0x04, 0xB4, 0xB3);
const MAGNITUDE_3: Color = Color::Rgb(0x10, 0xCA, 0xC9);
const MAGNITUDE_4: Color = Color::Rgb(0xF5, 0xA6, 0x23);
const MAGNITUDE_5: Color = Color::Rgb(0xFF, 0x7D, 0x50);
const MAGNITUDE_6: Color = Color::Rgb(0xFC, 0x66, 0x44);
const MAGNITUDE_7: Color = Color::Rgb(0xE7, 0x5F, 0x40);
const MAGNITUDE_8: Color = Color::Rgb(0xE1, 0x3A, 0x20);
const MAGNITUDE_9: Color = Color::Rgb(0xD9, 0x32, 0x18);
const MAGNITUDE_10_PLUS: Color = Color::Rgb(0xC0, 0x38, 0x23);

/// Badge color for a magnitude bucket. Buckets 0 and 1 share a color.
pub fn magnitude_color(bucket: MagnitudeBucket) -> Color {
    match bucket {
        MagnitudeBucket::Level(0 | 1) => MAGNITUDE_1,
        MagnitudeBucket::Level(2) => MAGNITUDE_2,
        MagnitudeBucket::Level(3) => MAGNITUDE_3,
        MagnitudeBucket::Level(4) => MAGNITUDE_4,
        MagnitudeBucket::Level(5) => MAGNITUDE_5,
        MagnitudeBucket::Level(6) => MAGNITUDE_6,
        MagnitudeBucket::Level(7) => MAGNITUDE_7,
        MagnitudeBucket::Level(8) => MAGNITUDE_8,
        MagnitudeBucket::Level(_) => MAGNITUDE_9,
        MagnitudeBucket::TenPlus => MAGNITUDE_10_PLUS,
    }
}
