use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const RED: Self = Self::rgb(128, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 128);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Channels scaled to `0.0..=1.0`, in red/green/blue/alpha order.
    #[must_use]
    pub fn to_unit_rgba(self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha].map(|channel| f64::from(channel) / 255.0)
    }
}

/// One text label as issued to a canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: i32, y: i32, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
        }
    }
}
