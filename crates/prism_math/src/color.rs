//! RGB color with unclamped arithmetic.
//!
//! Channels nominally live in [0, 1], but sums of light contributions may go
//! above 1. Clamping happens only through [`Color::clamped`] when a pixel is
//! finalized.

use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

use thiserror::Error;

use crate::Interval;

/// Errors produced when parsing colors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color format {0:?}: expected #RRGGBB")]
    InvalidFormat(String),
}

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a new color.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string. Each byte is divided by 255.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| invalid())
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Clamp every channel to [0, 1].
    pub fn clamped(self) -> Self {
        Self::new(
            Interval::UNIT.clamp(self.r),
            Interval::UNIT.clamp(self.g),
            Interval::UNIT.clamp(self.b),
        )
    }

    /// True if no channel is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Convert to 8-bit channels: `round(clamp(c, 0, 1) * 255)`.
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = self.clamped();
        [to_byte(c.r), to_byte(c.g), to_byte(c.b)]
    }
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

/// Component-wise product, used to tint a surface by a light.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}
