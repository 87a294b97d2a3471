//! Colour type, parsing, and colour-space helpers.

use std::fmt;
use std::str::FromStr;

use palette::{Hsv, IntoColor, Srgb};

use crate::error::{AbstroError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` (3 digits, expanded to 6) and `#RRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(hex.chars().next().unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(AbstroError::Colour {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            }),
        }
    }

    /// Parse a colour from any of the boundary input forms:
    /// `#RRGGBB`, `#RGB`, `(255,255,255)`, or `255,255,255`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        let inner = if s.starts_with('(') && s.ends_with(')') {
            &s[1..s.len() - 1]
        } else {
            s
        };

        if inner.contains(',') {
            let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(AbstroError::Colour {
                    message: format!("Invalid RGB colour: {}", s),
                    help: Some("Use three comma-separated channels, e.g. 255,255,255".to_string()),
                });
            }
            let mut channels = [0u8; 3];
            for (slot, part) in channels.iter_mut().zip(&parts) {
                *slot = part.parse().map_err(|_| AbstroError::Colour {
                    message: format!("Invalid RGB channel '{}' in: {}", part, s),
                    help: Some("Channels must be integers in 0-255".to_string()),
                })?;
            }
            return Ok(Self::rgb(channels[0], channels[1], channels[2]));
        }

        Err(AbstroError::Colour {
            message: format!("Invalid colour format: {}", s),
            help: Some("Use hex (#ffffff) or RGB (255,255,255)".to_string()),
        })
    }

    /// The same colour with a different alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgb(r,g,b)` string, as used in SVG attributes. Alpha is dropped.
    pub fn css_rgb(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Per-channel linear interpolation toward `other`, truncated to integer.
    ///
    /// `ratio` 0.0 returns `self`, 1.0 returns `other`. Alpha is kept from
    /// `self`.
    pub fn blend(self, other: Colour, ratio: f32) -> Colour {
        let lerp = |a: u8, b: u8| (a as f32 * (1.0 - ratio) + b as f32 * ratio) as u8;
        Colour::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            self.a,
        )
    }

    /// Multiply each channel by `factor`. Callers must pass `factor >= 0`.
    pub fn darken(self, factor: f32) -> Colour {
        Colour::new(
            (self.r as f32 * factor) as u8,
            (self.g as f32 * factor) as u8,
            (self.b as f32 * factor) as u8,
            self.a,
        )
    }

    /// Multiply each channel by `factor`, clamping at 255.
    pub fn lighten(self, factor: f32) -> Colour {
        let scale = |c: u8| ((c as f32 * factor) as u32).min(255) as u8;
        Colour::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    /// Convert to HSV with all components in [0, 1].
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let hsv: Hsv = rgb.into_color();
        (
            hsv.hue.into_positive_degrees() / 360.0,
            hsv.saturation,
            hsv.value,
        )
    }

    /// Build an opaque colour from HSV components in [0, 1].
    ///
    /// Channels are denormalised by x255 truncation.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Colour {
        let hsv = Hsv::new(h.rem_euclid(1.0) * 360.0, s, v);
        let rgb: Srgb<f32> = hsv.into_color();
        Colour::rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}

impl FromStr for Colour {
    type Err = AbstroError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| AbstroError::Colour {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| AbstroError::Colour {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
