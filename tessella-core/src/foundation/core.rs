use serde::Deserialize;

use crate::foundation::error::{StitchError, StitchResult};

/// Pixel dimensions of an image or canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Extent {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Extent {
    /// Build an [`Extent`]; both dimensions must be strictly positive.
    pub fn new(width: u32, height: u32) -> StitchResult<Self> {
        if width == 0 || height == 0 {
            return Err(StitchError::validation(
                "Extent dimensions must be strictly positive",
            ));
        }
        Ok(Self { width, height })
    }

    /// Pixel count of this extent.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Straight-alpha RGBA8 color (not premultiplied).
///
/// Serializes as a `#rrggbb` / `#rrggbbaa` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black, the default canvas background.
    pub const OPAQUE_BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Parse a `#RRGGBB` or `#RRGGBBAA` hex color (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> StitchResult<Self> {
        let t = s.trim();
        let t = t.strip_prefix('#').unwrap_or(t);
        if !t.is_ascii() {
            return Err(StitchError::validation(format!("invalid hex color \"{s}\"")));
        }

        fn hex_byte(pair: &str) -> StitchResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| StitchError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        match t.len() {
            6 => Ok(Self {
                r: hex_byte(&t[0..2])?,
                g: hex_byte(&t[2..4])?,
                b: hex_byte(&t[4..6])?,
                a: 255,
            }),
            8 => Ok(Self {
                r: hex_byte(&t[0..2])?,
                g: hex_byte(&t[2..4])?,
                b: hex_byte(&t[4..6])?,
                a: hex_byte(&t[6..8])?,
            }),
            _ => Err(StitchError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }

    /// Format as lowercase hex; alpha is included only when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::OPAQUE_BLACK
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
