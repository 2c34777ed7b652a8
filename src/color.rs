use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::name::{NameLookup, resolve_name};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Integer HSL: hue in degrees [0, 360), saturation and lightness in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Parses `#rrggbb` or `rrggbb`, case-insensitive.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Lenient parse: malformed input yields black instead of an error.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_default()
}

/// Formats as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Like [`rgb_to_hex`] for callers holding unchecked integers. Channels outside
/// 0-255 are rejected rather than wrapped.
pub fn try_rgb_to_hex(r: i64, g: i64, b: i64) -> Result<String, ColorError> {
    let check = |channel: &'static str, value: i64| {
        u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { channel, value })
    };
    Ok(rgb_to_hex(Rgb {
        r: check("red", r)?,
        g: check("green", g)?,
        b: check("blue", b)?,
    }))
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let (h, s);
    if max == min {
        h = 0.0;
        s = 0.0;
    } else {
        let d = max - min;
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        // Precedence on ties is red, then green, then blue.
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h = sector / 6.0;
    }
    Hsl {
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = (hsl.h % 360) as f64 / 360.0;
    let s = hsl.s.min(100) as f64 / 100.0;
    let l = hsl.l.min(100) as f64 / 100.0;

    let (r, g, b);
    if s == 0.0 {
        r = l;
        g = l;
        b = l;
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        r = hue_to_channel(p, q, h + 1.0 / 3.0);
        g = hue_to_channel(p, q, h);
        b = hue_to_channel(p, q, h - 1.0 / 3.0);
    }
    let to_byte = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: to_byte(r),
        g: to_byte(g),
        b: to_byte(b),
    }
}

/// A color in all three representations plus its display name.
///
/// `rgb` is always parsed from `hex` and `hsl` converted from `rgb`; there are no
/// setters, so the representations cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    name: Option<String>,
}

impl Color {
    /// Builds the unnamed color for `hex`. Malformed input becomes `#000000`.
    pub fn derive(hex: &str) -> Self {
        let rgb = hex_to_rgb(hex);
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb),
            name: None,
        }
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::derive(&rgb_to_hex(hsl_to_rgb(hsl)))
    }

    /// Resolves the display name through `lookup`. Never fails.
    pub async fn with_name<L: NameLookup>(self, lookup: &L) -> Self {
        let name = resolve_name(lookup, &self.hex).await;
        Self {
            name: Some(name),
            ..self
        }
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Derives the color for `hex` and resolves its name.
pub async fn create_color<L: NameLookup>(hex: &str, lookup: &L) -> Color {
    Color::derive(hex).with_name(lookup).await
}
