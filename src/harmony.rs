//! Color-wheel relationships.
//!
//! Every relation is available in two forms: a pure function that derives the
//! unnamed colors, and a `get_*` variant that also resolves a name for each
//! derived color. Siblings resolve their names concurrently; the returned order
//! is fixed regardless of which lookup finishes first.

use crate::color::{Color, Hsl};
use crate::name::NameLookup;

/// One step on a twelve-segment color wheel, in degrees.
pub const HUE_DELTA: i32 = 360 / 12;

/// Lightness change applied by [`tint`] and [`shade`], in percent.
pub const LIGHTNESS_STEP: u8 = 30;

/// Rotates `hue` by `steps` multiples of [`HUE_DELTA`], normalized into [0, 360).
pub fn rotate_hue(hue: u16, steps: i32) -> u16 {
    (hue as i32 + steps * HUE_DELTA).rem_euclid(360) as u16
}

fn rotated(color: &Color, steps: i32) -> Color {
    let hsl = color.hsl();
    Color::from_hsl(Hsl::new(rotate_hue(hsl.h, steps), hsl.s, hsl.l))
}

fn with_lightness(color: &Color, l: u8) -> Color {
    let hsl = color.hsl();
    Color::from_hsl(Hsl::new(hsl.h, hsl.s, l))
}

pub fn complementary(color: &Color) -> Color {
    rotated(color, 6)
}

/// The two neighbours, clockwise first. The base is not included.
pub fn analogous(color: &Color) -> [Color; 2] {
    [rotated(color, 1), rotated(color, -1)]
}

/// The base followed by the colors at +120 and -120 degrees.
pub fn triadic(color: &Color) -> [Color; 3] {
    [color.clone(), rotated(color, 4), rotated(color, -4)]
}

/// The base followed by the colors at +120, +180 and -60 degrees.
pub fn tetradic(color: &Color) -> [Color; 4] {
    [
        color.clone(),
        rotated(color, 4),
        rotated(color, 6),
        rotated(color, -2),
    ]
}

pub fn tint(color: &Color) -> Color {
    with_lightness(color, color.hsl().l.saturating_add(LIGHTNESS_STEP).min(100))
}

pub fn shade(color: &Color) -> Color {
    with_lightness(color, color.hsl().l.saturating_sub(LIGHTNESS_STEP))
}

pub async fn get_complementary<L: NameLookup>(color: &Color, lookup: &L) -> Color {
    complementary(color).with_name(lookup).await
}

pub async fn get_analogous<L: NameLookup>(color: &Color, lookup: &L) -> [Color; 2] {
    let [a, b] = analogous(color);
    let (a, b) = tokio::join!(a.with_name(lookup), b.with_name(lookup));
    [a, b]
}

pub async fn get_triadic<L: NameLookup>(color: &Color, lookup: &L) -> [Color; 3] {
    let [base, a, b] = triadic(color);
    let (a, b) = tokio::join!(a.with_name(lookup), b.with_name(lookup));
    [base, a, b]
}

pub async fn get_tetradic<L: NameLookup>(color: &Color, lookup: &L) -> [Color; 4] {
    let [base, a, b, c] = tetradic(color);
    let (a, b, c) = tokio::join!(
        a.with_name(lookup),
        b.with_name(lookup),
        c.with_name(lookup)
    );
    [base, a, b, c]
}

pub async fn get_tint<L: NameLookup>(color: &Color, lookup: &L) -> Color {
    tint(color).with_name(lookup).await
}

pub async fn get_shade<L: NameLookup>(color: &Color, lookup: &L) -> Color {
    shade(color).with_name(lookup).await
}
