//! Color-theory relationships (complementary, analogous, triadic, tetradic,
//! tint, shade) derived from a base color, with optional remote lookup of a
//! human-readable color name.

pub mod analysis;
pub mod api;
pub mod color;
pub mod config;
pub mod error;
pub mod harmony;
pub mod name;
pub mod sections;
pub mod templates;

pub use analysis::{Analysis, analyze};
pub use color::{Color, Hsl, Rgb, create_color};
pub use error::ColorError;
pub use name::{ColorApi, FALLBACK_NAME, NameLookup, NameSource, NoLookup, resolve_name};
