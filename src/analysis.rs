use std::slice;

use log::info;
use serde::Serialize;

use crate::color::{Color, create_color};
use crate::harmony::{
    get_analogous, get_complementary, get_shade, get_tetradic, get_tint, get_triadic,
};
use crate::name::NameLookup;
use crate::sections::{SECTIONS, Section};

/// A base color together with every relation shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub base: Color,
    pub complementary: Color,
    pub analogous: [Color; 2],
    pub triadic: [Color; 3],
    pub tetradic: [Color; 4],
    pub tint: Color,
    pub shade: Color,
}

impl Analysis {
    /// Colors rendered in the section with `section_id`, empty for unknown ids.
    pub fn section_colors(&self, section_id: &str) -> &[Color] {
        match section_id {
            "selected-section" => slice::from_ref(&self.base),
            "complementary-section" => slice::from_ref(&self.complementary),
            "analogous-section" => &self.analogous,
            "triadic-section" => &self.triadic,
            "tetradic-section" => &self.tetradic,
            "tints-section" => slice::from_ref(&self.tint),
            "shades-section" => slice::from_ref(&self.shade),
            _ => &[],
        }
    }

    /// Every section in display order paired with its colors.
    pub fn sections(&self) -> Vec<(&'static Section, &[Color])> {
        SECTIONS
            .iter()
            .map(|section| (section, self.section_colors(section.id)))
            .collect()
    }
}

/// Builds the named base color for `hex` and derives every relation from it.
pub async fn analyze<L: NameLookup>(hex: &str, lookup: &L) -> Analysis {
    let base = create_color(hex, lookup).await;
    let (complementary, analogous, triadic, tetradic, tint, shade) = tokio::join!(
        get_complementary(&base, lookup),
        get_analogous(&base, lookup),
        get_triadic(&base, lookup),
        get_tetradic(&base, lookup),
        get_tint(&base, lookup),
        get_shade(&base, lookup),
    );
    info!("Analyzed {} ({})", base.hex(), base.name().unwrap_or_default());
    Analysis {
        base,
        complementary,
        analogous,
        triadic,
        tetradic,
        tint,
        shade,
    }
}
