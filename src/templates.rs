use askama::Template;

use crate::analysis::Analysis;
use crate::color::Color;
use crate::name::FALLBACK_NAME;

pub struct ColorCard {
    pub hex: String,
    pub name: String,
    pub rgb: String,
    pub hsl: String,
}

impl From<&Color> for ColorCard {
    fn from(color: &Color) -> Self {
        Self {
            hex: color.hex().to_string(),
            name: color.name().unwrap_or(FALLBACK_NAME).to_string(),
            rgb: color.rgb().to_string(),
            hsl: color.hsl().to_string(),
        }
    }
}

pub struct SectionView {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub content_id: &'static str,
    pub cards: Vec<ColorCard>,
}

#[derive(Template)]
#[template(path = "analysis.html")]
pub struct AnalysisTemplate {
    pub hex: String,
    pub sections: Vec<SectionView>,
}

impl AnalysisTemplate {
    pub fn new(analysis: &Analysis) -> Self {
        let sections = analysis
            .sections()
            .into_iter()
            .map(|(section, colors)| SectionView {
                id: section.id,
                icon: section.icon,
                title: section.title,
                description: section.description.unwrap_or_default(),
                content_id: section.content_id,
                cards: colors.iter().map(ColorCard::from).collect(),
            })
            .collect();
        Self {
            hex: analysis.base.hex().to_string(),
            sections,
        }
    }
}
