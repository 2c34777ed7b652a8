use serde::Serialize;

/// One block of the analysis page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub content_id: &'static str,
    pub card_count: usize,
}

/// Page sections in display order.
pub static SECTIONS: [Section; 7] = [
    Section {
        id: "selected-section",
        icon: "🎨",
        title: "Selected Color",
        description: None,
        content_id: "selected-color-card",
        card_count: 1,
    },
    Section {
        id: "complementary-section",
        icon: "🔄",
        title: "Complementary",
        description: Some("The opposite color on the wheel, giving maximum contrast."),
        content_id: "complementary-color-card",
        card_count: 1,
    },
    Section {
        id: "analogous-section",
        icon: "📐",
        title: "Analogous Colors",
        description: Some("Neighbouring colors on the wheel, giving a natural harmony."),
        content_id: "analogous-colors",
        card_count: 2,
    },
    Section {
        id: "triadic-section",
        icon: "🔺",
        title: "Triadic",
        description: Some("Three evenly spaced colors on the wheel, giving vibrant contrast."),
        content_id: "triadic-colors",
        card_count: 3,
    },
    Section {
        id: "tetradic-section",
        icon: "🔲",
        title: "Tetradic",
        description: Some("Two complementary pairs, giving rich and varied combinations."),
        content_id: "tetradic-colors",
        card_count: 4,
    },
    Section {
        id: "tints-section",
        icon: "⚪",
        title: "Tints",
        description: Some("The color mixed with white, raising its lightness."),
        content_id: "tints-container",
        card_count: 1,
    },
    Section {
        id: "shades-section",
        icon: "⚫",
        title: "Shades",
        description: Some("The color mixed with black, lowering its lightness."),
        content_id: "shades-container",
        card_count: 1,
    },
];

pub fn find(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}
