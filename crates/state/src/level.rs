use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Severity rows in display order. Every entry shows exactly these three.
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    pub fn label(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }

    pub fn rank(self) -> usize {
        match self {
            Level::Low => 0,
            Level::Medium => 1,
            Level::High => 2,
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Level::Low => Color32::from_rgb(0xFF, 0xA5, 0x00),
            Level::Medium => Color32::from_rgb(0xFF, 0x8C, 0x42),
            Level::High => Color32::from_rgb(0xFF, 0x63, 0x47),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_follows_declaration_order() {
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.rank(), i);
        }
        assert!(Level::Low < Level::Medium && Level::Medium < Level::High);
    }

    #[test]
    fn colors_are_distinct() {
        assert_ne!(Level::Low.color(), Level::Medium.color());
        assert_ne!(Level::Medium.color(), Level::High.color());
        assert_ne!(Level::Low.color(), Level::High.color());
    }
}
