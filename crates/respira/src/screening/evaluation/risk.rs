use serde::{Deserialize, Serialize};

/// Coarse banding of a 0..=100 percentage for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 25.0 {
            RiskLevel::Low
        } else if percentage < 50.0 {
            RiskLevel::Medium
        } else if percentage < 75.0 {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "veryHigh",
        }
    }
}
