use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WorkPattern {
    #[default]
    Weekly,
    Fortnightly,
}

impl WorkPattern {
    /// Days from the period's Monday to its last day.
    pub fn span_days(&self) -> i64 {
        match self {
            WorkPattern::Weekly => 6,
            WorkPattern::Fortnightly => 13,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkPattern::Weekly => "weekly",
            WorkPattern::Fortnightly => "fortnightly",
        }
    }
}

/// User settings blob, stored under its own key next to the entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub work_pattern: WorkPattern,
    pub target_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_pattern: WorkPattern::Weekly,
            target_hours: 37.5,
            hourly_rate: None,
        }
    }
}
