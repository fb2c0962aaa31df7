use std::fmt;

use serde::{Deserialize, Serialize};

/// Roast intensity requested by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoastCategory {
    Light,
    #[default]
    Medium,
    ExtraSpicy,
}

impl RoastCategory {
    /// Parse a category name, falling back to [`RoastCategory::Medium`] for
    /// anything unrecognized
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("light") => Self::Light,
            Some("extra_spicy") => Self::ExtraSpicy,
            _ => Self::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::ExtraSpicy => "extra_spicy",
        }
    }
}

impl fmt::Display for RoastCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
