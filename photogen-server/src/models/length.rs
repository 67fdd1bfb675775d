//! Description length categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requested description length.
///
/// Parsing never fails: unknown values become [`Length::Medium`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
    VeryLong,
}

impl Length {
    /// Parse a form value, coercing anything unrecognized to `Medium`.
    pub fn coerce(s: &str) -> Self {
        match s {
            "Short" => Self::Short,
            "Medium" => Self::Medium,
            "Long" => Self::Long,
            "VeryLong" => Self::VeryLong,
            _ => Self::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
            Self::VeryLong => "VeryLong",
        }
    }

    /// Target sentence count, as shown to the model
    pub fn sentences(&self) -> &'static str {
        match self {
            Self::Short => "1-2",
            Self::Medium => "5-6",
            Self::Long => "10-15",
            Self::VeryLong => "20-30",
        }
    }

    pub fn all() -> [Length; 4] {
        [Self::Short, Self::Medium, Self::Long, Self::VeryLong]
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
