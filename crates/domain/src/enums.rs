use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a purchase is made.
///
/// Parsing is lenient: unknown strings fall back to [`Frequency::Weekly`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Frequency {
    /// Every calendar day.
    Daily,
    /// Every 7 days from the start date.
    #[default]
    Weekly,
    /// Same day of month, clamped to the month's last day.
    Monthly,
}

impl Frequency {
    /// Lowercase name used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl From<&str> for Frequency {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Frequency::Daily,
            "monthly" => Frequency::Monthly,
            _ => Frequency::Weekly,
        }
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        Frequency::from(value.as_str())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
