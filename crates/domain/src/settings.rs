//! User settings — profile fields plus the generation/governance knobs the
//! engine consumes.
//!
//! Settings are never read from ambient state: callers thread the relevant
//! fields into the executor explicitly.

use serde::{Deserialize, Serialize};

/// Voice used by the reply generator and echoed in governance reporting.
///
/// Deserializes from any string; unrecognized values take the default arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Direct,
    Helpful,
}

impl Tone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Direct => "direct",
            Self::Helpful => "helpful",
        }
    }
}

impl From<&str> for Tone {
    fn from(s: &str) -> Self {
        match s {
            "friendly" => Self::Friendly,
            "direct" => Self::Direct,
            "helpful" => Self::Helpful,
            // "professional" and anything unrecognized.
            _ => Self::Professional,
        }
    }
}

impl From<String> for Tone {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.as_str().to_string()
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Governance risk appetite, echoed in reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl From<&str> for RiskLevel {
    fn from(s: &str) -> Self {
        match s {
            "medium" => Self::Medium,
            "high" => Self::High,
            // "low" and anything unrecognized.
            _ => Self::Low,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        level.as_str().to_string()
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single persisted user/settings mapping.
///
/// Every field defaults independently, so partially stored mappings (older
/// app versions, hand-edited state) load cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub name: String,
    pub email: String,
    pub notifications: bool,
    pub privacy_share_analytics: bool,
    pub tone: Tone,
    pub risk_level: RiskLevel,
    pub mask_pii_in_logs: bool,
    pub demo_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            notifications: true,
            privacy_share_analytics: false,
            tone: Tone::Professional,
            risk_level: RiskLevel::Low,
            mask_pii_in_logs: false,
            demo_mode: false,
        }
    }
}
