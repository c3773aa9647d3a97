use serde::{Deserialize, Serialize};

/// Neutral multiplier applied when the zone string is empty or unrecognized.
const DEFAULT_LOCATION_FACTOR: f64 = 1.0;

/// Recognized location categories for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Urban,
    Suburban,
    Rural,
}

impl Zone {
    pub fn all() -> &'static [Zone] {
        &[Zone::Urban, Zone::Suburban, Zone::Rural]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urban => "urban",
            Self::Suburban => "suburban",
            Self::Rural => "rural",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "urban" => Some(Self::Urban),
            "suburban" => Some(Self::Suburban),
            "rural" => Some(Self::Rural),
            _ => None,
        }
    }

    /// Multiplier applied to the base valuation for this zone.
    pub fn location_factor(&self) -> f64 {
        match self {
            Self::Urban => 1.4,
            Self::Suburban => 1.2,
            Self::Rural => 1.0,
        }
    }
}

/// Location factor for a raw zone string.
///
/// Unrecognized input (including the empty string) gets the neutral factor
/// rather than an error; the form never constrains this field to the known set.
pub fn location_factor(zone: &str) -> f64 {
    Zone::parse(zone).map_or(DEFAULT_LOCATION_FACTOR, |z| z.location_factor())
}
