use serde::{Deserialize, Serialize};

/// Result of a valuation calculation.
///
/// Carries every intermediate component alongside the final figure so the
/// front end can show an itemized breakdown. Values are plain `f64`; when an
/// attribute fails to parse the NaN flows through these fields unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationBreakdown {
    /// Living area times the per-square-foot multiplier.
    pub area_component: f64,

    /// Bedroom count times the per-bedroom increment.
    pub bedroom_component: f64,

    /// Bathroom count times the per-bathroom increment.
    pub bathroom_component: f64,

    /// Parking spaces times the per-space value.
    pub parking_component: f64,

    /// Depreciation for the property's age, clamped at zero for
    /// properties newer than the reference year.
    pub age_component: f64,

    /// Foundation plus all components, minus depreciation.
    pub base_valuation: f64,

    /// Multiplier applied for the declared zone.
    pub location_factor: f64,

    /// Base valuation scaled by the location factor.
    pub adjusted_valuation: f64,

    /// The volatility fraction that was applied, in [-0.05, 0.05].
    pub volatility: f64,

    /// Adjusted valuation with volatility applied, rounded to whole dollars.
    pub final_valuation: f64,
}
