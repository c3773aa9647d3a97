//! Home valuation calculation.
//!
//! This module implements the instant-estimate formula: a fixed pricing
//! schedule applied to six property attributes, a zone multiplier, and a
//! bounded random volatility term.
//!
//! # Formula Structure
//!
//! | Component | Rule |
//! |-----------|------|
//! | Area      | living area × $120/sq ft |
//! | Bedrooms  | bedroom count × $25,000 |
//! | Bathrooms | bathroom count × $15,000 |
//! | Parking   | parking spaces × $10,000 |
//! | Age       | (2025 − construction year) × $500, clamped at 0 |
//! | Base      | $150,000 foundation + components − age |
//! | Adjusted  | base × location factor (urban 1.4, suburban 1.2, rural 1.0) |
//! | Final     | adjusted + adjusted × volatility, rounded to whole dollars |
//!
//! Attributes are parsed leniently (leading numeric prefix, so the "5+" style
//! option labels read as their leading digit); anything unparseable becomes
//! NaN and flows through to the final figure unguarded.
//!
//! # Example
//!
//! ```
//! use valuation_core::{PricingSchedule, PropertyAttributes, ValuationCalculator};
//!
//! let attrs = PropertyAttributes {
//!     living_area: "2000".to_string(),
//!     bedroom_count: "3".to_string(),
//!     bathroom_count: "2".to_string(),
//!     geographic_zone: "suburban".to_string(),
//!     construction_year: "2010".to_string(),
//!     parking_spaces: "2".to_string(),
//! };
//!
//! let schedule = PricingSchedule::default();
//! let calculator = ValuationCalculator::new(&schedule);
//! let result = calculator.calculate(&attrs, 0.0);
//!
//! assert_eq!(result.base_valuation, 507_500.0);
//! assert_eq!(result.final_valuation, 609_000.0);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{max, parse_number_prefix};
use crate::models::{PropertyAttributes, ValuationBreakdown, location_factor};

/// Half-width of the volatility band applied to the adjusted valuation.
pub const MAX_VOLATILITY: f64 = 0.05;

/// Pricing coefficients shared by every valuation.
///
/// Compiled as one constant table rather than literals scattered through the
/// formula. [`PricingSchedule::default`] is the production schedule; tests may
/// build their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSchedule {
    /// Flat starting value of any property.
    pub foundation: f64,
    /// Dollars per square foot of living area.
    pub area_multiplier: f64,
    /// Dollars per bedroom.
    pub bedroom_increment: f64,
    /// Dollars per bathroom.
    pub bathroom_increment: f64,
    /// Dollars per parking space.
    pub parking_value: f64,
    /// Dollars lost per year of age.
    pub annual_depreciation: f64,
    /// Reference year for the age calculation. Fixed, not wall clock.
    pub current_year: f64,
}

impl Default for PricingSchedule {
    fn default() -> Self {
        Self {
            foundation: 150_000.0,
            area_multiplier: 120.0,
            bedroom_increment: 25_000.0,
            bathroom_increment: 15_000.0,
            parking_value: 10_000.0,
            annual_depreciation: 500.0,
            current_year: 2025.0,
        }
    }
}

/// Calculator for the instant home valuation.
///
/// Borrows a [`PricingSchedule`] and applies it to raw attribute strings.
/// All methods are total: malformed input produces NaN, never an error.
#[derive(Debug, Clone)]
pub struct ValuationCalculator<'a> {
    schedule: &'a PricingSchedule,
}

impl<'a> ValuationCalculator<'a> {
    pub fn new(schedule: &'a PricingSchedule) -> Self {
        Self { schedule }
    }

    /// Runs the full valuation with a caller-supplied volatility fraction.
    ///
    /// `volatility` is the fraction of the adjusted valuation added or
    /// removed, expected in `[-MAX_VOLATILITY, MAX_VOLATILITY]`. Passing 0.0
    /// makes the result exact, which is how the tests pin the formula.
    pub fn calculate(
        &self,
        attrs: &PropertyAttributes,
        volatility: f64,
    ) -> ValuationBreakdown {
        let area_component = self.area_component(&attrs.living_area);
        let bedroom_component = self.bedroom_component(&attrs.bedroom_count);
        let bathroom_component = self.bathroom_component(&attrs.bathroom_count);
        let parking_component = self.parking_component(&attrs.parking_spaces);
        let age_component = self.age_component(&attrs.construction_year);

        let base_valuation = self.schedule.foundation + area_component + bedroom_component
            + bathroom_component
            + parking_component
            - age_component;

        let location_factor = location_factor(&attrs.geographic_zone);
        let adjusted_valuation = base_valuation * location_factor;
        let final_valuation = (adjusted_valuation + adjusted_valuation * volatility).round();

        ValuationBreakdown {
            area_component,
            bedroom_component,
            bathroom_component,
            parking_component,
            age_component,
            base_valuation,
            location_factor,
            adjusted_valuation,
            volatility,
            final_valuation,
        }
    }

    /// Runs the valuation with a random volatility draw of ±5%.
    pub fn estimate<R: Rng>(
        &self,
        attrs: &PropertyAttributes,
        rng: &mut R,
    ) -> ValuationBreakdown {
        let volatility = rng.r#gen::<f64>() * (2.0 * MAX_VOLATILITY) - MAX_VOLATILITY;
        self.calculate(attrs, volatility)
    }

    fn area_component(&self, living_area: &str) -> f64 {
        self.parse_attribute("living_area", living_area) * self.schedule.area_multiplier
    }

    fn bedroom_component(&self, bedroom_count: &str) -> f64 {
        self.parse_attribute("bedroom_count", bedroom_count) * self.schedule.bedroom_increment
    }

    fn bathroom_component(&self, bathroom_count: &str) -> f64 {
        self.parse_attribute("bathroom_count", bathroom_count) * self.schedule.bathroom_increment
    }

    fn parking_component(&self, parking_spaces: &str) -> f64 {
        self.parse_attribute("parking_spaces", parking_spaces) * self.schedule.parking_value
    }

    /// Depreciation for the property's age, clamped at zero so a
    /// construction year past the reference year never adds value.
    /// The clamp is comparison-based: a NaN year stays NaN.
    fn age_component(&self, construction_year: &str) -> f64 {
        let age = self.schedule.current_year - self.parse_attribute("construction_year", construction_year);
        max(0.0, age * self.schedule.annual_depreciation)
    }

    fn parse_attribute(
        &self,
        field: &'static str,
        raw: &str,
    ) -> f64 {
        let value = parse_number_prefix(raw);
        if value.is_nan() {
            warn!(field, input = %raw, "attribute has no numeric prefix; estimate will not be a number");
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn reference_attrs() -> PropertyAttributes {
        PropertyAttributes {
            living_area: "2000".to_string(),
            bedroom_count: "3".to_string(),
            bathroom_count: "2".to_string(),
            geographic_zone: "suburban".to_string(),
            construction_year: "2010".to_string(),
            parking_spaces: "2".to_string(),
        }
    }

    // =========================================================================
    // component tests
    // =========================================================================

    #[test]
    fn area_component_multiplies_square_footage() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        assert_eq!(calculator.area_component("2000"), 240_000.0);
    }

    #[test]
    fn bedroom_component_parses_plus_label() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        assert_eq!(calculator.bedroom_component("5+"), 125_000.0);
    }

    #[test]
    fn bathroom_component_parses_half_baths_and_plus_label() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        assert_eq!(calculator.bathroom_component("2.5"), 37_500.0);
        assert_eq!(calculator.bathroom_component("4+"), 60_000.0);
    }

    #[test]
    fn parking_component_parses_plus_label() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        assert_eq!(calculator.parking_component("3+"), 30_000.0);
        assert_eq!(calculator.parking_component("0"), 0.0);
    }

    #[test]
    fn age_component_depreciates_by_year() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        // (2025 - 2010) * 500
        assert_eq!(calculator.age_component("2010"), 7_500.0);
    }

    #[test]
    fn age_component_clamps_future_years_to_zero() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        assert_eq!(calculator.age_component("2030"), 0.0);
    }

    #[test]
    fn age_component_keeps_nan_for_unparseable_year() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        assert!(calculator.age_component("unknown").is_nan());
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_reference_case_with_zero_volatility() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        let result = calculator.calculate(&reference_attrs(), 0.0);

        // 150000 + 2000*120 + 3*25000 + 2*15000 + 2*10000 - 15*500
        assert_eq!(result.area_component, 240_000.0);
        assert_eq!(result.bedroom_component, 75_000.0);
        assert_eq!(result.bathroom_component, 30_000.0);
        assert_eq!(result.parking_component, 20_000.0);
        assert_eq!(result.age_component, 7_500.0);
        assert_eq!(result.base_valuation, 507_500.0);
        assert_eq!(result.location_factor, 1.2);
        assert_eq!(result.adjusted_valuation, 609_000.0);
        assert_eq!(result.final_valuation, 609_000.0);
    }

    #[test]
    fn calculate_applies_urban_factor() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);
        let mut attrs = reference_attrs();
        attrs.geographic_zone = "urban".to_string();

        let result = calculator.calculate(&attrs, 0.0);

        assert_eq!(result.adjusted_valuation, 710_500.0);
    }

    #[test]
    fn calculate_defaults_factor_for_unrecognized_zone() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);
        let mut attrs = reference_attrs();
        attrs.geographic_zone = "downtown".to_string();

        let result = calculator.calculate(&attrs, 0.0);

        assert_eq!(result.location_factor, 1.0);
        assert_eq!(result.final_valuation, 507_500.0);
    }

    #[test]
    fn calculate_applies_positive_volatility() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        let result = calculator.calculate(&reference_attrs(), 0.05);

        // 609000 * 1.05
        assert_eq!(result.final_valuation, 639_450.0);
    }

    #[test]
    fn calculate_applies_negative_volatility() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        let result = calculator.calculate(&reference_attrs(), -0.05);

        assert_eq!(result.final_valuation, 578_550.0);
    }

    #[test]
    fn calculate_propagates_nan_from_malformed_input() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);
        let mut attrs = reference_attrs();
        attrs.living_area = "spacious".to_string();

        let result = calculator.calculate(&attrs, 0.0);

        assert!(result.area_component.is_nan());
        assert!(result.base_valuation.is_nan());
        assert!(result.final_valuation.is_nan());
    }

    #[test]
    fn calculate_propagates_nan_through_age_clamp() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);
        let mut attrs = reference_attrs();
        attrs.construction_year = String::new();

        let result = calculator.calculate(&attrs, 0.0);

        assert!(result.age_component.is_nan());
        assert!(result.final_valuation.is_nan());
    }

    // =========================================================================
    // estimate tests
    // =========================================================================

    #[test]
    fn estimate_stays_within_volatility_band() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let result = calculator.estimate(&reference_attrs(), &mut rng);

            assert!(result.volatility >= -MAX_VOLATILITY);
            assert!(result.volatility < MAX_VOLATILITY);
            assert!(result.final_valuation >= 578_550.0);
            assert!(result.final_valuation <= 639_450.0);
        }
    }

    #[test]
    fn estimate_is_reproducible_for_a_fixed_seed() {
        let schedule = PricingSchedule::default();
        let calculator = ValuationCalculator::new(&schedule);

        let first = calculator.estimate(&reference_attrs(), &mut StdRng::seed_from_u64(7));
        let second = calculator.estimate(&reference_attrs(), &mut StdRng::seed_from_u64(7));

        assert_eq!(first, second);
    }
}
