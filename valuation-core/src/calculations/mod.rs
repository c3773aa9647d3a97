//! Valuation calculation modules.
//!
//! This module provides the pricing schedule and the calculator that turns a
//! set of raw property attributes into a dollar estimate.

pub mod common;
pub mod valuation;

pub use valuation::{MAX_VOLATILITY, PricingSchedule, ValuationCalculator};
