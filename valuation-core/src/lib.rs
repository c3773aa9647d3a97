pub mod calculations;
pub mod models;

pub use calculations::{PricingSchedule, ValuationCalculator};
pub use models::*;
