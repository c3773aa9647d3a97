mod breakdown;
mod property_attributes;
mod zone;

pub use breakdown::ValuationBreakdown;
pub use property_attributes::PropertyAttributes;
pub use zone::{Zone, location_factor};
