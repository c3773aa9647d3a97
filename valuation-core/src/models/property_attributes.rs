use serde::{Deserialize, Serialize};

/// The six user-supplied property descriptors, kept as raw text.
///
/// Values stay unparsed until the calculator reads them; the form layer only
/// ever checks for presence, never for numeric validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAttributes {
    /// Living area in square feet, e.g. "2000".
    pub living_area: String,

    /// Bedroom count option: "1" through "4", or "5+".
    pub bedroom_count: String,

    /// Bathroom count option: "1", "1.5", ... "3.5", or "4+".
    pub bathroom_count: String,

    /// Location category: "urban", "suburban", "rural", or anything else
    /// (unrecognized values fall back to the neutral location factor).
    pub geographic_zone: String,

    /// Four-digit construction year. The input widget limits this to
    /// 1800-2025; the calculator itself never re-checks the range.
    pub construction_year: String,

    /// Parking spaces option: "0" through "2", or "3+".
    pub parking_spaces: String,
}
