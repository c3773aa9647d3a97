//! Form state for the property attribute inputs.
//!
//! Holds the six fields as raw text and answers the one question the submit
//! control cares about: are they all filled in? Nothing here validates
//! numbers or option labels; presence alone gates submission.

use serde::{Deserialize, Serialize};
use valuation_core::PropertyAttributes;

/// The six form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    LivingArea,
    BedroomCount,
    BathroomCount,
    GeographicZone,
    ConstructionYear,
    ParkingSpaces,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::LivingArea,
            Field::BedroomCount,
            Field::BathroomCount,
            Field::GeographicZone,
            Field::ConstructionYear,
            Field::ParkingSpaces,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LivingArea => "living_area",
            Self::BedroomCount => "bedroom_count",
            Self::BathroomCount => "bathroom_count",
            Self::GeographicZone => "geographic_zone",
            Self::ConstructionYear => "construction_year",
            Self::ParkingSpaces => "parking_spaces",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LivingArea => "Living Area",
            Self::BedroomCount => "Bedrooms",
            Self::BathroomCount => "Bathrooms",
            Self::GeographicZone => "Location",
            Self::ConstructionYear => "Year Built",
            Self::ParkingSpaces => "Parking Spaces",
        }
    }
}

/// Outcome of the completeness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completeness {
    pub valid: bool,
    pub missing: Vec<Field>,
}

/// Mutable holder for the six attribute strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyForm {
    attributes: PropertyAttributes,
}

impl PropertyForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one field's value. No validation happens at write time.
    pub fn set(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) {
        let slot = match field {
            Field::LivingArea => &mut self.attributes.living_area,
            Field::BedroomCount => &mut self.attributes.bedroom_count,
            Field::BathroomCount => &mut self.attributes.bathroom_count,
            Field::GeographicZone => &mut self.attributes.geographic_zone,
            Field::ConstructionYear => &mut self.attributes.construction_year,
            Field::ParkingSpaces => &mut self.attributes.parking_spaces,
        };
        *slot = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::LivingArea => &self.attributes.living_area,
            Field::BedroomCount => &self.attributes.bedroom_count,
            Field::BathroomCount => &self.attributes.bathroom_count,
            Field::GeographicZone => &self.attributes.geographic_zone,
            Field::ConstructionYear => &self.attributes.construction_year,
            Field::ParkingSpaces => &self.attributes.parking_spaces,
        }
    }

    pub fn attributes(&self) -> &PropertyAttributes {
        &self.attributes
    }

    /// Reports which fields are still empty.
    ///
    /// A field is missing iff its string is empty; a field holding garbage
    /// text still counts as filled. `valid` is true only when nothing is
    /// missing.
    pub fn completeness(&self) -> Completeness {
        let missing: Vec<Field> = Field::all()
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_empty())
            .collect();
        Completeness {
            valid: missing.is_empty(),
            missing,
        }
    }

    /// Sets every field back to the empty string.
    pub fn reset(&mut self) {
        self.attributes = PropertyAttributes::default();
    }
}
