//! Country cards - raw statistics plus derived metrics.
//!
//! A `Card` is built once from literal values, then `derive_attributes`
//! fills in population density and GDP per capita. Derived fields read
//! as `0.0` until that step runs.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeId;

/// Multiplier from the card's GDP unit (trillions) to USD.
pub const GDP_UNIT: f64 = 1e12;

/// A country card.
///
/// ## Example
///
/// ```
/// use super_trunfo::cards::{AttributeId, Card};
///
/// let card = Card::new("Brasil", 210_000_000, 8_510_000.0, 1.6, 7500).derived();
///
/// assert_eq!(card.value(AttributeId::TouristSpots), 7500.0);
/// assert!(card.value(AttributeId::PopulationDensity) > 24.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Country name.
    pub name: String,

    /// Inhabitants.
    pub population: u64,

    /// Area in km².
    pub area: f64,

    /// GDP in trillions of USD.
    pub gdp: f64,

    /// Number of tourist spots.
    pub tourist_spots: i64,

    /// Inhabitants per km². Derived.
    pub population_density: f64,

    /// USD per inhabitant. Derived.
    pub gdp_per_capita: f64,
}

impl Card {
    /// Create a card with derived fields zeroed.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        population: u64,
        area: f64,
        gdp: f64,
        tourist_spots: i64,
    ) -> Self {
        Self {
            name: name.into(),
            population,
            area,
            gdp,
            tourist_spots,
            population_density: 0.0,
            gdp_per_capita: 0.0,
        }
    }

    /// Compute derived fields (builder pattern).
    #[must_use]
    pub fn derived(mut self) -> Self {
        self.derive_attributes();
        self
    }

    /// Compute population density and GDP per capita in place.
    ///
    /// A non-positive divisor yields `0.0` instead of an error.
    pub fn derive_attributes(&mut self) {
        self.population_density = if self.area > 0.0 {
            self.population as f64 / self.area
        } else {
            0.0
        };

        self.gdp_per_capita = if self.population > 0 {
            (self.gdp * GDP_UNIT) / self.population as f64
        } else {
            0.0
        };
    }

    /// Get an attribute value as `f64`.
    #[must_use]
    pub fn value(&self, attr: AttributeId) -> f64 {
        match attr {
            AttributeId::Population => self.population as f64,
            AttributeId::Area => self.area,
            AttributeId::Gdp => self.gdp,
            AttributeId::TouristSpots => self.tourist_spots as f64,
            AttributeId::PopulationDensity => self.population_density,
            AttributeId::GdpPerCapita => self.gdp_per_capita,
        }
    }

    /// Get an attribute value by raw numeric id.
    ///
    /// Unknown ids read as `0.0`.
    #[must_use]
    pub fn value_by_id(&self, id: u8) -> f64 {
        AttributeId::from_id(id).map_or(0.0, |attr| self.value(attr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brazil() -> Card {
        Card::new("Brasil", 210_000_000, 8_510_000.0, 1.6, 7500)
    }

    #[test]
    fn test_new_card_has_zeroed_derived_fields() {
        let card = brazil();
        assert_eq!(card.population_density, 0.0);
        assert_eq!(card.gdp_per_capita, 0.0);
    }

    #[test]
    fn test_derive_attributes() {
        let mut card = brazil();
        card.derive_attributes();

        assert_eq!(card.population_density, 210_000_000.0 / 8_510_000.0);
        assert_eq!(card.gdp_per_capita, 1.6 * 1e12 / 210_000_000.0);
    }

    #[test]
    fn test_zero_area_density_is_zero() {
        let card = Card::new("Nowhere", 1000, 0.0, 1.0, 0).derived();
        assert_eq!(card.population_density, 0.0);
        assert!(card.gdp_per_capita > 0.0);
    }

    #[test]
    fn test_negative_area_density_is_zero() {
        let card = Card::new("Inverted", 1000, -5.0, 1.0, 0).derived();
        assert_eq!(card.population_density, 0.0);
    }

    #[test]
    fn test_zero_population_per_capita_is_zero() {
        let card = Card::new("Empty", 0, 100.0, 3.0, 2).derived();
        assert_eq!(card.gdp_per_capita, 0.0);
        assert_eq!(card.population_density, 0.0);
    }

    #[test]
    fn test_value_reads_each_field() {
        let card = brazil().derived();

        assert_eq!(card.value(AttributeId::Population), 210_000_000.0);
        assert_eq!(card.value(AttributeId::Area), 8_510_000.0);
        assert_eq!(card.value(AttributeId::Gdp), 1.6);
        assert_eq!(card.value(AttributeId::TouristSpots), 7500.0);
        assert_eq!(card.value(AttributeId::PopulationDensity), card.population_density);
        assert_eq!(card.value(AttributeId::GdpPerCapita), card.gdp_per_capita);
    }

    #[test]
    fn test_value_by_id() {
        let card = brazil().derived();

        assert_eq!(card.value_by_id(1), 210_000_000.0);
        assert_eq!(card.value_by_id(0), 0.0);
        assert_eq!(card.value_by_id(7), 0.0);
    }

    #[test]
    fn test_card_serialization() {
        let card = brazil().derived();

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
