//! Attribute identifiers for country cards.
//!
//! The set is closed: four raw statistics plus two values derived from them.
//! Numeric ids (1..=6) are kept because the menu and legacy lookups
//! speak in them.
//!
//! ## Attributes
//!
//! - `Population`: inhabitants
//! - `Area`: km²
//! - `Gdp`: trillions of USD
//! - `TouristSpots`: number of notable sites
//! - `PopulationDensity`: derived, inhabitants per km²
//! - `GdpPerCapita`: derived, USD per inhabitant

use serde::{Deserialize, Serialize};

/// Label returned for ids outside the attribute set.
pub const UNKNOWN_ATTRIBUTE_NAME: &str = "Desconhecido";

/// One of the six comparable attributes of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeId {
    /// Inhabitants.
    Population,
    /// Area in km².
    Area,
    /// Gross domestic product, trillions of USD.
    Gdp,
    /// Number of tourist spots.
    TouristSpots,
    /// Population / area.
    PopulationDensity,
    /// GDP in USD / population.
    GdpPerCapita,
}

impl AttributeId {
    /// Number of attributes in the set.
    pub const COUNT: usize = 6;

    /// All attributes in ascending id order.
    pub const ALL: [AttributeId; Self::COUNT] = [
        AttributeId::Population,
        AttributeId::Area,
        AttributeId::Gdp,
        AttributeId::TouristSpots,
        AttributeId::PopulationDensity,
        AttributeId::GdpPerCapita,
    ];

    /// Look up an attribute by its numeric id.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(AttributeId::Population),
            2 => Some(AttributeId::Area),
            3 => Some(AttributeId::Gdp),
            4 => Some(AttributeId::TouristSpots),
            5 => Some(AttributeId::PopulationDensity),
            6 => Some(AttributeId::GdpPerCapita),
            _ => None,
        }
    }

    /// Get the numeric id (1-based).
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            AttributeId::Population => 1,
            AttributeId::Area => 2,
            AttributeId::Gdp => 3,
            AttributeId::TouristSpots => 4,
            AttributeId::PopulationDensity => 5,
            AttributeId::GdpPerCapita => 6,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AttributeId::Population => "Populacao",
            AttributeId::Area => "Area (km2)",
            AttributeId::Gdp => "PIB (Trilhoes USD)",
            AttributeId::TouristSpots => "Pontos Turisticos",
            AttributeId::PopulationDensity => "Densidade Populacional (hab/km2)",
            AttributeId::GdpPerCapita => "PIB per Capita (USD)",
        }
    }

    /// Is this value computed from other fields?
    #[must_use]
    pub const fn is_derived(self) -> bool {
        matches!(self, AttributeId::PopulationDensity | AttributeId::GdpPerCapita)
    }
}

impl std::fmt::Display for AttributeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Label for a raw numeric id, or [`UNKNOWN_ATTRIBUTE_NAME`].
#[must_use]
pub fn attribute_name(id: u8) -> &'static str {
    AttributeId::from_id(id).map_or(UNKNOWN_ATTRIBUTE_NAME, AttributeId::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_in_order() {
        for (idx, attr) in AttributeId::ALL.iter().enumerate() {
            assert_eq!(attr.id() as usize, idx + 1);
            assert_eq!(AttributeId::from_id(attr.id()), Some(*attr));
        }
    }

    #[test]
    fn test_from_id_out_of_range() {
        assert_eq!(AttributeId::from_id(0), None);
        assert_eq!(AttributeId::from_id(7), None);
        assert_eq!(AttributeId::from_id(u8::MAX), None);
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(AttributeId::Population.name(), "Populacao");
        assert_eq!(AttributeId::GdpPerCapita.name(), "PIB per Capita (USD)");
        assert_eq!(format!("{}", AttributeId::Area), "Area (km2)");
    }

    #[test]
    fn test_attribute_name_unknown() {
        assert_eq!(attribute_name(3), "PIB (Trilhoes USD)");
        assert_eq!(attribute_name(0), UNKNOWN_ATTRIBUTE_NAME);
        assert_eq!(attribute_name(42), UNKNOWN_ATTRIBUTE_NAME);
    }

    #[test]
    fn test_is_derived() {
        let derived: Vec<_> = AttributeId::ALL.iter().filter(|a| a.is_derived()).collect();
        assert_eq!(
            derived,
            vec![&AttributeId::PopulationDensity, &AttributeId::GdpPerCapita]
        );
    }
}
