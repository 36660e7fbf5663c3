//! The two cards dealt in every round.

use super::card::Card;

/// Brazil, derived fields populated.
#[must_use]
pub fn brazil() -> Card {
    Card::new("Brasil", 210_000_000, 8_510_000.0, 1.6, 7500).derived()
}

/// Japan, derived fields populated.
#[must_use]
pub fn japan() -> Card {
    Card::new("Japao", 125_000_000, 377_975.0, 5.0, 9000).derived()
}

/// The fixed matchup: Brazil as card 1, Japan as card 2.
#[must_use]
pub fn default_matchup() -> [Card; 2] {
    [brazil(), japan()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matchup_order() {
        let [first, second] = default_matchup();
        assert_eq!(first.name, "Brasil");
        assert_eq!(second.name, "Japao");
    }

    #[test]
    fn test_presets_are_derived() {
        for card in default_matchup() {
            assert!(card.population_density > 0.0, "{} density", card.name);
            assert!(card.gdp_per_capita > 0.0, "{} per capita", card.name);
        }
    }
}
