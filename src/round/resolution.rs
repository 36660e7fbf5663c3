//! Round resolution: sum two attributes per card, highest sum wins.
//!
//! Ties use exact `f64` equality with no tolerance.

use serde::{Deserialize, Serialize};

use crate::cards::{AttributeId, Card};

/// Which of the two cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Index into a `[_; 2]` pair.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Result of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// One card has the strictly greater sum.
    Winner(Side),
    /// Sums are bit-for-bit equal.
    Tie,
}

impl RoundOutcome {
    /// Compare two sums.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_totals(first: f64, second: f64) -> Self {
        if first == second {
            RoundOutcome::Tie
        } else if first > second {
            RoundOutcome::Winner(Side::First)
        } else {
            RoundOutcome::Winner(Side::Second)
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, RoundOutcome::Winner(s) if *s == side)
    }
}

/// One card's values for the chosen attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardScore {
    /// Card name.
    pub name: String,
    /// Values for the first and second attribute.
    pub values: [f64; 2],
    /// Sum of `values`.
    pub total: f64,
}

impl CardScore {
    fn compute(card: &Card, attributes: [AttributeId; 2]) -> Self {
        let values = attributes.map(|attr| card.value(attr));
        Self {
            name: card.name.clone(),
            values,
            total: values[0] + values[1],
        }
    }
}

/// The two chosen attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub first: AttributeId,
    pub second: AttributeId,
}

impl Round {
    /// Create a round. The selector guarantees `first != second`.
    #[must_use]
    pub fn new(first: AttributeId, second: AttributeId) -> Self {
        debug_assert_ne!(first, second, "round attributes must differ");
        Self { first, second }
    }

    /// Both attributes in selection order.
    #[must_use]
    pub fn attributes(&self) -> [AttributeId; 2] {
        [self.first, self.second]
    }

    /// Score both cards and decide the outcome.
    #[must_use]
    pub fn resolve(&self, cards: &[Card; 2]) -> RoundReport {
        let scores = [
            CardScore::compute(&cards[0], self.attributes()),
            CardScore::compute(&cards[1], self.attributes()),
        ];
        let outcome = RoundOutcome::from_totals(scores[0].total, scores[1].total);

        RoundReport {
            round: *self,
            scores,
            outcome,
        }
    }
}

/// Everything needed to print a round's result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: Round,
    pub scores: [CardScore; 2],
    pub outcome: RoundOutcome,
}

impl RoundReport {
    /// Score for one side.
    #[must_use]
    pub fn score(&self, side: Side) -> &CardScore {
        &self.scores[side.index()]
    }

    /// Name of the winning card, if any.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome {
            RoundOutcome::Winner(side) => Some(&self.score(side).name),
            RoundOutcome::Tie => None,
        }
    }

    /// Final verdict line.
    #[must_use]
    pub fn verdict(&self) -> String {
        match self.winner_name() {
            Some(name) => format!("{name} venceu a rodada!"),
            None => "Empate!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_totals() {
        assert_eq!(RoundOutcome::from_totals(2.0, 1.0), RoundOutcome::Winner(Side::First));
        assert_eq!(RoundOutcome::from_totals(1.0, 2.0), RoundOutcome::Winner(Side::Second));
        assert_eq!(RoundOutcome::from_totals(1.5, 1.5), RoundOutcome::Tie);
    }

    #[test]
    fn test_outcome_no_tolerance() {
        let a = 0.1 + 0.2;
        let b = 0.3;
        assert_eq!(RoundOutcome::from_totals(a, b), RoundOutcome::Winner(Side::First));
    }

    #[test]
    fn test_is_winner() {
        let outcome = RoundOutcome::Winner(Side::Second);
        assert!(outcome.is_winner(Side::Second));
        assert!(!outcome.is_winner(Side::First));

        assert!(!RoundOutcome::Tie.is_winner(Side::First));
        assert!(!RoundOutcome::Tie.is_winner(Side::Second));
    }

    #[test]
    fn test_resolve_sums_values() {
        let cards = [
            Card::new("A", 10, 5.0, 1.0, 3).derived(),
            Card::new("B", 4, 2.0, 2.0, 20).derived(),
        ];
        let report = Round::new(AttributeId::Population, AttributeId::TouristSpots).resolve(&cards);

        assert_eq!(report.score(Side::First).values, [10.0, 3.0]);
        assert_eq!(report.score(Side::First).total, 13.0);
        assert_eq!(report.score(Side::Second).total, 24.0);
        assert_eq!(report.outcome, RoundOutcome::Winner(Side::Second));
        assert_eq!(report.winner_name(), Some("B"));
        assert_eq!(report.verdict(), "B venceu a rodada!");
    }

    #[test]
    fn test_resolve_tie() {
        let cards = [
            Card::new("A", 100, 50.0, 1.0, 7).derived(),
            Card::new("B", 100, 50.0, 9.0, 7).derived(),
        ];
        let report = Round::new(AttributeId::Population, AttributeId::Area).resolve(&cards);

        assert_eq!(report.outcome, RoundOutcome::Tie);
        assert_eq!(report.winner_name(), None);
        assert_eq!(report.verdict(), "Empate!");
    }
}
