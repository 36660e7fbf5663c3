//! Text rendering of a resolved round.

use std::fmt;

use super::resolution::{RoundReport, Side};
use crate::SEPARATOR;

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [attr1, attr2] = self.round.attributes();
        let first = self.score(Side::First);
        let second = self.score(Side::Second);

        writeln!(f, "--- RESULTADO DA RODADA ---")?;
        writeln!(f, "Cartas: {} vs {}", first.name, second.name)?;
        writeln!(f, "Atributos Comparados:")?;
        writeln!(f, "1. {attr1}")?;
        writeln!(f, "2. {attr2}")?;
        writeln!(f, "{SEPARATOR}")?;

        for score in [first, second] {
            writeln!(f, "Valores para {}:", score.name)?;
            writeln!(f, "  - {attr1}: {:.2}", score.values[0])?;
            writeln!(f, "  - {attr2}: {:.2}", score.values[1])?;
            writeln!(f, "  - Soma dos atributos para {}: {:.2}", score.name, score.total)?;
            writeln!(f, "{SEPARATOR}")?;
        }

        writeln!(f, "Resultado Final: {}", self.verdict())?;
        write!(f, "{SEPARATOR}")
    }
}
