//! One interactive round from banner to verdict.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::config::GameConfig;
use crate::cards::Card;
use crate::error::GameError;
use crate::round::{Round, RoundReport};
use crate::selector::{input::discard_line, AttributeSelector};
use crate::SEPARATOR;

/// A game between two cards over injected streams.
///
/// ## Example
///
/// ```
/// use std::io::Cursor;
/// use super_trunfo::cards::default_matchup;
/// use super_trunfo::game::{Game, GameConfig};
///
/// let config = GameConfig::default().with_pause(false);
/// let mut game = Game::new(default_matchup(), config, Cursor::new("1\n1\n"), Vec::new());
/// let report = game.play().unwrap();
///
/// assert_eq!(report.winner_name(), Some("Brasil"));
/// ```
#[derive(Debug)]
pub struct Game<R, W> {
    cards: [Card; 2],
    config: GameConfig,
    selector: AttributeSelector<R, W>,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Create a game. Cards are expected to have derived fields populated.
    pub fn new(cards: [Card; 2], config: GameConfig, input: R, output: W) -> Self {
        Self {
            cards,
            config,
            selector: AttributeSelector::new(input, output),
        }
    }

    /// Play a round: list cards, pick two attributes, print the result.
    pub fn play(&mut self) -> Result<RoundReport, GameError> {
        self.print_banner()?;

        let first = self.selector.select(None, &self.config.first_prompt)?;
        let second = self.selector.select(Some(first), &self.config.second_prompt)?;
        debug!(?first, ?second, "attributes chosen");

        let report = Round::new(first, second).resolve(&self.cards);
        info!(
            outcome = ?report.outcome,
            first_total = report.scores[0].total,
            second_total = report.scores[1].total,
            "round resolved"
        );

        let out = self.selector.output_mut();
        writeln!(out, "\n{report}")?;

        if self.config.pause_on_exit {
            self.pause()?;
        }

        Ok(report)
    }

    /// Take back the streams.
    pub fn into_inner(self) -> (R, W) {
        self.selector.into_inner()
    }

    fn print_banner(&mut self) -> Result<(), GameError> {
        let [first, second] = &self.cards;
        let out = self.selector.output_mut();

        writeln!(out, "{}", self.config.title)?;
        writeln!(out, "Cartas na disputa:")?;
        writeln!(out, "Carta 1: {}", first.name)?;
        writeln!(out, "Carta 2: {}", second.name)?;
        writeln!(out, "{SEPARATOR}")?;
        Ok(())
    }

    /// Waits for one line only; anything after it stays unread.
    fn pause(&mut self) -> Result<(), GameError> {
        let out = self.selector.output_mut();
        write!(out, "\nPressione Enter para sair...")?;
        out.flush()?;

        if !discard_line(self.selector.input_mut())? {
            debug!("input closed at exit prompt");
        }
        Ok(())
    }
}
