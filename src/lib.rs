//! # super-trunfo
//!
//! A single Super Trunfo round between two country cards.
//!
//! The player picks two different attributes, each card's values on those
//! attributes are summed, and the higher sum wins. Equal sums tie.
//!
//! ## Design Principles
//!
//! 1. **Closed attribute set**: `AttributeId` is an enum, so accessors
//!    can't see an unknown attribute. Raw numeric lookups are kept with
//!    their permissive defaults.
//!
//! 2. **Injected streams**: The selector and game take any `BufRead` /
//!    `Write`, so rounds can be driven from a `Cursor` in tests.
//!
//! 3. **Exact comparison**: Ties are decided by `f64` equality.
//!
//! ## Modules
//!
//! - `cards`: Attribute ids, cards, derived fields, preset matchup
//! - `selector`: Menu, integer scanning, read-validate-retry loop
//! - `round`: Summation, outcome, result report
//! - `game`: Session configuration and the interactive round
//! - `error`: Selection and game errors

pub mod cards;
pub mod error;
pub mod game;
pub mod round;
pub mod selector;

/// Line printed between console sections.
pub const SEPARATOR: &str = "----------------------------------------";

// Re-export commonly used types
pub use crate::cards::{attribute_name, default_matchup, AttributeId, Card};
pub use crate::error::{GameError, SelectError};
pub use crate::game::{Game, GameConfig};
pub use crate::round::{CardScore, Round, RoundOutcome, RoundReport, Side};
pub use crate::selector::{AttributeSelector, Menu};
