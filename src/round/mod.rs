//! Round resolution and the result report.
//!
//! A round scores both cards on the same two attributes and compares the
//! sums. `RoundReport` implements `Display` for the final console text.

mod report;
pub mod resolution;

pub use resolution::{CardScore, Round, RoundOutcome, RoundReport, Side};
