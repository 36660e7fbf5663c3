//! Card model: attributes, cards, and the preset matchup.
//!
//! ## Key Types
//!
//! - `AttributeId`: Closed set of the six comparable attributes
//! - `Card`: Country statistics with derived density and per-capita GDP
//!
//! ## Legacy Lookups
//!
//! `attribute_name` and `Card::value_by_id` accept raw numeric ids and
//! fall back to `"Desconhecido"` / `0.0` for ids outside 1..=6.

pub mod attributes;
pub mod card;
pub mod presets;

pub use attributes::{attribute_name, AttributeId, UNKNOWN_ATTRIBUTE_NAME};
pub use card::{Card, GDP_UNIT};
pub use presets::default_matchup;
