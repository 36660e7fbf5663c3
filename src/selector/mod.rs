//! Attribute selection: menu construction, input scanning, prompt loop.
//!
//! ## Key Types
//!
//! - `Menu`: Renumbered options with one attribute optionally excluded
//! - `Scan`: Outcome of scanning an integer from a line
//! - `AttributeSelector`: Read-validate-retry loop over injected streams

pub mod input;
pub mod menu;
pub mod prompt;

pub use input::Scan;
pub use menu::Menu;
pub use prompt::AttributeSelector;
