//! Game session: banner, two selections, resolution, report.

pub mod config;
pub mod session;

pub use config::GameConfig;
pub use session::Game;
