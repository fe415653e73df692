pub mod config;
pub mod error;
pub mod reveal;
pub mod search;
pub mod session;
pub mod words;

pub use config::{AppConfig, EasingType, RevealConfig, ScrollConfig};
pub use error::{Error, Result};
pub use session::{SearchSession, TickOutcome};
pub use words::{HttpWordFinder, ResultItem, ResultSet, Stats, WordFinder};
