mod client;
mod models;

pub use client::{HttpWordFinder, WordFinder};
pub use models::{FindWordsRequest, ResultItem, ResultSet, Stats};
