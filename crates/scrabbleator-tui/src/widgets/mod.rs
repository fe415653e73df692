mod header;
mod search_box;
mod stats;
mod status_bar;
mod word_list;

pub use header::HeaderWidget;
pub use search_box::SearchBoxWidget;
pub use stats::StatsWidget;
pub use status_bar::StatusBarWidget;
pub use word_list::WordListWidget;
