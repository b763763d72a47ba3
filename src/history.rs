pub mod history_render;
mod history_store;
mod reveal;

pub use history_store::{AdviceEntry, HistoryStore};
pub use reveal::{CountError, HistoryReveal, HistoryWarning, parse_history_count, reveal_history};
