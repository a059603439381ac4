//! Mood history: recent entries and aggregate statistics.

mod service;
mod statistics;

pub use service::HistoryService;
pub use statistics::{bar_length, ChartRow, MoodStatistics, StatisticsResult};
