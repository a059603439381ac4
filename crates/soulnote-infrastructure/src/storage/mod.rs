//! Low-level file storage.
//!
//! - `append_log`: locked, single-write line appends
//! - `line_codec`: escaped field and list encoding for log lines

pub mod append_log;
pub mod line_codec;

pub use append_log::{AppendLog, AppendLogError};
pub use line_codec::LineError;
