//! Line encodings of the journal records.
//!
//! These are private to the infrastructure layer. Each record type maps to
//! one log line; see `storage::line_codec` for the escaping rules.
//!
//! ```text
//! mood:      2026-10-18 21:00:00 | 42 | Mood: 7/10 | Note: Productive day | Tags: Work, Growth
//! gratitude: 2026-10-18 21:05:00 | 42 | Gratitude 1: Sun | Gratitude 2: | Gratitude 3: Tea
//! feedback:  2026-10-18 21:10:00 | 42 (alice) | Love the bot
//! ```

pub mod feedback;
pub mod gratitude;
pub mod mood;
