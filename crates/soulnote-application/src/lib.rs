//! Application layer for SoulNote.
//!
//! This crate provides the journal use case that coordinates the domain
//! (flows, router, sessions, history) with an entry store, plus the fixed
//! reply texts of the bot.

pub mod journal_service;
pub mod responses;

pub use journal_service::JournalService;
