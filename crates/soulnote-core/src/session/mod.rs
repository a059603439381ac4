//! Per-user transient sessions.
//!
//! # Module Structure
//!
//! - `model`: `SessionState` and `UserSession`
//! - `manager`: `SessionManager`, the in-memory owner of all sessions

mod manager;
mod model;

pub use manager::SessionManager;
pub use model::{SessionState, UserSession};
