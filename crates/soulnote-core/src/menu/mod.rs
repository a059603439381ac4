//! Menu vocabulary: button labels, keyboard layouts and the router table.

pub mod keyboards;
pub mod labels;
mod router;

pub use router::{known_labels, route, MenuAction, Placeholder, Route};
