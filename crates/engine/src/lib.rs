//! Pure decision logic of the bot: response validation, verdict formatting
//! and duplicate suppression. Nothing here performs I/O.

pub mod status;
pub mod tracker;

pub use status::{check_response, failure_message, parse_status};
pub use tracker::ChangeTracker;
