//! Command implementations

pub mod play;
pub mod step;

pub use play::run_play;
pub use step::{CheckReply, CheckResponse};
