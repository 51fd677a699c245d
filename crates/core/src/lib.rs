#![forbid(unsafe_code)]

pub mod model;
pub mod timer;

pub use timer::{Countdown, UrgencyTier};
