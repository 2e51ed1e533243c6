//! Shared terminal utilities.
//!
//! Box drawing, the strength meter, and the screen guard.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
