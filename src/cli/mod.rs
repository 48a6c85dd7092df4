//! Interactive console front end
//!
//! The menu loop and its handlers, plus the console and feedback
//! abstractions they print through.

pub mod console;
pub mod feedback;
pub mod handlers;
pub mod menu;

pub use console::Console;
pub use feedback::{AnimatedFeedback, Feedback, SilentFeedback};
pub use menu::{run, MenuChoice};
