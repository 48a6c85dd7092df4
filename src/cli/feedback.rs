//! Save/delete/load feedback
//!
//! The pauses shown after a save or delete are purely cosmetic. They sit
//! behind a trait so tests and `--no-animation` runs can skip them.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::config::Settings;

/// Something shown while an operation "runs"
pub trait Feedback {
    fn show(&mut self, label: &str, out: &mut dyn Write) -> io::Result<()>;
}

/// Prints the label, one dot per step with a pause in between, then "Done!"
#[derive(Debug, Clone)]
pub struct AnimatedFeedback {
    steps: u32,
    interval: Duration,
}

impl AnimatedFeedback {
    pub fn new(steps: u32, interval: Duration) -> Self {
        Self { steps, interval }
    }
}

impl Feedback for AnimatedFeedback {
    fn show(&mut self, label: &str, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", label)?;
        for _ in 0..self.steps {
            write!(out, ".")?;
            out.flush()?;
            thread::sleep(self.interval);
        }
        writeln!(out, "\nDone!")
    }
}

/// Shows nothing and returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn show(&mut self, _label: &str, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Pick the feedback implementation the settings ask for
pub fn from_settings(settings: &Settings) -> Box<dyn Feedback> {
    if settings.animations {
        Box::new(AnimatedFeedback::new(
            settings.animation_steps,
            settings.animation_interval,
        ))
    } else {
        Box::new(SilentFeedback)
    }
}
