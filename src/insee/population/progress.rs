use std::fmt::Display;

use tracing::info;

/// Step counter for long runs, reported as tracing events.
#[derive(Debug)]
pub struct Progress {
    label: &'static str,
    current: usize,
    total: usize,
}

impl Progress {
    pub fn new(label: &'static str, total: usize) -> Self {
        Self {
            label,
            current: 0,
            total,
        }
    }

    /// Records one finished unit of work.
    pub fn advance(&mut self, message: impl Display) {
        self.current += 1;
        info!(
            target: "insee_population::progress",
            current = self.current,
            total = self.total,
            "{}: {}",
            self.label,
            message
        );
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
