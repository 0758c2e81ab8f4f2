use std::cell::RefCell;

use colored::Colorize;

/// Destination for the lines observers print when notified.
pub trait NotificationSink {
    fn emit(&self, line: &str);
}

/// Prints each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink {
    color: bool,
}

impl StdoutSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl NotificationSink for StdoutSink {
    fn emit(&self, line: &str) {
        if self.color {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
}

/// Keeps emitted lines in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns the recorded lines and clears the buffer.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl NotificationSink for RecordingSink {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
