//! Progress reporting for launches
//!
//! Stdout carries exactly one announcement line plus one line per worker.
//! Diagnostics belong on stderr through `tracing`.

use crate::output::console::ConsoleFormatter;
use launcher_application::ports::progress::LaunchNotifier;
use launcher_domain::{PartyCount, WorkerCommand};
use std::io::{self, Write};
use std::sync::Mutex;

/// Prints the launch announcement and every worker command
pub struct ConsoleReporter<W: Write + Send = std::io::Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    /// Write one line and flush it, so it appears before the worker starts
    fn line(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", text)?;
        out.flush()
    }
}

impl<W: Write + Send> LaunchNotifier for ConsoleReporter<W> {
    fn on_launch_start(&self, count: PartyCount) -> io::Result<()> {
        self.line(&ConsoleFormatter::format_announcement(count))
    }

    fn on_worker_command(&self, command: &WorkerCommand) -> io::Result<()> {
        self.line(&ConsoleFormatter::format_command(command))
    }
}
