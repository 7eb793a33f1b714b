//! Console output formatter for launch progress
//!
//! Worker commands are rendered as the equivalent shell line for auditing.
//! The rendering is never executed.

use launcher_domain::{PartyCount, WorkerCommand};
use std::ffi::OsStr;

/// Formats launch progress for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// `Running <N> parties`
    pub fn format_announcement(count: PartyCount) -> String {
        format!("Running {} parties", count)
    }

    /// `RUST_LOG=info <bin> --id <id> -c <config> -i <input> ><log> 2>&1 &`
    pub fn format_command(command: &WorkerCommand) -> String {
        let mut words: Vec<String> = command
            .env()
            .iter()
            .map(|(key, value)| format!("{}={}", key, Self::quote(OsStr::new(value))))
            .collect();

        words.push(Self::quote(command.program().as_os_str()));
        words.extend(command.args().map(Self::quote));
        words.push(format!(
            ">{}",
            Self::quote(command.log_file().as_os_str())
        ));
        words.push("2>&1".to_string());
        words.push("&".to_string());

        words.join(" ")
    }

    /// Single-quote a word unless it only contains shell-safe characters
    fn quote(word: &OsStr) -> String {
        let word = word.to_string_lossy();
        let safe = !word.is_empty()
            && word
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c));

        if safe {
            word.into_owned()
        } else {
            format!("'{}'", word.replace('\'', r"'\''"))
        }
    }
}
