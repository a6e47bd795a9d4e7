//! Pattern-based line parser for the loglook report pipeline.
//!
//! One line in, one [`LogRecord`] out. Two independent patterns run against
//! the line: a bracketed `[YYYY-MM-DD HH:MM:SS]` timestamp and a leading
//! `label: message` pair. Each pattern that matches fills its fields; each
//! that does not leaves them unset. The patterns never interact, and no
//! state is kept between lines.

use lazy_static::lazy_static;
use loglook_core::record::{LineParser, LogRecord};
use regex::Regex;

lazy_static! {
    static ref TIMESTAMP_RE: Regex =
        Regex::new(r"\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\]").unwrap();

    // leading identifier before ": ", remainder of the line is the message
    static ref LABEL_RE: Regex = Regex::new(r"(\w+): (.*)").unwrap();
}

fn extract_timestamp(line: &str) -> Option<&str> {
    TIMESTAMP_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// split "LABEL: message…" → (label, message), first match in the line
fn split_label(line: &str) -> Option<(&str, &str)> {
    LABEL_RE.captures(line).map(|caps| {
        (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        )
    })
}

/// parser for `[YYYY-MM-DD HH:MM:SS] LABEL: message` shaped lines, with both
/// halves independently optional
pub struct PatternParser;

impl PatternParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PatternParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for PatternParser {
    fn parse(&self, line: &str) -> LogRecord {
        let mut record = LogRecord::new(line);

        if let Some(timestamp) = extract_timestamp(line) {
            record = record.with_timestamp(timestamp);
        }
        if let Some((label, message)) = split_label(line) {
            record = record.with_label(label).with_message(message);
        }

        record
    }
}
