//! # loglook-core
//!
//! Building blocks for the `loglook` log report tool.
//!
//! ## Overview
//!
//! loglook-core separates log acquisition from line parsing and from report
//! rendering. A [`LogSource`] hands over the raw lines of a log, a
//! [`LineParser`] turns each line into a [`LogRecord`] on its own (no state
//! between lines), and the report module writes one block per record to any
//! [`std::io::Write`] sink.
//!
//! ```text
//! ┌───────────┐  read_all()   ┌─────────────┐  parse()   ┌───────────┐
//! │ LogSource │ ────────────> │ Vec<String> │ ─────────> │ LogRecord │
//! └───────────┘               └─────────────┘            └─────┬─────┘
//!                                                              │
//!                                              write_record()  │
//!                                       stdout <───────────────┘
//! ```
//!
//! The split allows the same source with different parsers, the same parser
//! with different sources, and testing each piece on its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use loglook_core::{LineParser, LogRecord, LogSource, write_report};
//! use anyhow::Result;
//!
//! // a source that yields a fixed set of lines
//! struct OneLine;
//!
//! impl LogSource for OneLine {
//!     fn read_all(&self) -> Result<Vec<String>> {
//!         Ok(vec!["ERROR: disk full".to_string()])
//!     }
//!
//!     fn close(&self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! // a parser that leaves every field unset
//! struct Bare;
//!
//! impl LineParser for Bare {
//!     fn parse(&self, line: &str) -> LogRecord {
//!         LogRecord::new(line)
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let mut out = Vec::new();
//! write_report(&OneLine, &Bare, &mut out)?;
//! # Ok(())
//! # }
//! ```
//!
//! File-backed sources are provided by [`FileSource`]; the pattern parser for
//! `[timestamp] LABEL: message` shaped lines lives in the `loglook-parser`
//! crate.

pub mod record;
pub mod report;
pub mod source;

// re-export commonly used types
pub use record::{LineParser, LogRecord};
pub use report::{write_record, write_report};
pub use source::{FileSource, LogSource};
