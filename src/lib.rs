//! Embeddable line logger.
//!
//! Each call renders a list of heterogeneous arguments into one line,
//! prefixes it with a millisecond timestamp and the calling thread's tag,
//! echoes it to standard output, and appends it to a file named after the
//! current date. Old files are pruned to a fixed count whenever a file is
//! opened.
//!
//! The public API has three layers:
//!
//! - **[`message`]**: the [`Render`] capability and the [`Message`] builder
//!   with its concatenating and space-separated policies
//! - **[`sink`]**: the [`LogSink`] owning console and file output
//! - **[`config`]**: compile-time defaults and the optional TOML override
//!
//! ```no_run
//! use daylog::{LogSink, SinkConfig, emit, emit_spaced};
//!
//! let log = LogSink::new(SinkConfig::default());
//! log.set_thread_name("main").ok();
//! emit_spaced!(log, "Any number of parameters", "useful_file.txt", "opened =", true);
//! emit!(log, "useful_file.txt", " is opened = ", true);
//! ```
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]
#![cfg_attr(test, allow(missing_docs))]

pub mod config;
pub mod diagnostics;
pub mod error;
mod macros;
pub mod message;
pub mod sink;

pub use config::{FlushPolicy, SinkConfig};
pub use error::SinkError;
pub use message::{AsDisplay, Message, Render, render_concatenated, render_spaced};
pub use sink::{Clock, LogSink, SystemClock};
