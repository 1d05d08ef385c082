//! Call-site shorthands over [`LogSink`](crate::LogSink).
//!
//! All of them expand to a statically folded [`Message`](crate::Message)
//! handed to [`LogSink::emit_message`](crate::LogSink::emit_message).

/// Emit the arguments back to back as one line.
///
/// ```
/// # let sink = daylog::LogSink::new(daylog::SinkConfig { file: false, ..Default::default() });
/// let fname = "useful_file.txt";
/// daylog::emit!(sink, fname, " is opened = ", true);
/// ```
#[macro_export]
macro_rules! emit {
    ($sink:expr, $($arg:expr),* $(,)?) => {
        $sink.emit_message(&$crate::msg!($($arg),*))
    };
}

/// Emit the arguments joined by single spaces as one line.
///
/// ```
/// # let sink = daylog::LogSink::new(daylog::SinkConfig { file: false, ..Default::default() });
/// daylog::emit_spaced!(sink, "User:", 42, true);
/// ```
#[macro_export]
macro_rules! emit_spaced {
    ($sink:expr, $($arg:expr),* $(,)?) => {
        $sink.emit_message(&$crate::msg_spaced!($($arg),*))
    };
}

/// Emit `ERR:` followed by the arguments and the call site, space separated.
///
/// The call site renders as `[<module> <file>:<line>]`.
#[macro_export]
macro_rules! log_error {
    ($sink:expr, $($arg:expr),+ $(,)?) => {
        $crate::emit_spaced!($sink, "ERR:", $($arg),+, $crate::call_site!())
    };
}

/// Emit `WARN:` followed by the arguments and the call site, space separated.
#[macro_export]
macro_rules! log_warning {
    ($sink:expr, $($arg:expr),+ $(,)?) => {
        $crate::emit_spaced!($sink, "WARN:", $($arg),+, $crate::call_site!())
    };
}

/// Emit `<expression> = <value>` for a single expression.
///
/// ```
/// # let sink = daylog::LogSink::new(daylog::SinkConfig { file: false, ..Default::default() });
/// let is_opened = true;
/// daylog::log_value!(sink, is_opened); // "is_opened = true"
/// ```
#[macro_export]
macro_rules! log_value {
    ($sink:expr, $value:expr $(,)?) => {
        $crate::emit_spaced!($sink, stringify!($value), "=", $value)
    };
}

/// Render the invoking location as `[<module> <file>:<line>]`.
#[doc(hidden)]
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::msg!("[", module_path!(), " ", file!(), ":", line!(), "]")
    };
}
