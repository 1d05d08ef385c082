//! Line layout for the console and the log file.
use chrono::NaiveDateTime;

/// Format `now` as `[MM.DD.YYYY HH:MM:SS:mmm]`.
pub(super) fn format_timestamp(now: NaiveDateTime) -> String {
    now.format("[%m.%d.%Y %H:%M:%S:%3f]").to_string()
}

/// File line: timestamp and thread tag are always present.
pub(super) fn file_line(timestamp: &str, thread_tag: &str, text: &str) -> String {
    format!("{timestamp} [{thread_tag}] {text}\n")
}

/// Console line: timestamp and thread tag only when enabled.
pub(super) fn console_line(timestamp: Option<&str>, thread_tag: Option<&str>, text: &str) -> String {
    let mut line = String::with_capacity(text.len() + 48);
    if let Some(ts) = timestamp {
        line.push_str(ts);
        line.push(' ');
    }
    if let Some(tag) = thread_tag {
        line.push('[');
        line.push_str(tag);
        line.push_str("] ");
    }
    line.push_str(text);
    line.push('\n');
    line
}
