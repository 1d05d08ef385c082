//! Left-to-right message builder with raw and space-separated policies.
use std::fmt;

use super::render::Render;

/// Separator appended after each argument by the spaced policy.
pub const SEPARATOR: &str = " ";

/// Accumulates rendered arguments into one line of text.
///
/// A `Message` is built per log call and consumed right away. Use
/// [`append`](Self::append) for the concatenating policy, or
/// [`append_separated`](Self::append_separated) followed by one
/// [`trim_separator`](Self::trim_separator) for the spaced policy. The
/// [`msg!`](crate::msg) and [`msg_spaced!`](crate::msg_spaced) macros expand
/// to exactly those calls.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    /// Set while the buffer ends in a separator appended by `append_separated`.
    trailing_separator: bool,
}

impl Message {
    /// Create an empty message.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            trailing_separator: false,
        }
    }

    /// Append the text of `value` with no separator.
    pub fn append<T: Render + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.render(&mut self.text);
        self.trailing_separator = false;
        self
    }

    /// Append the text of `value` followed by one [`SEPARATOR`].
    pub fn append_separated<T: Render + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.render(&mut self.text);
        self.text.push_str(SEPARATOR);
        self.trailing_separator = true;
        self
    }

    /// Remove the separator left by the last
    /// [`append_separated`](Self::append_separated) call.
    ///
    /// Does nothing if the last operation did not append a separator, which
    /// covers the empty message.
    pub fn trim_separator(&mut self) -> &mut Self {
        if self.trailing_separator {
            self.text.truncate(self.text.len() - SEPARATOR.len());
            self.trailing_separator = false;
        }
        self
    }

    /// The text accumulated so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the message and return its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Return `true` if nothing has been rendered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Render for Message {
    fn render(&self, out: &mut String) {
        out.push_str(&self.text);
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Message> for String {
    fn from(message: Message) -> Self {
        message.text
    }
}

/// Render `args` back to back, with no separators.
#[must_use]
pub fn render_concatenated(args: &[&dyn Render]) -> Message {
    let mut message = Message::new();
    for arg in args {
        message.append(*arg);
    }
    message
}

/// Render `args` joined by single spaces, with no leading or trailing space.
///
/// An empty `args` slice yields an empty message.
#[must_use]
pub fn render_spaced(args: &[&dyn Render]) -> Message {
    let mut message = Message::new();
    for arg in args {
        message.append_separated(*arg);
    }
    message.trim_separator();
    message
}
