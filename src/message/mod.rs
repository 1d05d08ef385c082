//! Variadic message building: the [`Render`] capability and the [`Message`] builder.

mod builder;
mod render;

pub use builder::{Message, SEPARATOR, render_concatenated, render_spaced};
pub use render::{AsDisplay, Render};

/// Build a [`Message`] by appending every argument with no separator.
///
/// Each argument must implement [`Render`]. The fold is expanded at the call
/// site, so no trait objects are involved.
///
/// ```
/// let m = daylog::msg!("a", 1, "b");
/// assert_eq!(m.text(), "a1b");
/// ```
#[macro_export]
macro_rules! msg {
    ($($arg:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut message = $crate::Message::new();
        $( message.append(&$arg); )*
        message
    }};
}

/// Build a [`Message`] with the arguments joined by single spaces.
///
/// Every argument is appended followed by a separator, then the final
/// separator is trimmed. An empty argument list yields an empty message.
///
/// ```
/// let m = daylog::msg_spaced!("User:", 42, true);
/// assert_eq!(m.text(), "User: 42 true");
/// ```
#[macro_export]
macro_rules! msg_spaced {
    ($($arg:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut message = $crate::Message::new();
        $( message.append_separated(&$arg); )*
        message.trim_separator();
        message
    }};
}
