//! The [`Render`] capability and its built-in implementations.
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

/// Conversion of a value into log text.
///
/// Implemented for primitives, strings, byte strings, paths and nested
/// [`Message`](super::Message) values. Domain types opt in by implementing it
/// themselves, usually by appending their fields:
///
/// ```
/// use daylog::{Render, msg};
///
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// impl Render for Point {
///     fn render(&self, out: &mut String) {
///         msg!(self.x, ", ", self.y).render(out);
///     }
/// }
///
/// assert_eq!(msg!("pos(", Point { x: 1.5, y: 2.0 }, ")").text(), "pos(1.5, 2)");
/// ```
///
/// Types that already implement [`Display`](fmt::Display) can be passed
/// through [`AsDisplay`] instead.
pub trait Render {
    /// Append the text form of `self` to `out`.
    fn render(&self, out: &mut String);
}

/// Renders any [`Display`](fmt::Display) value through its `Display` impl.
#[derive(Debug, Clone, Copy)]
pub struct AsDisplay<T>(pub T);

impl<T: fmt::Display> Render for AsDisplay<T> {
    fn render(&self, out: &mut String) {
        let _ = write!(out, "{}", self.0);
    }
}

macro_rules! render_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, out: &mut String) {
                    let _ = write!(out, "{self}");
                }
            }
        )+
    };
}

render_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Render for bool {
    fn render(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl Render for char {
    fn render(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Render for str {
    fn render(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Render for String {
    fn render(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Render for Cow<'_, str> {
    fn render(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Render for CStr {
    fn render(&self, out: &mut String) {
        out.push_str(&self.to_string_lossy());
    }
}

impl Render for CString {
    fn render(&self, out: &mut String) {
        self.as_c_str().render(out);
    }
}

impl Render for [u8] {
    fn render(&self, out: &mut String) {
        out.push_str(&String::from_utf8_lossy(self));
    }
}

impl Render for Vec<u8> {
    fn render(&self, out: &mut String) {
        self.as_slice().render(out);
    }
}

impl Render for Path {
    fn render(&self, out: &mut String) {
        let _ = write!(out, "{}", self.display());
    }
}

impl Render for PathBuf {
    fn render(&self, out: &mut String) {
        self.as_path().render(out);
    }
}

impl Render for fmt::Arguments<'_> {
    fn render(&self, out: &mut String) {
        let _ = out.write_fmt(*self);
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut String) {
        (**self).render(out);
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render(&self, out: &mut String) {
        (**self).render(out);
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, out: &mut String) {
        (**self).render(out);
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render(&self, out: &mut String) {
        (**self).render(out);
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn render(&self, out: &mut String) {
        (**self).render(out);
    }
}
