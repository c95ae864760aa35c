//! Textual rendering of materialized sequences: `[a b c]`.
//!
//! Used for display and whole-sequence equality checks, never for identity.

use std::fmt::{self, Display, Write};

/// Render `items` as a bracketed, space-separated list.
pub fn render_list<T: Display>(items: &[T]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_list(&mut out, items.iter());
    out
}

/// Stream a rendering into any formatter without buffering the elements.
pub fn write_list<W, I>(w: &mut W, items: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    w.write_char('[')?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            w.write_char(' ')?;
        }
        write!(w, "{item}")?;
    }
    w.write_char(']')
}
