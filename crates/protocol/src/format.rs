//! Display helpers for user-supplied task text.
//!
//! Descriptions come from the service verbatim. Before they reach the
//! terminal, control characters are neutralized so a description cannot
//! inject escape sequences (cursor movement, colour changes, title
//! rewrites) into the rendered screen.

use std::borrow::Cow;

/// Replacement for control characters that have no whitespace meaning.
const REPLACEMENT: char = '\u{FFFD}';

/// Returns `text` made safe for single-line terminal display.
///
/// Line breaks and tabs become spaces; every other control character
/// (including `ESC`) becomes `U+FFFD`. Text without control characters is
/// returned borrowed.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::format::display_text;
///
/// assert_eq!(display_text("comprar leite"), "comprar leite");
/// assert_eq!(display_text("a\nb"), "a b");
/// assert_eq!(display_text("\u{1b}[2Jx"), "\u{FFFD}[2Jx");
/// ```
#[must_use]
pub fn display_text(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|c| match c {
                '\n' | '\r' | '\t' => ' ',
                c if c.is_control() => REPLACEMENT,
                c => c,
            })
            .collect(),
    )
}
