//! Single-line text input.

/// A single-line text field edited at its end.
///
/// # Examples
///
/// ```
/// use tarefas_tui::input::TextInput;
///
/// let mut password = TextInput::masked();
/// for ch in "1234".chars() {
///     password.insert_char(ch);
/// }
/// password.backspace();
/// assert_eq!(password.value(), "123");
/// assert_eq!(password.display(), "•••");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    masked: bool,
}

impl TextInput {
    /// Creates an empty, visible field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty field whose content is hidden when displayed.
    #[must_use]
    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    /// Creates a visible field holding `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            masked: false,
        }
    }

    /// Returns the raw content.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns the content as it should be drawn.
    #[must_use]
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Appends a character.
    pub fn insert_char(&mut self, ch: char) {
        self.value.push(ch);
    }

    /// Deletes the last character, if any.
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Replaces the content.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
    }
}
