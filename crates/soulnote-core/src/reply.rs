//! Outbound messages.

use serde::Serialize;

/// A grid of reply buttons rendered by the client under the input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<String>>,
    /// Hint shown in the empty input field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            placeholder: None,
        }
    }

    /// Appends a row of buttons.
    pub fn row<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Iterates over every button label, row by row.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels().any(|candidate| candidate == label)
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

/// A text reply with an optional keyboard.
///
/// A reply without a keyboard leaves whatever keyboard the client currently
/// shows in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}
