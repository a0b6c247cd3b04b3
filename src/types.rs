//! Domain types for multiselect.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

// ============================================================================
// CHOICES
// ============================================================================

/// A selectable item: a display label paired with an arbitrary payload.
///
/// Identity is positional. Choices are addressed by their index in the
/// list handed to the prompt, and that list never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice<T> {
    /// Label shown in the list (trimmed for display).
    pub name: String,
    /// Caller-supplied payload, returned untouched on confirmation.
    pub data: T,
}

impl<T> Choice<T> {
    pub fn new(name: impl Into<String>, data: T) -> Self {
        Choice {
            name: name.into(),
            data,
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Prompt appearance and sizing.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    /// Prompt text shown in the header.
    pub question: String,
    /// Glyph prefixing the header.
    pub question_mark: String,
    /// Glyph marking the current row.
    pub pointer: String,
    /// Glyph for checked rows.
    pub selected_sign: String,
    /// Glyph for unchecked rows.
    pub unselected_sign: String,
    /// Help text shown in the header until confirmation.
    pub annotation: String,
    /// Viewport cap in rows, header included.
    /// None = derive from the live terminal height.
    pub max_height: Option<usize>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            question: String::new(),
            question_mark: "[?]".to_string(),
            pointer: "❯".to_string(),
            selected_sign: "●".to_string(),
            unselected_sign: "○".to_string(),
            annotation: "(Use ↑ and ↓ to move, Space to select, Enter to submit)".to_string(),
            max_height: None,
        }
    }
}

impl PromptConfig {
    /// Config with the given question and default glyphs.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Default::default()
        }
    }

    /// Reject sizing that leaves no room for a body row below the header.
    pub fn validate(&self) -> Result<(), PromptError> {
        if let Some(h) = self.max_height {
            if h <= 1 {
                return Err(PromptError::MaxHeightTooSmall(h));
            }
        }
        Ok(())
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Failures surfaced to the caller.
///
/// Degenerate configuration is rejected at construction instead of
/// reproducing undefined cursor arithmetic over an empty list.
#[derive(Debug)]
pub enum PromptError {
    /// The choice list was empty.
    EmptyChoices,
    /// `max_height` must be at least 2 (one header row + one body row).
    MaxHeightTooSmall(usize),
    /// Terminal I/O failed.
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::EmptyChoices => write!(f, "choices must not be empty"),
            PromptError::MaxHeightTooSmall(h) => {
                write!(f, "max_height must be at least 2, got {}", h)
            }
            PromptError::Io(e) => write!(f, "terminal I/O error: {}", e),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

// ============================================================================
// TESTS
// ============================================================================
