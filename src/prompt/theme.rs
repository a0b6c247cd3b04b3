//! Prompt style classes and merge semantics.
//!
//! Pure data — consumed by the rendering layer. Each class names one
//! region of the prompt:
//!
//! ```text
//! [?] Choose a choice and return? (Use ↑ and ↓ to move, Space to select, Enter to submit)
//! └┬┘ └──────────────┬──────────┘ └───────────────────────┬─────────────────────────────┘
//! questionmark    question                            annotation
//!
//!  ❯  ●  choice selected
//! └┬┘└┬┘ └───────┬─────┘
//! pointer sign selected
//!
//!     ○  choice unselected
//!    └┬┘ └───────┬───────┘
//!   unsign   unselected
//! ```
//!
//! Once the prompt is confirmed, the annotation region is re-rendered
//! with the `answer` class.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// DEFAULT CLASS STYLES
// ============================================================================

/// Header glyph — muted steel blue.
pub const STYLE_QUESTIONMARK: Style = Style::new().fg(Color::Rgb(0x5f, 0x81, 0x9d));

/// Question text — bold.
pub const STYLE_QUESTION: Style = Style::new().add_modifier(Modifier::BOLD);

/// Confirmed answer summary — orange.
pub const STYLE_ANSWER: Style = Style::new().fg(Color::Rgb(0xff, 0x9d, 0x00));

/// Help text — gray.
pub const STYLE_ANNOTATION: Style = Style::new().fg(Color::Rgb(0x7f, 0x8c, 0x8d));

/// Cursor glyph — bold.
pub const STYLE_POINTER: Style = Style::new().add_modifier(Modifier::BOLD);

/// Label of a checked row — green.
pub const STYLE_SELECTED: Style = Style::new().fg(Color::Green);

// ============================================================================
// STYLE CLASSES
// ============================================================================

/// Addressable style regions a caller can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    QuestionMark,
    Question,
    Answer,
    Annotation,
    Pointer,
    Sign,
    Unsign,
    Selected,
    Unselected,
}

/// One resolved style per class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub question_mark: Style,
    pub question: Style,
    pub answer: Style,
    pub annotation: Style,
    pub pointer: Style,
    pub sign: Style,
    pub unsign: Style,
    pub selected: Style,
    pub unselected: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            question_mark: STYLE_QUESTIONMARK,
            question: STYLE_QUESTION,
            answer: STYLE_ANSWER,
            annotation: STYLE_ANNOTATION,
            pointer: STYLE_POINTER,
            sign: Style::new(),
            unsign: Style::new(),
            selected: STYLE_SELECTED,
            unselected: Style::new(),
        }
    }
}

impl Theme {
    /// Merge override rules into this theme. Rules apply in order, so a
    /// later rule for the same class replaces an earlier one.
    pub fn merge(mut self, rules: &[(StyleClass, Style)]) -> Self {
        for (class, style) in rules {
            *self.slot_mut(*class) = *style;
        }
        self
    }

    fn slot_mut(&mut self, class: StyleClass) -> &mut Style {
        match class {
            StyleClass::QuestionMark => &mut self.question_mark,
            StyleClass::Question => &mut self.question,
            StyleClass::Answer => &mut self.answer,
            StyleClass::Annotation => &mut self.annotation,
            StyleClass::Pointer => &mut self.pointer,
            StyleClass::Sign => &mut self.sign,
            StyleClass::Unsign => &mut self.unsign,
            StyleClass::Selected => &mut self.selected,
            StyleClass::Unselected => &mut self.unselected,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_matches_class_constants() {
        let theme = Theme::default();
        assert_eq!(theme.question_mark, STYLE_QUESTIONMARK);
        assert_eq!(theme.answer, STYLE_ANSWER);
        assert_eq!(theme.selected.fg, Some(Color::Green));
        assert_eq!(theme.unselected, Style::new());
    }

    #[test]
    fn question_and_pointer_are_bold() {
        let theme = Theme::default();
        assert!(theme.question.add_modifier.contains(Modifier::BOLD));
        assert!(theme.pointer.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn merge_overrides_only_the_named_class() {
        let theme = Theme::default().merge(&[(
            StyleClass::Selected,
            Style::new().fg(Color::Magenta),
        )]);
        assert_eq!(theme.selected.fg, Some(Color::Magenta));
        assert_eq!(theme.question_mark, STYLE_QUESTIONMARK);
    }

    #[test]
    fn later_merge_rules_win_for_the_same_class() {
        let theme = Theme::default().merge(&[
            (StyleClass::Answer, Style::new().fg(Color::Red)),
            (StyleClass::Answer, Style::new().fg(Color::Blue)),
        ]);
        assert_eq!(theme.answer.fg, Some(Color::Blue));
    }
}
