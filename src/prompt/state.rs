//! Prompt state algebra: pure types, zero effects.
//!
//! These types define the entire prompt state space. The transition
//! function (`update`) and the rendering layer (`view`) both program
//! against them. The item list itself lives with the caller; the state
//! only tracks indices into it.

use std::collections::BTreeSet;

use crate::types::PromptError;

// ============================================================================
// LIFECYCLE PHASE
// ============================================================================

/// Where the interactive session stands.
///
/// `Confirmed` and `Cancelled` are terminal: once reached, no further
/// input is processed (`Cancel` stays accepted but changes nothing
/// observable — cancelling twice is cancelling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input.
    Active,
    /// User submitted the selection.
    Confirmed,
    /// User abandoned the prompt; selection is discarded.
    Cancelled,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition
/// function decides what each Action means given the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up one row, wrapping from first to last item.
    MoveUp,
    /// Move cursor down one row, wrapping from last to first item.
    MoveDown,
    /// Toggle checkbox on the current item.
    ToggleSelect,
    /// Submit the current selection.
    Confirm,
    /// Abandon the prompt.
    Cancel,
}

// ============================================================================
// PROMPT STATE
// ============================================================================

/// The full state tuple: cursor, scroll offset, selection, phase.
///
/// Invariants (upheld by `update` for any constant viewport):
/// - `cursor < item_count`
/// - `scroll <= item_count`
/// - the visible window `[scroll, scroll + viewport)` contains `cursor`
///   after every cursor move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    /// Index of the highlighted item.
    pub cursor: usize,
    /// Index of the first visible item.
    pub scroll: usize,
    /// Indices of checked items, ascending. Independent of the cursor.
    pub selected: BTreeSet<usize>,
    /// Lifecycle phase.
    pub phase: Phase,
    item_count: usize,
}

impl PromptState {
    /// Fresh state: cursor at the top, nothing selected, active.
    ///
    /// An empty item list is rejected here — cursor arithmetic is
    /// meaningless without at least one item.
    pub fn new(item_count: usize) -> Result<Self, PromptError> {
        if item_count == 0 {
            return Err(PromptError::EmptyChoices);
        }
        Ok(PromptState {
            cursor: 0,
            scroll: 0,
            selected: BTreeSet::new(),
            phase: Phase::Active,
            item_count,
        })
    }

    /// Number of items in the list the state indexes into.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// True once the session has reached Confirmed or Cancelled.
    pub fn is_done(&self) -> bool {
        self.phase != Phase::Active
    }

    /// Selected indices in ascending order (original list order, never
    /// toggle order).
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PromptError;

    #[test]
    fn fresh_state_starts_at_top_with_nothing_selected() {
        let state = PromptState::new(5).unwrap();
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll, 0);
        assert!(state.selected.is_empty());
        assert_eq!(state.phase, Phase::Active);
        assert_eq!(state.item_count(), 5);
        assert!(!state.is_done());
    }

    #[test]
    fn empty_item_list_is_rejected() {
        assert!(matches!(
            PromptState::new(0),
            Err(PromptError::EmptyChoices)
        ));
    }

    #[test]
    fn selected_indices_come_out_ascending() {
        let mut state = PromptState::new(5).unwrap();
        state.selected.insert(3);
        state.selected.insert(0);
        state.selected.insert(4);
        assert_eq!(state.selected_indices(), vec![0, 3, 4]);
    }

    #[test]
    fn terminal_phases_report_done() {
        let mut state = PromptState::new(2).unwrap();
        state.phase = Phase::Confirmed;
        assert!(state.is_done());
        state.phase = Phase::Cancelled;
        assert!(state.is_done());
    }
}
