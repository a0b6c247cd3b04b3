//! Pure state transitions: (state, action, viewport) → state.
//!
//! This is the core logic of the prompt. Fully testable without a
//! terminal. The viewport (visible body rows) is passed in by the host
//! on every event, so the core never reads terminal dimensions itself.

use super::state::{Action, Phase, PromptState};

/// Pure state transition function.
///
/// Once the phase is terminal every action is a no-op except `Cancel`,
/// which is accepted unconditionally (cancelling twice is cancelling).
pub fn update(state: PromptState, action: &Action, viewport: usize) -> PromptState {
    if let Action::Cancel = action {
        return cancel(state);
    }
    if state.is_done() {
        return state;
    }

    // A zero-row viewport can only come from a degenerate live terminal;
    // treat it as a single row rather than underflowing window math.
    let viewport = viewport.max(1);

    match action {
        Action::MoveUp => move_up(state, viewport),
        Action::MoveDown => move_down(state, viewport),
        Action::ToggleSelect => toggle_select(state),
        Action::Confirm => confirm(state),
        Action::Cancel => unreachable!("handled above"),
    }
}

// ============================================================================
// PER-ACTION HANDLERS
// ============================================================================

/// Cursor up one row, wrapping from the first item to the last.
///
/// Scroll follows with minimal motion: reveal one more row above when
/// the cursor reaches the top of the window, or snap to the last page
/// on wrap-around. First matching rule wins.
fn move_up(mut state: PromptState, viewport: usize) -> PromptState {
    let n = state.item_count();
    state.cursor = (state.cursor + n - 1) % n;

    if state.cursor == state.scroll && state.scroll > 0 {
        state.scroll -= 1;
    } else if state.cursor == n - 1 {
        state.scroll = n.saturating_sub(viewport);
    }
    keep_cursor_visible(state, viewport)
}

/// Cursor down one row, wrapping from the last item to the first.
///
/// Scrolls down one row when the cursor lands on the last visible row
/// (unless that row is already the last item); resets to the top on
/// wrap-around.
fn move_down(mut state: PromptState, viewport: usize) -> PromptState {
    let n = state.item_count();
    state.cursor = (state.cursor + 1) % n;

    let window_end = state.scroll + viewport - 1;
    if state.cursor == window_end && window_end < n - 1 {
        state.scroll += 1;
    } else if state.cursor == 0 {
        state.scroll = 0;
    }
    keep_cursor_visible(state, viewport)
}

/// Invariant: the window `[scroll, scroll + viewport)` contains the
/// cursor after every move. The one-row shifts above keep scrolling
/// minimal-motion; this clamp covers the geometries they miss (a
/// two-row viewport lets the cursor step just past the window top).
fn keep_cursor_visible(mut state: PromptState, viewport: usize) -> PromptState {
    if state.cursor < state.scroll {
        state.scroll = state.cursor;
    } else if state.cursor >= state.scroll + viewport {
        state.scroll = state.cursor + 1 - viewport;
    }
    state
}

/// Toggle the checkbox under the cursor. Cursor and scroll unchanged.
fn toggle_select(mut state: PromptState) -> PromptState {
    if state.selected.contains(&state.cursor) {
        state.selected.remove(&state.cursor);
    } else {
        state.selected.insert(state.cursor);
    }
    state
}

fn confirm(mut state: PromptState) -> PromptState {
    state.phase = Phase::Confirmed;
    state
}

fn cancel(mut state: PromptState) -> PromptState {
    state.phase = Phase::Cancelled;
    state
}

// ============================================================================
// TESTS
// ============================================================================
