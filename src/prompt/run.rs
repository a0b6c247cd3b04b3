//! Effects boundary: terminal lifecycle, key mapping, event loop.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers: the loop
//! reads one key, maps it to an [`Action`], runs the transition, and
//! repaints.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::{Terminal, TerminalOptions, Viewport};

use crate::types::{Choice, PromptConfig, PromptError};

use super::state::{Action, Phase, PromptState};
use super::theme::Theme;
use super::update::update;
use super::view;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. These bindings
/// are total — no fallthrough to text insertion exists in raw mode.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl-C and Ctrl-Q always cancel
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Cancel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(' ') => Some(Action::ToggleSelect),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

// ============================================================================
// SIZING
// ============================================================================

/// Rows the inline prompt occupies: one header row plus one row per
/// choice, capped by `max_height` and the live terminal height. Never
/// below two rows (header + at least one choice).
fn prompt_height(max_height: Option<usize>, terminal_rows: usize, item_count: usize) -> usize {
    let cap = max_height.unwrap_or(usize::MAX).min(terminal_rows.max(2));
    (item_count + 1).min(cap).max(2)
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up an inline viewport below the shell cursor.
fn setup_terminal(height: u16) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the prompt with the default theme.
///
/// Returns the choices the user confirmed, in original list order, or
/// `None` if the prompt was cancelled. Cancellation is an outcome, not
/// an error.
pub fn run<T>(
    config: PromptConfig,
    choices: Vec<Choice<T>>,
) -> Result<Option<Vec<Choice<T>>>, PromptError> {
    run_with_theme(config, Theme::default(), choices)
}

/// Run the prompt with a caller-merged theme.
pub fn run_with_theme<T>(
    config: PromptConfig,
    theme: Theme,
    choices: Vec<Choice<T>>,
) -> Result<Option<Vec<Choice<T>>>, PromptError> {
    config.validate()?;
    let mut state = PromptState::new(choices.len())?;

    let (_, terminal_rows) = crossterm::terminal::size()?;
    let height = prompt_height(config.max_height, terminal_rows as usize, choices.len());
    let viewport = height - 1;

    install_panic_hook();
    let mut terminal = setup_terminal(height as u16)?;

    let outcome = event_loop(&mut terminal, &config, &theme, &choices, &mut state, viewport);
    restore_terminal()?;
    println!();
    outcome?;

    let answer = match state.phase {
        Phase::Confirmed => Some(
            choices
                .into_iter()
                .enumerate()
                .filter(|(i, _)| state.selected.contains(i))
                .map(|(_, choice)| choice)
                .collect(),
        ),
        _ => None,
    };
    Ok(answer)
}

/// Draw, block on one key event, transition, repeat.
///
/// Once a transition lands in a terminal phase, one more frame is drawn
/// (the answer header, body suppressed) before the loop returns.
fn event_loop<T>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &PromptConfig,
    theme: &Theme,
    choices: &[Choice<T>],
    state: &mut PromptState,
    viewport: usize,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| view::render(config, choices, state, viewport, theme, frame))?;

        if state.is_done() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = map_key(key) {
                    *state = update(state.clone(), &action, viewport);
                }
            }
            _ => {} // ignore mouse, resize, paste, focus
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
