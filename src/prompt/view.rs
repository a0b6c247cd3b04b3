//! Pure rendering: project prompt state onto styled text fragments.
//!
//! Two regions: a one-row header and the visible slice of the choice
//! list. Both builders are pure (state in, lines out) and idempotent;
//! the only effect is `Frame::render_widget()` in [`render`], which
//! writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::types::{Choice, PromptConfig};

use super::state::{Phase, PromptState};
use super::theme::Theme;

// ============================================================================
// HEADER
// ============================================================================

/// The header line.
///
/// While active: question mark, question, annotation. Once confirmed,
/// the annotation gives way to the comma-joined labels of the answer.
/// Once cancelled, the question stands alone.
pub fn header_line<T>(
    config: &PromptConfig,
    choices: &[Choice<T>],
    state: &PromptState,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = vec![
        Span::styled(config.question_mark.clone(), theme.question_mark),
        Span::raw(" "),
        Span::styled(config.question.trim().to_string(), theme.question),
        Span::raw(" "),
    ];

    match state.phase {
        Phase::Active => {
            spans.push(Span::styled(config.annotation.clone(), theme.annotation));
        }
        Phase::Confirmed => {
            let answer: Vec<&str> = state
                .selected
                .iter()
                .filter_map(|&i| choices.get(i))
                .map(|c| c.name.trim())
                .collect();
            spans.push(Span::styled(answer.join(", "), theme.answer));
        }
        Phase::Cancelled => {}
    }

    Line::from(spans)
}

// ============================================================================
// BODY
// ============================================================================

/// One line per visible choice, empty once the session is done.
///
/// Row anatomy: pointer column (glyph on the cursor row, equal-width
/// spaces elsewhere), sign column, trimmed label.
pub fn body_lines<T>(
    config: &PromptConfig,
    choices: &[Choice<T>],
    state: &PromptState,
    viewport: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    if state.is_done() {
        return Vec::new();
    }

    let pointer_pad = " ".repeat(config.pointer.chars().count());
    let window = state.scroll..(state.scroll + viewport).min(choices.len());

    let mut lines = Vec::with_capacity(viewport);
    for i in window {
        let choice = &choices[i];
        let mut spans = Vec::with_capacity(4);

        if i == state.cursor {
            spans.push(Span::styled(config.pointer.clone(), theme.pointer));
        } else {
            spans.push(Span::raw(pointer_pad.clone()));
        }
        spans.push(Span::raw(" "));

        if state.selected.contains(&i) {
            spans.push(Span::styled(config.selected_sign.clone(), theme.sign));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(choice.name.trim().to_string(), theme.selected));
        } else {
            spans.push(Span::styled(config.unselected_sign.clone(), theme.unsign));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                choice.name.trim().to_string(),
                theme.unselected,
            ));
        }

        lines.push(Line::from(spans));
    }
    lines
}

// ============================================================================
// FRAME COMPOSITION
// ============================================================================

/// Render header and body to the terminal frame.
///
/// The body region is dropped entirely once the phase is terminal, so
/// the final frame a host draws after confirmation shows the answer
/// header alone.
pub fn render<T>(
    config: &PromptConfig,
    choices: &[Choice<T>],
    state: &PromptState,
    viewport: usize,
    theme: &Theme,
    frame: &mut Frame,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(0),    // choice window
    ])
    .split(frame.area());

    let header = Paragraph::new(header_line(config, choices, state, theme));
    frame.render_widget(header, chunks[0]);

    if !state.is_done() {
        let body = Paragraph::new(body_lines(config, choices, state, viewport, theme));
        frame.render_widget(body, chunks[1]);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::state::Action;
    use crate::prompt::update::update;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 6);
        Terminal::new(backend).unwrap()
    }

    fn fruit_choices() -> Vec<Choice<u32>> {
        ["apple", "banana", "cherry", "date", "elderberry"]
            .iter()
            .enumerate()
            .map(|(i, name)| Choice::new(*name, i as u32))
            .collect()
    }

    fn config() -> PromptConfig {
        PromptConfig::new("Pick fruits")
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn active_header_shows_question_and_annotation() {
        let choices = fruit_choices();
        let state = PromptState::new(choices.len()).unwrap();
        let line = header_line(&config(), &choices, &state, &Theme::default());
        let text = line_text(&line);
        assert!(text.starts_with("[?] Pick fruits "));
        assert!(text.contains("(Use ↑ and ↓ to move, Space to select, Enter to submit)"));
    }

    #[test]
    fn confirmed_header_joins_trimmed_labels_in_list_order() {
        let choices = vec![
            Choice::new("  apple ", 0),
            Choice::new("banana", 1),
            Choice::new(" cherry", 2),
        ];
        let mut state = PromptState::new(3).unwrap();
        state.selected.insert(2);
        state.selected.insert(0);
        state.phase = Phase::Confirmed;

        let text = line_text(&header_line(&config(), &choices, &state, &Theme::default()));
        assert!(text.contains("apple, cherry"));
        assert!(!text.contains("Use ↑"));
    }

    #[test]
    fn cancelled_header_drops_the_annotation() {
        let choices = fruit_choices();
        let mut state = PromptState::new(choices.len()).unwrap();
        state.phase = Phase::Cancelled;

        let text = line_text(&header_line(&config(), &choices, &state, &Theme::default()));
        assert_eq!(text.trim_end(), "[?] Pick fruits");
    }

    #[test]
    fn body_shows_only_the_visible_window() {
        let choices = fruit_choices();
        let mut state = PromptState::new(choices.len()).unwrap();
        state.cursor = 3;
        state.scroll = 1;

        let lines = body_lines(&config(), &choices, &state, 3, &Theme::default());
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(lines.len(), 3);
        assert!(texts[0].contains("banana"));
        assert!(texts[2].contains("date"));
        assert!(!texts.iter().any(|t| t.contains("apple")));
        assert!(!texts.iter().any(|t| t.contains("elderberry")));
    }

    #[test]
    fn window_past_the_end_is_truncated() {
        let choices = fruit_choices();
        let mut state = PromptState::new(choices.len()).unwrap();
        state.cursor = 4;
        state.scroll = 3;

        let lines = body_lines(&config(), &choices, &state, 4, &Theme::default());
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn pointer_marks_the_cursor_row_and_pads_the_rest() {
        let choices = fruit_choices();
        let mut state = PromptState::new(choices.len()).unwrap();
        state.cursor = 1;

        let lines = body_lines(&config(), &choices, &state, 3, &Theme::default());
        assert!(line_text(&lines[1]).starts_with("❯ "));
        // Padding keeps the sign column aligned with the pointer row.
        assert!(line_text(&lines[0]).starts_with("  ○"));
    }

    #[test]
    fn checked_rows_use_the_selected_sign_and_style() {
        let choices = fruit_choices();
        let mut state = PromptState::new(choices.len()).unwrap();
        state.selected.insert(0);

        let lines = body_lines(&config(), &choices, &state, 3, &Theme::default());
        assert!(line_text(&lines[0]).contains("● apple"));
        assert!(line_text(&lines[1]).contains("○ banana"));

        let label = lines[0].spans.last().unwrap();
        assert_eq!(label.style, Theme::default().selected);
    }

    #[test]
    fn labels_are_trimmed_for_display() {
        let choices = vec![Choice::new("  spaced out  ", 0)];
        let state = PromptState::new(1).unwrap();
        let lines = body_lines(&config(), &choices, &state, 3, &Theme::default());
        assert!(line_text(&lines[0]).ends_with("spaced out"));
    }

    #[test]
    fn body_is_suppressed_once_terminal() {
        let choices = fruit_choices();
        for phase in [Phase::Confirmed, Phase::Cancelled] {
            let mut state = PromptState::new(choices.len()).unwrap();
            state.phase = phase;
            assert!(body_lines(&config(), &choices, &state, 3, &Theme::default()).is_empty());
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let choices = fruit_choices();
        let state = update(
            PromptState::new(choices.len()).unwrap(),
            &Action::MoveDown,
            3,
        );
        let theme = Theme::default();

        let first = body_lines(&config(), &choices, &state, 3, &theme);
        let second = body_lines(&config(), &choices, &state, 3, &theme);
        assert_eq!(first, second);
        assert_eq!(
            header_line(&config(), &choices, &state, &theme),
            header_line(&config(), &choices, &state, &theme)
        );
    }

    #[test]
    fn render_draws_header_and_window_to_the_frame() {
        let mut terminal = make_terminal();
        let choices = fruit_choices();
        let state = PromptState::new(choices.len()).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|frame| render(&config(), &choices, &state, 5, &theme, frame))
            .expect("render should not panic");

        let text = buffer_text(&terminal);
        assert!(text.contains("Pick fruits"));
        assert!(text.contains("apple"));
        assert!(text.contains("elderberry"));
    }

    #[test]
    fn render_after_confirm_leaves_only_the_answer_header() {
        let mut terminal = make_terminal();
        let choices = fruit_choices();
        let mut state = PromptState::new(choices.len()).unwrap();
        state.selected.insert(1);
        state.phase = Phase::Confirmed;
        let theme = Theme::default();

        terminal
            .draw(|frame| render(&config(), &choices, &state, 5, &theme, frame))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("banana"));
        assert!(!text.contains("apple"));
        assert!(!text.contains("❯"));
    }
}
