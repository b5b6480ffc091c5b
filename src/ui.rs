//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Scrollable report panel with the summary line emphasized
//! - Status bar with mode, position and scroll percentage
//! - Command line display
//!
//! The summary line is located through [`crate::model::ReportLine`]'s
//! `emphasized` flag set by the model, never by measuring the
//! rendered text.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{AppMode, AppState};

/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: report panel + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);

    render_report_panel(frame, state, main_layout[0]);
    render_status_bar(frame, state, main_layout[1]);
}

/// Renders the scrollable report panel.
fn render_report_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let lines: Vec<Line> = state
        .visible_lines()
        .iter()
        .map(|line| {
            let style = if line.emphasized {
                // The aggregate summary, highlighted like the original tool
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(line.text.clone(), style))
        })
        .collect();

    let title = format!(
        "cDNA Translation Results [{} records]",
        state.report.entries.len()
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let (mode_str, command_str) = match &state.mode {
        AppMode::Normal => ("NORMAL", String::new()),
        AppMode::Command(cmd) => ("COMMAND", format!(":{}", cmd)),
    };

    let position_info = format!(
        "Line {}/{} ({}%) ",
        (state.scroll + 1).min(state.line_count().max(1)),
        state.line_count(),
        scroll_percent(state)
    );

    // Show status message or command buffer if present
    let message = state.status_message.as_deref().unwrap_or("q to close");
    let left_content = if command_str.is_empty() {
        format!(" {} | {} ", mode_str, message)
    } else {
        format!(" {} | {} ", mode_str, command_str)
    };

    let left_len = left_content.len();
    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + position_info.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            position_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(status_line);
    frame.render_widget(paragraph, area);
}

/// Scroll position as a percentage of the scrollable range.
fn scroll_percent(state: &AppState) -> usize {
    let range = state.line_count().saturating_sub(state.viewport_rows);
    if range == 0 {
        100
    } else {
        state.scroll * 100 / range
    }
}

/// Calculates the visible dimensions for the report panel.
pub fn calculate_visible_dimensions(terminal_width: u16, terminal_height: u16) -> (usize, usize) {
    // Account for borders and status bar
    let visible_cols = (terminal_width.saturating_sub(2)) as usize;
    let visible_rows = (terminal_height.saturating_sub(STATUS_BAR_HEIGHT + 2)) as usize;
    (visible_rows, visible_cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppState;
    use crate::report::process;

    #[test]
    fn test_visible_dimensions() {
        let (rows, cols) = calculate_visible_dimensions(100, 50);
        // 100 - 2 (borders) = 98 cols
        // 50 - 1 (status) - 2 (borders) = 47 rows
        assert_eq!(cols, 98);
        assert_eq!(rows, 47);
    }

    #[test]
    fn test_visible_dimensions_tiny_terminal() {
        let (rows, cols) = calculate_visible_dimensions(1, 1);
        assert_eq!(cols, 0);
        assert_eq!(rows, 0);
    }

    #[test]
    fn test_scroll_percent() {
        let report = process(">seq1\nATGGGTAAAGGGAAAGGTTCC\n>seq2\nNNZZZZ\n");
        let mut state = AppState::new(report);
        state.update_viewport_size(3, 80);

        assert_eq!(scroll_percent(&state), 0);
        state.goto_bottom();
        assert_eq!(scroll_percent(&state), 100);
    }

    #[test]
    fn test_scroll_percent_when_everything_fits() {
        let report = process(">seq1\nATGATG\n");
        let mut state = AppState::new(report);
        state.update_viewport_size(50, 80);
        assert_eq!(scroll_percent(&state), 100);
    }
}
