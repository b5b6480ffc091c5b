//! Data model for the report viewer.
//!
//! This module contains the state of the scrollable report view:
//! - the processed [`Report`] and its text wrapped to the viewport
//! - vertical scroll position and viewport size
//! - application mode (normal navigation or command input)
//!
//! The report itself is immutable once produced; only the view state
//! changes in response to input.

use crate::report::Report;

/// One display line of the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub text: String,
    /// True for the summary line, which the view renders emphasized.
    pub emphasized: bool,
}

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Command input mode (after pressing ':')
    Command(String),
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    /// The processed report being displayed
    pub report: Report,
    /// Report text wrapped to the viewport width, rebuilt on resize
    lines: Vec<ReportLine>,
    /// Index of the first visible line
    pub scroll: usize,
    /// Number of visible text rows
    pub viewport_rows: usize,
    /// Width lines are wrapped to
    wrap_width: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates a new application state around a processed report.
    pub fn new(report: Report) -> Self {
        Self {
            report,
            lines: Vec::new(),
            scroll: 0,
            viewport_rows: 0,
            wrap_width: 0,
            mode: AppMode::Normal,
            should_quit: false,
            status_message: None,
        }
    }

    /// Updates the viewport size and re-wraps the report text.
    pub fn update_viewport_size(&mut self, rows: usize, cols: usize) {
        self.viewport_rows = rows;
        if cols != self.wrap_width || self.lines.is_empty() {
            self.wrap_width = cols;
            self.rewrap();
        }
        self.clamp_scroll();
    }

    /// Wraps the report body and summary to the current width.
    fn rewrap(&mut self) {
        let width = self.wrap_width.max(1);
        self.lines.clear();

        for raw_line in self.report.body().lines() {
            push_wrapped(&mut self.lines, raw_line, width, false);
        }
        push_wrapped(&mut self.lines, &self.report.summary(), width, true);
    }

    /// Returns the total number of wrapped lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the lines visible at the current scroll position.
    pub fn visible_lines(&self) -> &[ReportLine] {
        let start = self.scroll.min(self.lines.len());
        let end = (start + self.viewport_rows).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Largest scroll offset that still fills the viewport.
    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_rows)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Scrolls up by `n` lines.
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    /// Scrolls down by `n` lines.
    pub fn scroll_down(&mut self, n: usize) {
        self.scroll = (self.scroll + n).min(self.max_scroll());
    }

    /// Jumps to the top of the report.
    pub fn goto_top(&mut self) {
        self.scroll = 0;
    }

    /// Jumps to the bottom of the report.
    pub fn goto_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Enters command mode.
    pub fn enter_command_mode(&mut self) {
        self.mode = AppMode::Command(String::new());
    }

    /// Handles a character input in command mode.
    pub fn command_input(&mut self, c: char) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.push(c);
        }
    }

    /// Handles backspace in command mode.
    pub fn command_backspace(&mut self) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.pop();
            if cmd.is_empty() {
                self.mode = AppMode::Normal;
            }
        }
    }

    /// Executes the current command.
    pub fn execute_command(&mut self) {
        if let AppMode::Command(ref cmd) = self.mode.clone() {
            match cmd.as_str() {
                "q" | "quit" => self.should_quit = true,
                _ => {
                    // :<number> jumps to a line (1-indexed for the user)
                    if let Ok(line) = cmd.parse::<usize>() {
                        if line > 0 && line <= self.line_count() {
                            self.scroll = (line - 1).min(self.max_scroll());
                        } else {
                            self.status_message = Some(format!("Invalid line: {}", line));
                        }
                    } else {
                        self.status_message = Some(format!("Unknown command: {}", cmd));
                    }
                }
            }
        }
        self.mode = AppMode::Normal;
    }

    /// Cancels command mode and returns to normal mode.
    pub fn cancel_command(&mut self) {
        self.mode = AppMode::Normal;
    }
}

/// Wraps one logical line to `width`, preserving empty lines.
fn push_wrapped(lines: &mut Vec<ReportLine>, text: &str, width: usize, emphasized: bool) {
    if text.is_empty() {
        lines.push(ReportLine {
            text: String::new(),
            emphasized,
        });
        return;
    }
    for wrapped in textwrap::wrap(text, width) {
        lines.push(ReportLine {
            text: wrapped.into_owned(),
            emphasized,
        });
    }
}
