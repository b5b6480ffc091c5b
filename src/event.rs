//! Keyboard event handling.
//!
//! This module manages keyboard input for the report viewer:
//! - `j`/`Down`: scroll down one line
//! - `k`/`Up`: scroll up one line
//! - `Ctrl+D` / `Ctrl+U`: half page down/up
//! - `PageDown`/`Space` / `PageUp`: full page down/up
//! - `g` / `G` or `Home` / `End`: jump to top/bottom
//! - `q` or `Esc`: dismiss the viewer
//! - `:`: enter command mode
//!   - `:q` or `:quit`: quit the application
//!   - `:<number>`: jump to line

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::model::{AppMode, AppState};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Scroll up one line
    ScrollUp,
    /// Scroll down one line
    ScrollDown,
    /// Move half page up (Ctrl+U)
    HalfPageUp,
    /// Move half page down (Ctrl+D)
    HalfPageDown,
    /// Move full page up (PageUp)
    PageUp,
    /// Move full page down (PageDown or Space)
    PageDown,
    /// Jump to the first line (g or Home)
    GotoTop,
    /// Jump to the last page (G or End)
    GotoBottom,
    /// Enter command mode
    EnterCommandMode,
    /// Add character to command buffer
    CommandChar(char),
    /// Execute current command
    ExecuteCommand,
    /// Cancel command mode
    CancelCommand,
    /// Backspace in command mode
    CommandBackspace,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: &AppMode) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, mode),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode) -> Action {
    match mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Command(_) => handle_command_mode(key),
    }
}

/// Handles keys in normal navigation mode.
fn handle_normal_mode(key: KeyEvent) -> Action {
    // Ctrl combinations first
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('d') => Action::HalfPageDown,
            KeyCode::Char('u') => Action::HalfPageUp,
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GotoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GotoBottom,
        KeyCode::Char(' ') | KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char(':') => Action::EnterCommandMode,
        _ => Action::None,
    }
}

/// Handles keys in command input mode.
fn handle_command_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::CancelCommand,
        KeyCode::Enter => Action::ExecuteCommand,
        KeyCode::Backspace => Action::CommandBackspace,
        KeyCode::Char(c) => Action::CommandChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
pub fn apply_action(state: &mut AppState, action: Action) {
    // Any navigation clears a stale status message
    if !matches!(action, Action::None) {
        state.status_message = None;
    }

    let half_page = (state.viewport_rows / 2).max(1);
    let full_page = state.viewport_rows.max(1);

    match action {
        Action::None => {}
        Action::Quit => state.should_quit = true,
        Action::ScrollUp => state.scroll_up(1),
        Action::ScrollDown => state.scroll_down(1),
        Action::HalfPageUp => state.scroll_up(half_page),
        Action::HalfPageDown => state.scroll_down(half_page),
        Action::PageUp => state.scroll_up(full_page),
        Action::PageDown => state.scroll_down(full_page),
        Action::GotoTop => state.goto_top(),
        Action::GotoBottom => state.goto_bottom(),
        Action::EnterCommandMode => state.enter_command_mode(),
        Action::CommandChar(c) => state.command_input(c),
        Action::ExecuteCommand => state.execute_command(),
        Action::CancelCommand => state.cancel_command(),
        Action::CommandBackspace => state.command_backspace(),
        Action::Resize(_, _) => {} // Viewport update handled by the controller
    }
}
