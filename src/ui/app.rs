//! Application state management for the TUI.
//!
//! Only UI state lives here; the readings themselves belong to the session.

use crate::config::ChartConfig;
use crate::ui::input::InputAction;

/// Application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Show help panel
    pub show_help: bool,
    /// Chart ranges
    pub chart: ChartConfig,
}

impl App {
    /// Create a new application state
    pub fn new(chart: ChartConfig) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            chart,
        }
    }

    /// Apply a keyboard action
    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => self.should_quit = true,
            InputAction::ToggleHelp => self.toggle_help(),
            InputAction::None => {}
        }
    }

    /// Toggle help panel
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
