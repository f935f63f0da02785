//! Terminal UI module using ratatui.
//!
//! This module provides the live force chart, readout and status bar, plus
//! the terminal setup and teardown around them.

pub mod app;
pub mod input;
pub mod widgets;

use std::io::{self, Stdout};

use crossterm::{cursor, execute, terminal};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};

use crate::error::{Result, UiError};
use crate::session::Session;

pub use app::App;
pub use input::handle_input;

/// Height of the readout panel
const READOUT_HEIGHT: u16 = 5;
/// Height of the status bar
const STATUS_HEIGHT: u16 = 3;

/// Owns the terminal for the lifetime of the UI and restores it on drop
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Switch to the alternate screen in raw mode
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|e| UiError::InitializationError(e.to_string()))?;
        // No Tui exists yet to restore the terminal on drop
        Self::enter_screen().inspect_err(|_| {
            let _ = terminal::disable_raw_mode();
        })
    }

    fn enter_screen() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)
            .map_err(|e| UiError::InitializationError(e.to_string()))?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| UiError::InitializationError(e.to_string()))?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, app: &App, session: &Session) -> Result<()> {
        self.terminal
            .draw(|frame| render(frame, app, session))
            .map_err(|e| UiError::RenderError(e.to_string()))?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = terminal::disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
    }
}

/// Draw one frame: chart on top, readout, then the status bar
pub fn render(frame: &mut Frame, app: &App, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(READOUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    widgets::render_chart(frame, chunks[0], session.history(), &app.chart);
    widgets::render_readout(frame, chunks[1], session.latest().map(|r| r.force));

    let port_name = session.port_name();
    widgets::render_status_bar(
        frame,
        chunks[2],
        port_name.as_deref(),
        session.log().rows_written(),
        session.status(),
    );

    if app.show_help {
        widgets::render_help(frame, centered_rect(60, 60, frame.area()));
    }
}

/// A rectangle of the given percentages centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::datalog::ForceLog;
    use crate::sensor::MockConnector;
    use chrono::Local;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_before_first_reading() {
        let dir = tempfile::tempdir().unwrap();
        let log = ForceLog::create(dir.path(), Local::now()).unwrap();
        let session = Session::new(Box::new(MockConnector::new()), log);
        let mut app = App::new(ChartConfig::default());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app, &session)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Force: -- N"));
        assert!(text.contains("Ready"));
        assert!(!text.contains("Keyboard Shortcuts"));

        app.toggle_help();
        terminal.draw(|f| render(f, &app, &session)).unwrap();
        assert!(screen_text(&terminal).contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_centered_rect_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 50, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 10);
    }
}
