//! Status bar widget.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    port_name: Option<&str>,
    rows_logged: usize,
    status: &str,
) {
    let mut spans = vec![];

    // Connection status
    match port_name {
        Some(port) => spans.push(Span::styled(
            format!("SERIAL ✓ {}", port),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        None => spans.push(Span::styled(
            "SERIAL ✗",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        format!("{} rows logged", rows_logged),
        Style::default().fg(Color::Gray),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(status.to_string(), status_style(status)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn status_style(status: &str) -> Style {
    if status.starts_with("Error") || status.starts_with("Serial Disconnected") {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if status.starts_with("Reconnecting") {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_status_colors() {
        assert_eq!(status_style("Error: boom").fg, Some(Color::Red));
        assert_eq!(status_style("Reconnecting...").fg, Some(Color::Yellow));
        assert_eq!(status_style("Received: 12.0").fg, Some(Color::Gray));
    }

    #[test]
    fn test_renders_status_text() {
        let mut terminal = Terminal::new(TestBackend::new(70, 3)).unwrap();
        terminal
            .draw(|f| render_status_bar(f, f.area(), Some("COM3"), 2, "Received: 512.3"))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("COM3"), "{}", row);
        assert!(row.contains("2 rows logged"), "{}", row);
        assert!(row.contains("Received: 512.3"), "{}", row);
    }
}
