//! Help panel widget.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help panel
pub fn render_help(frame: &mut Frame, area: Rect) {
    // Clear the area first
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let key = Style::default().fg(Color::Cyan);
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("Controls", heading)),
        Line::from(vec![
            Span::styled("  ?/h/F1", key),
            Span::raw("       - Toggle this help"),
        ]),
        Line::from(vec![
            Span::styled("  q/Esc/Ctrl-C", key),
            Span::raw(" - Quit and close the serial port"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Status Bar", heading)),
        Line::from(vec![
            Span::styled("  SERIAL ✓", Style::default().fg(Color::Green)),
            Span::raw(" - Sensor connected"),
        ]),
        Line::from(vec![
            Span::styled("  SERIAL ✗", Style::default().fg(Color::Red)),
            Span::raw(" - Searching for a sensor every 2 s"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("?", key.add_modifier(Modifier::BOLD)),
            Span::raw(" to close this help"),
        ]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
