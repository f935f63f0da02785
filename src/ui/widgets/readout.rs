//! Numeric force readout.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Readout text for the latest force, `--` before the first reading
pub fn format_force(force: Option<f64>) -> String {
    match force {
        Some(newtons) => format!("Force: {:.2} N", newtons),
        None => "Force: -- N".to_string(),
    }
}

/// Render the force readout
pub fn render_readout(frame: &mut Frame, area: Rect, force: Option<f64>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let color = if force.is_some() { Color::Yellow } else { Color::DarkGray };
    let text = Line::from(Span::styled(
        format_force(force),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    // Pad down so the value sits in the middle of the block
    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); (inner_height / 2) as usize];
    lines.push(text);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
