pub mod layout;
mod home;
mod learn;
mod quiz;
mod vocab;

pub use home::draw_home;
pub use learn::draw_learn;
pub use quiz::draw_quiz;
pub use vocab::draw_vocab;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

fn draw_header(f: &mut Frame, area: Rect, text: &str) {
    let header = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_help(f: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in keys.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        if i + 1 < keys.len() {
            spans.push(Span::from(format!(" {}  ", action)));
        } else {
            spans.push(Span::from(format!(" {}", action)));
        }
    }

    let help = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
