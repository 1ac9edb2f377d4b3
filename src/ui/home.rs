use super::layout::calculate_section_chunks;
use super::{draw_header, draw_help};
use ratatui::{
    Frame,
    layout::Alignment,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_home(f: &mut Frame) {
    let layout = calculate_section_chunks(f.area());

    draw_header(f, layout.header_area, "Vocabulary Trainer v0.1.0");

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from("Learn English words and their French translations,"),
        Line::from("then quiz yourself on what you have learned."),
        Line::from(""),
        Line::from("[1] Learn a new word (fetched from the internet)"),
        Line::from("[2] Take a quiz"),
        Line::from("[3] Browse your vocabulary"),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        &[
            ("1", "Learn"),
            ("2", "Quiz"),
            ("3", "Vocabulary"),
            ("q", "Quit"),
        ],
    );
}
