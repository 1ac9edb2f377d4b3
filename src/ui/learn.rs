use super::layout::calculate_section_chunks;
use super::{draw_header, draw_help};
use crate::models::LearnStatus;
use crate::store::AddOutcome;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_learn(f: &mut Frame, status: &LearnStatus) {
    let layout = calculate_section_chunks(f.area());

    draw_header(f, layout.header_area, "Learn a Word");

    let lines = match status {
        LearnStatus::Idle => vec![
            Line::from(""),
            Line::from("Press 1 to fetch a new word."),
        ],
        LearnStatus::Fetching => vec![
            Line::from(""),
            Line::from("Fetching word..."),
        ],
        LearnStatus::Learned {
            word,
            translation,
            outcome,
        } => {
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("Word: {} (Translation: {})", word, translation),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            if *outcome == AddOutcome::AlreadyKnown {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Already in your vocabulary.",
                    Style::default().fg(Color::Yellow),
                )));
            }
            lines
        }
        LearnStatus::SaveFailed { word, translation } => vec![
            Line::from(""),
            Line::from(format!("Word: {} (Translation: {})", word, translation)),
            Line::from(""),
            Line::from(Span::styled(
                "Could not save your vocabulary to disk.",
                Style::default().fg(Color::Red),
            )),
        ],
        LearnStatus::Failed => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Error fetching word.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
        ],
    };

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        &[
            ("1", "Another Word"),
            ("2", "Quiz"),
            ("3", "Vocabulary"),
            ("q", "Quit"),
        ],
    );
}
