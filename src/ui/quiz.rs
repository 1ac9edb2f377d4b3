use super::layout::calculate_quiz_chunks;
use super::{draw_header, draw_help};
use crate::models::QuizScreen;
use crate::quiz::QuestionKind;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub fn draw_quiz(f: &mut Frame, screen: &QuizScreen, word_count: usize) {
    let layout = calculate_quiz_chunks(f.area());

    draw_header(
        f,
        layout.header_area,
        &format!("Quiz ({} words learned)", word_count),
    );

    let Some(question) = &screen.question else {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No words in vocabulary yet!",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Learn a word first, then come back."),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(message, layout.options_area);

        draw_help(f, layout.help_area, &[("Esc", "Back"), ("Ctrl+C", "Exit")]);
        return;
    };

    let prompt = Paragraph::new(question.prompt.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, layout.prompt_area);

    match question.kind {
        QuestionKind::Translate | QuestionKind::Match => {
            let items: Vec<ListItem> = question
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let style = if question.decoy_index == Some(i) {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC)
                    } else if screen.feedback.is_some() && *option == question.correct_answer {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else if i == screen.selected {
                        if screen.feedback.as_ref().is_some_and(|fb| !fb.correct) {
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD)
                        }
                    } else {
                        Style::default()
                    };
                    let marker = if i == screen.selected && screen.feedback.is_none() {
                        "> "
                    } else {
                        "  "
                    };
                    ListItem::new(format!("{}{}", marker, option)).style(style)
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Options"));
            f.render_widget(list, layout.options_area);
        }
        QuestionKind::FillBlank => {
            let content = if screen.input_buffer.is_empty() && screen.feedback.is_none() {
                Text::from("[Type the translation here...]")
            } else {
                Text::from(screen.input_buffer.as_str())
            };
            let input = Paragraph::new(content)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Your Answer"));
            f.render_widget(input, layout.options_area);

            if screen.feedback.is_none() {
                let cursor_x = layout.options_area.x + 1 + screen.input_buffer.width() as u16;
                let cursor_y = layout.options_area.y + 1;
                f.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }

    let feedback_line = match &screen.feedback {
        Some(feedback) => Line::from(Span::styled(
            feedback.message.as_str(),
            Style::default()
                .fg(if feedback.correct {
                    Color::Green
                } else {
                    Color::Red
                })
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };
    let feedback = Paragraph::new(vec![feedback_line])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Feedback"));
    f.render_widget(feedback, layout.feedback_area);

    if screen.feedback.is_some() {
        draw_help(
            f,
            layout.help_area,
            &[("Enter/n", "Next Question"), ("Esc", "Back"), ("Ctrl+C", "Exit")],
        );
    } else if question.kind == QuestionKind::FillBlank {
        draw_help(
            f,
            layout.help_area,
            &[("Enter", "Submit"), ("Esc", "Back"), ("Ctrl+C", "Exit")],
        );
    } else {
        draw_help(
            f,
            layout.help_area,
            &[
                ("↑/↓", "Select"),
                ("Enter", "Submit"),
                ("Esc", "Back"),
                ("Ctrl+C", "Exit"),
            ],
        );
    }
}
