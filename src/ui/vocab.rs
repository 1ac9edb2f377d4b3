use super::layout::calculate_section_chunks;
use super::{draw_header, draw_help};
use crate::store::VocabEntry;
use crate::utils::truncate_to_width;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

pub fn draw_vocab(f: &mut Frame, entries: &[VocabEntry]) {
    let layout = calculate_section_chunks(f.area());

    draw_header(
        f,
        layout.header_area,
        &format!("Vocabulary ({} words)", entries.len()),
    );

    let max_width = layout.body_area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = if entries.is_empty() {
        vec![
            ListItem::new("No words learned yet. Press 1 to fetch your first word.").style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let line = format!("{:>3}. {} - {}", i + 1, entry.word, entry.translation);
                ListItem::new(truncate_to_width(&line, max_width))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Learned Words"),
    );
    f.render_widget(list, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        &[
            ("1", "Learn"),
            ("2", "Quiz"),
            ("q", "Quit"),
        ],
    );
}
