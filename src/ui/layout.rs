use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header / body / help-bar split shared by the simple sections.
pub struct SectionLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub help_area: Rect,
}

/// The quiz section additionally splits its body into prompt, options (or
/// text input) and feedback.
pub struct QuizLayout {
    pub header_area: Rect,
    pub prompt_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_section_chunks(area: Rect) -> SectionLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    SectionLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        prompt_area: chunks[1],
        options_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}
