use crate::models::QuizScreen;
use crate::quiz::{self, QuestionKind};
use crate::store::VocabularyStore;
use crossterm::event::{KeyCode, KeyEvent};

/// Key handling for the quiz region. Each question accepts exactly one
/// submitted answer; after feedback is shown, Enter (or `n`) moves on to a
/// freshly generated question. Section switching and quitting are handled by
/// the caller.
pub fn handle_quiz_input(screen: &mut QuizScreen, store: &VocabularyStore, key: KeyEvent) {
    if screen.feedback.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
            screen.load(store);
        }
        return;
    }

    let Some(question) = screen.question.clone() else {
        return;
    };

    match question.kind {
        QuestionKind::FillBlank => match key.code {
            KeyCode::Enter => {
                if !screen.input_buffer.trim().is_empty() {
                    screen.feedback = Some(quiz::check_answer(&question, &screen.input_buffer));
                }
            }
            KeyCode::Backspace => {
                screen.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                screen.input_buffer.push(c);
            }
            _ => {}
        },
        QuestionKind::Translate | QuestionKind::Match => match key.code {
            KeyCode::Up | KeyCode::Char('k') => screen.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => screen.select_next(),
            KeyCode::Enter => {
                if let Some(option) = question.options.get(screen.selected) {
                    screen.feedback = Some(quiz::check_answer(&question, option));
                }
            }
            _ => {}
        },
    }
}
