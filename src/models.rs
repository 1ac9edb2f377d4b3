use crate::quiz::{self, Evaluation, Question};
use crate::store::{AddOutcome, VocabularyStore};

/// One display region is visible at a time, selected by the most recent
/// trigger.
#[derive(Debug, PartialEq, Eq)]
pub enum AppState {
    Home,
    Learn,
    Quiz,
    Vocab,
}

/// State of the learn-word region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnStatus {
    Idle,
    Fetching,
    Learned {
        word: String,
        translation: String,
        outcome: AddOutcome,
    },
    SaveFailed {
        word: String,
        translation: String,
    },
    Failed,
}

#[derive(Debug)]
pub enum FetchRequest {
    LearnWord,
}

#[derive(Debug)]
pub enum FetchResponse {
    Learned { word: String, translation: String },
    Failed { error: String },
}

/// State of the quiz region: at most one active question, exactly one
/// submitted answer per question.
#[derive(Debug, Default)]
pub struct QuizScreen {
    pub question: Option<Question>,
    pub selected: usize,
    pub input_buffer: String,
    pub feedback: Option<Evaluation>,
}

impl QuizScreen {
    /// Generates a fresh question from the store. `question` stays `None`
    /// on an empty store and the UI shows the no-words message.
    pub fn load(&mut self, store: &VocabularyStore) {
        let question = quiz::generate_question(store, &mut rand::thread_rng());
        self.set_question(question);
    }

    pub fn set_question(&mut self, question: Option<Question>) {
        self.input_buffer.clear();
        self.feedback = None;
        self.selected = match &question {
            Some(q) if q.decoy_index == Some(0) && q.options.len() > 1 => 1,
            _ => 0,
        };
        self.question = question;
    }

    /// Moves the selection down, skipping the non-selectable decoy label.
    pub fn select_next(&mut self) {
        if let Some(question) = &self.question {
            let mut i = self.selected + 1;
            while i < question.options.len() && question.decoy_index == Some(i) {
                i += 1;
            }
            if i < question.options.len() {
                self.selected = i;
            }
        }
    }

    /// Moves the selection up, skipping the non-selectable decoy label.
    pub fn select_prev(&mut self) {
        if let Some(question) = &self.question {
            let mut i = self.selected;
            while i > 0 {
                i -= 1;
                if question.decoy_index != Some(i) {
                    self.selected = i;
                    return;
                }
            }
        }
    }
}
