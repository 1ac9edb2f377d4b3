pub mod api;
pub mod input;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod store;
pub mod ui;
pub mod utils;
pub mod worker;

// Re-exports for convenience
pub use api::{FetchError, MyMemoryApi, RandomWordApi, Translator, WordSource};
pub use input::handle_quiz_input;
pub use models::{AppState, FetchRequest, FetchResponse, LearnStatus, QuizScreen};
pub use quiz::{Evaluation, Question, QuestionKind, check_answer, generate_question};
pub use store::{AddOutcome, VocabEntry, VocabularyStore, default_store_path};
pub use worker::spawn_fetch_worker;
