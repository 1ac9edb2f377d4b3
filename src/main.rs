use crossbeam_channel::unbounded;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use vocab_trainer::models::{AppState, FetchRequest, FetchResponse, LearnStatus, QuizScreen};
use vocab_trainer::store::{self, VocabularyStore};
use vocab_trainer::{handle_quiz_input, logger, spawn_fetch_worker, ui};

fn main() -> io::Result<()> {
    logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut store = VocabularyStore::load(store::default_store_path());
    let mut app_state = AppState::Home;
    let mut learn = LearnStatus::Idle;
    let mut quiz_screen = QuizScreen::default();

    let (req_tx, req_rx) = unbounded::<FetchRequest>();
    let (resp_tx, resp_rx) = unbounded::<FetchResponse>();
    let _worker = spawn_fetch_worker(resp_tx, req_rx);

    loop {
        terminal.draw(|f| match app_state {
            AppState::Home => ui::draw_home(f),
            AppState::Learn => ui::draw_learn(f, &learn),
            AppState::Quiz => ui::draw_quiz(f, &quiz_screen, store.len()),
            AppState::Vocab => ui::draw_vocab(f, store.entries()),
        })?;

        while let Ok(response) = resp_rx.try_recv() {
            apply_fetch_response(&mut store, &mut learn, response);
        }

        // Poll so pending fetch responses are picked up while idle.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if is_ctrl_c(&key) {
            break;
        }

        match app_state {
            // The quiz consumes printable keys for answer input; only Esc
            // leaves the section.
            AppState::Quiz => match key.code {
                KeyCode::Esc => app_state = AppState::Home,
                _ => handle_quiz_input(&mut quiz_screen, &store, key),
            },
            _ => match key.code {
                KeyCode::Char('1') | KeyCode::Char('l') => {
                    app_state = AppState::Learn;
                    learn = LearnStatus::Fetching;
                    req_tx.send(FetchRequest::LearnWord).ok();
                }
                KeyCode::Char('2') | KeyCode::Char('u') => {
                    app_state = AppState::Quiz;
                    quiz_screen.load(&store);
                }
                KeyCode::Char('3') | KeyCode::Char('v') => {
                    app_state = AppState::Vocab;
                }
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },
        }
    }

    Ok(())
}

fn apply_fetch_response(
    store: &mut VocabularyStore,
    learn: &mut LearnStatus,
    response: FetchResponse,
) {
    match response {
        FetchResponse::Learned { word, translation } => {
            match store.add_word(&word, &translation) {
                Ok(outcome) => {
                    *learn = LearnStatus::Learned {
                        word,
                        translation,
                        outcome,
                    };
                }
                Err(e) => {
                    logger::log(&format!("failed to persist vocabulary: {}", e));
                    *learn = LearnStatus::SaveFailed { word, translation };
                }
            }
        }
        FetchResponse::Failed { .. } => *learn = LearnStatus::Failed,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
