use crate::api::{
    FetchError, MyMemoryApi, RandomWordApi, SOURCE_LANG, TARGET_LANG, Translator, WordSource,
};
use crate::logger;
use crate::models::{FetchRequest, FetchResponse};
use crossbeam_channel::{Receiver, Sender};
use std::thread;

/// Spawns the background thread that performs all network I/O. Requests
/// arrive over `rx`; each one is answered with exactly one `FetchResponse`
/// on `tx`. The word is fetched first, then its translation.
pub fn spawn_fetch_worker(
    tx: Sender<FetchResponse>,
    rx: Receiver<FetchRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("vocab-trainer::fetch_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("failed to create tokio runtime: {}", e));
                    // Answer every request with a failure so the UI never
                    // waits on a response that cannot come.
                    for _request in rx.iter() {
                        let _ = tx.send(FetchResponse::Failed {
                            error: e.to_string(),
                        });
                    }
                    return;
                }
            };

            let client = reqwest::Client::new();
            let words = RandomWordApi::new(client.clone());
            let translator = MyMemoryApi::new(client);

            loop {
                match rx.recv() {
                    Ok(FetchRequest::LearnWord) => {
                        let response = match rt.block_on(learn_word(&words, &translator)) {
                            Ok((word, translation)) => {
                                logger::log(&format!("fetched '{}' -> '{}'", word, translation));
                                FetchResponse::Learned { word, translation }
                            }
                            Err(e) => {
                                logger::log(&format!("fetch failed: {}", e));
                                FetchResponse::Failed {
                                    error: e.to_string(),
                                }
                            }
                        };
                        if tx.send(response).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        logger::log("fetch worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("Failed to spawn fetch worker thread")
}

async fn learn_word(
    words: &impl WordSource,
    translator: &impl Translator,
) -> Result<(String, String), FetchError> {
    let word = words.random_word().await?;
    let translation = translator.translate(&word, SOURCE_LANG, TARGET_LANG).await?;
    Ok((word, translation))
}
