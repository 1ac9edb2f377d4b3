use async_trait::async_trait;
use serde::Deserialize;

pub const WORDS_API_URL: &str = "https://random-word-api.herokuapp.com/word";
pub const TRANSLATION_API_URL: &str = "https://api.mymemory.translated.net/get";

pub const SOURCE_LANG: &str = "en";
pub const TARGET_LANG: &str = "fr";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("word service returned an empty list")]
    EmptyWordList,

    #[error("no translation returned for \"{word}\"")]
    MissingTranslation { word: String },
}

/// Source of single random English words.
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn random_word(&self) -> Result<String, FetchError>;
}

/// Translation provider interface.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, FetchError>;
}

/// random-word-api.herokuapp.com client. The endpoint returns a JSON array
/// of lowercase words; we always ask for exactly one.
pub struct RandomWordApi {
    client: reqwest::Client,
}

impl RandomWordApi {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WordSource for RandomWordApi {
    async fn random_word(&self) -> Result<String, FetchError> {
        let words: Vec<String> = self
            .client
            .get(WORDS_API_URL)
            .query(&[("number", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        first_word(words)
    }
}

fn first_word(words: Vec<String>) -> Result<String, FetchError> {
    words.into_iter().next().ok_or(FetchError::EmptyWordList)
}

/// api.mymemory.translated.net client for a fixed language pair per call.
pub struct MyMemoryApi {
    client: reqwest::Client,
}

impl MyMemoryApi {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: MyMemoryResponseData,
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[async_trait]
impl Translator for MyMemoryApi {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, FetchError> {
        let langpair = format!("{}|{}", from, to);
        let body: MyMemoryResponse = self
            .client
            .get(TRANSLATION_API_URL)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        extract_translation(body, text)
    }
}

fn extract_translation(body: MyMemoryResponse, word: &str) -> Result<String, FetchError> {
    body.response_data
        .translated_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| FetchError::MissingTranslation {
            word: word.to_string(),
        })
}
