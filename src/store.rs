use crate::logger;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// A learned word paired with its translation. Entries are never mutated
/// after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub translation: String,
}

/// Explicit insert feedback so callers can tell a fresh word from a repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyKnown,
}

/// Ordered collection of learned entries, persisted as a single JSON file.
#[derive(Debug)]
pub struct VocabularyStore {
    entries: Vec<VocabEntry>,
    path: PathBuf,
}

pub fn data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\vocab-trainer")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/vocab-trainer")
    }
}

pub fn default_store_path() -> PathBuf {
    data_dir().join("vocabulary.json")
}

impl VocabularyStore {
    /// Reads the persisted vocabulary. A missing or corrupt file yields an
    /// empty store; the caller never sees an error.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    logger::log(&format!(
                        "vocabulary file {} is malformed, starting empty: {}",
                        path.display(),
                        e
                    ));
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { entries, path }
    }

    /// Appends an entry unless the word (case-sensitive) is already known.
    /// The full sequence is written to disk before a successful insert is
    /// reported; a failed write rolls the insert back.
    pub fn add_word(&mut self, word: &str, translation: &str) -> io::Result<AddOutcome> {
        if self.entries.iter().any(|entry| entry.word == word) {
            return Ok(AddOutcome::AlreadyKnown);
        }

        self.entries.push(VocabEntry {
            word: word.to_string(),
            translation: translation.to_string(),
        });

        if let Err(e) = self.save() {
            self.entries.pop();
            return Err(e);
        }

        Ok(AddOutcome::Added)
    }

    fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, raw)
    }

    /// Uniformly random entry, or `None` when nothing has been learned yet.
    pub fn random_entry<R: Rng>(&self, rng: &mut R) -> Option<&VocabEntry> {
        if self.entries.is_empty() {
            None
        } else {
            self.entries.get(rng.gen_range(0..self.entries.len()))
        }
    }

    /// Entries in insertion order, for display.
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
