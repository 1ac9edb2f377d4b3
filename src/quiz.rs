use crate::store::{VocabEntry, VocabularyStore};
use rand::Rng;
use rand::seq::SliceRandom;

/// Multiple-choice questions carry 3 distractors when the store is large
/// enough; with fewer candidates the option count shrinks instead of looping.
pub const DISTRACTOR_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Translate,
    Match,
    FillBlank,
}

/// A transient quiz question. `options` is empty for `FillBlank`; for `Match`
/// the shuffled set also contains the source word at `decoy_index`, shown as a
/// label but never selectable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub decoy_index: Option<usize>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: bool,
    pub message: String,
}

/// Builds one quiz question from the current store contents, or `None` when
/// nothing has been learned yet. Performs no I/O.
pub fn generate_question<R: Rng>(store: &VocabularyStore, rng: &mut R) -> Option<Question> {
    let target = store.random_entry(rng)?.clone();
    let kind = match rng.gen_range(0..3) {
        0 => QuestionKind::Translate,
        1 => QuestionKind::Match,
        _ => QuestionKind::FillBlank,
    };

    Some(match kind {
        QuestionKind::Translate => {
            let options = build_options(store, &target, rng);
            Question {
                kind,
                prompt: format!("Translate '{}' to French:", target.word),
                options,
                decoy_index: None,
                correct_answer: target.translation,
            }
        }
        QuestionKind::Match => {
            let mut options = build_options(store, &target, rng);
            let decoy_index = rng.gen_range(0..=options.len());
            options.insert(decoy_index, target.word.clone());
            Question {
                kind,
                prompt: "Match the word with its translation.".to_string(),
                options,
                decoy_index: Some(decoy_index),
                correct_answer: target.translation,
            }
        }
        QuestionKind::FillBlank => Question {
            kind,
            prompt: format!("Translate '{}' (fill in the blank).", target.word),
            options: Vec::new(),
            decoy_index: None,
            correct_answer: target.translation,
        },
    })
}

/// Shuffled option set for the choice-based kinds: the correct translation
/// plus up to `DISTRACTOR_COUNT` distinct wrong ones. The candidate pool is
/// shuffled once and truncated, so the draw is bounded. Translations equal to
/// the correct answer never appear as distractors.
fn build_options<R: Rng>(store: &VocabularyStore, target: &VocabEntry, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    for entry in store.entries() {
        if entry.word == target.word || entry.translation == target.translation {
            continue;
        }
        if !pool.contains(&entry.translation) {
            pool.push(entry.translation.clone());
        }
    }

    pool.shuffle(rng);
    pool.truncate(DISTRACTOR_COUNT);
    pool.push(target.translation.clone());
    pool.shuffle(rng);
    pool
}

/// Decides correctness of a submitted answer. Choice-based kinds compare
/// exactly; fill-in-the-blank trims and lowercases both sides.
pub fn check_answer(question: &Question, submitted: &str) -> Evaluation {
    match question.kind {
        QuestionKind::FillBlank => {
            let correct = submitted.trim().to_lowercase()
                == question.correct_answer.trim().to_lowercase();
            Evaluation {
                correct,
                message: if correct {
                    "Correct!".to_string()
                } else {
                    format!(
                        "Incorrect. The correct translation is \"{}\".",
                        question.correct_answer
                    )
                },
            }
        }
        QuestionKind::Translate | QuestionKind::Match => {
            let correct = submitted == question.correct_answer;
            Evaluation {
                correct,
                message: if correct {
                    "Correct!".to_string()
                } else {
                    format!(
                        "Incorrect. The correct answer is \"{}\".",
                        question.correct_answer
                    )
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn store_with(words: &[(&str, &str)]) -> (tempfile::TempDir, VocabularyStore) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = VocabularyStore::load(dir.path().join("vocabulary.json"));
        for (word, translation) in words {
            store.add_word(word, translation).unwrap();
        }
        (dir, store)
    }

    const FIVE_WORDS: &[(&str, &str)] = &[
        ("journey", "voyage"),
        ("improvement", "amélioration"),
        ("adventure", "aventure"),
        ("technology", "technologie"),
        ("freedom", "liberté"),
    ];

    #[test]
    fn test_empty_store_yields_no_question() {
        let (_dir, store) = store_with(&[]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_question(&store, &mut rng).is_none());
    }

    #[test]
    fn test_all_three_kinds_are_generated() {
        let (_dir, store) = store_with(FIVE_WORDS);
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen_translate = false;
        let mut seen_match = false;
        let mut seen_fill = false;
        for _ in 0..100 {
            match generate_question(&store, &mut rng).unwrap().kind {
                QuestionKind::Translate => seen_translate = true,
                QuestionKind::Match => seen_match = true,
                QuestionKind::FillBlank => seen_fill = true,
            }
        }
        assert!(seen_translate && seen_match && seen_fill);
    }

    #[test]
    fn test_correct_answer_is_always_among_options() {
        let (_dir, store) = store_with(FIVE_WORDS);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let question = generate_question(&store, &mut rng).unwrap();
            if question.kind != QuestionKind::FillBlank {
                assert!(question.options.contains(&question.correct_answer));
            }
        }
    }

    #[test]
    fn test_distractors_are_distinct_and_never_equal_the_answer() {
        let (_dir, store) = store_with(FIVE_WORDS);
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..100 {
            let question = generate_question(&store, &mut rng).unwrap();
            if question.kind == QuestionKind::FillBlank {
                continue;
            }
            let correct_count = question
                .options
                .iter()
                .filter(|o| **o == question.correct_answer)
                .count();
            assert_eq!(correct_count, 1);

            let mut sorted = question.options.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), question.options.len());
        }
    }

    #[test]
    fn test_translate_question_has_four_options() {
        let (_dir, store) = store_with(FIVE_WORDS);
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..50 {
            let question = generate_question(&store, &mut rng).unwrap();
            if question.kind == QuestionKind::Translate {
                assert_eq!(question.options.len(), 1 + DISTRACTOR_COUNT);
                assert!(question.decoy_index.is_none());
                return;
            }
        }
        panic!("no Translate question in 50 draws");
    }

    #[test]
    fn test_match_question_carries_the_word_as_decoy() {
        let (_dir, store) = store_with(FIVE_WORDS);
        let mut rng = StdRng::seed_from_u64(29);

        for _ in 0..50 {
            let question = generate_question(&store, &mut rng).unwrap();
            if question.kind == QuestionKind::Match {
                // word + correct + 3 distractors
                assert_eq!(question.options.len(), 2 + DISTRACTOR_COUNT);
                let decoy_index = question.decoy_index.unwrap();
                let decoy = &question.options[decoy_index];
                assert!(FIVE_WORDS.iter().any(|(word, _)| word == decoy));
                assert_ne!(*decoy, question.correct_answer);
                return;
            }
        }
        panic!("no Match question in 50 draws");
    }

    #[test]
    fn test_option_count_shrinks_on_small_stores() {
        let (_dir, store) = store_with(&[("journey", "voyage"), ("freedom", "liberté")]);
        let mut rng = StdRng::seed_from_u64(31);

        for _ in 0..100 {
            let question = generate_question(&store, &mut rng).unwrap();
            match question.kind {
                // correct + at most 1 distractor
                QuestionKind::Translate => assert_eq!(question.options.len(), 2),
                QuestionKind::Match => assert_eq!(question.options.len(), 3),
                QuestionKind::FillBlank => assert!(question.options.is_empty()),
            }
        }
    }

    #[test]
    fn test_single_entry_store_still_produces_questions() {
        let (_dir, store) = store_with(&[("journey", "voyage")]);
        let mut rng = StdRng::seed_from_u64(37);

        for _ in 0..30 {
            let question = generate_question(&store, &mut rng).unwrap();
            assert_eq!(question.correct_answer, "voyage");
            if question.kind == QuestionKind::Translate {
                assert_eq!(question.options, vec!["voyage".to_string()]);
            }
        }
    }

    #[test]
    fn test_duplicate_translations_are_excluded_from_distractors() {
        // Two words share the translation "voyage"; it must never show up
        // twice in one option set.
        let (_dir, store) = store_with(&[
            ("journey", "voyage"),
            ("trip", "voyage"),
            ("freedom", "liberté"),
            ("adventure", "aventure"),
        ]);
        let mut rng = StdRng::seed_from_u64(41);

        for _ in 0..100 {
            let question = generate_question(&store, &mut rng).unwrap();
            if question.kind == QuestionKind::FillBlank {
                continue;
            }
            let voyage_count = question.options.iter().filter(|o| *o == "voyage").count();
            assert!(voyage_count <= 1);
        }
    }

    #[test]
    fn test_fill_blank_has_no_options() {
        let (_dir, store) = store_with(FIVE_WORDS);
        let mut rng = StdRng::seed_from_u64(43);

        for _ in 0..50 {
            let question = generate_question(&store, &mut rng).unwrap();
            if question.kind == QuestionKind::FillBlank {
                assert!(question.options.is_empty());
                assert!(question.decoy_index.is_none());
                assert!(question.prompt.contains("fill in the blank"));
                return;
            }
        }
        panic!("no FillBlank question in 50 draws");
    }

    fn question(kind: QuestionKind, correct: &str) -> Question {
        Question {
            kind,
            prompt: String::new(),
            options: Vec::new(),
            decoy_index: None,
            correct_answer: correct.to_string(),
        }
    }

    #[test]
    fn test_check_answer_exact_match_for_choice_kinds() {
        let q = question(QuestionKind::Translate, "voyage");
        assert!(check_answer(&q, "voyage").correct);
        assert_eq!(check_answer(&q, "voyage").message, "Correct!");

        let wrong = check_answer(&q, "liberté");
        assert!(!wrong.correct);
        assert_eq!(
            wrong.message,
            "Incorrect. The correct answer is \"voyage\"."
        );
    }

    #[test]
    fn test_choice_kinds_are_case_sensitive() {
        let q = question(QuestionKind::Match, "voyage");
        assert!(!check_answer(&q, "Voyage").correct);
        assert!(!check_answer(&q, "VOYAGE").correct);
    }

    #[test]
    fn test_fill_blank_is_case_insensitive() {
        let q = question(QuestionKind::FillBlank, "voyage");
        assert!(check_answer(&q, "VOYAGE").correct);
        assert!(check_answer(&q, "Voyage").correct);
        assert!(check_answer(&q, "voyage").correct);
    }

    #[test]
    fn test_fill_blank_trims_whitespace() {
        let q = question(QuestionKind::FillBlank, "voyage");
        assert!(check_answer(&q, "  voyage  ").correct);
        assert!(check_answer(&q, "\tVoyage\n").correct);
    }

    #[test]
    fn test_fill_blank_incorrect_message_names_the_translation() {
        let q = question(QuestionKind::FillBlank, "voyage");
        let wrong = check_answer(&q, "liberte");
        assert!(!wrong.correct);
        assert_eq!(
            wrong.message,
            "Incorrect. The correct translation is \"voyage\"."
        );
    }
}
