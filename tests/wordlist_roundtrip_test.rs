use std::collections::BTreeSet;
use std::fs;

use tempfile::Builder;

use wordtrie::dictionary::{HashDictionary, Trie, WordDictionary};
use wordtrie::wordlist::{load_frequency_file, load_word_file, save_frequency_file};

const CORPUS: &str = "\
It was the best of times it was the worst of times
it was the age of wisdom it was the age of foolishness
don't panic 1984 isn't it
";

fn word_set(dict: &dyn WordDictionary) -> BTreeSet<String> {
    dict.entries().into_iter().map(|(word, _)| word).collect()
}

#[test]
fn test_trie_round_trip() {
    let dir = Builder::new().prefix("test_roundtrip").tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    let saved = dir.path().join("saved.txt");
    fs::write(&corpus, CORPUS).unwrap();

    let mut original = Trie::new();
    let report = load_word_file(&mut original, &corpus).unwrap();
    assert_eq!(report.rejected, 1);
    assert_eq!(report.inserted, original.word_count());

    let written = save_frequency_file(&original, &saved).unwrap();
    assert_eq!(written, original.distinct_words());

    let mut reloaded = Trie::new();
    load_frequency_file(&mut reloaded, &saved).unwrap();

    assert_eq!(reloaded.word_count(), original.word_count());
    assert_eq!(word_set(&reloaded), word_set(&original));
    assert_eq!(reloaded.frequency("was"), 4);
    assert_eq!(reloaded.node_count(), original.node_count());
}

#[test]
fn test_round_trip_across_backends() {
    let dir = Builder::new().prefix("test_roundtrip").tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    let saved = dir.path().join("saved.txt");
    fs::write(&corpus, CORPUS).unwrap();

    let mut table = HashDictionary::new();
    load_word_file(&mut table, &corpus).unwrap();
    save_frequency_file(&table, &saved).unwrap();

    let mut trie = Trie::new();
    load_frequency_file(&mut trie, &saved).unwrap();

    assert_eq!(trie.word_count(), table.word_count());
    assert_eq!(word_set(&trie), word_set(&table));
    for (word, frequency) in table.entries() {
        assert_eq!(trie.frequency(&word), frequency, "{word}");
    }
}

#[test]
fn test_saved_lines_have_word_and_frequency() {
    let dir = Builder::new().prefix("test_roundtrip").tempdir().unwrap();
    let saved = dir.path().join("saved.txt");

    let mut trie = Trie::new();
    for word in ["Zebra", "apple", "apple", "o'clock"] {
        trie.insert(word).unwrap();
    }
    save_frequency_file(&trie, &saved).unwrap();

    let text = fs::read_to_string(&saved).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["apple 2", "o'clock 1", "zebra 1"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = Builder::new().prefix("test_roundtrip").tempdir().unwrap();
    let mut trie = Trie::new();
    let result = load_word_file(&mut trie, dir.path().join("missing.txt"));
    assert!(matches!(result, Err(wordtrie::error::WordTrieError::Io(_))));
}
