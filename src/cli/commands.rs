//! Command implementations for the wordtrie CLI.

use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{Backend, DictionaryConfig};
use crate::dictionary::{Trie, WordDictionary};
use crate::error::Result;
use crate::wordlist::{self, LoadReport};

/// Execute a CLI command.
pub fn execute_command(args: WordTrieArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => DictionaryConfig::from_file(path)?,
        None => DictionaryConfig::default(),
    };
    debug!("Using configuration {config:?}");

    match &args.command {
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
        Command::Lookup(lookup_args) => lookup_words(lookup_args, &config, &args),
        Command::Complete(complete_args) => complete_prefix(complete_args, &args),
        Command::Fuzzy(fuzzy_args) => fuzzy_match(fuzzy_args, &config, &args),
        Command::Distance(distance_args) => node_distance(distance_args, &args),
        Command::Save(save_args) => save_dictionary(save_args, &config, &args),
    }
}

/// Fill `dict` from `path`, honouring `--frequencies`.
fn load_into<D>(dict: &mut D, path: &Path, cli_args: &WordTrieArgs) -> Result<LoadReport>
where
    D: WordDictionary + ?Sized,
{
    let start_time = Instant::now();
    let report = if cli_args.frequencies {
        wordlist::load_frequency_file(dict, path)?
    } else {
        wordlist::load_word_file(dict, path)?
    };
    info!(
        "Built dictionary from {} in {} ms",
        path.display(),
        start_time.elapsed().as_millis()
    );
    Ok(report)
}

fn load_dictionary(
    path: &Path,
    backend: Option<Backend>,
    config: &DictionaryConfig,
    cli_args: &WordTrieArgs,
) -> Result<(Box<dyn WordDictionary>, Backend, LoadReport)> {
    let backend = backend.unwrap_or(config.backend);
    let config = DictionaryConfig {
        backend,
        ..config.clone()
    };

    let mut dict = config.build_dictionary()?;
    let report = load_into(&mut *dict, path, cli_args)?;
    Ok((dict, backend, report))
}

fn load_trie(path: &Path, cli_args: &WordTrieArgs) -> Result<Trie> {
    let mut trie = Trie::new();
    load_into(&mut trie, path, cli_args)?;
    Ok(trie)
}

/// Show dictionary statistics.
fn show_stats(args: &StatsArgs, config: &DictionaryConfig, cli_args: &WordTrieArgs) -> Result<()> {
    let (dict, backend, loaded) = load_dictionary(&args.wordlist, args.backend, config, cli_args)?;

    let stats = DictionaryStats {
        backend,
        loaded,
        total_words: dict.word_count(),
        distinct_words: dict.distinct_words(),
        most_common_frequency: dict.most_common_frequency(),
        node_count: dict.as_trie().map(Trie::node_count),
    };

    output_result("Dictionary statistics", &stats, cli_args)
}

/// Look up each requested word.
fn lookup_words(args: &LookupArgs, config: &DictionaryConfig, cli_args: &WordTrieArgs) -> Result<()> {
    let (dict, _, _) = load_dictionary(&args.wordlist, args.backend, config, cli_args)?;

    let results = args
        .words
        .iter()
        .map(|word| WordLookup {
            word: word.clone(),
            found: dict.contains(word),
            frequency: dict.frequency(word),
        })
        .collect();

    output_result("Lookup results", &LookupResults { results }, cli_args)
}

/// Complete a prefix with its most frequent extension.
fn complete_prefix(args: &CompleteArgs, cli_args: &WordTrieArgs) -> Result<()> {
    let trie = load_trie(&args.wordlist, cli_args)?;

    let suffix = trie.best_completion(&args.prefix);
    let word = if suffix.is_empty() {
        None
    } else {
        Some(format!("{}{suffix}", args.prefix.to_ascii_lowercase()))
    };

    output_result(
        "Best completion",
        &CompletionResult {
            prefix: args.prefix.clone(),
            suffix,
            word,
        },
        cli_args,
    )
}

/// Find the closest stored word.
fn fuzzy_match(args: &FuzzyArgs, config: &DictionaryConfig, cli_args: &WordTrieArgs) -> Result<()> {
    let trie = load_trie(&args.wordlist, cli_args)?;
    let max_divergence = args.max_divergence.unwrap_or(config.max_divergence);

    output_result(
        "Fuzzy match",
        &FuzzyResult {
            target: args.target.clone(),
            max_divergence,
            best: trie.best_fuzzy_match(&args.target, max_divergence),
        },
        cli_args,
    )
}

/// Tree distance between two stored words.
fn node_distance(args: &DistanceArgs, cli_args: &WordTrieArgs) -> Result<()> {
    let trie = load_trie(&args.wordlist, cli_args)?;

    let first = trie.lookup(&args.first);
    let second = trie.lookup(&args.second);
    let missing = [(&args.first, first), (&args.second, second)]
        .into_iter()
        .filter(|(_, id)| id.is_none())
        .map(|(word, _)| word.clone())
        .collect();

    output_result(
        "Node distance",
        &DistanceResult {
            first: args.first.clone(),
            second: args.second.clone(),
            missing,
            distance: trie.distance(first, second),
        },
        cli_args,
    )
}

/// Write the dictionary as a frequency file.
fn save_dictionary(args: &SaveArgs, config: &DictionaryConfig, cli_args: &WordTrieArgs) -> Result<()> {
    let (dict, _, _) = load_dictionary(&args.wordlist, args.backend, config, cli_args)?;
    let words_written = wordlist::save_frequency_file(&*dict, &args.output)?;

    output_result(
        "Frequency file written",
        &SaveResult {
            output: args.output.to_string_lossy().to_string(),
            words_written,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_save_command_writes_frequency_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("freq.txt");
        fs::write(&input, "car cart car part\n").unwrap();

        let args = WordTrieArgs::parse_from([
            "wordtrie",
            "-q",
            "-f",
            "json",
            "save",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        execute_command(args).unwrap();

        let saved = fs::read_to_string(&output).unwrap();
        assert_eq!(saved, "car 2\ncart 1\npart 1\n");
    }

    #[test]
    fn test_missing_word_list_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");
        let args = WordTrieArgs::parse_from([
            "wordtrie",
            "-q",
            "stats",
            missing.to_str().unwrap(),
        ]);
        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_load_dictionary_honours_backend_override() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("freq.txt");
        fs::write(&input, "hello 3\nworld 1\n").unwrap();

        let cli_args = WordTrieArgs::parse_from([
            "wordtrie",
            "--frequencies",
            "stats",
            input.to_str().unwrap(),
        ]);
        let (dict, backend, report) =
            load_dictionary(&input, Some(Backend::Hash), &DictionaryConfig::default(), &cli_args)
                .unwrap();

        assert_eq!(backend, Backend::Hash);
        assert!(dict.as_trie().is_none());
        assert_eq!(report.inserted, 4);
        assert_eq!(dict.frequency("hello"), 3);
    }
}
