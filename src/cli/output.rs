//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordTrieArgs};
use crate::config::Backend;
use crate::dictionary::FuzzyMatch;
use crate::error::Result;
use crate::wordlist::LoadReport;

/// Result structure for dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub backend: Backend,
    pub loaded: LoadReport,
    pub total_words: u64,
    pub distinct_words: usize,
    pub most_common_frequency: u32,
    /// Only reported by the trie backend.
    pub node_count: Option<usize>,
}

/// Result of looking up one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordLookup {
    pub word: String,
    pub found: bool,
    pub frequency: u32,
}

/// Result structure for lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResults {
    pub results: Vec<WordLookup>,
}

/// Result structure for prefix completion.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResult {
    pub prefix: String,
    pub suffix: String,
    pub word: Option<String>,
}

/// Result structure for fuzzy matching.
#[derive(Debug, Serialize, Deserialize)]
pub struct FuzzyResult {
    pub target: String,
    pub max_divergence: usize,
    pub best: Option<FuzzyMatch>,
}

/// Result structure for node distance.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub first: String,
    pub second: String,
    /// Words that are not stored; the distance is 0 when any are listed.
    pub missing: Vec<String>,
    pub distance: usize,
}

/// Result structure for saving a frequency file.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResult {
    pub output: String,
    pub words_written: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordTrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordTrieArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Flatten a JSON value into `key: value` lines, one level of nesting deep.
fn human_lines(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Object(obj) => {
            let mut lines = Vec::new();
            for (key, val) in obj {
                match val {
                    serde_json::Value::Object(inner) => {
                        for (inner_key, inner_val) in inner {
                            lines.push(format!("{key}.{inner_key}: {}", format_value(inner_val)));
                        }
                    }
                    serde_json::Value::Array(items)
                        if !items.is_empty() && items.iter().all(|i| i.is_object()) =>
                    {
                        for item in items {
                            lines.push(format!("{key}: {}", format_record(item)));
                        }
                    }
                    _ => lines.push(format!("{key}: {}", format_value(val))),
                }
            }
            lines
        }
        _ => vec![format_value(value)],
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordTrieArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_record(value: &serde_json::Value) -> String {
    match value.as_object() {
        Some(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}={}", format_value(val)))
            .collect::<Vec<_>>()
            .join(" "),
        None => format_value(value),
    }
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => format_record(value),
        serde_json::Value::Null => "-".to_string(),
    }
}
