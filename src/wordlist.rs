//! Loading word lists into dictionaries and persisting word frequencies.
//!
//! Two text formats are supported:
//!
//! - a plain word list: any whitespace-delimited sequence of words, each
//!   occurrence inserted once;
//! - a frequency file: one `"<word> <frequency>"` pair per line, as written
//!   by [`save_frequencies`].

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::dictionary::WordDictionary;
use crate::error::{Result, WordTrieError};

/// Summary of a load operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Occurrences inserted successfully.
    pub inserted: u64,
    /// Words that were new to the dictionary.
    pub added: u64,
    /// Tokens rejected as invalid words.
    pub rejected: u64,
}

impl LoadReport {
    fn record(&mut self, added: bool) {
        self.inserted += 1;
        if added {
            self.added += 1;
        }
    }
}

/// Insert every whitespace-delimited token of `reader` into `dict`.
///
/// Invalid tokens, including ones that are not valid UTF-8, are counted and
/// skipped. I/O failures and allocation failures abort the load.
pub fn load_words<D, R>(dict: &mut D, mut reader: R) -> Result<LoadReport>
where
    D: WordDictionary + ?Sized,
    R: BufRead,
{
    let mut report = LoadReport::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let tokens = line
            .split(|byte| byte.is_ascii_whitespace())
            .filter(|token| !token.is_empty());
        for raw in tokens {
            let Ok(token) = std::str::from_utf8(raw) else {
                debug!("Skipping {:?}: not valid UTF-8", String::from_utf8_lossy(raw));
                report.rejected += 1;
                continue;
            };
            match dict.insert(token) {
                Ok(added) => report.record(added),
                Err(e) if e.is_word_rejection() => {
                    debug!("Skipping {token:?}: {e}");
                    report.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    info!(
        "Loaded {} words ({} distinct new, {} rejected)",
        report.inserted, report.added, report.rejected
    );
    Ok(report)
}

/// [`load_words`] over a file.
pub fn load_word_file<D, P>(dict: &mut D, path: P) -> Result<LoadReport>
where
    D: WordDictionary + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("Reading word list {}", path.display());
    let file = File::open(path)?;
    load_words(dict, BufReader::new(file))
}

/// Write one `"<word> <frequency>"` line per stored word.
pub fn save_frequencies<D, W>(dict: &D, mut writer: W) -> Result<usize>
where
    D: WordDictionary + ?Sized,
    W: Write,
{
    let entries = dict.entries();
    for (word, frequency) in &entries {
        writeln!(writer, "{word} {frequency}")?;
    }
    writer.flush()?;
    Ok(entries.len())
}

/// [`save_frequencies`] into a newly created file.
pub fn save_frequency_file<D, P>(dict: &D, path: P) -> Result<usize>
where
    D: WordDictionary + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    let written = save_frequencies(dict, BufWriter::new(file))?;
    info!("Saved {written} words to {}", path.display());
    Ok(written)
}

/// Re-insert each word of a frequency file as many times as its frequency.
///
/// Each occurrence is a separate insert, so the cost grows with the
/// frequencies themselves: a single line with a frequency near `u32::MAX`
/// means billions of inserts. Only load frequency files from trusted sources.
pub fn load_frequencies<D, R>(dict: &mut D, reader: R) -> Result<LoadReport>
where
    D: WordDictionary + ?Sized,
    R: BufRead,
{
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        let (word, frequency) = match fields.as_slice() {
            [] => continue,
            [word, frequency] => (*word, *frequency),
            _ => {
                return Err(WordTrieError::parse(
                    line_number,
                    format!("expected \"<word> <frequency>\", found {} fields", fields.len()),
                ));
            }
        };

        let frequency: u32 = frequency
            .parse()
            .ok()
            .filter(|frequency| *frequency > 0)
            .ok_or_else(|| {
                WordTrieError::parse(line_number, format!("invalid frequency {frequency:?}"))
            })?;

        for _ in 0..frequency {
            let added = dict.insert(word).map_err(|e| {
                if e.is_word_rejection() {
                    WordTrieError::parse(line_number, e.to_string())
                } else {
                    e
                }
            })?;
            report.record(added);
        }
    }

    info!(
        "Loaded {} occurrences of {} distinct words",
        report.inserted, report.added
    );
    Ok(report)
}

/// [`load_frequencies`] over a file.
pub fn load_frequency_file<D, P>(dict: &mut D, path: P) -> Result<LoadReport>
where
    D: WordDictionary + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("Reading frequency file {}", path.display());
    let file = File::open(path)?;
    load_frequencies(dict, BufReader::new(file))
}
