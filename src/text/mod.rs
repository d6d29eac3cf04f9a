//! Tokenization and report formatting for the Makai word counter.
//!
//! The counting trie itself consumes plain word strings and produces
//! `(word, count)` pairs; this module is the glue on either side of it.
//! Input is split on whitespace and, by default, trailing punctuation
//! (including quotes) is stripped from each token before insertion. Leading
//! punctuation is deliberately kept. The report writer emits one
//! `<word> <count>` line per pair, in the order the trie produced them.

use std::io::{self, BufRead, Write};

use crate::config::counter::CounterConfig;
use crate::data_structures::HeluTrie;

/// Strips trailing ASCII punctuation (quotes included) from a token.
///
/// A token consisting entirely of punctuation trims to the empty string.
pub fn trim_word(token: &str) -> &str {
    token.trim_end_matches(|c: char| c.is_ascii_punctuation())
}

/// Reads whitespace-separated tokens from `reader` and inserts each
/// resulting word into `trie`.
///
/// Tokens that trim down to nothing are skipped rather than counted as
/// empty words.
///
/// # Returns
///
/// The total number of words inserted, or the underlying read error.
pub fn count_words<R: BufRead>(
    reader: R,
    config: &CounterConfig,
    trie: &mut HeluTrie,
) -> io::Result<u64> {
    let mut total = 0u64;
    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let word = if config.trim_punctuation {
                trim_word(token)
            } else {
                token
            };
            if word.is_empty() {
                continue;
            }
            trie.insert(word);
            total += 1;
        }
    }
    Ok(total)
}

/// Writes `<word> <count>` lines for every entry whose count is at least
/// `min_count`, preserving the order of `entries`.
pub fn write_report<W: Write>(
    mut writer: W,
    entries: &[(String, u64)],
    min_count: u64,
) -> io::Result<()> {
    for (word, count) in entries {
        if *count < min_count {
            continue;
        }
        writeln!(writer, "{word} {count}")?;
    }
    writer.flush()
}
