use std::{collections::HashSet, fs, path::Path};

use lazy_static::lazy_static;

use super::GameError;

lazy_static! {
    /// Prompts shipped with the binary, used when no prompts file is present.
    pub static ref BUILTIN_PROMPTS: Vec<String> = parse_prompts(include_str!("data/prompts.txt"));
}

/// Parse newline-delimited prompts. Blank lines are skipped, duplicates (ignoring case) are
/// dropped, and every prompt is normalised to title case. Order of first occurrence is kept.
pub fn parse_prompts(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut prompts = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if seen.insert(line.to_lowercase()) {
            prompts.push(title_case(line));
        }
    }
    prompts
}

/// Read prompts from the file at `path`.
pub fn load_prompts(path: &Path) -> Result<Vec<String>, GameError> {
    let text = fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_owned(),
        source,
    })?;
    Ok(parse_prompts(&text))
}

/// Uppercase every letter that starts a word, lowercase the rest.
/// Apostrophes don't start a new word, so "boy's" becomes "Boy's".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for ch in s.chars() {
        let starts_word = match prev {
            None => true,
            Some(p) => !p.is_alphanumeric() && p != '\'',
        };
        if starts_word {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        prev = Some(ch);
    }
    out
}
