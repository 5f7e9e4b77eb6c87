//! Name normalization for table names and content file names.
//!
//! Turns a raw catalogue name or a file path into a [`NameDetails`] that can
//! be compared cheaply:
//!
//! 1. Strip the directory prefix (`/` and `\` separators) and the file extension.
//! 2. Extract manufacturer and/or year from the last top-level parenthetical.
//!    Anything after that group (e.g. `by Author`) is discarded, except a lone
//!    sequel number (`Star Trek (Data East 1991) IX`).
//! 3. Clean the remaining title: lowercase, drop quotes and sentence punctuation,
//!    turn `.`, `_` and `-` into spaces, `&` into `and`, remove filler words and
//!    a leading (or inverted `, The`) article, and rewrite roman sequel numerals
//!    as digits.
//! 4. Derive the whitespace-free key from the cleaned title.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::fuzzy::config::MatchConfig;

/// `Williams 1993`, `1993`, `Premier1989`.
static RE_MANUFACTURER_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<manufacturer>\D*?)\s*(?P<year>\d{4})$").expect("valid manufacturer/year regex")
});

/// `Williams`, `Data East` - no digits at all.
static RE_MANUFACTURER_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\D+$").expect("valid manufacturer regex"));

/// Inverted article closing a title, e.g. `getaway, the - high speed` or
/// `addams family, the`. A mid-title `, the` is left alone.
static RE_INVERTED_ARTICLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",\s*the\s*(?P<tail>-|\(|$)").expect("valid article regex")
});

/// Sequel numerals `ii` to `xx`; index 0 is 2.
static ROMAN_SEQUELS: Lazy<Vec<String>> = Lazy::new(|| (2..=MAX_SEQUEL).map(roman).collect());

/// Highest roman sequel numeral rewritten as digits.
const MAX_SEQUEL: u32 = 20;

static DEFAULT_CONFIG: Lazy<MatchConfig> = Lazy::new(MatchConfig::default);

/// Longest suffix still treated as a file extension.
const MAX_EXTENSION_LEN: usize = 10;

/// Structured, comparable form of a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameDetails {
    /// Cleaned, lowercase title with single spaces.
    pub title: String,
    /// `title` with all whitespace removed.
    pub title_key: String,
    /// Lowercase manufacturer from the trailing parenthetical.
    pub manufacturer: Option<String>,
    /// Four digit year from the trailing parenthetical.
    pub year: Option<u32>,
}

impl NameDetails {
    /// True when nothing comparable was left after normalization.
    pub fn is_empty(&self) -> bool {
        self.title_key.is_empty()
    }

    /// Length of the cleaned title in characters.
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    /// Fill in manufacturer and year that the name itself did not carry.
    pub fn fill_missing(mut self, manufacturer: Option<&str>, year: Option<u32>) -> Self {
        if self.manufacturer.is_none() {
            self.manufacturer = manufacturer.and_then(normalize_manufacturer);
        }
        if self.year.is_none() {
            self.year = year;
        }
        self
    }
}

/// Parse using the default filler word list.
pub fn parse(raw: &str) -> NameDetails {
    parse_with(raw, &DEFAULT_CONFIG)
}

/// Parse a raw name or file path into [`NameDetails`].
///
/// Total: empty or garbage input yields an empty result rather than an error.
pub fn parse_with(raw: &str, config: &MatchConfig) -> NameDetails {
    let (name, _) = split_extension(file_name(raw.trim()));
    if name.trim().is_empty() {
        return NameDetails::default();
    }

    let (title_part, manufacturer, year) = match last_group(name) {
        Some((open, close)) => match parse_group(&name[open + 1..close]) {
            Some((manufacturer, year)) => {
                let mut title = name[..open].to_string();
                if let Some(sequel) = trailing_sequel(&name[close + 1..]) {
                    title.push(' ');
                    title.push_str(sequel);
                }
                (title, manufacturer, year)
            }
            None => (name.to_string(), None, None),
        },
        None => (name.to_string(), None, None),
    };

    let title = clean_title(&title_part, &config.filler_words);
    let title_key = title.chars().filter(|c| !c.is_whitespace()).collect();

    NameDetails {
        title,
        title_key,
        manufacturer,
        year,
    }
}

/// Final path component, accepting both `/` and `\` separators.
pub fn file_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Split `name.ext` into `(name, Some(ext))`.
///
/// Only short alphanumeric suffixes containing a letter count as extensions,
/// so `Dr. Who`, `Lights...Camera...Action!` and `v1.6` keep their dots.
pub fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    if let Some(dot) = file_name.rfind('.') {
        let (stem, ext) = (&file_name[..dot], &file_name[dot + 1..]);
        let is_extension = !stem.is_empty()
            && !stem.ends_with('.')
            && ext.len() <= MAX_EXTENSION_LEN
            && ext.chars().all(|c| c.is_ascii_alphanumeric())
            && ext.chars().any(|c| c.is_ascii_alphabetic());
        if is_extension {
            return (stem, Some(ext));
        }
    }
    (file_name, None)
}

/// Byte offsets of the last balanced top-level `( ... )` group.
fn last_group(text: &str) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut open = 0usize;
    let mut last = None;

    for (idx, c) in text.char_indices() {
        match c {
            '(' => {
                if depth == 0 {
                    open = idx;
                }
                depth += 1;
            }
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    last = Some((open, idx));
                }
            }
            _ => {}
        }
    }

    last
}

/// Interpret the inside of the trailing parenthetical.
///
/// Returns `None` when it is neither a manufacturer, a year, nor both, in which
/// case the group stays part of the title.
fn parse_group(inner: &str) -> Option<(Option<String>, Option<u32>)> {
    let inner = inner.trim();

    if let Some(caps) = RE_MANUFACTURER_YEAR.captures(inner) {
        let year = caps.name("year").and_then(|y| y.as_str().parse().ok());
        let manufacturer = caps
            .name("manufacturer")
            .and_then(|m| normalize_manufacturer(m.as_str()));
        return Some((manufacturer, year));
    }

    if RE_MANUFACTURER_ONLY.is_match(inner) {
        return normalize_manufacturer(inner).map(|m| (Some(m), None));
    }

    None
}

/// A single roman or one/two digit sequel token after the parenthetical.
fn trailing_sequel(rest: &str) -> Option<&str> {
    let token = rest.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    let arabic = token.len() <= 2 && token.chars().all(|c| c.is_ascii_digit());
    if arabic || roman_value(&token.to_lowercase()).is_some() {
        Some(token)
    } else {
        None
    }
}

fn normalize_manufacturer(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(" ").to_lowercase())
}

fn clean_title(text: &str, filler_words: &[String]) -> String {
    let lower = text.to_lowercase().replace("&apos;", "");
    let lower = RE_INVERTED_ARTICLE.replace_all(&lower, " ${tail}");

    let mut spaced = String::with_capacity(lower.len() + 8);
    for c in lower.chars() {
        match c {
            '.' | '_' | '-' => spaced.push(' '),
            '&' => spaced.push_str(" and "),
            '\'' | '`' | ',' | ';' | '!' | '?' | '(' | ')' => {}
            c => spaced.push(c),
        }
    }

    let mut words: Vec<&str> = spaced
        .split_whitespace()
        .filter(|word| !filler_words.iter().any(|f| f.eq_ignore_ascii_case(word)))
        .collect();

    if words.len() > 1 && words[0] == "the" {
        words.remove(0);
    }

    let last = words.len().saturating_sub(1);
    words
        .into_iter()
        .enumerate()
        .map(|(idx, word)| {
            sequel_number(word, idx > 0 && idx == last).unwrap_or_else(|| word.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Arabic form of a roman sequel numeral between `ii` and `xx`.
///
/// Single-letter numerals are only converted in trailing position, where they
/// can't be an initial (`X-Men`, `Mr. V`). `i` is never converted.
fn sequel_number(word: &str, trailing: bool) -> Option<String> {
    match word {
        "v" | "x" if !trailing => None,
        _ => roman_value(word).map(|n| n.to_string()),
    }
}

fn roman_value(word: &str) -> Option<u32> {
    ROMAN_SEQUELS
        .iter()
        .position(|numeral| numeral == word)
        .map(|idx| idx as u32 + 2)
}

fn roman(mut n: u32) -> String {
    const NUMERALS: [(u32, &str); 5] = [(10, "x"), (9, "ix"), (5, "v"), (4, "iv"), (1, "i")];
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}
