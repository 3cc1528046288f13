//! Text to normalized keyword set.
//!
//! Pure and restartable: the same input always yields the same set, and
//! tokenizing already-extracted tokens introduces nothing new. There is no
//! failure mode; empty or symbol-only input yields an empty set.

use std::collections::HashSet;

#[cfg(feature = "segmentation")]
use unicode_segmentation::UnicodeSegmentation;

/// Functional words plus generic media terms that carry no interest signal.
/// Multilingual on purpose: titles in the wild mix languages freely.
const STOP_WORDS: &[&str] = &[
    // English functional
    "a", "an", "the", "and", "or", "but", "of", "to", "in", "on", "at", "for", "with", "from",
    "by", "is", "are", "was", "were", "be", "been", "this", "that", "these", "those", "it",
    "its", "as", "my", "your", "our", "his", "her", "their", "you", "we", "they", "i", "me",
    "how", "what", "when", "where", "why", "who", "will", "can", "do", "does", "not", "no",
    "all", "more", "most", "very", "just", "so", "if", "then", "than", "too", "about", "into",
    "out", "up", "down", "over", "after", "before",
    // English media noise
    "official", "channel", "video", "videos", "watch", "watching", "subscribe", "live",
    "stream", "full", "new", "latest", "episode", "ep", "part", "feat", "ft", "vs", "hd",
    "shorts", "trailer", "teaser",
    // Japanese functional
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "する", "です",
    "ます", "から", "まで", "より", "など", "こと", "もの",
    // Japanese media noise
    "公式", "動画", "チャンネル", "映像", "生放送", "配信",
    // Spanish / German / French functional
    "el", "la", "los", "las", "de", "del", "un", "una", "que", "como", "der", "die", "das",
    "und", "ein", "eine", "le", "les", "du", "et", "en",
];

/// Tokenize arbitrary catalog text (title, channel name, description,
/// search term) into a deduplicated set of normalized keywords.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    let mut tokens: HashSet<String> = HashSet::new();

    for word in word_segments(&lower) {
        if keep_token(&word) {
            tokens.insert(word);
        }
    }
    for tag in hashtag_spans(&lower) {
        if keep_token(&tag) {
            tokens.insert(tag);
        }
    }
    for span in bracket_spans(&lower) {
        if keep_token(&span) {
            tokens.insert(span);
        }
    }
    tokens
}

/// Locale-aware segmentation path.
#[cfg(feature = "segmentation")]
fn word_segments(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_string).collect()
}

/// Fallback path: split on anything that is not alphanumeric.
#[cfg(not(feature = "segmentation"))]
fn word_segments(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Noise rejection: empty tokens, pure digits, single non-alphanumeric
/// characters, and stop words are all dropped.
fn keep_token(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let mut chars = token.chars();
    let first = chars.next().unwrap_or(' ');
    if chars.next().is_none() && !first.is_alphanumeric() {
        return false;
    }
    if token.chars().all(char::is_numeric) {
        return false;
    }
    !STOP_WORDS.contains(&token)
}

/// Extract `#hashtag` runs; a run ends at whitespace or the next `#`.
fn hashtag_spans(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Option<String> = None;
    for c in text.chars() {
        match (&mut current, c) {
            (Some(tag), '#') => {
                if !tag.is_empty() {
                    out.push(std::mem::take(tag));
                }
            }
            (Some(tag), c) if c.is_whitespace() => {
                if !tag.is_empty() {
                    out.push(std::mem::take(tag));
                }
                current = None;
            }
            (Some(tag), c) => tag.push(c),
            (None, '#') => current = Some(String::new()),
            (None, _) => {}
        }
    }
    if let Some(tag) = current
        && !tag.is_empty()
    {
        out.push(tag);
    }
    out
}

const BRACKET_PAIRS: &[(char, char)] = &[('[', ']'), ('【', '】'), ('「', '」')];

/// Extract the inner text of square and corner bracket spans as single
/// high-signal tokens, trimmed of the bracket characters.
fn bracket_spans(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        let Some(&(_, close)) = BRACKET_PAIRS.iter().find(|(open, _)| *open == c) else {
            continue;
        };
        let mut span = String::new();
        for inner in chars.by_ref() {
            if inner == close {
                break;
            }
            span.push(inner);
        }
        let trimmed = span.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    out
}
