use once_cell::sync::Lazy;
use regex::Regex;

static TERMINATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("terminator regex should compile"));

/// Split a story on runs of sentence terminators, dropping empty pieces.
pub(super) fn split_sentences(story: &str) -> Vec<&str> {
    TERMINATORS
        .split(story)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}
