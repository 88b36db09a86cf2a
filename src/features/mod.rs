//! Text-feature detectors shared by the segmenter and the allocator.

use once_cell::sync::Lazy;
use regex::Regex;

/// A named scene-break predicate.
#[derive(Debug)]
pub struct BreakTrigger {
    pub label: &'static str,
    pattern: Regex,
}

impl BreakTrigger {
    /// Matches `words` anywhere, so inflections like "starts" still fire.
    fn new(label: &'static str, words: &[&str]) -> Self {
        Self {
            label,
            pattern: cue_pattern(words),
        }
    }

    /// Matches `words` only as whole words.
    fn bounded(label: &'static str, words: &[&str]) -> Self {
        Self {
            label,
            pattern: word_pattern(words),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Scene-break triggers, evaluated in order. A sentence matching any of them
/// opens a new scene.
pub static BREAK_TRIGGERS: Lazy<Vec<BreakTrigger>> = Lazy::new(|| {
    vec![
        BreakTrigger::bounded(
            "transition",
            &[
                "then",
                "next",
                "suddenly",
                "later",
                "after",
                "before",
                "meanwhile",
                "eventually",
                "following",
                "subsequently",
                "afterward",
                "earlier",
                "soon",
            ],
        ),
        BreakTrigger::new(
            "new_setting",
            &[
                "inside",
                "outside",
                "interior",
                "exterior",
                "at the",
                "in the",
                "at a",
                "in a",
                "arrives at",
                "returns to",
                "enters",
                "location",
            ],
        ),
        BreakTrigger::new(
            "new_action",
            &[
                "begin",
                "start",
                "stops",
                "arrives",
                "leaves",
                "enters",
                "exits",
                "appears",
                "disappears",
                "meets",
                "finds",
                "discovers",
                "realizes",
                "decides",
                "continues",
                "ends",
            ],
        ),
        BreakTrigger::new(
            "emotional_shift",
            &[
                "happy",
                "sad",
                "angry",
                "surprised",
                "shocked",
                "afraid",
                "scared",
                "confused",
                "relieved",
                "excited",
                "nervous",
                "worried",
                "calm",
                "peaceful",
                "frustrated",
            ],
        ),
        BreakTrigger::new(
            "time_passing",
            &[
                "day",
                "night",
                "morning",
                "evening",
                "afternoon",
                "hour",
                "minute",
                "second",
                "moment",
                "instant",
                "days",
                "weeks",
                "months",
                "years",
            ],
        ),
    ]
});

static ACTION_CUE: Lazy<Regex> = Lazy::new(|| {
    cue_pattern(&[
        "run", "jump", "fight", "explode", "crash", "fall", "rise", "dance", "move", "attack",
        "defend", "escape", "chase",
    ])
});

static EMOTION_CUE: Lazy<Regex> = Lazy::new(|| {
    cue_pattern(&[
        "love",
        "hate",
        "fear",
        "joy",
        "sadness",
        "anger",
        "surprise",
        "disgust",
        "trust",
        "anticipation",
    ])
});

static DIALOGUE_CUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"".*"|'.*'"#).expect("dialogue regex should compile"));

/// Case-insensitive, word-bounded alternation over `words`.
fn word_pattern(words: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(words)))
        .expect("word-bounded cue regex should compile")
}

/// Case-insensitive alternation over `words`, matching inside longer words.
fn cue_pattern(words: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)(?:{})", alternation(words))).expect("cue regex should compile")
}

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|")
}

/// Labels of every break trigger the sentence matches.
pub fn matching_triggers(sentence: &str) -> Vec<&'static str> {
    BREAK_TRIGGERS
        .iter()
        .filter(|trigger| trigger.matches(sentence))
        .map(|trigger| trigger.label)
        .collect()
}

pub fn starts_new_scene(sentence: &str) -> bool {
    BREAK_TRIGGERS.iter().any(|trigger| trigger.matches(sentence))
}

pub fn has_action_cue(text: &str) -> bool {
    ACTION_CUE.is_match(text)
}

pub fn has_emotion_cue(text: &str) -> bool {
    EMOTION_CUE.is_match(text)
}

/// Quoted speech on a single line, in double or single quotes.
pub fn has_dialogue(text: &str) -> bool {
    DIALOGUE_CUE.is_match(text)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
