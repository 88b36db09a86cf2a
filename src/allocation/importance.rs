use crate::features::{has_action_cue, has_dialogue, has_emotion_cue, word_count};
use crate::types::ImportanceWeights;

/// Heuristic screen-time weight for each scene, in scene order.
pub fn importance_scores<S: AsRef<str>>(
    descriptions: &[S],
    weights: &ImportanceWeights,
) -> Vec<f64> {
    let last = descriptions.len().saturating_sub(1);
    descriptions
        .iter()
        .enumerate()
        .map(|(idx, description)| {
            let text = description.as_ref();
            let mut score = weights.base;
            if word_count(text) > weights.long_scene_words {
                score += weights.long_scene_bonus;
            }
            if has_action_cue(text) {
                score += weights.action_bonus;
            }
            if has_emotion_cue(text) {
                score += weights.emotion_bonus;
            }
            if has_dialogue(text) {
                score += weights.dialogue_bonus;
            }
            if idx == 0 || idx == last {
                score += weights.bookend_bonus;
            }
            score
        })
        .collect()
}
