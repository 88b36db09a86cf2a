mod accumulator;
mod sentences;


use tracing::debug;

use crate::types::SegmenterConfig;

use accumulator::walk;
use sentences::split_sentences;

/// Split a story description into ordered scene descriptions using the
/// default thresholds.
pub fn segment(story: &str) -> Vec<String> {
    segment_with(story, &SegmenterConfig::default())
}

/// Pure function to split a story into scenes.
/// Sentences are grouped until a break trigger fires or the buffered scene
/// grows past the character limit. Long stories that collapse into too few
/// scenes are walked again with the tighter refined limit.
pub fn segment_with(story: &str, config: &SegmenterConfig) -> Vec<String> {
    let sentences = split_sentences(story);

    let scenes = with_fallback(walk(&sentences, config.scene_char_limit), story);
    if scenes.len() >= config.refine_below_scenes
        || story.chars().count() <= config.refine_above_chars
    {
        debug!(
            sentences = sentences.len(),
            scenes = scenes.len(),
            "segmented story"
        );
        return scenes;
    }

    let refined = with_fallback(walk(&sentences, config.refined_char_limit), story);
    debug!(
        sentences = sentences.len(),
        initial = scenes.len(),
        refined = refined.len(),
        "refined segmentation of long story"
    );
    refined
}

/// Stories without any sentence text become a single scene.
fn with_fallback(scenes: Vec<String>, story: &str) -> Vec<String> {
    if scenes.is_empty() {
        vec![story.to_string()]
    } else {
        scenes
    }
}
