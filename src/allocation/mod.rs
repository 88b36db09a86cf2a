mod drift;
mod importance;


use tracing::debug;

use crate::types::{AllocatorConfig, SceneInfo};

pub use importance::importance_scores;

/// Split `total_seconds` across the scenes using the default weights.
pub fn allocate<S: AsRef<str>>(descriptions: &[S], total_seconds: u32) -> Vec<SceneInfo> {
    allocate_with(descriptions, total_seconds, &AllocatorConfig::default())
}

/// Pure function to give every scene a whole-second duration.
/// Durations are proportional to each scene's importance score, floored at
/// `min_scene_seconds`, then corrected so they add up to `total_seconds`
/// whenever the floor allows it.
pub fn allocate_with<S: AsRef<str>>(
    descriptions: &[S],
    total_seconds: u32,
    config: &AllocatorConfig,
) -> Vec<SceneInfo> {
    if descriptions.is_empty() {
        return Vec::new();
    }

    let scores = importance_scores(descriptions, &config.weights);
    let total_importance: f64 = scores.iter().sum();
    let total = i64::from(total_seconds);
    let floor = i64::from(config.min_scene_seconds);

    let mut durations: Vec<i64> = scores
        .iter()
        .map(|score| {
            let share = if total_importance > 0.0 {
                score / total_importance
            } else {
                1.0 / scores.len() as f64
            };
            ((total as f64 * share).round() as i64).max(floor)
        })
        .collect();

    let initial_drift = total - durations.iter().sum::<i64>();
    drift::correct_drift(&mut durations, total, config);
    debug!(
        scenes = durations.len(),
        total_seconds,
        initial_drift,
        residual = total - durations.iter().sum::<i64>(),
        "allocated scene durations"
    );

    descriptions
        .iter()
        .zip(durations)
        .map(|(description, duration)| SceneInfo {
            description: description.as_ref().to_string(),
            duration_in_seconds: duration.clamp(0, i64::from(u32::MAX)) as u32,
        })
        .collect()
}
