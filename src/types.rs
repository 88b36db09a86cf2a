//! Core types for the storyboard planning pipeline

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// A single planned scene: what happens and how long it stays on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneInfo {
    pub description: String,
    pub duration_in_seconds: u32,
}

/// Segmentation thresholds, all measured in characters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// A buffered scene longer than this starts a new scene on the next sentence
    pub scene_char_limit: usize,
    /// Tighter limit used by the refinement walk
    pub refined_char_limit: usize,
    /// Refine when the first walk yields fewer scenes than this...
    pub refine_below_scenes: usize,
    /// ...and the story is longer than this
    pub refine_above_chars: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            scene_char_limit: 80,
            refined_char_limit: 60,
            refine_below_scenes: 3,
            refine_above_chars: 200,
        }
    }
}

impl SegmenterConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.scene_char_limit > 0,
            "scene_char_limit must be greater than zero"
        );
        ensure!(
            self.refined_char_limit > 0,
            "refined_char_limit must be greater than zero"
        );
        ensure!(
            self.refined_char_limit <= self.scene_char_limit,
            "refined_char_limit ({}) must not exceed scene_char_limit ({})",
            self.refined_char_limit,
            self.scene_char_limit
        );
        Ok(())
    }
}

/// Additive importance bonuses applied per scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportanceWeights {
    pub base: f64,
    /// Scenes with more words than this get `long_scene_bonus`
    pub long_scene_words: usize,
    pub long_scene_bonus: f64,
    pub action_bonus: f64,
    pub emotion_bonus: f64,
    pub dialogue_bonus: f64,
    /// Applied to the first and the last scene
    pub bookend_bonus: f64,
}

impl Default for ImportanceWeights {
    fn default() -> Self {
        Self {
            base: 1.0,
            long_scene_words: 20,
            long_scene_bonus: 0.5,
            action_bonus: 0.3,
            emotion_bonus: 0.3,
            dialogue_bonus: 0.4,
            bookend_bonus: 0.2,
        }
    }
}

impl ImportanceWeights {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.base.is_finite() && self.base > 0.0,
            "importance base must be positive, got {}",
            self.base
        );
        for (label, bonus) in [
            ("long_scene_bonus", self.long_scene_bonus),
            ("action_bonus", self.action_bonus),
            ("emotion_bonus", self.emotion_bonus),
            ("dialogue_bonus", self.dialogue_bonus),
            ("bookend_bonus", self.bookend_bonus),
        ] {
            ensure!(
                bonus.is_finite() && bonus >= 0.0,
                "{} must be non-negative, got {}",
                label,
                bonus
            );
        }
        Ok(())
    }
}

/// Duration allocation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// No scene is planned shorter than this
    pub min_scene_seconds: u32,
    /// Drifts up to this size go entirely to the longest scene
    pub small_drift_limit: u32,
    pub weights: ImportanceWeights,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            min_scene_seconds: 3,
            small_drift_limit: 2,
            weights: ImportanceWeights::default(),
        }
    }
}

impl AllocatorConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_scene_seconds > 0,
            "min_scene_seconds must be greater than zero"
        );
        self.weights.validate()
    }
}

/// Full planner configuration, loadable from JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub segmenter: SegmenterConfig,
    pub allocator: AllocatorConfig,
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        self.segmenter.validate()?;
        self.allocator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_info_serializes_camel_case() {
        let scene = SceneInfo {
            description: "Opening shot".to_string(),
            duration_in_seconds: 12,
        };
        let json = serde_json::to_string(&scene).unwrap();
        assert_eq!(
            json,
            r#"{"description":"Opening shot","durationInSeconds":12}"#
        );
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{"allocator": {"min_scene_seconds": 5}}"#).unwrap();
        assert_eq!(config.allocator.min_scene_seconds, 5);
        assert_eq!(config.allocator.small_drift_limit, 2);
        assert_eq!(config.segmenter, SegmenterConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_char_limits() {
        let config = SegmenterConfig {
            scene_char_limit: 40,
            refined_char_limit: 60,
            ..SegmenterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_bonus() {
        let mut config = PlannerConfig::default();
        config.allocator.weights.dialogue_bonus = -0.1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("dialogue_bonus"));
    }

    #[test]
    fn rejects_zero_floor() {
        let mut config = PlannerConfig::default();
        config.allocator.min_scene_seconds = 0;
        assert!(config.validate().is_err());
    }
}
