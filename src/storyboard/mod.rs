//! Story-to-scene composition and the per-story scene store.

mod state;

use tracing::{info, warn};

use crate::allocation::allocate_with;
use crate::segmentation::segment_with;
use crate::types::{PlannerConfig, SceneInfo};
use crate::{Result, StoryboardError};

pub use state::{Storyboard, StoryboardAction};

/// Smallest total duration a storyboard is planned for.
pub const MIN_TOTAL_MINUTES: f64 = 0.5;

/// Whole-second duration budget for a storyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBudget {
    seconds: u32,
}

impl DurationBudget {
    /// Converts minutes to whole seconds, truncating. Zero and negative
    /// budgets are clamped up to [`MIN_TOTAL_MINUTES`]; NaN and infinities
    /// are rejected.
    pub fn from_minutes(minutes: f64) -> Result<Self> {
        if !minutes.is_finite() {
            return Err(StoryboardError::new(format!(
                "total duration must be a finite number of minutes, got {minutes}"
            )));
        }
        let minutes = if minutes <= 0.0 {
            warn!(
                requested = minutes,
                clamped = MIN_TOTAL_MINUTES,
                "non-positive total duration; clamping"
            );
            MIN_TOTAL_MINUTES
        } else {
            minutes
        };
        let seconds = (minutes * 60.0).floor();
        if seconds > f64::from(u32::MAX) {
            return Err(StoryboardError::new(format!(
                "total duration of {minutes} minutes is too large"
            )));
        }
        Ok(Self {
            seconds: seconds as u32,
        })
    }

    pub fn seconds(self) -> u32 {
        self.seconds
    }
}

/// Runs segmentation and allocation with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct StoryboardPlanner {
    config: PlannerConfig,
}

impl StoryboardPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn plan(&self, story: &str, budget: DurationBudget) -> Vec<SceneInfo> {
        let descriptions = segment_with(story, &self.config.segmenter);
        let scenes = allocate_with(&descriptions, budget.seconds(), &self.config.allocator);
        info!(
            scenes = scenes.len(),
            total_seconds = budget.seconds(),
            "planned storyboard"
        );
        scenes
    }

    pub fn plan_minutes(&self, story: &str, total_minutes: f64) -> Result<Vec<SceneInfo>> {
        let budget = DurationBudget::from_minutes(total_minutes)?;
        Ok(self.plan(story, budget))
    }
}

/// Split `story` into scenes and share `total_minutes` between them.
pub fn generate_scenes_from_story(story: &str, total_minutes: f64) -> Result<Vec<SceneInfo>> {
    StoryboardPlanner::default().plan_minutes(story, total_minutes)
}
