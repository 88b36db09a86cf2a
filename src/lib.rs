//! Story-to-storyboard scene planning.
//!
//! Splits a free-text story description into scenes and hands each scene a
//! whole-second slice of a total duration budget.

pub mod allocation;
pub mod config;
pub mod features;
pub mod segmentation;
pub mod storyboard;
pub mod types;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub use allocation::{allocate, allocate_with};
pub use segmentation::{segment, segment_with};
pub use storyboard::{
    generate_scenes_from_story, DurationBudget, Storyboard, StoryboardAction, StoryboardPlanner,
};
pub use types::{AllocatorConfig, ImportanceWeights, PlannerConfig, SceneInfo, SegmenterConfig};

/// Convenient alias for results returned by the planner.
pub type Result<T> = std::result::Result<T, StoryboardError>;

/// Lightweight error type for the storyboard planner.
#[derive(Debug, Clone)]
pub struct StoryboardError {
    message: Arc<str>,
}

impl StoryboardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Arc::from(message.into()),
        }
    }
}

impl Display for StoryboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StoryboardError {}
