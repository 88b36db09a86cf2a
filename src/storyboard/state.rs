use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::types::SceneInfo;

use super::{DurationBudget, StoryboardPlanner};

/// State transitions understood by [`Storyboard::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryboardAction {
    /// Append a scene to the end of a story's storyboard
    AddScene { story_id: String, scene: SceneInfo },
    /// Drop every scene stored for a story
    ClearStory { story_id: String },
}

/// Scenes keyed by the story they belong to, kept in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Storyboard {
    stories: BTreeMap<String, Vec<SceneInfo>>,
}

impl Storyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: StoryboardAction) {
        match action {
            StoryboardAction::AddScene { story_id, scene } => {
                self.stories.entry(story_id).or_default().push(scene);
            }
            StoryboardAction::ClearStory { story_id } => {
                self.stories.remove(&story_id);
            }
        }
    }

    /// Replace a story's scenes with a freshly planned set.
    pub fn plan_story(
        &mut self,
        planner: &StoryboardPlanner,
        story_id: &str,
        story: &str,
        budget: DurationBudget,
    ) -> &[SceneInfo] {
        self.apply(StoryboardAction::ClearStory {
            story_id: story_id.to_string(),
        });
        for scene in planner.plan(story, budget) {
            self.apply(StoryboardAction::AddScene {
                story_id: story_id.to_string(),
                scene,
            });
        }
        debug!(story_id, scenes = self.scenes(story_id).len(), "stored storyboard");
        self.scenes(story_id)
    }

    pub fn scenes(&self, story_id: &str) -> &[SceneInfo] {
        self.stories.get(story_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_seconds(&self, story_id: &str) -> u32 {
        self.scenes(story_id)
            .iter()
            .map(|scene| scene.duration_in_seconds)
            .sum()
    }

    pub fn story_ids(&self) -> impl Iterator<Item = &str> {
        self.stories.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(description: &str, seconds: u32) -> SceneInfo {
        SceneInfo {
            description: description.to_string(),
            duration_in_seconds: seconds,
        }
    }

    #[test]
    fn add_scene_appends_per_story() {
        let mut board = Storyboard::new();
        board.apply(StoryboardAction::AddScene {
            story_id: "pilot".to_string(),
            scene: scene("Cold open", 10),
        });
        board.apply(StoryboardAction::AddScene {
            story_id: "pilot".to_string(),
            scene: scene("Title card", 5),
        });
        board.apply(StoryboardAction::AddScene {
            story_id: "finale".to_string(),
            scene: scene("Goodbye", 20),
        });

        let pilot: Vec<&str> = board
            .scenes("pilot")
            .iter()
            .map(|scene| scene.description.as_str())
            .collect();
        assert_eq!(pilot, vec!["Cold open", "Title card"]);
        assert_eq!(board.total_seconds("pilot"), 15);
        assert_eq!(board.story_ids().collect::<Vec<_>>(), vec!["finale", "pilot"]);
    }

    #[test]
    fn clear_story_only_touches_that_story() {
        let mut board = Storyboard::new();
        for story_id in ["a", "b"] {
            board.apply(StoryboardAction::AddScene {
                story_id: story_id.to_string(),
                scene: scene("Shot", 4),
            });
        }
        board.apply(StoryboardAction::ClearStory {
            story_id: "a".to_string(),
        });
        assert!(board.scenes("a").is_empty());
        assert_eq!(board.scenes("b").len(), 1);
        assert_eq!(board.total_seconds("missing"), 0);
    }

    #[test]
    fn plan_story_replaces_previous_plan() {
        let planner = StoryboardPlanner::default();
        let mut board = Storyboard::new();
        let budget = DurationBudget::from_minutes(1.0).unwrap();
        board.plan_story(&planner, "s1", "One shot only.", budget);
        let scenes = board.plan_story(
            &planner,
            "s1",
            "The hero wakes up. Suddenly, a storm arrives. The hero finds shelter.",
            budget,
        );
        assert_eq!(scenes.len(), 3);
        assert_eq!(board.total_seconds("s1"), 60);
    }
}
