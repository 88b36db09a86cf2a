use crate::features;

/// Joins sentences that continue the same scene.
const SENTENCE_JOINER: &str = ". ";

pub(super) struct SceneAccumulator {
    scenes: Vec<String>,
    current: String,
    char_limit: usize,
}

impl SceneAccumulator {
    pub(super) fn new(char_limit: usize) -> Self {
        Self {
            scenes: Vec::new(),
            current: String::new(),
            char_limit,
        }
    }

    pub(super) fn handle_sentence(&mut self, index: usize, sentence: &str) {
        if self.opens_scene(index, sentence) {
            self.finish_scene();
            self.current.push_str(sentence);
        } else {
            self.current.push_str(SENTENCE_JOINER);
            self.current.push_str(sentence);
        }
    }

    pub(super) fn finish_scene(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.scenes.push(std::mem::take(&mut self.current));
    }

    pub(super) fn into_scenes(self) -> Vec<String> {
        self.scenes
    }

    fn opens_scene(&self, index: usize, sentence: &str) -> bool {
        // Length is measured before the sentence is appended
        index == 0
            || self.current.chars().count() > self.char_limit
            || features::starts_new_scene(sentence)
    }
}

/// Walk `sentences` in order and group them into scenes.
pub(super) fn walk(sentences: &[&str], char_limit: usize) -> Vec<String> {
    let mut accumulator = SceneAccumulator::new(char_limit);
    for (index, sentence) in sentences.iter().enumerate() {
        accumulator.handle_sentence(index, sentence);
    }
    accumulator.finish_scene();
    accumulator.into_scenes()
}
