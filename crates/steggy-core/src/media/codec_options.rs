use super::selector::RandomFrameSelector;

/// Codec configuration for hiding data in a carrier
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Seed for the frame selection. `None` picks the frame unpredictably,
    /// a fixed seed makes the chosen frame, and so the output, reproducible.
    pub frame_seed: Option<u64>,
}

impl CodecOptions {
    pub fn with_frame_seed(mut self, seed: Option<u64>) -> Self {
        self.frame_seed = seed;
        self
    }

    /// the frame selector these options describe
    pub fn frame_selector(&self) -> RandomFrameSelector {
        match self.frame_seed {
            Some(seed) => RandomFrameSelector::with_seed(seed),
            None => RandomFrameSelector::new(),
        }
    }
}
