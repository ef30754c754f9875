//! Choice of the one frame that carries the payload.
//!
//! Picking the frame at random means there is no fixed frame an observer could look at.
//! For reproducible output a seeded selector, or any other [`FrameSelector`], can be used.

use fastrand::Rng;

/// Picks the index of the frame that will carry the payload.
pub trait FrameSelector {
    /// returns an index in `0..frame_count`, `frame_count` is at least 1
    fn select(&mut self, frame_count: usize) -> usize;
}

/// Uniformly random frame selection.
#[derive(Debug, Clone)]
pub struct RandomFrameSelector {
    rng: Rng,
}

impl RandomFrameSelector {
    /// unseeded, every call of a fresh selector may pick another frame
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// deterministic selection for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }
}

impl Default for RandomFrameSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSelector for RandomFrameSelector {
    fn select(&mut self, frame_count: usize) -> usize {
        self.rng.usize(0..frame_count)
    }
}

impl<F> FrameSelector for F
where
    F: FnMut(usize) -> usize,
{
    fn select(&mut self, frame_count: usize) -> usize {
        self(frame_count)
    }
}
