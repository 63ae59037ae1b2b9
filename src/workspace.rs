//! Reusable scratch buffers for the labeling scan.
//!
//! One workspace belongs to one worker at a time; cleaners and collectors own
//! their workspace and reuse it across frames to avoid repeated allocations
//! in hot paths. The buffers carry no semantic state between calls: the scan
//! entry points clear them before use.
use crate::label::accumulator::RegionAccumulator;
use crate::label::VisitedMask;

/// Scratch storage for one scan: visited bitmap, flood-fill frontier, and the
/// in-progress region accumulator.
pub struct LabelWorkspace {
    pub(crate) visited: VisitedMask,
    pub(crate) frontier: Vec<usize>,
    pub(crate) region: RegionAccumulator,
}

impl LabelWorkspace {
    pub fn new() -> Self {
        Self {
            visited: VisitedMask::new(),
            frontier: Vec::with_capacity(64),
            region: RegionAccumulator::with_capacity(128),
        }
    }

    /// Clear all buffers for a plane of the given dimensions.
    pub(crate) fn reset(&mut self, width: usize, height: usize) {
        self.visited.reset(width, height);
        self.frontier.clear();
    }
}

impl Default for LabelWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
