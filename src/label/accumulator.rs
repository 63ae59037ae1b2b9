use super::region::{BoundingBox, Region};

/// Running statistics for the region currently being flood-filled.
///
/// Every fold is O(1); nothing is re-scanned at finalize time. The member
/// pixel list is collected only when the caller will repaint the region,
/// keeping large-component statistics runs allocation-free.
pub(crate) struct RegionAccumulator {
    pixels: Vec<usize>,
    collect_pixels: bool,
    count: u64,
    sum_x: f64,
    sum_y: f64,
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

impl RegionAccumulator {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            pixels: Vec::with_capacity(capacity),
            collect_pixels: false,
            count: 0,
            sum_x: 0.0,
            sum_y: 0.0,
            min_x: usize::MAX,
            max_x: 0,
            min_y: usize::MAX,
            max_y: 0,
        }
    }

    /// Prepare for a new fill, discarding any previous region's state.
    pub(crate) fn begin(&mut self, collect_pixels: bool) {
        self.pixels.clear();
        self.collect_pixels = collect_pixels;
        self.count = 0;
        self.sum_x = 0.0;
        self.sum_y = 0.0;
        self.min_x = usize::MAX;
        self.max_x = 0;
        self.min_y = usize::MAX;
        self.max_y = 0;
    }

    pub(crate) fn push(&mut self, idx: usize, x: usize, y: usize) {
        if self.collect_pixels {
            self.pixels.push(idx);
        }
        self.count += 1;
        self.sum_x += x as f64;
        self.sum_y += y as f64;
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Linear indices of the member pixels; empty unless collection was
    /// requested in `begin`.
    pub(crate) fn pixels(&self) -> &[usize] {
        &self.pixels
    }

    pub(crate) fn finish(&self) -> Region {
        debug_assert!(self.count > 0, "a fill always folds its seed");
        Region {
            pixel_count: self.count,
            bbox: BoundingBox {
                min_x: self.min_x,
                min_y: self.min_y,
                max_x: self.max_x,
                max_y: self.max_y,
            },
            centroid_x: self.sum_x / self.count as f64,
            centroid_y: self.sum_y / self.count as f64,
        }
    }
}
