use super::region::{BoundingBox, Region};

/// Aggregate over every pixel that fails the foreground predicate.
///
/// This is one logical bucket, not a spatial component: background pixels
/// need not be connected. An empty aggregate (fully foreground frame) reports
/// a `(0,0,0,0)` bounding box with zero width/height and a `(0,0)` centroid
/// instead of its inverted sentinel extrema.
pub(crate) struct BackgroundAggregator {
    count: u64,
    sum_x: f64,
    sum_y: f64,
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

impl BackgroundAggregator {
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            sum_x: 0.0,
            sum_y: 0.0,
            min_x: usize::MAX,
            max_x: 0,
            min_y: usize::MAX,
            max_y: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, x: usize, y: usize) {
        self.count += 1;
        self.sum_x += x as f64;
        self.sum_y += y as f64;
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    pub(crate) fn finish(&self) -> Region {
        if self.count == 0 {
            return Region {
                pixel_count: 0,
                bbox: BoundingBox {
                    min_x: 0,
                    min_y: 0,
                    max_x: 0,
                    max_y: 0,
                },
                centroid_x: 0.0,
                centroid_y: 0.0,
            };
        }
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
