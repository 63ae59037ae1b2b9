use crate::params::Metric;
use serde::Serialize;

/// Inclusive bounding box of a labeled region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl BoundingBox {
    #[inline]
    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }
}

/// Summary record for one connected component, finalized when its flood fill
/// exhausts the frontier. Never persisted across frames.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Region {
    pub pixel_count: u64,
    pub bbox: BoundingBox,
    pub centroid_x: f64,
    pub centroid_y: f64,
}

impl Region {
    /// Integral metric value used by the filtering path. Centroids truncate
    /// toward zero; the statistics path reads the real-valued fields instead.
    pub fn metric(&self, metric: Metric) -> u64 {
        match metric {
            Metric::PixelCount => self.pixel_count,
            Metric::CentroidX => self.centroid_x as u64,
            Metric::CentroidY => self.centroid_y as u64,
            Metric::MinX => self.bbox.min_x as u64,
            Metric::MinY => self.bbox.min_y as u64,
            Metric::MaxX => self.bbox.max_x as u64,
            Metric::MaxY => self.bbox.max_y as u64,
            Metric::Width => self.bbox.width() as u64,
            Metric::Height => self.bbox.height() as u64,
        }
    }
}
