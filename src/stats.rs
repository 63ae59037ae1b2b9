//! Connected-component statistics over one plane.
//!
//! Instead of a painted plane, this path emits a struct-of-arrays record
//! suitable for frame side-channel metadata: one entry per label, where label
//! 0 is the background aggregate and labels 1..N are foreground components in
//! raster discovery order. The arrays serialize to JSON as-is.

use crate::image::{Plane, Sample};
use crate::label::background::BackgroundAggregator;
use crate::label::scanner::{quantize_threshold, ComponentScanner};
use crate::label::Region;
use crate::params::{ParamsError, StatsParams};
use crate::workspace::LabelWorkspace;
use log::debug;
use serde::Serialize;

/// Typical upper bound on labels per frame; pre-reserving avoids regrowth in
/// the common case.
const LABEL_CAPACITY: usize = 512;

/// Per-label statistics in struct-of-arrays layout. All arrays share one
/// length, `num_labels`; index 0 is the background aggregate.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CclStats {
    pub num_labels: usize,
    pub areas: Vec<u64>,
    pub lefts: Vec<u32>,
    pub tops: Vec<u32>,
    pub widths: Vec<u32>,
    pub heights: Vec<u32>,
    pub centroids_x: Vec<f64>,
    pub centroids_y: Vec<f64>,
}

impl CclStats {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            num_labels: 0,
            areas: Vec::with_capacity(capacity),
            lefts: Vec::with_capacity(capacity),
            tops: Vec::with_capacity(capacity),
            widths: Vec::with_capacity(capacity),
            heights: Vec::with_capacity(capacity),
            centroids_x: Vec::with_capacity(capacity),
            centroids_y: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, region: &Region, integer_centroid: bool) {
        let ((width, height), (cx, cy)) = resolve(region, integer_centroid);
        self.areas.push(region.pixel_count);
        self.lefts.push(region.bbox.min_x as u32);
        self.tops.push(region.bbox.min_y as u32);
        self.widths.push(width);
        self.heights.push(height);
        self.centroids_x.push(cx);
        self.centroids_y.push(cy);
        self.num_labels += 1;
    }

    fn insert_background(&mut self, region: &Region, integer_centroid: bool) {
        let ((width, height), (cx, cy)) = resolve(region, integer_centroid);
        self.areas.insert(0, region.pixel_count);
        self.lefts.insert(0, region.bbox.min_x as u32);
        self.tops.insert(0, region.bbox.min_y as u32);
        self.widths.insert(0, width);
        self.heights.insert(0, height);
        self.centroids_x.insert(0, cx);
        self.centroids_y.insert(0, cy);
        self.num_labels += 1;
    }
}

/// Box extent and centroid as reported, honoring the integer-centroid switch.
/// An empty aggregate collapses to a 0x0 box rather than exposing inverted
/// sentinel extrema.
fn resolve(region: &Region, integer_centroid: bool) -> ((u32, u32), (f64, f64)) {
    let extent = if region.pixel_count == 0 {
        (0, 0)
    } else {
        (region.bbox.width() as u32, region.bbox.height() as u32)
    };
    let centroid = if integer_centroid {
        (region.centroid_x.trunc(), region.centroid_y.trunc())
    } else {
        (region.centroid_x, region.centroid_y)
    };
    (extent, centroid)
}

/// Label-and-collect-stats engine. Construction validates the configuration;
/// the collector owns its scratch workspace and may be reused across frames.
pub struct StatsCollector {
    params: StatsParams,
    thresh: u32,
    workspace: LabelWorkspace,
}

impl StatsCollector {
    pub fn new(params: StatsParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            thresh: quantize_threshold(params.threshold),
            params,
            workspace: LabelWorkspace::new(),
        })
    }

    pub fn params(&self) -> &StatsParams {
        &self.params
    }

    /// Label `src` and report per-label statistics. The background aggregate
    /// lands at index 0 even when it is empty, so `num_labels` is always
    /// `1 + number of foreground components`.
    pub fn collect<T: Sample>(&mut self, src: Plane<'_, T>) -> CclStats {
        let integer_centroid = self.params.integer_centroid;
        let mut stats = CclStats::with_capacity(LABEL_CAPACITY);
        let mut background = BackgroundAggregator::new();

        ComponentScanner::new(
            &src,
            self.thresh,
            self.params.connectivity,
            false,
            &mut self.workspace,
        )
        .run(Some(&mut background), |region, _| {
            stats.push(&region, integer_centroid)
        });

        stats.insert_background(&background.finish(), integer_centroid);
        debug!("ccl stats: {} labels (incl. background)", stats.num_labels);
        stats
    }
}
