//! Connected-component discovery over a thresholded plane.
//!
//! The scan walks the plane in raster order and starts a flood fill at every
//! unvisited foreground pixel (`sample >= threshold`). The fill expands a
//! LIFO frontier over a 4- or 8-neighbor stencil, marking each pixel in a
//! packed visited bitmap exactly once, so a whole frame is labeled in
//! O(width × height) time regardless of how many components it contains.
//!
//! While a fill runs, the pixel's coordinates are folded into a running
//! accumulator (count, coordinate sums for the centroid, min/max extents for
//! the bounding box); no per-pixel replay is needed to finalize a region.
//! The member pixel list is only collected when the caller intends to paint
//! the region back out.
//!
//! Background pixels can be folded into a single aggregate bucket during the
//! same pass; the bucket has the same statistics shape as a region but no
//! connectivity requirement.
//!
//! Edge cases
//! - An isolated foreground pixel yields a region with `pixel_count = 1` and
//!   a degenerate 1×1 bounding box.
//! - 4-connectivity excludes diagonal neighbors entirely; two pixels touching
//!   only at a corner belong to different components.
//! - An empty background aggregate reports a `(0,0,0,0)` box with zero
//!   width/height rather than inverted sentinel extrema.

pub(crate) mod accumulator;
pub(crate) mod background;
pub(crate) mod scanner;

mod region;
mod visited;

pub use region::{BoundingBox, Region};
pub use visited::VisitedMask;

use crate::image::{Plane, Sample};
use crate::params::Connectivity;
use crate::workspace::LabelWorkspace;

/// Label every foreground component of `src`, returning region records in
/// raster discovery order.
pub fn label_components<T: Sample>(
    src: Plane<'_, T>,
    threshold: f32,
    connectivity: Connectivity,
) -> Vec<Region> {
    let mut ws = LabelWorkspace::new();
    let mut regions = Vec::new();
    scanner::ComponentScanner::new(
        &src,
        scanner::quantize_threshold(threshold),
        connectivity,
        false,
        &mut ws,
    )
    .run(None, |region, _| regions.push(region));
    regions
}
