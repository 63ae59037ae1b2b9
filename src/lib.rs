#![doc = include_str!("../README.md")]

pub mod cleaner;
pub mod config;
pub mod image;
pub mod label;
pub mod params;
pub mod stats;
pub mod workspace;

// --- High-level re-exports -------------------------------------------------

// Main entry points: cleaning + statistics.
pub use crate::cleaner::MaskCleaner;
pub use crate::stats::{CclStats, StatsCollector};

// Plane views and sample abstraction shared with the host.
pub use crate::image::{Plane, PlaneBuf, PlaneMut, Sample};

// Labeling primitives and their records.
pub use crate::label::{label_components, BoundingBox, Region, VisitedMask};

// Configuration surface.
pub use crate::params::{CleanParams, Connectivity, Metric, ParamsError, StatsParams};
pub use crate::workspace::LabelWorkspace;

/// Small prelude for quick experiments.
///
/// ```no_run
/// use mask_tools::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let mask = vec![0u8; w * h];
/// let src = Plane { w, h, stride: w, data: &mask };
///
/// let mut cleaner = MaskCleaner::new(CleanParams::default()).expect("valid defaults");
/// let cleaned = cleaner.process_to_buf(src);
/// println!("{}x{}", cleaned.width(), cleaned.height());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{Plane, PlaneBuf, PlaneMut};
    pub use crate::{CleanParams, Connectivity, MaskCleaner, Metric, StatsCollector, StatsParams};
}
