//! Parameter types for mask cleaning and statistics collection.
//!
//! Defaults mirror the classic mask-cleaner behaviour: keep 8-connected
//! regions of at least 5 pixels whose samples reach 235. Validation happens
//! once at construction of [`crate::MaskCleaner`] / [`crate::StatsCollector`];
//! an invalid configuration never processes a frame.

use serde::{Deserialize, Serialize};

/// Neighbor stencil used by the flood fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Orthogonal neighbors only.
    Four,
    /// Orthogonal and diagonal neighbors.
    Eight,
}

impl Connectivity {
    /// Map the conventional 4/8 notation onto the enum.
    pub fn from_count(count: u32) -> Option<Self> {
        match count {
            4 => Some(Connectivity::Four),
            8 => Some(Connectivity::Eight),
            _ => None,
        }
    }
}

/// Scalar derived from a region, driving the keep/fade decision or reported
/// as a statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    PixelCount,
    CentroidX,
    CentroidY,
    MinX,
    MinY,
    MaxX,
    MaxY,
    Width,
    Height,
}

impl Metric {
    /// Map the numeric `mode` indices 0..=8 onto the enum.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Metric::PixelCount),
            1 => Some(Metric::CentroidX),
            2 => Some(Metric::CentroidY),
            3 => Some(Metric::MinX),
            4 => Some(Metric::MinY),
            5 => Some(Metric::MaxX),
            6 => Some(Metric::MaxY),
            7 => Some(Metric::Width),
            8 => Some(Metric::Height),
            _ => None,
        }
    }
}

/// Configuration for the label-and-filter path.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanParams {
    /// Target metric value a region must reach to be kept.
    pub target_length: u64,
    /// Foreground threshold; samples at or above it are foreground.
    pub threshold: f32,
    /// Fade band width around the target; 0 disables fading.
    pub fade: u64,
    /// Paint the bit-depth maximum instead of the source sample.
    pub binarize: bool,
    /// Neighbor stencil.
    pub connectivity: Connectivity,
    /// Compare with `<=` instead of `>=`, keeping small regions.
    pub reverse: bool,
    /// Metric driving the keep/fade decision (centroids truncate toward zero).
    pub metric: Metric,
    /// Significant bits per sample: 8 for `u8` planes, 9..=16 for `u16`.
    pub bits_per_sample: u32,
}

impl Default for CleanParams {
    fn default() -> Self {
        Self {
            target_length: 5,
            threshold: 235.0,
            fade: 0,
            binarize: false,
            connectivity: Connectivity::Eight,
            reverse: false,
            metric: Metric::PixelCount,
            bits_per_sample: 8,
        }
    }
}

impl CleanParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.threshold > 0.0) {
            return Err(ParamsError::InvalidThreshold {
                got: self.threshold,
            });
        }
        if self.target_length == 0 {
            return Err(ParamsError::InvalidLength);
        }
        if !(8..=16).contains(&self.bits_per_sample) {
            return Err(ParamsError::InvalidBitDepth {
                got: self.bits_per_sample,
            });
        }
        Ok(())
    }
}

/// Configuration for the label-and-collect-stats path.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsParams {
    /// Foreground threshold; samples at or above it are foreground.
    pub threshold: f32,
    /// Neighbor stencil.
    pub connectivity: Connectivity,
    /// Truncate reported centroids toward zero instead of reporting reals.
    pub integer_centroid: bool,
}

impl Default for StatsParams {
    fn default() -> Self {
        Self {
            threshold: 235.0,
            connectivity: Connectivity::Eight,
            integer_centroid: false,
        }
    }
}

impl StatsParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.threshold > 0.0) {
            return Err(ParamsError::InvalidThreshold {
                got: self.threshold,
            });
        }
        Ok(())
    }
}

/// Reasons why a configuration may be rejected before any scan begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamsError {
    InvalidThreshold { got: f32 },
    InvalidLength,
    InvalidBitDepth { got: u32 },
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::InvalidThreshold { got } => {
                write!(f, "threshold must be greater than zero (got {got})")
            }
            ParamsError::InvalidLength => write!(f, "target length must be greater than zero"),
            ParamsError::InvalidBitDepth { got } => {
                write!(f, "bits per sample must be in [8, 16] (got {got})")
            }
        }
    }
}

impl std::error::Error for ParamsError {}
