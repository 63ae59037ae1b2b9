//! JSON configuration for the demo tools.
//!
//! The numeric knobs keep the classic plugin's names and numbering: `length`,
//! `thresh`, `fade`, `connectivity` as 4/8, `mode` as the metric index 0..=8.
use crate::params::{CleanParams, Connectivity, Metric, StatsParams};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CleanToolConfig {
    /// Input mask image.
    pub input: PathBuf,
    /// Destination for the cleaned mask.
    pub output: PathBuf,
    #[serde(default)]
    pub clean: CleanConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Target metric value regions must reach to be kept.
    pub length: u64,
    /// Foreground threshold.
    pub thresh: f32,
    /// Fade band width (0 disables fading).
    pub fade: u64,
    /// Neighbor stencil: 4 or 8.
    pub connectivity: u32,
    /// Compare with `<=` instead of `>=`, keeping small regions.
    pub reverse: bool,
    /// Paint the bit-depth maximum instead of the source sample.
    pub binarize: bool,
    /// Metric index in [0, 8].
    pub mode: u32,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            length: 5,
            thresh: 235.0,
            fade: 0,
            connectivity: 8,
            reverse: false,
            binarize: false,
            mode: 0,
        }
    }
}

impl CleanConfig {
    pub fn to_params(&self, bits_per_sample: u32) -> Result<CleanParams, String> {
        Ok(CleanParams {
            target_length: self.length,
            threshold: self.thresh,
            fade: self.fade,
            binarize: self.binarize,
            connectivity: parse_connectivity(self.connectivity)?,
            reverse: self.reverse,
            metric: Metric::from_index(self.mode)
                .ok_or_else(|| "mode must be in the range [0, 8]".to_string())?,
            bits_per_sample,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct StatsToolConfig {
    /// Input mask image.
    pub input: PathBuf,
    /// Optional JSON destination; stdout when absent.
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub stats: StatsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Foreground threshold.
    pub thresh: f32,
    /// Neighbor stencil: 4 or 8.
    pub connectivity: u32,
    /// Truncate reported centroids toward zero.
    pub integer_centroid: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            thresh: 235.0,
            connectivity: 8,
            integer_centroid: false,
        }
    }
}

impl StatsConfig {
    pub fn to_params(&self) -> Result<StatsParams, String> {
        Ok(StatsParams {
            threshold: self.thresh,
            connectivity: parse_connectivity(self.connectivity)?,
            integer_centroid: self.integer_centroid,
        })
    }
}

fn parse_connectivity(count: u32) -> Result<Connectivity, String> {
    Connectivity::from_count(count).ok_or_else(|| "connectivity must be either 4 or 8".to_string())
}

pub fn load_clean_config(path: &Path) -> Result<CleanToolConfig, String> {
    load_json(path)
}

pub fn load_stats_config(path: &Path) -> Result<StatsToolConfig, String> {
    load_json(path)
}

fn load_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
