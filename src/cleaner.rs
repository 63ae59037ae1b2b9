//! Mask cleaning: label foreground components, then keep, fade, or drop each
//! one based on a per-region metric.
//!
//! The destination plane is zero-filled before painting, so a region that
//! fails the comparison is dropped simply by never being touched. A region
//! that passes is repainted pixel by pixel from its member list: at the
//! source intensity, at the bit-depth maximum when binarizing, or linearly
//! attenuated by `margin / fade` inside the fade band. Fade arithmetic is
//! integral, matching the classic plugin: intensity ramps from 0 at the
//! cutoff to full exactly once the margin reaches the band width.

use crate::image::{Plane, PlaneBuf, PlaneMut, Sample};
use crate::label::scanner::{quantize_threshold, ComponentScanner};
use crate::params::{CleanParams, ParamsError};
use crate::workspace::LabelWorkspace;
use log::debug;

/// How a surviving region's pixels are written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Paint {
    Full,
    Faded { margin: u64 },
}

/// Decide whether a region with the given metric value is painted, and how.
/// `None` drops the region.
fn decide(metric: u64, params: &CleanParams) -> Option<Paint> {
    let target = params.target_length;
    let margin = if params.reverse {
        if metric > target {
            return None;
        }
        target - metric
    } else {
        if metric < target {
            return None;
        }
        metric - target
    };
    if params.fade == 0 || margin > params.fade {
        Some(Paint::Full)
    } else {
        Some(Paint::Faded { margin })
    }
}

/// Label-and-filter engine. Construction validates the configuration; a
/// rejected configuration never processes a frame. The engine owns its
/// scratch workspace and may be reused across frames (one frame at a time).
pub struct MaskCleaner {
    params: CleanParams,
    thresh: u32,
    workspace: LabelWorkspace,
}

impl MaskCleaner {
    pub fn new(params: CleanParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            thresh: quantize_threshold(params.threshold),
            params,
            workspace: LabelWorkspace::new(),
        })
    }

    pub fn params(&self) -> &CleanParams {
        &self.params
    }

    /// Clean `src` into `dst`. Both planes must share dimensions; `dst` is
    /// zero-filled first, so dropped regions come out as background.
    pub fn process<T: Sample>(&mut self, src: Plane<'_, T>, mut dst: PlaneMut<'_, T>) {
        debug_assert_eq!((src.w, src.h), (dst.w, dst.h), "plane dimensions must match");
        debug_assert!(self.params.bits_per_sample <= T::BITS);

        dst.fill(T::from_u32(0));
        let params = self.params;
        let peak = (1u32 << params.bits_per_sample) - 1;
        let mut kept = 0usize;
        let mut total = 0usize;

        ComponentScanner::new(&src, self.thresh, params.connectivity, true, &mut self.workspace)
            .run(None, |region, pixels| {
                total += 1;
                if let Some(paint) = decide(region.metric(params.metric), &params) {
                    kept += 1;
                    paint_region(&src, &mut dst, pixels, peak, params.binarize, params.fade, paint);
                }
            });

        debug!("mask clean: kept {kept} of {total} components");
    }

    /// Convenience wrapper allocating a fresh destination buffer.
    pub fn process_to_buf<T: Sample>(&mut self, src: Plane<'_, T>) -> PlaneBuf<T> {
        let mut buf = PlaneBuf::new(src.w, src.h);
        self.process(src, buf.as_view_mut());
        buf
    }
}

fn paint_region<T: Sample>(
    src: &Plane<'_, T>,
    dst: &mut PlaneMut<'_, T>,
    pixels: &[usize],
    peak: u32,
    binarize: bool,
    fade: u64,
    paint: Paint,
) {
    let w = src.w;
    for &idx in pixels {
        let x = idx % w;
        let y = idx / w;
        let full = if binarize {
            peak
        } else {
            src.get(x, y).to_u32()
        };
        let value = match paint {
            Paint::Full => full,
            Paint::Faded { margin } => (u64::from(full) * margin / fade) as u32,
        };
        dst.set(x, y, T::from_u32(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Connectivity, Metric};

    fn plane(w: usize, h: usize, data: &[u8]) -> Plane<'_, u8> {
        Plane {
            w,
            h,
            stride: w,
            data,
        }
    }

    fn params(target_length: u64, fade: u64) -> CleanParams {
        CleanParams {
            target_length,
            threshold: 1.0,
            fade,
            ..Default::default()
        }
    }

    #[test]
    fn decide_matches_the_fade_band() {
        let p = params(5, 4);
        assert_eq!(decide(4, &p), None);
        assert_eq!(decide(5, &p), Some(Paint::Faded { margin: 0 }));
        assert_eq!(decide(7, &p), Some(Paint::Faded { margin: 2 }));
        assert_eq!(decide(9, &p), Some(Paint::Faded { margin: 4 }));
        assert_eq!(decide(10, &p), Some(Paint::Full));

        let hard = params(5, 0);
        assert_eq!(decide(4, &hard), None);
        assert_eq!(decide(5, &hard), Some(Paint::Full));
    }

    #[test]
    fn decide_reversed_keeps_small_regions() {
        let p = CleanParams {
            reverse: true,
            ..params(5, 0)
        };
        assert_eq!(decide(3, &p), Some(Paint::Full));
        assert_eq!(decide(5, &p), Some(Paint::Full));
        assert_eq!(decide(6, &p), None);
    }

    #[test]
    fn fade_intensity_is_monotonic_in_the_margin() {
        let fade = 6u64;
        let full = 200u64;
        let mut last = 0;
        for margin in 0..=fade {
            let v = full * margin / fade;
            assert!(v >= last, "intensity must not decrease across the band");
            last = v;
        }
        assert_eq!(last, full, "full intensity exactly at margin == fade");
    }

    #[test]
    fn small_component_is_dropped() {
        // 3 foreground pixels, below the default length of 5.
        let mut data = vec![0u8; 36];
        data[0] = 255;
        data[1] = 255;
        data[2] = 255;
        let mut cleaner = MaskCleaner::new(params(5, 0)).unwrap();
        let out = cleaner.process_to_buf(plane(6, 6, &data));
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn seven_pixel_component_fades_at_half_intensity() {
        // pixel_count = 7, target = 5, fade = 4 -> margin 2, src * 2 / 4.
        let mut data = vec![0u8; 64];
        for x in 0..7 {
            data[8 + x] = 200;
        }
        let mut cleaner = MaskCleaner::new(params(5, 4)).unwrap();
        let out = cleaner.process_to_buf(plane(8, 8, &data));
        for x in 0..7 {
            assert_eq!(out.as_view().get(x, 1), 100, "expected src * 2 / 4 at x={x}");
        }
        assert_eq!(out.as_view().get(7, 1), 0);
    }

    #[test]
    fn binarize_paints_the_bit_depth_peak() {
        let mut data = vec![0u8; 64];
        for x in 0..6 {
            data[x] = 180;
        }
        let mut cleaner = MaskCleaner::new(CleanParams {
            binarize: true,
            ..params(5, 0)
        })
        .unwrap();
        let out = cleaner.process_to_buf(plane(8, 8, &data));
        for x in 0..6 {
            assert_eq!(out.as_view().get(x, 0), 255);
        }
    }

    #[test]
    fn binarize_respects_reduced_bit_depth_on_u16() {
        let mut data = vec![0u16; 64];
        for x in 0..6 {
            data[x] = 600;
        }
        let src = Plane {
            w: 8,
            h: 8,
            stride: 8,
            data: &data[..],
        };
        let mut cleaner = MaskCleaner::new(CleanParams {
            binarize: true,
            bits_per_sample: 10,
            ..params(5, 0)
        })
        .unwrap();
        let out = cleaner.process_to_buf(src);
        for x in 0..6 {
            assert_eq!(out.as_view().get(x, 0), 1023);
        }
    }

    #[test]
    fn width_metric_drives_the_decision() {
        // A 2x4 block: width 2, height 4.
        let mut data = vec![0u8; 64];
        for y in 0..4 {
            for x in 0..2 {
                data[y * 8 + x] = 255;
            }
        }
        let keep_tall = CleanParams {
            metric: Metric::Height,
            target_length: 4,
            threshold: 1.0,
            ..Default::default()
        };
        let mut cleaner = MaskCleaner::new(keep_tall).unwrap();
        let out = cleaner.process_to_buf(plane(8, 8, &data));
        assert_eq!(out.as_view().get(0, 0), 255);

        let keep_wide = CleanParams {
            metric: Metric::Width,
            target_length: 4,
            threshold: 1.0,
            ..Default::default()
        };
        let mut cleaner = MaskCleaner::new(keep_wide).unwrap();
        let out = cleaner.process_to_buf(plane(8, 8, &data));
        assert!(out.data().iter().all(|&v| v == 0), "width 2 < target 4");
    }

    #[test]
    fn respects_source_stride() {
        // 4x2 image embedded in rows of stride 6.
        let mut data = vec![0u8; 12];
        for y in 0..2 {
            for x in 0..4 {
                data[y * 6 + x] = 250;
            }
        }
        let src = Plane {
            w: 4,
            h: 2,
            stride: 6,
            data: &data,
        };
        let mut out = vec![0u8; 8];
        let dst = PlaneMut {
            w: 4,
            h: 2,
            stride: 4,
            data: &mut out,
        };
        let mut cleaner = MaskCleaner::new(CleanParams {
            threshold: 1.0,
            connectivity: Connectivity::Four,
            ..params(5, 0)
        })
        .unwrap();
        cleaner.process(src, dst);
        assert!(out.iter().all(|&v| v == 250), "8-pixel block kept whole");
    }
}
