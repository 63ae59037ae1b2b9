use super::background::BackgroundAggregator;
use super::region::Region;
use crate::image::{Plane, Sample};
use crate::params::Connectivity;
use crate::workspace::LabelWorkspace;

const OFFSETS_4: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const OFFSETS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Connectivity {
    pub(crate) fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &OFFSETS_4,
            Connectivity::Eight => &OFFSETS_8,
        }
    }
}

/// Quantize a float threshold for comparison against integer samples.
///
/// `sample >= t` holds for an unsigned sample exactly when
/// `sample >= ceil(t)`, so one ceil per call replaces per-pixel float math.
pub(crate) fn quantize_threshold(threshold: f32) -> u32 {
    threshold.ceil().max(0.0) as u32
}

/// Raster scan that discovers connected foreground components.
///
/// Seeds a flood fill at every unvisited pixel whose sample reaches the
/// threshold, expanding through a LIFO frontier over the configured stencil.
/// Every pixel is marked in the visited bitmap exactly once, so the whole
/// scan is O(width × height) regardless of component count. Regions are
/// reported in row-major discovery order.
pub(crate) struct ComponentScanner<'a, 'ws, T: Sample> {
    src: &'a Plane<'a, T>,
    thresh: u32,
    offsets: &'static [(isize, isize)],
    collect_pixels: bool,
    ws: &'ws mut LabelWorkspace,
}

impl<'a, 'ws, T: Sample> ComponentScanner<'a, 'ws, T> {
    pub(crate) fn new(
        src: &'a Plane<'a, T>,
        thresh: u32,
        connectivity: Connectivity,
        collect_pixels: bool,
        ws: &'ws mut LabelWorkspace,
    ) -> Self {
        ws.reset(src.w, src.h);
        Self {
            src,
            thresh,
            offsets: connectivity.offsets(),
            collect_pixels,
            ws,
        }
    }

    /// Run the scan, invoking `on_region` for every finished component with
    /// its record and (when collection is enabled) its member pixel indices.
    /// When `background` is given, every non-foreground pixel is folded into
    /// it during the same pass.
    pub(crate) fn run(
        mut self,
        mut background: Option<&mut BackgroundAggregator>,
        mut on_region: impl FnMut(Region, &[usize]),
    ) {
        let (w, h) = (self.src.w, self.src.h);
        for y in 0..h {
            for x in 0..w {
                if self.src.get(x, y).to_u32() < self.thresh {
                    if let Some(bg) = background.as_deref_mut() {
                        bg.push(x, y);
                    }
                    continue;
                }
                if self.ws.visited.get(x, y) {
                    continue;
                }
                self.grow(x, y);
                on_region(self.ws.region.finish(), self.ws.region.pixels());
            }
        }
    }

    /// Flood-fill one component from its seed, folding every member pixel
    /// into the accumulator at mark time.
    fn grow(&mut self, seed_x: usize, seed_y: usize) {
        let src = self.src;
        let (w, h) = (src.w, src.h);
        let ws = &mut *self.ws;

        ws.frontier.clear();
        ws.region.begin(self.collect_pixels);
        ws.visited.set(seed_x, seed_y);
        ws.region.push(seed_y * w + seed_x, seed_x, seed_y);
        ws.frontier.push(seed_y * w + seed_x);

        while let Some(idx) = ws.frontier.pop() {
            let x = (idx % w) as isize;
            let y = (idx / w) as isize;
            for &(dx, dy) in self.offsets {
                let xn = x + dx;
                let yn = y + dy;
                if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                    continue;
                }
                let (xn, yn) = (xn as usize, yn as usize);
                if ws.visited.get(xn, yn) {
                    continue;
                }
                if src.get(xn, yn).to_u32() < self.thresh {
                    continue;
                }
                ws.visited.set(xn, yn);
                ws.region.push(yn * w + xn, xn, yn);
                ws.frontier.push(yn * w + xn);
            }
        }
    }
}
