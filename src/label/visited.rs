/// Packed visited bitmap, one bit per pixel in row-major order.
///
/// A bit is set exactly when its pixel has been assigned to a region. The
/// buffer is reused across calls through [`crate::LabelWorkspace`] and is
/// always fully cleared by `reset` before a new scan, so no state leaks
/// between frames. Bounds are caller discipline: `x < width`, `y < height`.
pub struct VisitedMask {
    words: Vec<u64>,
    width: usize,
}

impl VisitedMask {
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            width: 0,
        }
    }

    /// Resize-on-mismatch and clear. Must be called before every scan.
    pub fn reset(&mut self, width: usize, height: usize) {
        let words = (width * height + 63) / 64;
        if self.words.len() != words {
            self.words.clear();
            self.words.resize(words, 0);
        } else {
            self.words.fill(0);
        }
        self.width = width;
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        let pos = y * self.width + x;
        self.words[pos >> 6] & (1 << (pos & 63)) != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        let pos = y * self.width + x;
        self.words[pos >> 6] |= 1 << (pos & 63);
    }
}

impl Default for VisitedMask {
    fn default() -> Self {
        Self::new()
    }
}
