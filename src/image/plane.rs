//! Borrowed and owned single-channel planes of unsigned integer samples.
//!
//! A plane is addressed by `row * stride + col` with `stride >= width`. The
//! borrowed views are what the labeling core consumes; [`PlaneBuf`] is the
//! owned counterpart used by the convenience entry points and the I/O helpers
//! (`stride == width`).

/// Unsigned integer sample of an 8- or 16-bit plane.
pub trait Sample: Copy + 'static {
    /// Storage width in bits.
    const BITS: u32;

    fn to_u32(self) -> u32;
    fn from_u32(v: u32) -> Self;
}

impl Sample for u8 {
    const BITS: u32 = 8;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }
    #[inline]
    fn from_u32(v: u32) -> Self {
        v as u8
    }
}

impl Sample for u16 {
    const BITS: u32 = 16;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }
    #[inline]
    fn from_u32(v: u32) -> Self {
        v as u16
    }
}

/// Read-only plane view borrowed from the host for the duration of one call.
#[derive(Clone, Copy, Debug)]
pub struct Plane<'a, T: Sample> {
    pub w: usize,
    pub h: usize,
    /// Samples between consecutive rows (`>= w`).
    pub stride: usize,
    pub data: &'a [T],
}

impl<'a, T: Sample> Plane<'a, T> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Write-only destination plane view.
#[derive(Debug)]
pub struct PlaneMut<'a, T: Sample> {
    pub w: usize,
    pub h: usize,
    /// Samples between consecutive rows (`>= w`).
    pub stride: usize,
    pub data: &'a mut [T],
}

impl<'a, T: Sample> PlaneMut<'a, T> {
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        self.data[y * self.stride + x] = v;
    }

    /// Fill every addressable pixel with `v`, leaving stride padding alone.
    pub fn fill(&mut self, v: T) {
        for y in 0..self.h {
            let start = y * self.stride;
            self.data[start..start + self.w].fill(v);
        }
    }
}

/// Owned zero-initialized plane buffer with `stride == width`.
#[derive(Clone, Debug)]
pub struct PlaneBuf<T: Sample> {
    w: usize,
    h: usize,
    data: Vec<T>,
}

impl<T: Sample> PlaneBuf<T> {
    /// Construct a zero-filled buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![T::from_u32(0); w * h],
        }
    }

    /// Construct a buffer from tightly packed row-major samples.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), w * h, "sample count must match dimensions");
        Self { w, h, data }
    }

    /// Buffer width in pixels
    pub fn width(&self) -> usize {
        self.w
    }

    /// Buffer height in pixels
    pub fn height(&self) -> usize {
        self.h
    }

    /// Backing storage in row-major order
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Borrow as a read-only view
    pub fn as_view(&self) -> Plane<'_, T> {
        Plane {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }

    /// Borrow as a writable view
    pub fn as_view_mut(&mut self) -> PlaneMut<'_, T> {
        PlaneMut {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &mut self.data,
        }
    }
}
