/// Paint a filled rectangle of `value` into a tightly packed buffer.
pub fn fill_rect(
    buffer: &mut [u8],
    width: usize,
    x0: usize,
    y0: usize,
    w: usize,
    h: usize,
    value: u8,
) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            buffer[y * width + x] = value;
        }
    }
}

/// Deterministic speckle pattern (xorshift), roughly half foreground at
/// threshold 128.
pub fn speckled_mask(width: usize, height: usize, seed: u32) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut state = seed | 1;
    let mut data = vec![0u8; width * height];
    for px in data.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *px = (state >> 24) as u8;
    }
    data
}

/// A mask with two blobs: a small speck (3 px) and a solid block whose size
/// the caller controls.
pub fn speck_and_block(width: usize, height: usize, block_w: usize, block_h: usize) -> Vec<u8> {
    let mut data = vec![0u8; width * height];
    data[0] = 255;
    data[1] = 255;
    data[width] = 255;
    fill_rect(
        &mut data,
        width,
        width / 2,
        height / 2,
        block_w,
        block_h,
        240,
    );
    data
}
