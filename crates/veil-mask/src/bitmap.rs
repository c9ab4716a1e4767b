//! The [`MaskBitmap`] single-channel coverage buffer.

/// An R×R single-channel coverage bitmap.
///
/// Row-major, one byte per sample: `0` is fully hidden, `255` fully
/// covered. Bitmaps are produced once by the generator and shared
/// read-only (`Arc<MaskBitmap>`) between the cache and consumers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskBitmap {
    resolution: u32,
    data: Vec<u8>,
}

impl MaskBitmap {
    /// Wrap a row-major buffer of exactly `resolution * resolution` bytes.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not match the resolution; the
    /// generator always allocates matching buffers.
    pub fn new(resolution: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            (resolution as usize) * (resolution as usize),
            "bitmap buffer does not match resolution {resolution}"
        );
        Self { resolution, data }
    }

    /// An all-zero (fully hidden) bitmap at the given resolution.
    pub fn hidden(resolution: u32) -> Self {
        Self {
            resolution,
            data: vec![0; (resolution as usize) * (resolution as usize)],
        }
    }

    /// Samples per side.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The raw row-major buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Coverage at sample `(x, y)`, with `y` indexing rows from the
    /// bounds' minimum edge.
    pub fn at(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize) * (self.resolution as usize) + (x as usize)]
    }

    /// Whether every sample is zero.
    pub fn is_all_hidden(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bitmap_is_all_zero() {
        let b = MaskBitmap::hidden(8);
        assert_eq!(b.resolution(), 8);
        assert_eq!(b.data().len(), 64);
        assert!(b.is_all_hidden());
    }

    #[test]
    fn at_indexes_row_major() {
        let mut data = vec![0u8; 9];
        data[1 * 3 + 2] = 200;
        let b = MaskBitmap::new(3, data);
        assert_eq!(b.at(2, 1), 200);
        assert_eq!(b.at(1, 2), 0);
    }

    #[test]
    #[should_panic(expected = "does not match resolution")]
    fn mismatched_buffer_panics() {
        let _ = MaskBitmap::new(4, vec![0; 15]);
    }
}
