use super::*;

impl CellBuffer {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width as usize + col
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as i64) < self.height as i64 && (col as i64) < self.width as i64
    }

    /// Index without a bounds check in release builds.
    #[inline(always)]
    pub(crate) fn index_unchecked(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.height as usize && col < self.width as usize,
            "index_unchecked: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.width,
            self.height
        );
        row * self.width as usize + col
    }
}
