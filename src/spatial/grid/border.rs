//! Brick frame around the grid

use super::CellBuffer;
use crate::domain::particles::{Momentum, ParticleType};

/// Set row 0, row H-1, column 0 and column W-1 to Brick.
///
/// The stepper calls this on the next buffer before the scan, so the frame is
/// present in whatever buffer becomes current.
pub fn draw_border(buffer: &mut CellBuffer) {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    if width == 0 || height == 0 {
        return;
    }

    for row in 0..height {
        buffer.set_unchecked(row, 0, ParticleType::Brick, Momentum::ZERO);
        buffer.set_unchecked(row, width - 1, ParticleType::Brick, Momentum::ZERO);
    }
    for col in 0..width {
        buffer.set_unchecked(0, col, ParticleType::Brick, Momentum::ZERO);
        buffer.set_unchecked(height - 1, col, ParticleType::Brick, Momentum::ZERO);
    }
}

/// True when (row, col) lies on the frame drawn by `draw_border`.
#[inline]
pub fn is_border(buffer: &CellBuffer, row: usize, col: usize) -> bool {
    row == 0 || col == 0 || row + 1 == buffer.height() as usize || col + 1 == buffer.width() as usize
}
