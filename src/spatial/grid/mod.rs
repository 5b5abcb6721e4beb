//! Grid - double-buffered cell storage
//!
//! Each `CellBuffer` keeps particle types and momentum in two parallel arrays
//! (row-major, `row * width + col`). `GridState` owns the buffer read during a
//! tick ("current") and the one written during it ("next"). `swap` exchanges
//! the two by moving the buffers, never by copying cells, so types and
//! momentum always change roles together.

use crate::domain::particles::{Momentum, ParticleType};

mod accessors;
mod border;
mod indexing;

pub use border::{draw_border, is_border};

/// One full grid of cells plus their momentum.
#[derive(Clone, Debug)]
pub struct CellBuffer {
    width: u32,
    height: u32,
    size: usize,

    pub(crate) cells: Vec<ParticleType>,
    pub(crate) momentum: Vec<Momentum>,
}

impl CellBuffer {
    /// All cells Empty, all momentum zero.
    ///
    /// Sizes come from a validated `EngineConfig`; a product that does not
    /// fit `usize` is refused here rather than wrapping to a short buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize)
            .checked_mul(height as usize)
            .unwrap_or_else(|| panic!("{}x{} grid does not fit in memory", width, height));
        Self {
            width,
            height,
            size,
            cells: vec![ParticleType::Empty; size],
            momentum: vec![Momentum::ZERO; size],
        }
    }

    /// Reset every cell to Empty. Momentum is left as-is: it is only
    /// meaningful where a particle is written, and writers always set it.
    pub fn clear(&mut self) {
        self.cells.fill(ParticleType::Empty);
    }

    pub fn count_of(&self, kind: ParticleType) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Number of Sand, Water and Slime cells.
    pub fn particle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_mobile()).count()
    }
}

/// The two buffer pairs of the simulation.
#[derive(Clone, Debug)]
pub struct GridState {
    current: CellBuffer,
    next: CellBuffer,
}

impl GridState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            current: CellBuffer::new(width, height),
            next: CellBuffer::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.current.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.current.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.current.size
    }

    #[inline]
    pub fn current(&self) -> &CellBuffer {
        &self.current
    }

    #[inline]
    pub(crate) fn current_mut(&mut self) -> &mut CellBuffer {
        &mut self.current
    }

    #[inline]
    pub fn next(&self) -> &CellBuffer {
        &self.next
    }

    #[inline]
    pub(crate) fn next_mut(&mut self) -> &mut CellBuffer {
        &mut self.next
    }

    /// Exchange the roles of current and next in O(1).
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
