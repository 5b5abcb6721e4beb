use super::*;
use crate::domain::particles::Probe;

impl CellBuffer {
    /// Bounds-checked type read.
    #[inline]
    pub fn probe(&self, row: i32, col: i32) -> Probe {
        if !self.in_bounds(row, col) {
            return Probe::OutOfBounds;
        }
        Probe::Cell(*fast!(self.cells, [self.index(row as usize, col as usize)]))
    }

    /// Bounds-checked momentum read; zero outside the grid.
    #[inline]
    pub fn momentum_at(&self, row: i32, col: i32) -> Momentum {
        if !self.in_bounds(row, col) {
            return Momentum::ZERO;
        }
        *fast!(self.momentum, [self.index(row as usize, col as usize)])
    }

    #[inline]
    pub fn kind_unchecked(&self, row: usize, col: usize) -> ParticleType {
        *fast!(self.cells, [self.index_unchecked(row, col)])
    }

    /// Write type and momentum. Coordinates must already be clamped.
    #[inline]
    pub(crate) fn set_unchecked(&mut self, row: usize, col: usize, kind: ParticleType, momentum: Momentum) {
        let idx = self.index_unchecked(row, col);
        fast!(self.cells, [idx] = kind);
        fast!(self.momentum, [idx] = momentum);
    }

    #[inline]
    pub(crate) fn set_momentum_unchecked(&mut self, row: usize, col: usize, momentum: Momentum) {
        let idx = self.index_unchecked(row, col);
        fast!(self.momentum, [idx] = momentum);
    }
}

impl GridState {
    /// Color of a current-buffer cell, or `OUT_OF_BOUNDS_COLOR` outside the grid.
    #[inline]
    pub fn color_at(&self, row: i32, col: i32) -> u32 {
        self.current.probe(row, col).color()
    }

    #[inline]
    pub fn kind_at(&self, row: i32, col: i32) -> Option<ParticleType> {
        match self.current.probe(row, col) {
            Probe::Cell(kind) => Some(kind),
            Probe::OutOfBounds => None,
        }
    }

    /// Momentum of a current-buffer cell, or zero outside the grid.
    #[inline]
    pub fn momentum_at(&self, row: i32, col: i32) -> Momentum {
        self.current.momentum_at(row, col)
    }

    #[inline]
    pub fn probe(&self, row: i32, col: i32) -> Probe {
        self.current.probe(row, col)
    }

    #[inline]
    pub fn probe_next(&self, row: i32, col: i32) -> Probe {
        self.next.probe(row, col)
    }

    /// Write a particle into the next buffer. Only the stepper calls this,
    /// after clamping.
    #[inline]
    pub(crate) fn set_next_unchecked(&mut self, row: usize, col: usize, kind: ParticleType, momentum: Momentum) {
        self.next.set_unchecked(row, col, kind, momentum);
    }

    #[inline]
    pub(crate) fn set_next_momentum_unchecked(&mut self, row: usize, col: usize, momentum: Momentum) {
        self.next.set_momentum_unchecked(row, col, momentum);
    }
}
