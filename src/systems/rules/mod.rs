//! Rules - per-cell movement decisions
//!
//! A rule sees one particle, its momentum and its neighbourhood read from both
//! buffers, and answers with a displacement. The previous buffer tells it what
//! the world looked like at the start of the tick; the next buffer tells it
//! what cells scanned earlier in this tick have already claimed.
//!
//! Rules never write. The stepper applies the `Decision`.

mod liquid;
mod powder;

pub use liquid::LiquidRule;
pub use powder::PowderRule;

use crate::domain::particles::{Momentum, ParticleType, Probe};
use crate::spatial::grid::GridState;

use super::random::RandomSource;

/// What a rule reads for the particle at (row, col).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    pub kind: ParticleType,
    pub momentum: Momentum,

    // Previous buffer
    pub below: Probe,
    pub below_left: Probe,
    pub below_right: Probe,
    pub left: Probe,
    pub right: Probe,

    // Next buffer
    pub next_below: Probe,
    pub next_left: Probe,
    pub next_right: Probe,
}

impl Neighborhood {
    pub fn gather(grid: &GridState, row: i32, col: i32) -> Self {
        let kind = match grid.probe(row, col) {
            Probe::Cell(kind) => kind,
            Probe::OutOfBounds => ParticleType::Empty,
        };
        Self {
            kind,
            momentum: grid.momentum_at(row, col),
            below: grid.probe(row + 1, col),
            below_left: grid.probe(row + 1, col - 1),
            below_right: grid.probe(row + 1, col + 1),
            left: grid.probe(row, col - 1),
            right: grid.probe(row, col + 1),
            next_below: grid.probe_next(row + 1, col),
            next_left: grid.probe_next(row, col - 1),
            next_right: grid.probe_next(row, col + 1),
        }
    }

    /// Previous-buffer probe on the given side (-1 left, 1 right).
    #[inline]
    pub fn side(&self, d_col: i8) -> Probe {
        if d_col < 0 {
            self.left
        } else {
            self.right
        }
    }

    /// Next-buffer probe on the given side (-1 left, 1 right).
    #[inline]
    pub fn next_side(&self, d_col: i8) -> Probe {
        if d_col < 0 {
            self.next_left
        } else {
            self.next_right
        }
    }

    /// Empty now and not yet claimed this tick.
    #[inline]
    pub fn side_free(&self, d_col: i8) -> bool {
        self.side(d_col).is_empty() && self.next_side(d_col).is_empty()
    }
}

/// Outcome of a rule for one particle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decision {
    /// Displacement to execute; also the momentum stored at the destination.
    pub motion: Momentum,
    /// Column offset of a neighbour whose next-buffer momentum is forced to
    /// `Momentum::DOWN` (Water pressure).
    pub push: Option<i8>,
}

impl Decision {
    pub const STAY: Decision = Decision {
        motion: Momentum::ZERO,
        push: None,
    };

    #[inline]
    pub fn moving(d_row: i8, d_col: i8) -> Self {
        Self {
            motion: Momentum::new(d_row, d_col),
            push: None,
        }
    }
}

/// Rule trait - one implementation per particle category
pub trait Rule {
    fn decide(&self, n: &Neighborhood, rng: &mut dyn RandomSource) -> Decision;
}

/// Rule registry - dispatch by particle type
pub struct RuleSet {
    powder: PowderRule,
    liquid: LiquidRule,
}

impl RuleSet {
    pub fn new(slime_stickiness: u32) -> Self {
        Self {
            powder: PowderRule::new(),
            liquid: LiquidRule::new(slime_stickiness),
        }
    }

    /// `None` for Empty and Brick: no rule fires and nothing is written.
    #[inline]
    pub fn decide(&self, n: &Neighborhood, rng: &mut dyn RandomSource) -> Option<Decision> {
        match n.kind {
            ParticleType::Sand => Some(self.powder.decide(n, rng)),
            kind if kind.is_liquid() => Some(self.liquid.decide(n, rng)),
            _ => None,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(crate::domain::config::DEFAULT_SLIME_STICKINESS)
    }
}
