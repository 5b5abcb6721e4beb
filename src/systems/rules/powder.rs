//! PowderRule - Sand
//!
//! Falls straight into empty space, otherwise rolls diagonally off Sand or
//! Brick. Sand reads only the previous buffer and never sinks through liquid.

use super::{Decision, Neighborhood, Rule};
use crate::domain::particles::ParticleType;
use crate::systems::random::RandomSource;

pub struct PowderRule;

impl PowderRule {
    pub fn new() -> Self {
        Self
    }

    /// Sand piles on Sand, Brick and the grid edge; liquid holds it in place.
    #[inline]
    fn can_roll_off(&self, n: &Neighborhood) -> bool {
        n.below.is(ParticleType::Sand) || n.below.is_wall()
    }
}

impl Default for PowderRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PowderRule {
    fn decide(&self, n: &Neighborhood, rng: &mut dyn RandomSource) -> Decision {
        if n.below.is_empty() {
            return Decision::moving(1, 0);
        }

        if !self.can_roll_off(n) {
            return Decision::STAY;
        }

        match (n.below_left.is_empty(), n.below_right.is_empty()) {
            (true, true) => {
                let d_col = if rng.coin() { 1 } else { -1 };
                Decision::moving(1, d_col)
            }
            (true, false) => Decision::moving(1, -1),
            (false, true) => Decision::moving(1, 1),
            (false, false) => Decision::STAY,
        }
    }
}
