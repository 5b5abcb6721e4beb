//! LiquidRule - Water and Slime
//!
//! - Falls only when the cell below is empty in both buffers, so two liquid
//!   cells never claim the same gap in one tick.
//! - Grounded liquid flows to a doubly-empty side (random when both are),
//!   otherwise keeps its established column direction.
//! - Slime only attempts lateral flow on one grounded tick in `stickiness`.
//! - Water inside a contiguous body pushes its upstream neighbour: the
//!   neighbour's next-buffer momentum becomes `Momentum::DOWN`.

use super::{Decision, Neighborhood, Rule};
use crate::domain::particles::ParticleType;
use crate::systems::random::RandomSource;

pub struct LiquidRule {
    stickiness: u32,
}

impl LiquidRule {
    pub fn new(stickiness: u32) -> Self {
        Self {
            stickiness: stickiness.max(1),
        }
    }

    #[inline]
    fn can_fall(&self, n: &Neighborhood) -> bool {
        n.below.is_empty() && n.next_below.is_empty()
    }

    /// Column step for a grounded particle, 0 to stay.
    fn lateral(&self, n: &Neighborhood, rng: &mut dyn RandomSource) -> i8 {
        match (n.side_free(-1), n.side_free(1)) {
            (true, true) => {
                if rng.coin() {
                    1
                } else {
                    -1
                }
            }
            (true, false) => -1,
            (false, true) => 1,
            (false, false) => {
                // Keep flowing, but never into a wall: the border must survive the tick.
                let d_col = n.momentum.d_col;
                if d_col != 0 && !n.side(d_col).is_wall() {
                    d_col
                } else {
                    0
                }
            }
        }
    }

    /// Upstream column offset to push, if this Water sits inside a body of water.
    fn pressure(&self, n: &Neighborhood) -> Option<i8> {
        if n.kind != ParticleType::Water || !n.momentum.is_lateral() {
            return None;
        }
        if !(n.left.is(ParticleType::Water) && n.right.is(ParticleType::Water)) {
            return None;
        }
        let upstream = -n.momentum.d_col;
        // Only push a neighbour that has already landed in the next buffer.
        n.next_side(upstream)
            .is(ParticleType::Water)
            .then_some(upstream)
    }
}

impl Rule for LiquidRule {
    fn decide(&self, n: &Neighborhood, rng: &mut dyn RandomSource) -> Decision {
        if self.can_fall(n) {
            return Decision::moving(1, 0);
        }

        let push = self.pressure(n);

        if n.kind == ParticleType::Slime && rng.below(self.stickiness) != 0 {
            return Decision::STAY;
        }

        let mut decision = Decision::moving(0, self.lateral(n, rng));
        decision.push = push;
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::config::DEFAULT_SLIME_STICKINESS;
    use crate::domain::particles::{Momentum, Probe};
    use crate::systems::random::{sim_rng, Scripted};

    fn water() -> LiquidRule {
        LiquidRule::new(DEFAULT_SLIME_STICKINESS)
    }

    #[test]
    fn falls_only_when_below_is_empty_in_both_buffers() {
        let rule = water();
        let mut rng = Scripted::new(&[1]);

        let open_water = open(ParticleType::Water);
        assert_eq!(rule.decide(&open_water, &mut rng).motion, Momentum::DOWN);

        let claimed = Neighborhood { next_below: WATER, ..open_water };
        assert_eq!(rule.decide(&claimed, &mut rng).motion.d_row, 0);
    }

    #[test]
    fn grounded_water_picks_random_side_when_both_free() {
        let rule = water();
        let n = on_floor(ParticleType::Water);
        assert_eq!(rule.decide(&n, &mut Scripted::new(&[1])).motion, Momentum::new(0, 1));
        assert_eq!(rule.decide(&n, &mut Scripted::new(&[0])).motion, Momentum::new(0, -1));
    }

    #[test]
    fn side_claimed_in_next_buffer_is_not_free() {
        let rule = water();
        let n = Neighborhood { next_left: SAND, ..on_floor(ParticleType::Water) };
        assert_eq!(rule.decide(&n, &mut Scripted::new(&[0])).motion, Momentum::new(0, 1));

        let n = Neighborhood { right: WATER, ..on_floor(ParticleType::Water) };
        assert_eq!(rule.decide(&n, &mut Scripted::new(&[1])).motion, Momentum::new(0, -1));
    }

    #[test]
    fn blocked_water_keeps_established_direction() {
        let rule = water();
        let n = Neighborhood {
            momentum: Momentum::new(0, 1),
            left: SAND,
            right: SLIME,
            ..on_floor(ParticleType::Water)
        };
        let mut rng = Scripted::new(&[0]);
        assert_eq!(rule.decide(&n, &mut rng).motion, Momentum::new(0, 1));
        assert_eq!(rng.consumed(), 0);

        let still = Neighborhood { momentum: Momentum::ZERO, ..n };
        assert_eq!(rule.decide(&still, &mut rng), Decision::STAY);
    }

    #[test]
    fn established_direction_never_enters_a_wall() {
        let rule = water();
        for wall in [BRICK, Probe::OutOfBounds] {
            let n = Neighborhood {
                momentum: Momentum::new(0, -1),
                left: wall,
                right: SAND,
                ..on_floor(ParticleType::Water)
            };
            assert_eq!(rule.decide(&n, &mut Scripted::new(&[0])), Decision::STAY);
        }
    }

    #[test]
    fn water_inside_a_body_pushes_its_upstream_neighbour() {
        let rule = water();
        let n = Neighborhood {
            momentum: Momentum::new(0, 1),
            left: WATER,
            right: WATER,
            next_left: WATER,
            ..on_floor(ParticleType::Water)
        };
        let d = rule.decide(&n, &mut Scripted::new(&[0]));
        assert_eq!(d.push, Some(-1));
        assert_eq!(d.motion, Momentum::new(0, 1));

        let flowing_left = Neighborhood {
            momentum: Momentum::new(0, -1),
            next_left: E,
            next_right: WATER,
            ..n
        };
        assert_eq!(rule.decide(&flowing_left, &mut Scripted::new(&[0])).push, Some(1));
    }

    #[test]
    fn no_push_without_momentum_or_body() {
        let rule = water();
        let body = Neighborhood {
            left: WATER,
            right: WATER,
            next_left: WATER,
            ..on_floor(ParticleType::Water)
        };
        assert_eq!(rule.decide(&body, &mut Scripted::new(&[0])).push, None);

        let edge = Neighborhood { momentum: Momentum::new(0, 1), right: SAND, ..body };
        assert_eq!(rule.decide(&edge, &mut Scripted::new(&[0])).push, None);

        let unlanded = Neighborhood { momentum: Momentum::new(0, 1), next_left: E, ..body };
        assert_eq!(rule.decide(&unlanded, &mut Scripted::new(&[0])).push, None);

        let slime = Neighborhood { kind: ParticleType::Slime, momentum: Momentum::new(0, 1), ..body };
        assert_eq!(rule.decide(&slime, &mut Scripted::new(&[0])).push, None);
    }

    #[test]
    fn slime_only_moves_when_the_roll_hits() {
        let rule = water();
        let n = on_floor(ParticleType::Slime);

        // Roll 5 of 47 misses: stays and draws nothing else.
        let mut miss = Scripted::new(&[5, 1]);
        assert_eq!(rule.decide(&n, &mut miss), Decision::STAY);
        assert_eq!(miss.consumed(), 1);

        // Roll 0 hits, then the side coin picks right.
        let mut hit = Scripted::new(&[0, 1]);
        assert_eq!(rule.decide(&n, &mut hit).motion, Momentum::new(0, 1));
        assert_eq!(hit.consumed(), 2);
    }

    #[test]
    fn slime_falls_regardless_of_stickiness() {
        let rule = water();
        let mut rng = Scripted::new(&[5]);
        assert_eq!(rule.decide(&open(ParticleType::Slime), &mut rng).motion, Momentum::DOWN);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn slime_lateral_rate_is_about_one_in_stickiness() {
        let rule = water();
        let n = on_floor(ParticleType::Slime);
        let mut rng = sim_rng(2024);
        let trials = 47 * 200;
        let moves = (0..trials)
            .filter(|_| rule.decide(&n, &mut rng).motion.is_lateral())
            .count();
        // Expect 200; allow five standard deviations (~14 each).
        assert!((130..=270).contains(&moves), "moves = {}", moves);
    }
}
