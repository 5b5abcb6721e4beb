use crate::domain::particles::{Momentum, ParticleType};
use crate::spatial::grid::draw_border;
use crate::systems::random::RandomSource;
use crate::systems::rules::Neighborhood;

use super::{SimulationCore, StepTimer};

pub(super) fn step<R: RandomSource>(world: &mut SimulationCore<R>) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(StepTimer::start()) } else { None };

    // Fresh next buffer: empty interior, brick frame
    let next = world.grid.next_mut();
    next.clear();
    draw_border(next);

    let width = world.grid.width() as i32;
    let height = world.grid.height() as i32;

    let mut processed = 0u32;
    let mut moved = 0u32;
    let mut overwritten = 0u32;
    let mut pushes = 0u32;

    // Row-major, top to bottom, left to right. Later cells see the claims of
    // earlier ones through the next buffer.
    for row in 0..height {
        for col in 0..width {
            let n = Neighborhood::gather(&world.grid, row, col);
            let Some(decision) = world.rules.decide(&n, &mut world.rng) else {
                continue;
            };
            processed += 1;

            let motion = decision.motion;
            let dest_row = (row + motion.d_row as i32).clamp(0, height - 1) as usize;
            let dest_col = (col + motion.d_col as i32).clamp(0, width - 1) as usize;

            let occupant = world.grid.next().kind_unchecked(dest_row, dest_col);
            debug_assert!(
                occupant != ParticleType::Brick,
                "{:?} at ({}, {}) moved into a wall",
                n.kind,
                row,
                col
            );
            if occupant.is_mobile() {
                // Last writer wins; the earlier particle is lost.
                overwritten += 1;
            }
            if motion != Momentum::ZERO {
                moved += 1;
            }

            world.grid.set_next_unchecked(dest_row, dest_col, n.kind, motion);

            if let Some(d_col) = decision.push {
                let push_col = (col + d_col as i32).clamp(0, width - 1) as usize;
                world.grid.set_next_momentum_unchecked(row as usize, push_col, Momentum::DOWN);
                pushes += 1;
            }
        }
    }

    world.grid.swap();
    world.frame += 1;

    if perf_on {
        let stats = &mut world.perf_stats;
        stats.cells_scanned = world.grid.size() as u32;
        stats.particles_processed = processed;
        stats.particles_moved = moved;
        stats.writes_overwritten = overwritten;
        stats.pressure_pushes = pushes;
        stats.particle_count = world.grid.current().particle_count() as u32;
        stats.frame = world.frame;
        if let Some(start) = step_start {
            stats.step_ms = start.elapsed_ms();
        }
    }
}
