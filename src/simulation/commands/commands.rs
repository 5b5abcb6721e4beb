use crate::domain::particles::SeedKind;
use crate::spatial::grid::draw_border;
use crate::systems::random::RandomSource;
use crate::systems::seeder;

use super::SimulationCore;

/// Seed into the current buffer between ticks. Occupied cells (the border
/// included) are left alone.
pub(super) fn add_particles<R: RandomSource>(world: &mut SimulationCore<R>, count: u32, kind: SeedKind) -> u32 {
    let placed = seeder::seed(
        world.grid.current_mut(),
        count,
        kind,
        &world.config.bands,
        &mut world.rng,
    );
    log::debug!("add_particles({:?}, {}): placed {}", kind, count, placed);
    placed
}

pub(super) fn clear<R: RandomSource>(world: &mut SimulationCore<R>) {
    let current = world.grid.current_mut();
    current.clear();
    draw_border(current);
    world.frame = 0;
    world.perf_stats.reset();
}
