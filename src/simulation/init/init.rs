use crate::domain::config::EngineConfig;
use crate::domain::error::EngineError;
use crate::domain::particles::SeedKind;
use crate::spatial::grid::{draw_border, GridState};
use crate::systems::random::RandomSource;
use crate::systems::rules::RuleSet;
use crate::systems::seeder;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core<R: RandomSource>(
    config: EngineConfig,
    rng: R,
) -> Result<SimulationCore<R>, EngineError> {
    if let Err(err) = config.validate() {
        log::warn!("rejected engine config: {}", err);
        return Err(err);
    }

    let mut core = SimulationCore {
        grid: GridState::new(config.width, config.height),
        rules: RuleSet::new(config.slime_stickiness),
        rng,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        pixels: Vec::new(),
        config,
    };

    // Seed first, then frame: any trial that landed on an edge is replaced by Brick.
    let placed = seeder::seed(
        core.grid.current_mut(),
        core.config.initial_seed_count,
        SeedKind::All,
        &core.config.bands,
        &mut core.rng,
    );
    draw_border(core.grid.current_mut());

    log::info!(
        "initialized {}x{} grid: {} particles from {} seed trials",
        core.config.width,
        core.config.height,
        core.grid.current().particle_count(),
        core.config.initial_seed_count
    );
    log::debug!("seeder placed {} particles before the border pass", placed);

    Ok(core)
}
