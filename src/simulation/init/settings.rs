use crate::domain::error::EngineError;
use crate::systems::random::RandomSource;
use crate::systems::rules::RuleSet;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics<R: RandomSource>(world: &mut SimulationCore<R>, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<R: RandomSource>(world: &SimulationCore<R>) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_slime_stickiness<R: RandomSource>(
    world: &mut SimulationCore<R>,
    stickiness: u32,
) -> Result<(), EngineError> {
    if stickiness == 0 {
        return Err(EngineError::InvalidConfig("slime_stickiness must be at least 1".into()));
    }
    world.config.slime_stickiness = stickiness;
    world.rules = RuleSet::new(stickiness);
    log::debug!("slime stickiness set to {}", stickiness);
    Ok(())
}
