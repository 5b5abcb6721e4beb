//! Simulation - tick orchestration and the host-facing core
//!
//! `SimulationCore` owns the grid, the rule set and the random source. It is
//! the only writer of the grid during a tick and the only caller of
//! `GridState::swap`; nothing outside holds a buffer reference across a step.
//!
//! Per tick (see `step/step.rs`):
//! 1. clear the next buffer and draw the brick border into it
//! 2. scan the current buffer row-major, asking the rules about every particle
//! 3. write each particle into the next buffer at its clamped destination
//! 4. swap buffers

use crate::domain::config::EngineConfig;
use crate::domain::error::EngineError;
use crate::domain::particles::{Momentum, ParticleType, SeedKind};
use crate::spatial::grid::GridState;
use crate::systems::random::{sim_rng, RandomSource, SimRng};
use crate::systems::rules::RuleSet;

#[path = "perf/step_timer.rs"]
mod step_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{AbiLayout, World};
pub use perf_stats::PerfStats;
pub use render_extract::argb_to_abgr;

use step_timer::StepTimer;

/// The simulation engine
pub struct SimulationCore<R = SimRng> {
    config: EngineConfig,
    grid: GridState,
    rules: RuleSet,
    rng: R,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    // Host pixel buffer (ABGR), filled on demand
    pixels: Vec<u32>,
}

impl SimulationCore<SimRng> {
    /// Allocate both buffer pairs, seed every type and draw the border.
    pub fn initialize(width: u32, height: u32, initial_seed_count: u32) -> Result<Self, EngineError> {
        Self::from_config(EngineConfig::new(width, height, initial_seed_count))
    }

    pub fn from_config(config: EngineConfig) -> Result<Self, EngineError> {
        let rng = sim_rng(config.rng_seed);
        Self::with_rng(config, rng)
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        Self::from_config(EngineConfig::from_json(json)?)
    }
}

impl<R: RandomSource> SimulationCore<R> {
    /// Build with a caller-supplied random source.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, EngineError> {
        init::create_simulation_core(config, rng)
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    /// Completed ticks.
    pub fn frame(&self) -> u64 { self.frame }

    /// Read-only view of both buffers.
    pub fn grid(&self) -> &GridState { &self.grid }

    /// Advance exactly one tick.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Color of the current buffer at (row, col), `OUT_OF_BOUNDS_COLOR` outside.
    pub fn current_color_at(&self, row: i32, col: i32) -> u32 {
        self.grid.color_at(row, col)
    }

    pub fn type_at(&self, row: i32, col: i32) -> Option<ParticleType> {
        self.grid.kind_at(row, col)
    }

    pub fn momentum_at(&self, row: i32, col: i32) -> Momentum {
        self.grid.momentum_at(row, col)
    }

    /// Seed `count` trials of `kind` into the current buffer. Returns how many
    /// particles were placed.
    pub fn add_particles(&mut self, count: u32, kind: SeedKind) -> u32 {
        commands::add_particles(self, count, kind)
    }

    /// Empty the grid, keeping the border.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Sand, Water and Slime cells in the current buffer.
    pub fn particle_count(&self) -> usize {
        self.grid.current().particle_count()
    }

    pub fn count_of(&self, kind: ParticleType) -> usize {
        self.grid.current().count_of(kind)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_slime_stickiness(&mut self, stickiness: u32) -> Result<(), EngineError> {
        settings::set_slime_stickiness(self, stickiness)
    }

    /// Fill the host pixel buffer from the current buffer and return it.
    pub fn extract_pixels(&mut self) -> &[u32] {
        render_extract::extract_pixels(self);
        &self.pixels
    }

    /// Pointer to the pixel buffer (for JS rendering). Valid until the next
    /// `extract_pixels`.
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }

    /// Pointer to the current buffer's type bytes.
    pub fn types_ptr(&self) -> *const u8 {
        self.grid.current().cells.as_ptr() as *const u8
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
