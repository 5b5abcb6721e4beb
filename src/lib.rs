//! Granule Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - core/       - Safety macros
//! - domain/     - Particle types, config, errors
//! - spatial/    - Double-buffered grid and the brick border
//! - systems/    - Random source, seeder, movement rules
//! - simulation/ - Stepper, host API and the wasm facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod logging;
pub mod simulation;
pub mod spatial;
pub mod systems;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::init_logging(log::LevelFilter::Info);
    log::info!("granule engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::{EngineConfig, SeedBands};
pub use domain::error::EngineError;
pub use domain::particles::{Momentum, ParticleType, Probe, SeedKind};
pub use simulation::{PerfStats, SimulationCore, World};

// Export particle ids for JS
#[wasm_bindgen]
pub fn pt_empty() -> u8 { domain::particles::PT_EMPTY }
#[wasm_bindgen]
pub fn pt_sand() -> u8 { domain::particles::PT_SAND }
#[wasm_bindgen]
pub fn pt_water() -> u8 { domain::particles::PT_WATER }
#[wasm_bindgen]
pub fn pt_slime() -> u8 { domain::particles::PT_SLIME }
#[wasm_bindgen]
pub fn pt_brick() -> u8 { domain::particles::PT_BRICK }
/// Pass to `World::add_particles` to seed every type by column band
#[wasm_bindgen]
pub fn seed_all() -> u8 { domain::particles::SEED_ALL }
