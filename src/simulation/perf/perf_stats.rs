use wasm_bindgen::prelude::*;

/// Per-tick counters, filled only while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) cells_scanned: u32,
    pub(super) particles_processed: u32,
    pub(super) particles_moved: u32,
    /// Writes that landed on a particle already placed this tick.
    pub(super) writes_overwritten: u32,
    pub(super) pressure_pushes: u32,
    pub(super) particle_count: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_scanned(&self) -> u32 { self.cells_scanned }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn writes_overwritten(&self) -> u32 { self.writes_overwritten }
    #[wasm_bindgen(getter)]
    pub fn pressure_pushes(&self) -> u32 { self.pressure_pushes }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
