use wasm_bindgen::prelude::*;

use crate::domain::error::EngineError;
use crate::domain::particles::{ParticleType, SeedKind};

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Addresses of the buffers JS reads straight out of wasm memory.
#[wasm_bindgen]
pub struct AbiLayout {
    types_ptr: u32,
    types_len_bytes: u32,
    pixels_ptr: u32,
    pixels_len_elements: u32,
    pixels_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn types_ptr(&self) -> u32 { self.types_ptr }
    #[wasm_bindgen(getter)]
    pub fn types_len_bytes(&self) -> u32 { self.types_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn pixels_ptr(&self) -> u32 { self.pixels_ptr }
    #[wasm_bindgen(getter)]
    pub fn pixels_len_elements(&self) -> u32 { self.pixels_len_elements }
    #[wasm_bindgen(getter)]
    pub fn pixels_len_bytes(&self) -> u32 { self.pixels_len_bytes }
}

#[wasm_bindgen]
pub struct World {
    core: SimulationCore,
}

#[wasm_bindgen]
impl World {
    /// Create a seeded, bordered world
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, initial_seed_count: u32) -> Result<World, JsValue> {
        let core = SimulationCore::initialize(width, height, initial_seed_count).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<World, JsValue> {
        let core = SimulationCore::from_config_json(&json).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn count_of(&self, particle: u8) -> u32 {
        ParticleType::from_id(particle).map_or(0, |kind| self.core.count_of(kind) as u32)
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    pub fn set_slime_stickiness(&mut self, stickiness: u32) -> Result<(), JsValue> {
        self.core.set_slime_stickiness(stickiness).map_err(js_error)
    }

    /// Seed `count` trials of a particle id (`seed_all()` for every type).
    /// Returns the number placed.
    pub fn add_particles(&mut self, count: u32, particle: u8) -> Result<u32, JsValue> {
        let kind = SeedKind::try_from(particle).map_err(js_error)?;
        Ok(self.core.add_particles(count, kind))
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    /// Packed ARGB color at (row, col); 1 outside the grid
    pub fn current_color_at(&self, row: i32, col: i32) -> u32 {
        self.core.current_color_at(row, col)
    }

    // === RENDERING ===

    /// Refresh the ABGR pixel buffer and return its address
    pub fn extract_pixels(&mut self) -> *const u32 {
        self.core.extract_pixels().as_ptr()
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }

    /// Pointer to the current type array (one byte per cell). Changes on
    /// every step, since the buffers swap.
    pub fn types_ptr(&self) -> *const u8 {
        self.core.types_ptr()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let pixels_len = self.core.pixels_len();
        AbiLayout {
            types_ptr: self.core.types_ptr() as u32,
            types_len_bytes: self.core.grid().size() as u32,
            pixels_ptr: self.core.pixels_ptr() as u32,
            pixels_len_elements: pixels_len as u32,
            pixels_len_bytes: (pixels_len * std::mem::size_of::<u32>()) as u32,
        }
    }
}
