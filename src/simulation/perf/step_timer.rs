//! Wall-clock timing for `PerfStats::step_ms`
//!
//! Browsers have no monotonic `Instant`, so wasm32 reads `Date.now()`.

#[cfg(target_arch = "wasm32")]
type Origin = f64;
#[cfg(not(target_arch = "wasm32"))]
type Origin = std::time::Instant;

#[derive(Clone, Copy)]
pub(crate) struct StepTimer {
    origin: Origin,
}

impl StepTimer {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn start() -> Self {
        Self { origin: js_sys::Date::now() }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn start() -> Self {
        Self { origin: std::time::Instant::now() }
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.origin
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
