//! Engine configuration
//!
//! Loaded from JSON by the host or built in code. Every field has a default,
//! so a partial document such as `{"width": 64, "height": 48}` is valid.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::particles::ParticleType;

pub const DEFAULT_WIDTH: u32 = 150;
pub const DEFAULT_HEIGHT: u32 = 100;
pub const DEFAULT_SEED_COUNT: u32 = 2000;
pub const DEFAULT_RNG_SEED: u64 = 12345;
/// Slime moves sideways on roughly one grounded tick in this many.
pub const DEFAULT_SLIME_STICKINESS: u32 = 47;
/// One interior cell inside the brick frame.
pub const MIN_DIMENSION: u32 = 3;
/// Upper bound on `width * height` (4096x4096). Keeps every index inside a
/// 32-bit `usize` and both buffers plus the pixel buffer under ~200 MB.
pub const MAX_CELLS: u64 = 1 << 24;

/// Open fraction of the grid width, `low < x < high` in cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Open-interval membership of `col` in a grid `width` cells wide.
    #[inline]
    pub fn contains(&self, col: u32, width: u32) -> bool {
        let c = col as f64;
        let w = width as f64;
        self.low * w < c && c < self.high * w
    }

    fn validate(&self, name: &str) -> Result<(), EngineError> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(self.low) || !in_unit(self.high) || self.low >= self.high {
            return Err(EngineError::InvalidConfig(format!(
                "band `{}` must satisfy 0 <= low < high <= 1, got {}..{}",
                name, self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Where the seeder places each type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedBands {
    pub sand: Band,
    pub water: Band,
    pub slime: Band,
    /// Columns used when pouring a single type.
    pub pour: Band,
    /// Fraction of the grid height, from the top, used when pouring.
    pub pour_rows_fraction: f64,
}

impl Default for SeedBands {
    fn default() -> Self {
        Self {
            sand: Band::new(1.0 / 5.0, 3.0 / 5.0),
            water: Band::new(2.5 / 5.0, 4.0 / 5.0),
            slime: Band::new(3.5 / 5.0, 5.0 / 5.0),
            pour: Band::new(0.25, 0.75),
            pour_rows_fraction: 1.0 / 8.0,
        }
    }
}

impl SeedBands {
    /// Band a particle type is seeded into; `None` for Empty and Brick.
    pub fn band_of(&self, kind: ParticleType) -> Option<Band> {
        match kind {
            ParticleType::Sand => Some(self.sand),
            ParticleType::Water => Some(self.water),
            ParticleType::Slime => Some(self.slime),
            ParticleType::Empty | ParticleType::Brick => None,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.sand.validate("sand")?;
        self.water.validate("water")?;
        self.slime.validate("slime")?;
        self.pour.validate("pour")?;
        if !(self.pour_rows_fraction > 0.0 && self.pour_rows_fraction <= 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "pour_rows_fraction must be in (0, 1], got {}",
                self.pour_rows_fraction
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub initial_seed_count: u32,
    pub rng_seed: u64,
    pub slime_stickiness: u32,
    pub bands: SeedBands,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            initial_seed_count: DEFAULT_SEED_COUNT,
            rng_seed: DEFAULT_RNG_SEED,
            slime_stickiness: DEFAULT_SLIME_STICKINESS,
            bands: SeedBands::default(),
        }
    }
}

impl EngineConfig {
    pub fn new(width: u32, height: u32, initial_seed_count: u32) -> Self {
        Self {
            width,
            height,
            initial_seed_count,
            ..Self::default()
        }
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // A plain struct of numbers always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::EmptyDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(EngineError::GridTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_DIMENSION,
            });
        }
        if self.cell_count() > MAX_CELLS {
            return Err(EngineError::GridTooLarge {
                width: self.width,
                height: self.height,
                max_cells: MAX_CELLS,
            });
        }
        if self.initial_seed_count as u64 > self.cell_count() {
            return Err(EngineError::TooManySeeds {
                requested: self.initial_seed_count,
                capacity: self.cell_count(),
            });
        }
        if self.slime_stickiness == 0 {
            return Err(EngineError::InvalidConfig(
                "slime_stickiness must be at least 1".to_string(),
            ));
        }
        self.bands.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = EngineConfig::default();
        assert_eq!((c.width, c.height), (150, 100));
        assert_eq!(c.initial_seed_count, 2000);
        assert_eq!(c.slime_stickiness, 47);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = EngineConfig::from_json(r#"{"width": 64, "height": 48, "rng_seed": 7}"#).unwrap();
        assert_eq!((c.width, c.height, c.rng_seed), (64, 48, 7));
        assert_eq!(c.initial_seed_count, DEFAULT_SEED_COUNT);
        assert_eq!(c.bands, SeedBands::default());
    }

    #[test]
    fn rejects_zero_dimension() {
        let err = EngineConfig::new(0, 10, 0).validate().unwrap_err();
        assert_eq!(err, EngineError::EmptyDimension { width: 0, height: 10 });
    }

    #[test]
    fn rejects_grid_without_interior() {
        let err = EngineConfig::new(2, 10, 0).validate().unwrap_err();
        assert!(matches!(err, EngineError::GridTooSmall { min: 3, .. }));
    }

    #[test]
    fn rejects_grids_past_the_cell_limit() {
        let err = EngineConfig::new(70_000, 70_000, 0).validate().unwrap_err();
        assert_eq!(
            err,
            EngineError::GridTooLarge { width: 70_000, height: 70_000, max_cells: MAX_CELLS }
        );
        assert!(EngineConfig::new(u32::MAX, u32::MAX, 0).validate().is_err());
        assert!(EngineConfig::new(4096, 4096, 0).validate().is_ok());
        assert!(EngineConfig::new(4097, 4096, 0).validate().is_err());
    }

    #[test]
    fn rejects_more_seeds_than_cells() {
        let err = EngineConfig::new(4, 4, 17).validate().unwrap_err();
        assert_eq!(err, EngineError::TooManySeeds { requested: 17, capacity: 16 });
        assert!(EngineConfig::new(4, 4, 16).validate().is_ok());
    }

    #[test]
    fn rejects_inverted_band() {
        let json = r#"{"bands": {"sand": {"low": 0.6, "high": 0.2}}}"#;
        let err = EngineConfig::from_json(json).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(msg) if msg.contains("sand")));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            EngineConfig::from_json("{width: }"),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn json_round_trip_preserves_fields() {
        let c = EngineConfig::new(32, 16, 10).with_rng_seed(99);
        let back = EngineConfig::from_json(&c.to_json()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn band_is_open_interval() {
        let b = Band::new(0.2, 0.6);
        // 0.2 * 10 = 2, 0.6 * 10 = 6
        assert!(!b.contains(2, 10));
        assert!(b.contains(3, 10));
        assert!(b.contains(5, 10));
        assert!(!b.contains(6, 10));
    }
}
