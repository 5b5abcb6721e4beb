//! Engine errors

use thiserror::Error;

/// Errors reported by configuration and host-facing operations.
///
/// Unchecked buffer writes are not represented here: they are crate-private
/// and only ever called with clamped coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyDimension { width: u32, height: u32 },

    #[error("grid {width}x{height} is smaller than the {min}x{min} minimum")]
    GridTooSmall { width: u32, height: u32, min: u32 },

    #[error("grid {width}x{height} exceeds the {max_cells}-cell limit")]
    GridTooLarge { width: u32, height: u32, max_cells: u64 },

    #[error("cannot seed {requested} particles into {capacity} cells")]
    TooManySeeds { requested: u32, capacity: u64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("particle id {0} cannot be seeded")]
    UnknownParticle(u8),
}
