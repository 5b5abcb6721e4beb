//! Particle types, momentum and the color lookup table
//!
//! A cell stores a `ParticleType`; its display color is derived from the type
//! through `ParticleType::color`. Rules never branch on colors.
//!
//! Colors are ARGB8888 (0xAARRGGBB).

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Numeric particle id shared with the host.
pub type ParticleId = u8;

pub const PT_EMPTY: ParticleId = 0;
pub const PT_SAND: ParticleId = 1;
pub const PT_WATER: ParticleId = 2;
pub const PT_SLIME: ParticleId = 3;
pub const PT_BRICK: ParticleId = 4;
/// Host id for "seed every type" replenishment.
pub const SEED_ALL: ParticleId = 255;

pub const PARTICLE_TYPE_COUNT: usize = 5;

pub const NOTHING_COLOR: u32 = 0x0000_0000;
/// Returned for reads outside the grid. Must differ from `NOTHING_COLOR`.
pub const OUT_OF_BOUNDS_COLOR: u32 = 0x0000_0001;

pub const SAND_COLOR: u32 = 0xFFFF_BB00;
pub const WATER_COLOR: u32 = 0xC000_88FF;
pub const SLIME_COLOR: u32 = 0xD0FF_88FF;
pub const BRICK_COLOR: u32 = 0xFFFF_0000;

const COLORS: [u32; PARTICLE_TYPE_COUNT] = [
    NOTHING_COLOR,
    SAND_COLOR,
    WATER_COLOR,
    SLIME_COLOR,
    BRICK_COLOR,
];

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleType {
    #[default]
    Empty = PT_EMPTY,
    Sand = PT_SAND,
    Water = PT_WATER,
    Slime = PT_SLIME,
    Brick = PT_BRICK,
}

impl ParticleType {
    pub const ALL: [ParticleType; PARTICLE_TYPE_COUNT] = [
        ParticleType::Empty,
        ParticleType::Sand,
        ParticleType::Water,
        ParticleType::Slime,
        ParticleType::Brick,
    ];

    #[inline]
    pub fn id(self) -> ParticleId {
        self as ParticleId
    }

    #[inline]
    pub fn from_id(id: ParticleId) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    #[inline]
    pub fn color(self) -> u32 {
        COLORS[self as usize]
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == ParticleType::Empty
    }

    /// Water and Slime share the grounded-flow rule.
    #[inline]
    pub fn is_liquid(self) -> bool {
        matches!(self, ParticleType::Water | ParticleType::Slime)
    }

    /// Types that the per-cell rules move. Brick and Empty are skipped.
    #[inline]
    pub fn is_mobile(self) -> bool {
        matches!(self, ParticleType::Sand | ParticleType::Water | ParticleType::Slime)
    }
}

/// Result of a neighbour read: a cell inside the grid or the outside sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    Cell(ParticleType),
    OutOfBounds,
}

impl Probe {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Probe::Cell(ParticleType::Empty)
    }

    #[inline]
    pub fn is(self, kind: ParticleType) -> bool {
        self == Probe::Cell(kind)
    }

    /// Brick and the outside of the grid both act as walls.
    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, Probe::Cell(ParticleType::Brick) | Probe::OutOfBounds)
    }

    #[inline]
    pub fn color(self) -> u32 {
        match self {
            Probe::Cell(kind) => kind.color(),
            Probe::OutOfBounds => OUT_OF_BOUNDS_COLOR,
        }
    }
}

/// Displacement a particle executed on its last tick, each axis in {-1, 0, 1}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Momentum {
    pub d_row: i8,
    pub d_col: i8,
}

impl Momentum {
    pub const ZERO: Momentum = Momentum { d_row: 0, d_col: 0 };
    /// Straight down. Also the value written onto a pushed Water neighbour.
    pub const DOWN: Momentum = Momentum { d_row: 1, d_col: 0 };

    #[inline]
    pub fn new(d_row: i8, d_col: i8) -> Self {
        debug_assert!(
            (-1..=1).contains(&d_row) && (-1..=1).contains(&d_col),
            "momentum out of range: ({}, {})",
            d_row,
            d_col
        );
        Self { d_row, d_col }
    }

    #[inline]
    pub fn is_lateral(self) -> bool {
        self.d_col != 0
    }
}

/// What `seed` may place. Brick is deliberately absent: interior bricks would
/// not survive a tick because only the border is redrawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
    All,
    Sand,
    Water,
    Slime,
}

impl SeedKind {
    /// The single type this kind places, or `None` for `All`.
    pub fn particle(self) -> Option<ParticleType> {
        match self {
            SeedKind::All => None,
            SeedKind::Sand => Some(ParticleType::Sand),
            SeedKind::Water => Some(ParticleType::Water),
            SeedKind::Slime => Some(ParticleType::Slime),
        }
    }
}

impl TryFrom<ParticleId> for SeedKind {
    type Error = EngineError;

    fn try_from(id: ParticleId) -> Result<Self, Self::Error> {
        match id {
            SEED_ALL => Ok(SeedKind::All),
            PT_SAND => Ok(SeedKind::Sand),
            PT_WATER => Ok(SeedKind::Water),
            PT_SLIME => Ok(SeedKind::Slime),
            other => Err(EngineError::UnknownParticle(other)),
        }
    }
}
