//! Seeder - random placement of new particles into empty cells
//!
//! `SeedKind::All` scatters over the whole grid and picks the type from the
//! horizontal band the column falls in. A single kind is "poured": trials are
//! confined to a central span of columns in the top interior rows, and still
//! only land where the column is inside that kind's own band.

use crate::domain::config::SeedBands;
use crate::domain::particles::{Momentum, ParticleType, SeedKind};
use crate::spatial::grid::CellBuffer;

use super::random::RandomSource;

/// Run `count` random trials against `buffer`, placing a particle wherever
/// the trial lands on an Empty cell. Occupied cells are never overwritten.
///
/// Returns the number of particles placed.
pub fn seed<R: RandomSource + ?Sized>(
    buffer: &mut CellBuffer,
    count: u32,
    kind: SeedKind,
    bands: &SeedBands,
    rng: &mut R,
) -> u32 {
    let width = buffer.width();
    let height = buffer.height();
    // No interior inside the frame
    if width < 3 || height < 3 {
        return 0;
    }

    let mut placed = 0u32;
    for _ in 0..count {
        let (row, col) = match kind.particle() {
            None => (rng.below(height - 1), rng.below(width - 1)),
            Some(_) => pour_coords(width, height, bands, rng),
        };

        if !buffer.probe(row as i32, col as i32).is_empty() {
            continue;
        }

        let particle = match kind.particle() {
            Some(p) => bands.band_of(p).filter(|b| b.contains(col, width)).map(|_| p),
            None => banded_type(col, width, bands, rng),
        };

        if let Some(p) = particle {
            buffer.set_unchecked(row as usize, col as usize, p, Momentum::ZERO);
            placed += 1;
        }
    }
    placed
}

/// Row 0 is the frame, so pour rows start at row 1.
fn pour_coords<R: RandomSource + ?Sized>(width: u32, height: u32, bands: &SeedBands, rng: &mut R) -> (u32, u32) {
    let rows = ((height as f64 * bands.pour_rows_fraction) as u32).clamp(1, height - 2);
    let lo = ((bands.pour.low * width as f64) as u32).min(width - 1);
    let hi = ((bands.pour.high * width as f64) as u32).clamp(lo + 1, width);
    (1 + rng.below(rows), lo + rng.below(hi - lo))
}

/// Type for column `col` under the band layout. Where bands overlap one of the
/// matching types is picked at random; outside every band nothing is placed.
fn banded_type<R: RandomSource + ?Sized>(
    col: u32,
    width: u32,
    bands: &SeedBands,
    rng: &mut R,
) -> Option<ParticleType> {
    let candidates = [
        (ParticleType::Sand, bands.sand),
        (ParticleType::Water, bands.water),
        (ParticleType::Slime, bands.slime),
    ];

    let mut matching = [ParticleType::Empty; 3];
    let mut n = 0usize;
    for (kind, band) in candidates {
        if band.contains(col, width) {
            matching[n] = kind;
            n += 1;
        }
    }

    match n {
        0 => None,
        1 => Some(matching[0]),
        _ => Some(matching[rng.below(n as u32) as usize]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::grid::draw_border;
    use crate::systems::random::sim_rng;

    #[test]
    fn all_types_follow_their_bands() {
        let bands = SeedBands::default();
        let mut buf = CellBuffer::new(100, 40);
        let mut rng = sim_rng(3);
        let placed = seed(&mut buf, 3000, SeedKind::All, &bands, &mut rng);
        assert!(placed > 0);

        for row in 0..40 {
            for col in 0..100u32 {
                let kind = buf.kind_unchecked(row, col as usize);
                let band = match kind {
                    ParticleType::Sand => bands.sand,
                    ParticleType::Water => bands.water,
                    ParticleType::Slime => bands.slime,
                    ParticleType::Empty => continue,
                    ParticleType::Brick => panic!("seeder placed brick"),
                };
                assert!(band.contains(col, 100), "{:?} at col {}", kind, col);
            }
        }
        assert!(buf.count_of(ParticleType::Sand) > 0);
        assert!(buf.count_of(ParticleType::Water) > 0);
        assert!(buf.count_of(ParticleType::Slime) > 0);
    }

    #[test]
    fn overlapping_bands_mix_types() {
        // Columns 26..30 of a 50-wide grid sit in both the sand and water bands.
        let bands = SeedBands::default();
        let mut rng = sim_rng(11);
        let mut saw = [false; 2];
        for _ in 0..64 {
            match banded_type(27, 50, &bands, &mut rng) {
                Some(ParticleType::Sand) => saw[0] = true,
                Some(ParticleType::Water) => saw[1] = true,
                other => panic!("unexpected {:?}", other),
            }
        }
        assert_eq!(saw, [true, true]);
        assert_eq!(banded_type(2, 50, &bands, &mut rng), None);
    }

    #[test]
    fn single_kind_pours_near_the_top_centre() {
        let bands = SeedBands::default();
        let mut buf = CellBuffer::new(80, 80);
        let mut rng = sim_rng(5);
        let placed = seed(&mut buf, 500, SeedKind::Water, &bands, &mut rng);
        assert!(placed > 0);
        assert_eq!(buf.count_of(ParticleType::Water) as u32, placed);

        for row in 0..80 {
            for col in 0..80u32 {
                if buf.kind_unchecked(row, col as usize) == ParticleType::Water {
                    assert!((1..=10).contains(&row), "row {}", row);
                    assert!((20..60).contains(&col), "col {}", col);
                }
            }
        }
    }

    #[test]
    fn poured_kinds_stay_inside_their_own_band() {
        let bands = SeedBands::default();
        for (kind, particle, band) in [
            (SeedKind::Sand, ParticleType::Sand, bands.sand),
            (SeedKind::Water, ParticleType::Water, bands.water),
            (SeedKind::Slime, ParticleType::Slime, bands.slime),
        ] {
            let mut buf = CellBuffer::new(100, 100);
            let mut rng = sim_rng(17);
            let placed = seed(&mut buf, 2000, kind, &bands, &mut rng);
            assert!(placed > 0, "{:?} placed nothing", kind);

            for row in 0..100 {
                for col in 0..100u32 {
                    if buf.kind_unchecked(row, col as usize) == particle {
                        assert!(band.contains(col, 100), "{:?} at col {}", kind, col);
                    }
                }
            }
        }
    }

    #[test]
    fn pour_reaches_short_grids() {
        let bands = SeedBands::default();
        for height in [3, 8, 12, 15] {
            let mut buf = CellBuffer::new(40, height);
            draw_border(&mut buf);
            let mut rng = sim_rng(8);
            let placed = seed(&mut buf, 500, SeedKind::Sand, &bands, &mut rng);
            assert!(placed > 0, "height {} placed nothing", height);
            assert_eq!(buf.count_of(ParticleType::Sand) as u32, placed);
        }
    }

    #[test]
    fn frameless_buffers_are_left_alone() {
        let bands = SeedBands::default();
        let mut buf = CellBuffer::new(40, 2);
        let mut rng = sim_rng(8);
        assert_eq!(seed(&mut buf, 100, SeedKind::Water, &bands, &mut rng), 0);
        assert_eq!(seed(&mut buf, 100, SeedKind::All, &bands, &mut rng), 0);
    }

    #[test]
    fn never_overwrites_occupied_cells() {
        let bands = SeedBands::default();
        let mut buf = CellBuffer::new(8, 8);
        for idx in 0..buf.size() {
            buf.cells[idx] = ParticleType::Brick;
        }
        let mut rng = sim_rng(9);
        assert_eq!(seed(&mut buf, 200, SeedKind::Sand, &bands, &mut rng), 0);
        assert_eq!(seed(&mut buf, 200, SeedKind::All, &bands, &mut rng), 0);
        assert_eq!(buf.count_of(ParticleType::Brick), 64);
    }

    #[test]
    fn repeated_calls_only_fill_remaining_space() {
        let bands = SeedBands::default();
        let mut buf = CellBuffer::new(40, 24);
        let mut rng = sim_rng(21);
        let first = seed(&mut buf, 300, SeedKind::Slime, &bands, &mut rng);
        let before = buf.clone();
        let second = seed(&mut buf, 300, SeedKind::Slime, &bands, &mut rng);

        assert_eq!(buf.count_of(ParticleType::Slime) as u32, first + second);
        for idx in 0..buf.size() {
            if before.cells[idx] != ParticleType::Empty {
                assert_eq!(buf.cells[idx], before.cells[idx]);
            }
        }
    }
}
