use crate::systems::random::RandomSource;

use super::SimulationCore;

/// Canvas `ImageData` wants RGBA bytes, which on a little-endian `u32` view
/// is ABGR. Alpha and green stay put; red and blue trade places.
#[inline]
pub fn argb_to_abgr(argb: u32) -> u32 {
    let ag = argb & 0xFF00_FF00;
    let r = (argb >> 16) & 0xFF;
    let b = argb & 0xFF;
    ag | (b << 16) | r
}

/// Refresh `world.pixels` from the current buffer. Empty is `NOTHING_COLOR`,
/// fully transparent, so the page background shows through.
pub(super) fn extract_pixels<R: RandomSource>(world: &mut SimulationCore<R>) {
    let current = world.grid.current();
    world.pixels.resize(current.size(), 0);

    for (dst, &kind) in world.pixels.iter_mut().zip(current.cells.iter()) {
        *dst = argb_to_abgr(kind.color());
    }
}
