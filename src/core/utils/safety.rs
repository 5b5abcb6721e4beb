//! Checked-in-debug, unchecked-in-release slice access
//!
//! The stepper clamps every destination before writing, so the hot loop does
//! not need a bounds check in release builds. Debug builds keep the check and
//! panic with the offending index instead of corrupting a neighbouring row.
//!
//! Usage:
//! ```rust
//! use granule_engine::fast;
//!
//! let cells = vec![0u8, 1, 2, 3];
//! let v = *fast!(cells, [2]);
//! assert_eq!(v, 2);
//!
//! let mut momentum = vec![0i8; 4];
//! fast!(momentum, [1] = -1);
//! assert_eq!(momentum[1], -1);
//! ```

/// Index a slice, bounds-checked only when `debug_assertions` is on.
///
/// - `fast!(slice, [i])` yields `&slice[i]`
/// - `fast!(slice, [i] = v)` stores `v` at `i`
///
/// Callers in release builds must guarantee `i < slice.len()`.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
