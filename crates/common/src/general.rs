//! Miscellaneous helpers built on the ports.

use crate::ports::RandomPort;

/// Random integer in `[min, max]`, inclusive on both ends.
///
/// Reversed bounds are swapped rather than rejected.
///
/// ```
/// use utilbelt_common::{random_int, FixedRandomPort};
///
/// let rng = FixedRandomPort::constant(3);
/// assert_eq!(random_int(&rng, 1, 6), 3);
/// assert_eq!(random_int(&rng, 6, 1), 3);
/// ```
pub fn random_int(rng: &dyn RandomPort, min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo, hi)
}
