//! Random number source.
//!
//! Draws from the operating system entropy source rather than a seeded
//! PRNG; the demo treats the values as opaque payload, but the source
//! is cryptographic by contract.

use rand::rngs::OsRng;
use rand::Rng;

use crate::observability::instrument::logged;

/// Inclusive bounds of the value returned to callers.
pub const VALUE_RANGE: (u32, u32) = (1, 100);

/// Inclusive bounds of the bonus value attached to the log event.
const BONUS_RANGE: (u32, u32) = (1, 1000);

/// Source of bounded random integers with a logging side effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSource;

impl RandomSource {
    pub fn new() -> Self {
        Self
    }

    /// Return a random integer in [1, 100].
    ///
    /// Also draws a bonus integer in [1, 1000] that is only attached
    /// to the emitted log event as the `bonus_number` field; the JSON
    /// sink renders it as an extra attribute.
    pub fn sample(&self) -> u32 {
        logged("sample", &(), || {
            let mut rng = OsRng;
            let num = rng.gen_range(VALUE_RANGE.0..=VALUE_RANGE.1);
            let bonus = rng.gen_range(BONUS_RANGE.0..=BONUS_RANGE.1);
            tracing::info!(bonus_number = bonus, "random number is {num}");
            num
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_stays_in_bounds() {
        let source = RandomSource::new();
        for _ in 0..1000 {
            let value = source.sample();
            assert!((1..=100).contains(&value), "out of range: {value}");
        }
    }
}
