//! Injectable random sources.
//!
//! Every generator takes its randomness as a [`RandomSource`] argument so a
//! seeded or scripted source reproduces a batch exactly.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::RandomError;

/// A stream of uniform draws in `[0, 1)`.
///
/// Implementors only supply [`next_unit`](RandomSource::next_unit); the
/// provided helpers validate each draw before shaping it, so a source that
/// hands out NaN or an out-of-range value fails instead of skewing output.
pub trait RandomSource {
    /// Next raw draw.
    fn next_unit(&mut self) -> Result<f64, RandomError>;

    /// Next draw, checked to lie in `[0, 1)`.
    fn unit(&mut self) -> Result<f64, RandomError> {
        let value = self.next_unit()?;
        if (0.0..1.0).contains(&value) {
            Ok(value)
        } else {
            Err(RandomError::InvalidDraw { value })
        }
    }

    /// Uniform value in `[base, base + width)`.
    fn uniform(&mut self, base: f64, width: f64) -> Result<f64, RandomError> {
        Ok(base + self.unit()? * width)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> Result<usize, RandomError> {
        debug_assert!(len > 0, "cannot draw an index from an empty range");
        let scaled = (self.unit()? * len as f64).floor() as usize;
        Ok(scaled.min(len.saturating_sub(1)))
    }

    /// Uniform integer in `base..base + width`.
    fn whole(&mut self, base: u32, width: u32) -> Result<u32, RandomError> {
        Ok(base + (self.unit()? * f64::from(width)).floor() as u32)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> Result<f64, RandomError> {
        (**self).next_unit()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_unit(&mut self) -> Result<f64, RandomError> {
        (**self).next_unit()
    }
}

/// Adapts any [`rand`] generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible source: the same seed yields the same draws on every platform.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> Result<f64, RandomError> {
        Ok(self.rng.gen::<f64>())
    }
}
