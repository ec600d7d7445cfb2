//! Scripted [`RandomSource`] for exact, hand-checkable generator output.

use std::collections::VecDeque;

use crate::error::RandomError;
use crate::generator::RandomSource;

/// Replays a fixed list of draws, then reports exhaustion.
///
/// Draws are handed out unvalidated; range checking is the job of
/// [`RandomSource::unit`], which lets tests feed deliberately bad values.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    drawn: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            drawn: 0,
        }
    }

    /// `count` copies of the same draw.
    pub fn repeat(value: f64, count: usize) -> Self {
        Self::new(std::iter::repeat(value).take(count))
    }

    /// One constant draw per record: `per_record` copies of each value in turn.
    ///
    /// Makes every generated record a function of a single number.
    pub fn blocks(values: impl IntoIterator<Item = f64>, per_record: usize) -> Self {
        Self::new(
            values
                .into_iter()
                .flat_map(|v| std::iter::repeat(v).take(per_record)),
        )
    }

    /// Draws handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Draws still queued.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> Result<f64, RandomError> {
        let value = self
            .draws
            .pop_front()
            .ok_or(RandomError::Exhausted { drawn: self.drawn })?;
        self.drawn += 1;
        Ok(value)
    }
}
