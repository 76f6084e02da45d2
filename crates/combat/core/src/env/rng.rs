//! Randomness port for round resolution.
//!
//! Every roll in a round (dodge, miss, damage, crit, action selection,
//! escape attempts) goes through one injected [`CombatRng`]. Nothing in the
//! engine reaches for ambient randomness, so a fight is fully reproducible
//! from its seed.

use std::collections::VecDeque;

use crate::error::{CombatError, Result};

/// Source of uniformly-distributed integers.
///
/// Implementations must be deterministic for a given seed. A failing source
/// returns [`CombatError::RandomnessUnavailable`]; the engine never swallows it.
pub trait CombatRng {
    /// Uniform integer in `[min, max]` inclusive.
    ///
    /// When `min >= max` the result is `min` and no value is consumed.
    fn between(&mut self, min: u32, max: u32) -> Result<u32>;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&mut self) -> Result<u32> {
        self.between(1, 100)
    }

    /// Percent check: succeeds when a d100 roll is at most `percent`.
    ///
    /// Always consumes one roll, even for 0 or 100, so the stream position
    /// does not depend on the numbers involved.
    fn chance(&mut self, percent: u32) -> Result<bool> {
        Ok(self.roll_d100()? <= percent)
    }
}

impl<R: CombatRng + ?Sized> CombatRng for &mut R {
    fn between(&mut self, min: u32, max: u32) -> Result<u32> {
        (**self).between(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same fight.
#[derive(Clone, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn seeded(seed: u64) -> Self {
        // Advance once so that small seeds don't start in a low-entropy state.
        Self {
            state: Self::pcg_step(seed ^ 0x9e3779b97f4a7c15),
        }
    }

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl CombatRng for PcgRng {
    fn between(&mut self, min: u32, max: u32) -> Result<u32> {
        if min >= max {
            return Ok(min);
        }
        let span = (max - min) as u64 + 1;
        Ok(min + (self.next_u32() as u64 % span) as u32)
    }
}

/// Replays a fixed queue of values.
///
/// Each call to [`CombatRng::between`] pops the next value and clamps it into
/// the requested range. When the queue runs dry the source reports
/// [`CombatError::RandomnessUnavailable`], which makes scripted scenarios fail
/// loudly if they consume more rolls than expected.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Queue more values behind the ones already scripted.
    pub fn push(&mut self, values: impl IntoIterator<Item = u32>) {
        self.values.extend(values);
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl CombatRng for ScriptedRng {
    fn between(&mut self, min: u32, max: u32) -> Result<u32> {
        if min >= max {
            return Ok(min);
        }
        let value = self
            .values
            .pop_front()
            .ok_or(CombatError::RandomnessUnavailable)?;
        self.consumed += 1;
        Ok(value.clamp(min, max))
    }
}
