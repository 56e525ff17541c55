//! Entropy sources feeding the masked gates.
//!
//! Every masked gate re-shares its operands and therefore consumes fresh
//! randomness. This module provides the [`EntropySource`] seam the gates draw
//! from, together with the three scheduling policies:
//!
//! * [`CryptoEntropy`] — unbounded fresh draws from a CSPRNG. Maximal
//!   security, maximal randomness cost.
//! * [`EntropyPool`] — a finite pool of bits supplied up front and consumed
//!   by position. Running out of bits is a hard error, never a silent reuse.
//! * [`DiffusingRegister`] — a single seed diffused deterministically from
//!   adder stage to adder stage. Cheapest in external randomness, but the
//!   derived bits are correlated across stages. This is an acknowledged
//!   placeholder diffusion, not a security-reviewed design; see the type
//!   docs.

use rand::{CryptoRng, Rng};

use crate::error::{ConfigError, EntropyError};

/// Number of register bits budgeted per masking share in the diffused-seed
/// policy.
///
/// One full-adder stage evaluates six masked gates, each of which re-shares
/// two operands, so a stage draws `12 * (nshares - 1)` bits. The register is
/// sized at `14 * (nshares - 1)` bits so a stage never wraps the cursor.
pub const SEED_BITS_PER_SHARE: u32 = 14;

/// A supply of randomness for share generation.
///
/// Entropy is an explicit, threaded capability rather than ambient
/// process-global randomness, so the scheduling policies are swappable
/// behind this one seam.
pub trait EntropySource {
    /// Draws a single uniform bit.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::Exhausted`] if the source is finite and has
    /// run out of bits.
    fn draw_bit(&mut self) -> Result<bool, EntropyError>;

    /// Advances the source to the next adder stage.
    ///
    /// The ripple-carry adder calls this once before every full-adder stage.
    /// Sources which draw independent randomness have nothing to do here;
    /// the diffused-seed policy uses it to evolve its register.
    fn advance_stage(&mut self) {}
}

/// Independent entropy drawn on demand from a CSPRNG.
///
/// Never exhausts; every bit is a fresh, mutually independent draw.
#[derive(Debug)]
pub struct CryptoEntropy<R>(R);

impl<R: Rng + CryptoRng> CryptoEntropy<R> {
    /// Creates a new source backed by `rng`.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng + CryptoRng> EntropySource for CryptoEntropy<R> {
    fn draw_bit(&mut self) -> Result<bool, EntropyError> {
        Ok(self.0.gen())
    }
}

/// A finite pool of random bits supplied up front and consumed by position.
///
/// Drawing past the end of the pool is fatal: the pool never wraps, because
/// reusing randomness would silently lower the effective masking order.
#[derive(Debug, Clone)]
pub struct EntropyPool {
    bits: Vec<bool>,
    pos: usize,
}

impl EntropyPool {
    /// Creates a pool from pre-supplied bits.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits, pos: 0 }
    }

    /// Samples a pool of `len` bits from `rng`.
    pub fn sample<R: Rng + CryptoRng>(rng: &mut R, len: usize) -> Self {
        Self::new((0..len).map(|_| rng.gen()).collect())
    }

    /// Returns the number of bits left in the pool.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }
}

impl EntropySource for EntropyPool {
    fn draw_bit(&mut self) -> Result<bool, EntropyError> {
        let bit = *self
            .bits
            .get(self.pos)
            .ok_or(EntropyError::Exhausted(self.bits.len()))?;
        self.pos += 1;
        Ok(bit)
    }
}

/// Stage-diffused entropy derived from a single seed.
///
/// A register of `14 * (nshares - 1)` bits is seeded once. Before each adder
/// stage the register is rotated left by one bit (take the top bit, shift
/// left, reinsert the top bit at position 0) and the stage's gates then read
/// successive register bits. Bits handed out this way are deterministic in
/// the seed and structurally related across shares and stages, so this mode
/// is strictly weaker than [`CryptoEntropy`] or a fresh [`EntropyPool`].
///
/// The single-tap feedback is basic for now: it is a placeholder diffusion
/// kept for its constant-size seed, not a cryptographically analyzed LFSR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffusingRegister {
    register: u128,
    width: u32,
    cursor: u32,
}

impl DiffusingRegister {
    /// Creates a register of `(nshares - 1) * 14` bits holding `seed`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `nshares < 2`, if the register would not
    /// fit in 128 bits, or if `seed` has bits set above the register width.
    pub fn new(seed: u128, nshares: usize) -> Result<Self, ConfigError> {
        if nshares < 2 {
            return Err(ConfigError::InvalidShareCount(nshares));
        }
        let width = (nshares as u32 - 1) * SEED_BITS_PER_SHARE;
        if width > u128::BITS {
            return Err(ConfigError::RegisterTooWide(width));
        }
        if width < u128::BITS && seed >> width != 0 {
            return Err(ConfigError::SeedOutOfRange(width));
        }
        Ok(Self {
            register: seed,
            width,
            cursor: 0,
        })
    }

    /// Applies the diffusion step to `register`: rotate left by one within
    /// `width` bits.
    ///
    /// Exposed as a pure transition function so the stage-to-stage evolution
    /// can be tested in isolation from the adder.
    pub fn diffuse(register: u128, width: u32) -> u128 {
        let top = (register >> (width - 1)) & 1;
        let mask = if width == u128::BITS {
            u128::MAX
        } else {
            (1 << width) - 1
        };
        ((register << 1) | top) & mask
    }

    /// Returns the current register value.
    pub fn register(&self) -> u128 {
        self.register
    }

    /// Returns the register width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }
}

impl EntropySource for DiffusingRegister {
    fn draw_bit(&mut self) -> Result<bool, EntropyError> {
        let bit = (self.register >> self.cursor) & 1 == 1;
        // Wraps within the stage. The register is sized so a full-adder
        // stage never reaches this, but callers composing larger gadgets
        // inherit the reuse that comes with this policy.
        self.cursor = (self.cursor + 1) % self.width;
        Ok(bit)
    }

    fn advance_stage(&mut self) {
        self.register = Self::diffuse(self.register, self.width);
        self.cursor = 0;
    }
}
