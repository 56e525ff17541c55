//! The masked full adder and ripple-carry chain.

use itybity::{FromBitIterator, ToBits};
use tracing::instrument;

use crate::{
    config::AdderConfig,
    entropy::EntropySource,
    error::{AdderError, ConfigError, EntropyError},
    gates::{masked_and, masked_xor},
};

/// Computes one bit of `sum` and `carry-out` from `a`, `b` and `cin` using
/// six masked gate evaluations.
///
/// Every gate draws its own fresh randomness from `entropy`; no draws are
/// shared between the six sub-gates.
pub fn masked_full_adder<E: EntropySource + ?Sized>(
    a: bool,
    b: bool,
    cin: bool,
    nshares: usize,
    entropy: &mut E,
) -> Result<(bool, bool), EntropyError> {
    let a_xor_b = masked_xor(a, b, nshares, entropy)?;
    let sum = masked_xor(a_xor_b, cin, nshares, entropy)?;

    let a_and_b = masked_and(a, b, nshares, entropy)?;
    let a_and_c = masked_and(a, cin, nshares, entropy)?;
    let b_and_c = masked_and(b, cin, nshares, entropy)?;
    let cout = masked_xor(
        masked_xor(a_and_b, a_and_c, nshares, entropy)?,
        b_and_c,
        nshares,
        entropy,
    )?;

    Ok((sum, cout))
}

/// The result of a masked addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addition {
    /// The low `width` bits of `a + b + cin`.
    pub sum: u64,
    /// The carry out of the top bit.
    pub cout: bool,
}

/// A Boolean-masked ripple-carry adder.
///
/// Chains `width` [`masked_full_adder`] stages, threading the carry from
/// stage to stage. The adder owns the carry chain exclusively; no stage
/// retains it after producing its bit.
#[derive(Debug, Clone)]
pub struct MaskedAdder {
    config: AdderConfig,
}

impl MaskedAdder {
    /// Creates a new adder, validating `config`.
    pub fn new(config: AdderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the adder configuration.
    pub fn config(&self) -> &AdderConfig {
        &self.config
    }

    /// Computes `a + b + cin` through the masked carry chain.
    ///
    /// Functionally transparent: for every valid input the result equals the
    /// unmasked addition, regardless of the randomness drawn. Before each
    /// stage the entropy source is advanced, which is how the diffused-seed
    /// policy derives the stage-local entropy.
    ///
    /// # Errors
    ///
    /// Operands with bits set above the configured width are rejected before
    /// any gate is evaluated. Entropy exhaustion mid-chain is propagated.
    #[instrument(level = "debug", skip(self, entropy), err)]
    pub fn add<E: EntropySource + ?Sized>(
        &self,
        a: u64,
        b: u64,
        cin: bool,
        entropy: &mut E,
    ) -> Result<Addition, AdderError> {
        let width = self.config.width();
        let nshares = self.config.nshares();

        if width < u64::BITS as usize && (a >> width != 0 || b >> width != 0) {
            return Err(AdderError::OperandOutOfRange(width));
        }

        let a_bits = a.to_lsb0_vec();
        let b_bits = b.to_lsb0_vec();

        let mut sum_bits = Vec::with_capacity(width);
        let mut carry = cin;
        for (&a_bit, &b_bit) in a_bits.iter().zip(b_bits.iter()).take(width) {
            entropy.advance_stage();
            let (sum, cout) = masked_full_adder(a_bit, b_bit, carry, nshares, entropy)?;
            sum_bits.push(sum);
            carry = cout;
        }

        Ok(Addition {
            sum: u64::from_lsb0_iter(sum_bits),
            cout: carry,
        })
    }
}
