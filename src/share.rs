//! Boolean share vectors.

use crate::{entropy::EntropySource, error::EntropyError};

/// The Boolean shares of a single secret bit.
///
/// The XOR-reduction of all shares equals the secret. Share vectors are
/// ephemeral: every masked gate generates fresh ones for its operands and
/// drops them before returning, so no masked representation ever crosses a
/// gate boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareVector(Vec<bool>);

impl ShareVector {
    /// Splits `secret` into `nshares` shares.
    ///
    /// Draws `nshares - 1` bits from `entropy`; the last share is derived as
    /// the XOR of the secret with all random shares, which fixes the
    /// XOR-reduction to `secret` exactly.
    ///
    /// # Errors
    ///
    /// Propagates entropy exhaustion. Short-changing the derivation is never
    /// an option.
    pub fn generate<E: EntropySource + ?Sized>(
        secret: bool,
        nshares: usize,
        entropy: &mut E,
    ) -> Result<Self, EntropyError> {
        let mut shares = Vec::with_capacity(nshares);
        for _ in 0..nshares.saturating_sub(1) {
            shares.push(entropy.draw_bit()?);
        }

        // Set the last share such that the XOR of all shares equals the
        // secret.
        let derived = shares.iter().fold(secret, |acc, s| acc ^ s);
        shares.push(derived);

        Ok(Self(shares))
    }

    /// Reconstructs the secret by XOR-reducing all shares.
    pub fn recombine(&self) -> bool {
        self.0.iter().fold(false, |acc, s| acc ^ s)
    }

    /// Returns the number of shares.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector holds no shares.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the shares.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

impl AsRef<[bool]> for ShareVector {
    fn as_ref(&self) -> &[bool] {
        &self.0
    }
}
