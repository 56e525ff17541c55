//! Masked logic gates.
//!
//! Gates take and return plaintext bits; masking happens internally. Each
//! gate re-shares its operands with fresh randomness on every call
//! (mask-at-use) instead of threading a persistent masked representation
//! through the circuit.

use crate::{entropy::EntropySource, error::EntropyError, share::ShareVector};

/// Computes `a ^ b` through an order-`nshares - 1` masked evaluation.
///
/// Both operands are re-shared independently and the output is the
/// XOR-reduction of the share-wise XORs, which telescopes back to `a ^ b`
/// for any share count. The masking adds no algebraic transformation, only a
/// randomized intermediate representation.
pub fn masked_xor<E: EntropySource + ?Sized>(
    a: bool,
    b: bool,
    nshares: usize,
    entropy: &mut E,
) -> Result<bool, EntropyError> {
    let a_shares = ShareVector::generate(a, nshares, entropy)?;
    let b_shares = ShareVector::generate(b, nshares, entropy)?;

    let z = a_shares
        .iter()
        .zip(b_shares.iter())
        .fold(false, |acc, (x, y)| acc ^ x ^ y);

    Ok(z)
}

/// Computes `a & b` through an order-`nshares - 1` masked evaluation.
///
/// Both operands are re-shared and the output is the full bilinear
/// cross-sum `XOR_{i,j} (a_i & b_j)`, which equals `a & b` by
/// distributivity.
///
/// The `nshares²` cross terms are accumulated sequentially in i-major order,
/// without a randomized accumulation order or cross-term refresh. An
/// adversary able to observe the sequence of partial reductions (rather than
/// just the shares) may learn more than the share count suggests. Callers
/// needing a stronger guarantee must layer an ISW-style refresh on top; this
/// construction does not do it for them.
pub fn masked_and<E: EntropySource + ?Sized>(
    a: bool,
    b: bool,
    nshares: usize,
    entropy: &mut E,
) -> Result<bool, EntropyError> {
    let a_shares = ShareVector::generate(a, nshares, entropy)?;
    let b_shares = ShareVector::generate(b, nshares, entropy)?;

    let mut z = false;
    for x in a_shares.iter() {
        for y in b_shares.iter() {
            z ^= x & y;
        }
    }

    Ok(z)
}
