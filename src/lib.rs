//! A Boolean-masked ripple-carry adder.
//!
//! Every bit of the two operands is protected by an order-`nshares - 1`
//! Boolean masking scheme: a secret bit `s` is split into `nshares` shares
//! whose XOR-reduction equals `s`, so no single share (and, in the ideal
//! non-glitch probing model, no subset of up to `nshares - 1` shares) reveals
//! the secret.
//!
//! ### Construction
//! The masked gates take and return plaintext bits and re-share their
//! operands internally with fresh randomness on every call (mask-at-use).
//! [`masked_xor`] telescopes the share-wise XORs back to `a ^ b`;
//! [`masked_and`] evaluates the full bilinear cross-sum
//! `XOR_{i,j} (a_i & b_j) = a & b`. Six such gates compose a
//! [`masked_full_adder`], and [`MaskedAdder`] chains `width` of those,
//! rippling the carry from stage to stage.
//!
//! ### Entropy scheduling
//! Randomness is an explicit capability behind the
//! [`EntropySource`](entropy::EntropySource) trait, with three policies:
//! unbounded CSPRNG draws ([`entropy::CryptoEntropy`]), a finite up-front
//! pool whose exhaustion is fatal ([`entropy::EntropyPool`]), and a single
//! seed diffused deterministically along the carry chain
//! ([`entropy::DiffusingRegister`]). The diffused mode trades independence
//! for a constant-size seed and is the weaker of the three; its docs spell
//! out the caveats.
//!
//! ### Security caveats
//! The AND gate accumulates its cross terms sequentially without an
//! ISW-style randomized order or refresh, and the gates re-share plaintext
//! at use rather than carrying masked values through the circuit. Both are
//! deliberate contract choices of this construction, documented where they
//! live, not gaps to be patched silently.

#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod adder;
mod config;
pub mod entropy;
mod error;
mod gates;
mod share;

pub use adder::{masked_full_adder, Addition, MaskedAdder};
pub use config::{
    AdderConfig, AdderConfigBuilder, AdderConfigBuilderError, DEFAULT_NSHARES, DEFAULT_WIDTH,
};
pub use entropy::EntropySource;
pub use error::{AdderError, ConfigError, EntropyError};
pub use gates::{masked_and, masked_xor};
pub use share::ShareVector;
