//! Error types.

/// A configuration error.
///
/// All of these are construction-time errors: they are reported before any
/// masked gate is evaluated.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The operand width is outside the supported range.
    #[error("operand width must be between 1 and 64 bits, got {0}")]
    InvalidWidth(usize),
    /// The share count is too small to provide any masking.
    #[error("share count must be at least 2, got {0}")]
    InvalidShareCount(usize),
    /// The diffusion register would not fit in the backing integer.
    #[error("diffusion register width {0} exceeds the supported 128 bits")]
    RegisterTooWide(u32),
    /// The supplied seed has bits set above the register width.
    #[error("seed does not fit in the {0}-bit diffusion register")]
    SeedOutOfRange(u32),
}

/// An entropy source error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EntropyError {
    /// A finite entropy pool ran out of bits.
    ///
    /// Randomness is never reused to cover the shortfall, as that would
    /// silently degrade the masking order.
    #[error("entropy pool exhausted after {0} bits")]
    Exhausted(usize),
}

/// An error produced by the masked adder.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AdderError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The entropy source failed to supply randomness.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
    /// An operand has bits set above the configured width.
    #[error("operand does not fit in {0} bits")]
    OperandOutOfRange(usize),
}
