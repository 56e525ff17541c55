use derive_builder::Builder;

use crate::error::ConfigError;

/// Default operand width in bits.
pub const DEFAULT_WIDTH: usize = 64;
/// Default number of Boolean shares per masked bit (order-2 masking).
pub const DEFAULT_NSHARES: usize = 3;

/// Configuration for a [`MaskedAdder`](crate::MaskedAdder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct AdderConfig {
    /// Operand width in bits. Must be between 1 and 64.
    #[builder(default = "DEFAULT_WIDTH")]
    width: usize,
    /// Number of Boolean shares per masked bit. Must be at least 2.
    #[builder(default = "DEFAULT_NSHARES")]
    nshares: usize,
}

impl AdderConfig {
    /// Creates a new builder.
    pub fn builder() -> AdderConfigBuilder {
        AdderConfigBuilder::default()
    }

    /// Returns the operand width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of shares per masked bit.
    pub fn nshares(&self) -> usize {
        self.nshares
    }

    /// Returns the masking order, i.e. the number of shares an adversary may
    /// observe without reconstructing the secret in the non-glitch probing
    /// model.
    pub fn security_order(&self) -> usize {
        self.nshares - 1
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.width > 64 {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if self.nshares < 2 {
            return Err(ConfigError::InvalidShareCount(self.nshares));
        }
        Ok(())
    }
}

impl Default for AdderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            nshares: DEFAULT_NSHARES,
        }
    }
}
