//! Configuration settings for the codec.
//!
//! This module defines the options that control a [`ReedSolomon`] codec
//! built with [`ReedSolomon::from_config`]. Configurations serialize to and
//! from JSON.
//!
//! [`ReedSolomon`]: crate::algorithms::ReedSolomon
//! [`ReedSolomon::from_config`]: crate::algorithms::ReedSolomon::from_config

use serde::{Deserialize, Serialize};

use crate::galois::{ELEMENT_COUNT, FIELD_POLYNOMIAL};

/// Configuration settings for the codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of parity bytes per codeword (nsym)
    ecc_size: usize,
    /// Field polynomial for the Galois field (only 0x11D is supported)
    field_polynomial: u32,
    /// Whether repaired codewords are re-checked before decode reports success
    verify_correction: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ecc_size: 32,
            field_polynomial: FIELD_POLYNOMIAL,
            verify_correction: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the number of parity bytes per codeword.
    ///
    /// # Arguments
    ///
    /// * `ecc_size` - Number of parity bytes
    ///
    /// # Returns
    ///
    /// Updated configuration with the new ECC size
    pub fn with_ecc_size(mut self, ecc_size: usize) -> Self {
        self.ecc_size = ecc_size;
        self
    }

    /// Sets the field polynomial for the Galois field.
    pub fn with_field_polynomial(mut self, field_polynomial: u32) -> Self {
        self.field_polynomial = field_polynomial;
        self
    }

    /// Sets whether repaired codewords are re-checked.
    pub fn with_verify_correction(mut self, verify_correction: bool) -> Self {
        self.verify_correction = verify_correction;
        self
    }

    /// Returns the number of parity bytes per codeword.
    pub fn ecc_size(&self) -> usize {
        self.ecc_size
    }

    /// Returns the field polynomial for the Galois field.
    pub fn field_polynomial(&self) -> u32 {
        self.field_polynomial
    }

    /// Returns whether repaired codewords are re-checked.
    pub fn verify_correction(&self) -> bool {
        self.verify_correction
    }

    /// Returns the number of corrupted bytes per codeword this configuration
    /// can repair.
    pub fn max_correctable_errors(&self) -> usize {
        self.ecc_size / 2
    }

    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, or an error if it's invalid
    pub fn validate(&self) -> crate::Result<()> {
        if self.ecc_size == 0 {
            return Err(crate::Error::InvalidConfiguration(
                "ECC size must be greater than zero".to_string(),
            ));
        }

        if self.ecc_size >= ELEMENT_COUNT {
            return Err(crate::Error::InvalidConfiguration(format!(
                "ECC size ({}) must be less than {}",
                self.ecc_size, ELEMENT_COUNT
            )));
        }

        if self.field_polynomial != FIELD_POLYNOMIAL {
            return Err(crate::Error::InvalidConfiguration(format!(
                "Unsupported field polynomial {:#x} (only {:#x} is supported)",
                self.field_polynomial, FIELD_POLYNOMIAL
            )));
        }

        Ok(())
    }
}
