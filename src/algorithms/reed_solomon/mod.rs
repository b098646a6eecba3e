//! Reed-Solomon error correction algorithm implementation.
//!
//! Reed-Solomon codes are block-based error correcting codes with a wide range of
//! applications in digital communications and storage. They are particularly
//! effective against burst errors, since a corrupted byte costs the same no
//! matter how many of its bits flipped.
//!
//! The code is systematic: a codeword is the message followed by `nsym`
//! parity bytes, and up to `nsym / 2` corrupted bytes anywhere in it can be
//! repaired. Decoding runs in three stages over the caller's buffer:
//!
//! 1. [`syndrome`] detects corruption,
//! 2. [`locator`] derives the error locator and finds the corrupted offsets,
//! 3. [`corrector`] computes the error values and repairs the bytes in place.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rscodec::galois::GaloisField;
//! use rscodec::algorithms::ReedSolomon;
//!
//! let rs = ReedSolomon::new(Arc::new(GaloisField::new()), 20)?;
//! let mut codeword = rs.encode(&[1, 2, 3, 4, 5]);
//! codeword[0] ^= 0xFF;
//! codeword[9] ^= 0x42;
//!
//! let syndromes = rs.syndromes(&codeword);
//! let positions = rs.find_errors(&syndromes, codeword.len())?;
//! rs.correct(&mut codeword, &syndromes, &positions)?;
//! assert_eq!(&codeword[..5], &[1, 2, 3, 4, 5]);
//! # Ok::<(), rscodec::Error>(())
//! ```

pub mod corrector;
pub mod encoder;
pub mod locator;
pub mod syndrome;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::galois::GaloisField;

use super::ErrorCorrectionAlgorithm;

pub use locator::MAX_CODEWORD_LENGTH;

/// Result of a successful in-place decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The syndromes were all zero; nothing was changed
    Clean,
    /// The listed byte offsets were repaired, in descending order
    Corrected(Vec<usize>),
}

impl DecodeOutcome {
    /// Returns the repaired byte offsets (empty for a clean codeword).
    pub fn corrected_positions(&self) -> &[usize] {
        match self {
            DecodeOutcome::Clean => &[],
            DecodeOutcome::Corrected(positions) => positions,
        }
    }

    /// Returns true if the codeword needed no repair.
    pub fn is_clean(&self) -> bool {
        matches!(self, DecodeOutcome::Clean)
    }
}

/// Reed-Solomon error correction algorithm implementation.
#[derive(Clone)]
pub struct ReedSolomon {
    /// Galois field used for finite field arithmetic
    galois_field: Arc<GaloisField>,
    /// Number of parity symbols (nsym)
    parity_length: usize,
    /// Generator polynomial
    generator_polynomial: Vec<u8>,
    /// Whether a repaired codeword is re-checked before decode reports success
    verify_correction: bool,
}

impl ReedSolomon {
    /// Creates a new Reed-Solomon encoder/decoder.
    ///
    /// # Arguments
    ///
    /// * `galois_field` - Galois field for finite field arithmetic
    /// * `parity_length` - Number of parity bytes appended to each message (nsym)
    ///
    /// # Returns
    ///
    /// A new `ReedSolomon` instance or an error if `parity_length` is outside
    /// `1..=254`.
    pub fn new(galois_field: Arc<GaloisField>, parity_length: usize) -> Result<Self> {
        if parity_length == 0 || parity_length >= galois_field.element_count() {
            return Err(Error::InvalidConfiguration(format!(
                "Parity length ({}) must be between 1 and {}",
                parity_length,
                galois_field.element_count() - 1
            )));
        }

        let generator_polynomial = encoder::generator_polynomial(&galois_field, parity_length);

        Ok(Self {
            galois_field,
            parity_length,
            generator_polynomial,
            verify_correction: true,
        })
    }

    /// Creates a codec with its own field from a validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let galois_field = Arc::new(GaloisField::new());
        Ok(Self::new(galois_field, config.ecc_size())?
            .with_verification(config.verify_correction()))
    }

    /// Sets whether [`decode_in_place`](Self::decode_in_place) re-checks the
    /// syndromes of a repaired codeword.
    ///
    /// A locator of degree at most `nsym / 2` whose roots all fall inside the
    /// codeword always repairs to a valid codeword, so the re-check only
    /// guards the decoder itself. It costs one extra syndrome pass per repair.
    pub fn with_verification(mut self, verify_correction: bool) -> Self {
        self.verify_correction = verify_correction;
        self
    }

    /// Returns the Galois field used by the codec.
    pub fn galois_field(&self) -> &Arc<GaloisField> {
        &self.galois_field
    }

    /// Returns the number of parity bytes per codeword.
    pub fn parity_length(&self) -> usize {
        self.parity_length
    }

    /// Returns the generator polynomial, highest degree first.
    pub fn generator_polynomial(&self) -> &[u8] {
        &self.generator_polynomial
    }

    /// Returns the maximum number of corrupted bytes a codeword can carry and
    /// still be repaired.
    pub fn max_correctable_errors(&self) -> usize {
        self.parity_length / 2
    }

    /// Encodes `message` into a systematic codeword: the message followed by
    /// `parity_length` parity bytes.
    pub fn encode(&self, message: &[u8]) -> Vec<u8> {
        encoder::encode_with_generator(&self.galois_field, message, &self.generator_polynomial)
    }

    /// Calculates the `parity_length` syndromes of a received codeword.
    pub fn syndromes(&self, codeword: &[u8]) -> Vec<u8> {
        syndrome::calculate_syndromes(&self.galois_field, codeword, self.parity_length)
    }

    /// Returns true if the codeword has no detectable corruption.
    pub fn is_clean(&self, codeword: &[u8]) -> bool {
        syndrome::is_zero(&self.syndromes(codeword))
    }

    /// Locates the corrupted byte offsets of a codeword of `codeword_length`
    /// bytes from its syndromes, in descending order.
    ///
    /// # Errors
    ///
    /// [`Error::TooManyErrors`] or [`Error::ErrorLocatingFailure`] when the
    /// corruption is beyond repair, [`Error::InvalidInput`] for a codeword
    /// length outside `1..=255`.
    pub fn find_errors(&self, syndromes: &[u8], codeword_length: usize) -> Result<Vec<usize>> {
        locator::find_errors(&self.galois_field, syndromes, codeword_length)
    }

    /// Repairs `codeword` in place at `positions` and returns the same buffer.
    ///
    /// Callers that need the received bytes afterwards must copy them first.
    pub fn correct<'a>(
        &self,
        codeword: &'a mut [u8],
        syndromes: &[u8],
        positions: &[usize],
    ) -> Result<&'a mut [u8]> {
        corrector::correct_errors(&self.galois_field, codeword, syndromes, positions)
    }

    /// Runs the full decode pipeline on the caller's buffer.
    ///
    /// On failure the buffer is left unmodified, except when verification of
    /// an already applied repair fails.
    pub fn decode_in_place(&self, codeword: &mut [u8]) -> Result<DecodeOutcome> {
        self.check_codeword(codeword)?;

        let syndromes = self.syndromes(codeword);
        if syndrome::is_zero(&syndromes) {
            return Ok(DecodeOutcome::Clean);
        }
        debug!(
            codeword_length = codeword.len(),
            parity_length = self.parity_length,
            "non-zero syndromes, locating errors"
        );

        let positions = self
            .find_errors(&syndromes, codeword.len())
            .inspect_err(|e| warn!("Reed-Solomon decode failed: {}", e))?;
        debug!(?positions, "errors located");

        self.correct(codeword, &syndromes, &positions)?;
        debug!(corrected = positions.len(), "codeword repaired");

        self.verify_repair(codeword, positions.len())?;

        Ok(DecodeOutcome::Corrected(positions))
    }

    fn verify_repair(&self, codeword: &[u8], repaired: usize) -> Result<()> {
        if self.verify_correction && !self.is_clean(codeword) {
            warn!("repaired codeword still has non-zero syndromes");
            return Err(Error::Decoding(format!(
                "Codeword still corrupt after repairing {} bytes",
                repaired
            )));
        }
        Ok(())
    }

    fn check_codeword(&self, codeword: &[u8]) -> Result<()> {
        if codeword.len() <= self.parity_length || codeword.len() > MAX_CODEWORD_LENGTH {
            return Err(Error::InvalidInput(format!(
                "Invalid codeword length: {} (expected {} to {})",
                codeword.len(),
                self.parity_length + 1,
                MAX_CODEWORD_LENGTH
            )));
        }
        Ok(())
    }
}

impl ErrorCorrectionAlgorithm for ReedSolomon {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(ReedSolomon::encode(self, data))
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut received = data.to_vec();
        self.decode_in_place(&mut received)?;

        received.truncate(data.len() - self.parity_length);
        Ok(received)
    }

    fn max_correctable_errors(&self) -> usize {
        ReedSolomon::max_correctable_errors(self)
    }

    fn overhead_ratio(&self, message_length: usize) -> f64 {
        (message_length + self.parity_length) as f64 / message_length as f64
    }

    fn name(&self) -> &str {
        "Reed-Solomon"
    }
}

impl fmt::Debug for ReedSolomon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReedSolomon")
            .field("parity_length", &self.parity_length)
            .field("max_correctable_errors", &self.max_correctable_errors())
            .field("verify_correction", &self.verify_correction)
            .finish()
    }
}
