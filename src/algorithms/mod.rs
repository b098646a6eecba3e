//! # Error Correction Algorithms
//!
//! This module provides the error correction codes built on the
//! [`GaloisField`](crate::galois::GaloisField) arithmetic.
//!
//! ## Algorithms
//!
//! - Reed-Solomon: systematic GF(256) code correcting up to `nsym / 2`
//!   corrupted bytes per codeword, decoded with Berlekamp-Massey, a
//!   Chien-style root search and the Forney algorithm.

use std::fmt::Debug;

use crate::error::Result;

pub mod reed_solomon;

pub use reed_solomon::{DecodeOutcome, ReedSolomon};

/// Trait defining the interface for error correction algorithms
pub trait ErrorCorrectionAlgorithm: Debug + Send + Sync {
    /// Encodes the input data with error correction codes
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decodes the input data and corrects errors if possible, returning the
    /// message without its redundancy
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Returns the maximum number of errors this algorithm can correct
    fn max_correctable_errors(&self) -> usize;

    /// Returns the overhead ratio (encoded_size / original_size) for a message
    /// of `message_length` bytes
    fn overhead_ratio(&self, message_length: usize) -> f64;

    /// Returns the name of the algorithm
    fn name(&self) -> &str;
}
