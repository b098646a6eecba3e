//! Syndrome computation.

use crate::galois::GaloisField;

/// Calculates the syndromes of a received codeword.
///
/// Syndrome `i` is the codeword, read as a polynomial with its first byte as
/// the highest-order coefficient, evaluated at `α^i`. An all-zero result means
/// no error the code can detect is present.
pub fn calculate_syndromes(galois_field: &GaloisField, received: &[u8], parity_length: usize) -> Vec<u8> {
    (0..parity_length)
        .map(|i| galois_field.polynomial_eval(received, galois_field.exp(i)))
        .collect()
}

/// Returns true if every syndrome is zero.
pub fn is_zero(syndromes: &[u8]) -> bool {
    syndromes.iter().all(|&s| s == 0)
}
