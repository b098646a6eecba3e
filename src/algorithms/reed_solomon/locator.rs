//! Error locator derivation and root search.
//!
//! The locator is produced by a Berlekamp-Massey style recurrence over the
//! syndromes. Its roots are the inverses of `α^d` for every corrupted
//! coefficient of degree `d`, which the root search maps back to byte offsets.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::galois::{GaloisField, ELEMENT_COUNT};

/// Largest codeword the root search can address: positions repeat after one
/// period of the generator.
pub const MAX_CODEWORD_LENGTH: usize = ELEMENT_COUNT;

/// Finds the error locator polynomial using the Berlekamp-Massey algorithm.
///
/// The result is highest degree first with a constant term of 1.
///
/// # Errors
///
/// Returns [`Error::TooManyErrors`] when the locator degree exceeds what
/// `syndromes.len()` parity symbols can correct.
pub fn find_error_locator(galois_field: &GaloisField, syndromes: &[u8]) -> Result<Vec<u8>> {
    let parity_length = syndromes.len();

    // Neither polynomial can outgrow one coefficient per syndrome plus the constant
    let mut error_locator = Vec::with_capacity(parity_length + 1);
    error_locator.push(1u8);
    let mut old_locator = Vec::with_capacity(parity_length + 1);
    old_locator.push(1u8);

    for i in 0..parity_length {
        old_locator.push(0);

        let delta = calculate_discrepancy(galois_field, &error_locator, syndromes, i);
        trace!(iteration = i, delta, degree = error_locator.len() - 1, "locator step");

        if delta != 0 {
            if old_locator.len() > error_locator.len() {
                let new_locator = galois_field.polynomial_scale(&old_locator, delta);
                old_locator =
                    galois_field.polynomial_scale(&error_locator, galois_field.inverse(delta)?);
                error_locator = new_locator;
            }

            let correction = galois_field.polynomial_scale(&old_locator, delta);
            error_locator = galois_field.polynomial_add(&error_locator, &correction);
        }
    }

    let error_count = error_locator.len() - 1;
    debug!(degree = error_count, parity_length, "error locator derived");
    if error_count * 2 > parity_length {
        return Err(Error::TooManyErrors {
            detected: error_count,
            correctable: parity_length / 2,
        });
    }

    Ok(error_locator)
}

/// Calculates the discrepancy for the Berlekamp-Massey algorithm.
///
/// `syndromes[i]` plus the locator's non-constant coefficients convolved with
/// the preceding syndromes.
fn calculate_discrepancy(
    galois_field: &GaloisField,
    error_locator: &[u8],
    syndromes: &[u8],
    i: usize,
) -> u8 {
    // error_locator is stored highest degree first, so the coefficient of x^j
    // sits j places from the end.
    error_locator
        .iter()
        .rev()
        .skip(1)
        .zip(syndromes[..i].iter().rev())
        .fold(syndromes[i], |sum, (&coef, &syndrome)| {
            galois_field.add(sum, galois_field.multiply(coef, syndrome))
        })
}

/// Finds the roots of the error locator polynomial by evaluating it at the
/// inverse of every `α^e` that addresses a byte of the codeword.
///
/// Positions are byte offsets from the start of the codeword, reported in
/// descending order.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for codewords longer than
/// [`MAX_CODEWORD_LENGTH`] and [`Error::ErrorLocatingFailure`] when the number
/// of roots inside the codeword differs from the locator degree.
pub fn find_error_locations(
    galois_field: &GaloisField,
    error_locator: &[u8],
    codeword_length: usize,
) -> Result<Vec<usize>> {
    check_codeword_length(codeword_length)?;

    let error_count = error_locator.len().saturating_sub(1);
    let mut error_locations = Vec::with_capacity(error_count);

    for e in 0..codeword_length {
        let x_inv = galois_field.exp(ELEMENT_COUNT - e);
        if galois_field.polynomial_eval(error_locator, x_inv) == 0 {
            error_locations.push(codeword_length - 1 - e);
        }
    }

    if error_locations.len() != error_count {
        return Err(Error::ErrorLocatingFailure {
            found: error_locations.len(),
            expected: error_count,
        });
    }

    Ok(error_locations)
}

/// Derives the error locator from `syndromes` and returns the corrupted byte
/// offsets of a codeword of `codeword_length` bytes.
pub fn find_errors(
    galois_field: &GaloisField,
    syndromes: &[u8],
    codeword_length: usize,
) -> Result<Vec<usize>> {
    check_codeword_length(codeword_length)?;

    let error_locator = find_error_locator(galois_field, syndromes)?;
    find_error_locations(galois_field, &error_locator, codeword_length)
}

fn check_codeword_length(codeword_length: usize) -> Result<()> {
    if codeword_length == 0 || codeword_length > MAX_CODEWORD_LENGTH {
        return Err(Error::InvalidInput(format!(
            "Codeword length ({}) must be between 1 and {}",
            codeword_length, MAX_CODEWORD_LENGTH
        )));
    }
    Ok(())
}
