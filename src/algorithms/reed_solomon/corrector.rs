//! Error value computation (Forney algorithm) and in-place repair.

use crate::error::{Error, Result};
use crate::galois::{GaloisField, FIELD_SIZE};

use super::locator::MAX_CODEWORD_LENGTH;

/// Calculates the error values at `error_locations` using the Forney algorithm.
///
/// Rebuilds the locator from the given positions, forms the evaluator
/// `Ω(x) = S(x)·Λ(x) mod x^t` from the first `t` syndromes, and returns
/// `Ω(x) / (x·Λ'(x))` at each position's evaluation point.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for out-of-range or repeated positions or
/// too few syndromes, and [`Error::DivisionByZero`] if the positions do not
/// describe a usable locator.
pub fn calculate_error_values(
    galois_field: &GaloisField,
    codeword_length: usize,
    syndromes: &[u8],
    error_locations: &[usize],
) -> Result<Vec<u8>> {
    validate(codeword_length, syndromes, error_locations)?;

    let error_count = error_locations.len();
    if error_count == 0 {
        return Ok(Vec::new());
    }

    let mut locator = vec![1u8];
    for &location in error_locations {
        let root = galois_field.exp(codeword_length - 1 - location);
        locator = galois_field.polynomial_multiply(&locator, &[root, 1]);
    }

    // S(x) truncated to t terms, highest degree first
    let reversed: Vec<u8> = syndromes[..error_count].iter().rev().copied().collect();
    let product = galois_field.polynomial_multiply(&reversed, &locator);
    let evaluator = &product[product.len() - error_count..];

    let derivative = galois_field.polynomial_formal_derivative(&locator);

    error_locations
        .iter()
        .map(|&location| {
            let x = galois_field.exp(location + FIELD_SIZE - codeword_length);
            let numerator = galois_field.polynomial_eval(evaluator, x);
            let slope = galois_field.polynomial_eval(&derivative, galois_field.multiply(x, x));
            galois_field.divide(numerator, galois_field.multiply(x, slope))
        })
        .collect()
}

/// Corrects the errors at `error_locations` in place and returns the same buffer.
///
/// All error values are computed before the first byte is touched, so on
/// error the codeword is left exactly as it was passed in.
///
/// # Errors
///
/// Same as [`calculate_error_values`].
pub fn correct_errors<'a>(
    galois_field: &GaloisField,
    received: &'a mut [u8],
    syndromes: &[u8],
    error_locations: &[usize],
) -> Result<&'a mut [u8]> {
    let error_values =
        calculate_error_values(galois_field, received.len(), syndromes, error_locations)?;

    for (&location, &value) in error_locations.iter().zip(&error_values) {
        received[location] = galois_field.add(received[location], value);
    }

    Ok(received)
}

fn validate(codeword_length: usize, syndromes: &[u8], error_locations: &[usize]) -> Result<()> {
    if codeword_length > MAX_CODEWORD_LENGTH {
        return Err(Error::InvalidInput(format!(
            "Codeword length ({}) exceeds {}",
            codeword_length, MAX_CODEWORD_LENGTH
        )));
    }

    if syndromes.len() < error_locations.len() {
        return Err(Error::InvalidInput(format!(
            "{} error positions need at least as many syndromes, got {}",
            error_locations.len(),
            syndromes.len()
        )));
    }

    let mut seen = [false; MAX_CODEWORD_LENGTH];
    for &location in error_locations {
        if location >= codeword_length {
            return Err(Error::InvalidInput(format!(
                "Error position {} is outside the codeword (length {})",
                location, codeword_length
            )));
        }
        if seen[location] {
            return Err(Error::InvalidInput(format!(
                "Error position {} is listed twice",
                location
            )));
        }
        seen[location] = true;
    }

    Ok(())
}
