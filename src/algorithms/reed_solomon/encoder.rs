//! Generator polynomial construction and systematic encoding.

use crate::galois::GaloisField;

/// Generates the generator polynomial for Reed-Solomon encoding.
///
/// The generator polynomial is the product of `(x - α^i)` for `i` in
/// `0..parity_length`. Subtraction is XOR, so each factor is `[1, α^i]`.
pub fn generator_polynomial(galois_field: &GaloisField, parity_length: usize) -> Vec<u8> {
    let mut polynomial = Vec::with_capacity(parity_length + 1);
    polynomial.push(1);

    for i in 0..parity_length {
        polynomial = galois_field.polynomial_multiply(&polynomial, &[1, galois_field.exp(i)]);
    }

    polynomial
}

/// Encodes `message` against a precomputed generator polynomial.
///
/// Divides `message * x^nsym` by the generator one message byte at a time.
/// The `nsym`-byte register holds the running remainder, which ends up as
/// the parity appended after the message.
pub fn encode_with_generator(galois_field: &GaloisField, message: &[u8], generator: &[u8]) -> Vec<u8> {
    let parity_length = generator.len().saturating_sub(1);
    let mut codeword = Vec::with_capacity(message.len() + parity_length);
    codeword.extend_from_slice(message);
    if parity_length == 0 {
        return codeword;
    }

    let mut remainder = vec![0u8; parity_length];
    for &byte in message {
        let feedback = byte ^ remainder[0];
        remainder.rotate_left(1);
        remainder[parity_length - 1] = 0;

        if feedback != 0 {
            // generator[0] is 1 and only cancels the byte shifted out
            for (slot, &coef) in remainder.iter_mut().zip(&generator[1..]) {
                *slot ^= galois_field.multiply(coef, feedback);
            }
        }
    }

    codeword.extend_from_slice(&remainder);
    codeword
}

/// Encodes `message` into a systematic codeword of `message.len() + parity_length` bytes.
pub fn encode(galois_field: &GaloisField, message: &[u8], parity_length: usize) -> Vec<u8> {
    let generator = generator_polynomial(galois_field, parity_length);
    encode_with_generator(galois_field, message, &generator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_polynomial_roots() {
        let gf = GaloisField::new();

        for parity_length in [1, 2, 7, 20, 64] {
            let generator = generator_polynomial(&gf, parity_length);
            assert_eq!(generator.len(), parity_length + 1);
            assert_eq!(generator[0], 1);

            for i in 0..parity_length {
                assert_eq!(gf.polynomial_eval(&generator, gf.exp(i)), 0);
            }
            assert_ne!(gf.polynomial_eval(&generator, gf.exp(parity_length)), 0);
        }
    }

    #[test]
    fn test_generator_polynomial_small() {
        let gf = GaloisField::new();

        // (x + 1)(x + 2) = x^2 + 3x + 2
        assert_eq!(generator_polynomial(&gf, 2), vec![1, 3, 2]);
        assert_eq!(generator_polynomial(&gf, 0), vec![1]);
    }

    #[test]
    fn test_encode_is_systematic() {
        let gf = GaloisField::new();
        let message = [1, 2, 3, 4, 5];
        let codeword = encode(&gf, &message, 20);

        assert_eq!(codeword.len(), 25);
        assert_eq!(&codeword[..5], &message);
        assert!(codeword[5..].iter().any(|&b| b != 0));
    }

    #[test]
    fn test_codeword_is_multiple_of_generator() {
        let gf = GaloisField::new();
        let message: Vec<u8> = (0..50).map(|i| (i * 37 + 11) as u8).collect();
        let generator = generator_polynomial(&gf, 16);
        let codeword = encode_with_generator(&gf, &message, &generator);

        for i in 0..16 {
            assert_eq!(gf.polynomial_eval(&codeword, gf.exp(i)), 0);
        }
    }

    #[test]
    fn test_encode_zero_and_empty_message() {
        let gf = GaloisField::new();

        assert_eq!(encode(&gf, &[0; 10], 4), vec![0; 14]);
        assert_eq!(encode(&gf, &[], 4), vec![0; 4]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let gf = GaloisField::new();
        let message = b"deterministic parity";

        assert_eq!(encode(&gf, message, 10), encode(&gf, message, 10));
    }
}
