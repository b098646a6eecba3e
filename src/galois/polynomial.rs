//! Polynomial arithmetic over GF(256).
//!
//! Polynomials are slices of field elements with the highest-degree
//! coefficient first, so `[1, 2, 3]` is `x^2 + 2x + 3`. Lengths are kept as
//! given: no operation trims leading zeros unless it says so.

use super::GaloisField;

impl GaloisField {
    /// Add two polynomials in the Galois field.
    ///
    /// The shorter operand is aligned on its low-order end, so the result has
    /// the length of the longer one.
    ///
    /// # Arguments
    ///
    /// * `poly1` - First polynomial coefficients (highest degree first)
    /// * `poly2` - Second polynomial coefficients (highest degree first)
    ///
    /// # Returns
    ///
    /// The sum polynomial
    pub fn polynomial_add(&self, poly1: &[u8], poly2: &[u8]) -> Vec<u8> {
        if poly1.len() < poly2.len() {
            return self.polynomial_add(poly2, poly1);
        }

        let mut result = poly1.to_vec();
        let offset = poly1.len() - poly2.len();

        for (i, &coef2) in poly2.iter().enumerate() {
            result[offset + i] = self.add(result[offset + i], coef2);
        }

        result
    }

    /// Multiply two polynomials in the Galois field.
    ///
    /// The result has `poly1.len() + poly2.len() - 1` coefficients; an empty
    /// operand gives an empty result.
    pub fn polynomial_multiply(&self, poly1: &[u8], poly2: &[u8]) -> Vec<u8> {
        if poly1.is_empty() || poly2.is_empty() {
            return Vec::new();
        }

        let mut result = vec![0u8; poly1.len() + poly2.len() - 1];

        for (i, &coef1) in poly1.iter().enumerate() {
            if coef1 == 0 {
                continue;
            }
            for (j, &coef2) in poly2.iter().enumerate() {
                result[i + j] ^= self.multiply(coef1, coef2);
            }
        }

        result
    }

    /// Multiply every coefficient of a polynomial by a field element.
    pub fn polynomial_scale(&self, poly: &[u8], scalar: u8) -> Vec<u8> {
        poly.iter().map(|&coef| self.multiply(coef, scalar)).collect()
    }

    /// Evaluate a polynomial at a specific point using Horner's method.
    ///
    /// # Arguments
    ///
    /// * `poly` - Polynomial coefficients (highest degree first)
    /// * `x` - Point at which to evaluate
    ///
    /// # Returns
    ///
    /// The polynomial evaluation result, 0 for an empty polynomial
    pub fn polynomial_eval(&self, poly: &[u8], x: u8) -> u8 {
        let Some((&first, rest)) = poly.split_first() else {
            return 0;
        };

        rest.iter()
            .fold(first, |acc, &coef| self.add(self.multiply(acc, x), coef))
    }

    /// Odd-power coefficients of a polynomial, highest degree first.
    ///
    /// In characteristic 2 the formal derivative of `c * x^k` vanishes for
    /// even `k` and is `c * x^(k-1)` for odd `k`. The returned coefficients
    /// describe the derivative as a polynomial in `x^2`, so evaluate it at
    /// `x * x` to get `P'(x)`.
    pub fn polynomial_formal_derivative(&self, poly: &[u8]) -> Vec<u8> {
        // The last slot holds x^0, so odd powers start at index len & 1.
        let start = poly.len() & 1;
        let count = (poly.len() - start).div_ceil(2);

        let mut derivative = Vec::with_capacity(count);
        derivative.extend(poly.iter().skip(start).step_by(2).copied());
        derivative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_addition() {
        let gf = GaloisField::new();

        // (x^2 + 2x + 3) + (4x^2 + 5x + 6) = 5x^2 + 7x + 5
        assert_eq!(gf.polynomial_add(&[1, 2, 3], &[4, 5, 6]), vec![5, 7, 5]);

        // Different lengths align on the constant term
        assert_eq!(gf.polynomial_add(&[1, 2, 3, 4], &[5, 6]), vec![1, 2, 6, 2]);
        assert_eq!(gf.polynomial_add(&[5, 6], &[1, 2, 3, 4]), vec![1, 2, 6, 2]);

        // Leading zeros are kept
        assert_eq!(gf.polynomial_add(&[7, 1], &[7, 0]), vec![0, 1]);
    }

    #[test]
    fn test_polynomial_multiplication() {
        let gf = GaloisField::new();

        // (x + 1) * (x + 2) = x^2 + 3x + 2
        assert_eq!(gf.polynomial_multiply(&[1, 1], &[1, 2]), vec![1, 3, 2]);

        // (x^2 + 1) * (x + 1) = x^3 + x^2 + x + 1
        assert_eq!(gf.polynomial_multiply(&[1, 0, 1], &[1, 1]), vec![1, 1, 1, 1]);

        assert_eq!(gf.polynomial_multiply(&[9], &[3]), vec![gf.multiply(9, 3)]);
        assert!(gf.polynomial_multiply(&[], &[1, 2]).is_empty());
    }

    #[test]
    fn test_polynomial_scale() {
        let gf = GaloisField::new();
        let poly = [1, 0, 7, 255];

        assert_eq!(gf.polynomial_scale(&poly, 1), poly.to_vec());
        assert_eq!(gf.polynomial_scale(&poly, 0), vec![0, 0, 0, 0]);
        assert_eq!(
            gf.polynomial_scale(&poly, 2),
            vec![2, 0, 14, gf.multiply(255, 2)]
        );
    }

    #[test]
    fn test_polynomial_evaluation() {
        let gf = GaloisField::new();

        // p(x) = x^2 + 2x + 3
        let poly = [1, 2, 3];
        assert_eq!(gf.polynomial_eval(&poly, 0), 3);
        assert_eq!(gf.polynomial_eval(&poly, 1), 0);
        assert_eq!(gf.polynomial_eval(&poly, 2), 3);
        assert_eq!(gf.polynomial_eval(&[], 5), 0);
    }

    #[test]
    fn test_product_roots() {
        let gf = GaloisField::new();

        // (x + a)(x + b) vanishes at a and b
        let a = gf.exp(3);
        let b = gf.exp(77);
        let poly = gf.polynomial_multiply(&[1, a], &[1, b]);
        assert_eq!(gf.polynomial_eval(&poly, a), 0);
        assert_eq!(gf.polynomial_eval(&poly, b), 0);
        assert_ne!(gf.polynomial_eval(&poly, gf.exp(4)), 0);
    }

    #[test]
    fn test_formal_derivative_keeps_odd_powers() {
        let gf = GaloisField::new();

        // Degree 3: c3 x^3 + c2 x^2 + c1 x + c0 -> [c3, c1]
        assert_eq!(gf.polynomial_formal_derivative(&[4, 5, 6, 7]), vec![4, 6]);

        // Degree 2: c2 x^2 + c1 x + c0 -> [c1]
        assert_eq!(gf.polynomial_formal_derivative(&[4, 5, 6]), vec![5]);

        // Degree 4 -> [c3, c1]
        assert_eq!(gf.polynomial_formal_derivative(&[1, 2, 3, 4, 5]), vec![2, 4]);

        assert!(gf.polynomial_formal_derivative(&[9]).is_empty());
        assert!(gf.polynomial_formal_derivative(&[]).is_empty());
    }

    #[test]
    fn test_formal_derivative_matches_definition() {
        let gf = GaloisField::new();
        let poly = [3, 200, 17, 0, 91, 1];
        let derivative = gf.polynomial_formal_derivative(&poly);

        // Term-by-term derivative: k * c_k * x^(k-1), where k * c is c for odd k
        let degree = poly.len() - 1;
        for x in [1u8, 2, 29, 143, 255] {
            let mut expected = 0u8;
            for (i, &coef) in poly.iter().enumerate() {
                let k = degree - i;
                if k % 2 == 1 {
                    expected ^= gf.multiply(coef, gf.power(x, (k - 1) as u32));
                }
            }
            let x2 = gf.multiply(x, x);
            assert_eq!(gf.polynomial_eval(&derivative, x2), expected);
        }
    }
}
