//! Galois Field implementation for finite field arithmetic.
//!
//! This module provides GF(2^8) arithmetic over the reducing polynomial
//! `x^8 + x^4 + x^3 + x^2 + 1` (0x11D) with generator element 2. Every
//! operation in the codec is built on the exponent and logarithm tables
//! kept here.
//!
//! A [`GaloisField`] is immutable once constructed, so one instance can be
//! wrapped in an `Arc` and shared by any number of codecs and threads.

pub mod polynomial;

use std::fmt;

use crate::error::{Error, Result};

/// The reducing polynomial that defines the field (x^8 + x^4 + x^3 + x^2 + 1).
pub const FIELD_POLYNOMIAL: u32 = 0x11D;

/// The number of elements in the field.
pub const FIELD_SIZE: usize = 256;

/// The order of the multiplicative group.
pub const ELEMENT_COUNT: usize = FIELD_SIZE - 1;

/// Length of the exponent table. The upper half mirrors the lower half so a
/// sum of two logarithms can be looked up without reducing it mod 255.
const EXP_TABLE_LEN: usize = 2 * FIELD_SIZE;

/// A Galois Field GF(256) with precomputed exponent and logarithm tables.
#[derive(Clone)]
pub struct GaloisField {
    /// Exponential table (maps power of the generator to field element).
    exp_table: [u8; EXP_TABLE_LEN],

    /// Logarithm table (maps nonzero field element to power of the generator).
    /// log(0) is undefined; slot 0 stays zero and is never read.
    log_table: [u8; FIELD_SIZE],
}

impl GaloisField {
    /// Creates the field and builds its lookup tables.
    pub fn new() -> Self {
        let mut exp_table = [0u8; EXP_TABLE_LEN];
        let mut log_table = [0u8; FIELD_SIZE];

        let mut x: u32 = 1;
        for (i, slot) in exp_table[..ELEMENT_COUNT].iter_mut().enumerate() {
            *slot = x as u8;
            log_table[x as usize] = i as u8;

            // Multiply by the generator, reducing on overflow past 8 bits
            x <<= 1;
            if x & FIELD_SIZE as u32 != 0 {
                x ^= FIELD_POLYNOMIAL;
            }
        }

        exp_table.copy_within(..ELEMENT_COUNT, ELEMENT_COUNT);
        exp_table.copy_within(..EXP_TABLE_LEN - 2 * ELEMENT_COUNT, 2 * ELEMENT_COUNT);

        Self {
            exp_table,
            log_table,
        }
    }

    /// Returns the field polynomial.
    pub fn field_polynomial(&self) -> u32 {
        FIELD_POLYNOMIAL
    }

    /// Returns the field size.
    pub fn field_size(&self) -> usize {
        FIELD_SIZE
    }

    /// Returns the number of elements in the multiplicative group.
    pub fn element_count(&self) -> usize {
        ELEMENT_COUNT
    }

    /// Returns the exponential table, including the mirrored upper half.
    pub fn exp_table(&self) -> &[u8] {
        &self.exp_table
    }

    /// Returns the logarithm table. Entry 0 is a placeholder.
    pub fn log_table(&self) -> &[u8] {
        &self.log_table
    }

    /// Add two elements in the Galois field (which is XOR in binary fields).
    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Subtract two elements in the Galois field (same as addition in binary fields).
    #[inline]
    pub fn subtract(&self, a: u8, b: u8) -> u8 {
        self.add(a, b)
    }

    /// Multiply two elements in the Galois field using lookup tables.
    ///
    /// # Arguments
    ///
    /// * `a` - First field element
    /// * `b` - Second field element
    ///
    /// # Returns
    ///
    /// The product in the Galois field
    #[inline]
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        let log_sum = self.log_table[a as usize] as usize + self.log_table[b as usize] as usize;
        self.exp_table[log_sum]
    }

    /// Multiply two elements using direct polynomial multiplication without tables.
    ///
    /// This is slower but useful for verifying the tables.
    pub fn multiply_direct(&self, a: u8, b: u8) -> u8 {
        let mut result = 0u32;
        let mut a_temp = a as u32;
        let mut b_temp = b as u32;

        while b_temp > 0 {
            if b_temp & 1 != 0 {
                result ^= a_temp;
            }

            a_temp <<= 1;
            if a_temp & FIELD_SIZE as u32 != 0 {
                a_temp ^= FIELD_POLYNOMIAL;
            }

            b_temp >>= 1;
        }

        result as u8
    }

    /// Divide one element by another in the Galois field.
    ///
    /// # Arguments
    ///
    /// * `a` - Numerator
    /// * `b` - Denominator
    ///
    /// # Returns
    ///
    /// The quotient in the Galois field
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if the denominator is zero
    #[inline]
    pub fn divide(&self, a: u8, b: u8) -> Result<u8> {
        if b == 0 {
            return Err(Error::DivisionByZero);
        }

        if a == 0 {
            return Ok(0);
        }

        // Biasing by 255 keeps the difference non-negative
        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        Ok(self.exp_table[log_a + ELEMENT_COUNT - log_b])
    }

    /// Compute the multiplicative inverse of a field element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for zero, which has no inverse
    pub fn inverse(&self, value: u8) -> Result<u8> {
        self.divide(1, value)
    }

    /// Raise a field element to a power.
    ///
    /// `0^0` is 1 by convention.
    pub fn power(&self, a: u8, n: u32) -> u8 {
        if a == 0 {
            return if n > 0 { 0 } else { 1 };
        }

        let log_a = self.log_table[a as usize] as u64;
        let log_result = (log_a * n as u64) % ELEMENT_COUNT as u64;
        self.exp_table[log_result as usize]
    }

    /// The generator raised to `power`, reduced mod 255.
    #[inline]
    pub fn exp(&self, power: usize) -> u8 {
        self.exp_table[power % ELEMENT_COUNT]
    }

    /// Compute the logarithm of a field element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for zero, whose logarithm is undefined
    pub fn log(&self, value: u8) -> Result<u8> {
        if value == 0 {
            return Err(Error::InvalidInput(
                "Cannot compute logarithm of zero in Galois field".to_string(),
            ));
        }

        Ok(self.log_table[value as usize])
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("field_polynomial", &format_args!("{:#x}", FIELD_POLYNOMIAL))
            .field("field_size", &FIELD_SIZE)
            .finish()
    }
}
