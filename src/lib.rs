//! # rscodec
//!
//! Reed-Solomon forward error correction over GF(256). A message is encoded
//! into a longer codeword carrying `nsym` parity bytes; a received codeword
//! with up to `nsym / 2` corrupted bytes can be located and repaired.
//!
//! ## Modules
//!
//! - `config`: Configuration settings for the codec
//! - `galois`: GF(256) arithmetic and polynomial algebra
//! - `algorithms`: The Reed-Solomon codec and its decode stages
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use rscodec::prelude::*;
//!
//! let rs = ReedSolomon::from_config(&Config::new().with_ecc_size(10))?;
//! let mut codeword = rs.encode(b"hello world");
//! codeword[2] ^= 0x55;
//!
//! let outcome = rs.decode_in_place(&mut codeword)?;
//! assert_eq!(outcome.corrected_positions(), &[2]);
//! assert_eq!(&codeword[..11], b"hello world");
//! # Ok::<(), rscodec::Error>(())
//! ```

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

// Re-export error types
pub use crate::error::{Error, Result};

// Modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod galois;

pub mod prelude {
    //! Prelude module that re-exports commonly used types and functions.

    pub use crate::algorithms::{DecodeOutcome, ErrorCorrectionAlgorithm, ReedSolomon};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::galois::GaloisField;
}
