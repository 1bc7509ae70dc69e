//! Arbitrary-precision integer base conversion for the crunch utilities.
//!
//! This crate provides [`BigInt`], a signed integer of unbounded magnitude,
//! together with its binary and hexadecimal renderings. The magnitude is kept
//! as decimal digits and converted by repeated long division, so values wider
//! than any fixed-width machine integer convert without overflow.
//!
//! # Examples
//!
//! ```
//! use crunch_radix::BigInt;
//!
//! let number: BigInt = "-5".parse().unwrap();
//! assert_eq!(number.to_binary(), "-101");
//! assert_eq!(number.to_hexadecimal(), "-5");
//!
//! let wide: BigInt = "340282366920938463463374607431768211456".parse().unwrap();
//! assert_eq!(wide.to_hexadecimal(), "100000000000000000000000000000000");
//! ```

pub use self::bigint::{BigInt, ParseBigIntError};

pub mod bigint;
