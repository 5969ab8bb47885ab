//! Per-byte modular exponentiation transform
//!
//! This is the small-modulus RSA-style transform the data file has always
//! used. It keeps the file format compatible; it does not protect the data.

use crate::error::{ContactError, Result};

/// Modulus (61 * 53)
pub const DEFAULT_MODULUS: u32 = 3233;
/// Forward exponent
pub const DEFAULT_ENCODE_EXP: u32 = 17;
/// Inverse exponent, `17 * 2753 ≡ 1 (mod φ(3233))`
pub const DEFAULT_DECODE_EXP: u32 = 2753;

/// `base^exponent mod modulus` by square-and-multiply.
///
/// Intermediates stay below `modulus²`, which fits in `u64` for any `u32`
/// modulus.
///
/// # Panics
///
/// Panics if `modulus` is zero. [`ModExpCodec`] never passes one.
pub fn modexp(base: u64, exponent: u64, modulus: u32) -> u32 {
    assert!(modulus != 0, "modexp with zero modulus");
    let m = u64::from(modulus);
    let mut result = 1 % m;
    let mut b = base % m;
    let mut e = exponent;
    while e > 0 {
        if e & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        e >>= 1;
    }
    result as u32
}

/// Keyed encode/decode pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModExpCodec {
    modulus: u32,
    encode_exp: u32,
    decode_exp: u32,
}

impl Default for ModExpCodec {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            encode_exp: DEFAULT_ENCODE_EXP,
            decode_exp: DEFAULT_DECODE_EXP,
        }
    }
}

impl ModExpCodec {
    /// Build a codec from custom constants.
    ///
    /// The modulus must exceed 255 so each byte maps to a distinct residue,
    /// and fit in `i32` so every encoded value fits the on-disk width.
    /// Whether the exponents are actually inverse is the caller's concern.
    pub fn new(modulus: u32, encode_exp: u32, decode_exp: u32) -> Result<Self> {
        if modulus <= 255 || modulus > i32::MAX as u32 {
            return Err(ContactError::InvalidKey {
                modulus: u64::from(modulus),
            });
        }
        Ok(Self {
            modulus,
            encode_exp,
            decode_exp,
        })
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// `m^e mod n`
    pub fn encode_byte(&self, m: u8) -> i32 {
        modexp(u64::from(m), u64::from(self.encode_exp), self.modulus) as i32
    }

    /// `c^d mod n`, keeping the low byte.
    ///
    /// Negative inputs are reduced with a Euclidean remainder first.
    pub fn decode_integer(&self, c: i32) -> u8 {
        let base = i64::from(c).rem_euclid(i64::from(self.modulus)) as u64;
        modexp(base, u64::from(self.decode_exp), self.modulus) as u8
    }
}
