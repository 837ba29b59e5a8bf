//! Account State Records
//!
//! Typed snapshots of the raw account buffers the runtime stores.
//!
//! # Record Types
//!
//! | Type | Size | Description |
//! |------|------|-------------|
//! | Mint | 76 bytes | Defines a token type |
//! | TokenAccount | 74 bytes | Holds tokens of one mint for an owner |
//!
//! # Serialization
//!
//! - Little-endian for integers
//! - No padding between fields
//! - Optional identifiers use the fixed-width Option (always 33 bytes)
//!
//! The runtime may allocate accounts larger than a record. Only the first
//! `LEN` bytes are read; anything after them is ignored.
//!
//! # The Pack Trait
//!
//! ```ignore
//! let mint = Mint::unpack_from_slice(&account.data)?;  // Read
//! mint.pack_into_slice(&mut fixture)?;                  // Write
//! ```

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod account;
pub mod mint;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use account::{decode_token_account, TokenAccount};
pub use mint::{decode_mint, Mint};

use crate::error::CodecError;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking account records to/from bytes.
///
/// Implementors describe how to walk their fields; the provided methods add
/// the up-front length checks.
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    const LEN: usize;

    /// Read the record from the first `LEN` bytes of `input`.
    ///
    /// Every field read is bounds-checked, so a short buffer yields
    /// `BufferTooShort` rather than a panic. Prefer `unpack_from_slice`,
    /// which reports the full record length as `needed`.
    fn unpack(input: &[u8]) -> Result<Self, CodecError>;

    /// Write the record into the first `LEN` bytes of `output`.
    ///
    /// Returns the number of bytes written.
    fn pack(&self, output: &mut [u8]) -> Result<usize, CodecError>;

    /// Unpack with length validation.
    ///
    /// Accepts any buffer of at least `LEN` bytes.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, CodecError> {
        check_len(src.len(), Self::LEN)?;
        Self::unpack(src)
    }

    /// Pack with length validation.
    ///
    /// Bytes of `dst` beyond `LEN` are left untouched.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), CodecError> {
        check_len(dst.len(), Self::LEN)?;

        let written = self.pack(dst)?;
        if written != Self::LEN {
            return Err(CodecError::LengthMismatch {
                expected: Self::LEN,
                actual: written,
            });
        }

        Ok(())
    }
}

fn check_len(actual: usize, needed: usize) -> Result<(), CodecError> {
    if actual < needed {
        return Err(CodecError::BufferTooShort { needed, actual });
    }
    Ok(())
}

/// Read a one-byte flag. Zero is false, anything else is true.
fn read_flag(buf: &[u8], offset: usize) -> Result<bool, CodecError> {
    Ok(crate::codec::read_u8(buf, offset)? != 0)
}
