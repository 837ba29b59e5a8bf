//! Instruction Payload Encoders
//!
//! One entry point per instruction variant. Each returns an owned buffer
//! whose first byte is the variant tag.
//!
//! # Lengths
//!
//! | Variant | Tag | Bytes |
//! |---------|-----|-------|
//! | InitializeMint | 0 | 35 (no freeze authority) or 67 |
//! | InitializeAccount | 1 | 1 |
//! | MintTo | 2 | 9 |
//! | Transfer | 3 | 9 |
//! | Burn | 4 | 9 |
//! | SetMintAuthority | 5 | 34 |
//!
//! Every encoder allocates exactly the expected length up front and fails
//! with `LengthMismatch` if the writes do not fill it exactly.

use super::InstructionVariant;
use crate::codec::*;
use crate::error::CodecError;

// =============================================================================
// EXPECTED LENGTHS
// =============================================================================

/// InitializeMint up to and including the mint authority.
pub const INITIALIZE_MINT_BASE_LEN: usize = 1 + 1 + ID_LEN;

/// InitializeAccount carries nothing but its tag.
pub const INITIALIZE_ACCOUNT_LEN: usize = 1;

/// MintTo, Transfer and Burn: tag + u64.
pub const AMOUNT_INSTRUCTION_LEN: usize = 1 + U64_LEN;

/// SetMintAuthority: tag + fixed-width option.
pub const SET_MINT_AUTHORITY_LEN: usize = 1 + FIXED_OPTION_ID_LEN;

/// Allocate `expected` bytes and let `write` fill them.
///
/// A write running past the end, or stopping short of it, is a codec bug and
/// is reported as `LengthMismatch`. Other errors (bad identifiers) pass
/// through unchanged.
fn encode_exact<F>(expected: usize, write: F) -> Result<Vec<u8>, CodecError>
where
    F: FnOnce(&mut [u8]) -> Result<usize, CodecError>,
{
    let mut buf = vec![0u8; expected];

    let written = write(&mut buf).map_err(|e| match e {
        CodecError::BufferTooShort { needed, .. } => CodecError::LengthMismatch {
            expected,
            actual: needed,
        },
        other => other,
    })?;

    if written != expected {
        return Err(CodecError::LengthMismatch {
            expected,
            actual: written,
        });
    }

    Ok(buf)
}

// =============================================================================
// ENCODERS
// =============================================================================

/// Encode InitializeMint.
///
/// ```text
/// [0]      tag (0)
/// [1]      decimals
/// [2..34]  mint_authority (bare, never Option-wrapped)
/// [34]     freeze_authority tag (0 = None, 1 = Some)
/// [35..67] freeze_authority (only when tag = 1)
/// ```
///
/// # Errors
///
/// * `MissingMintAuthority` - `mint_authority` is not exactly 32 bytes
/// * `InvalidIdLength` - `freeze_authority` is present but not 32 bytes
pub fn encode_initialize_mint(
    decimals: u8,
    mint_authority: &[u8],
    freeze_authority: Option<&[u8]>,
) -> Result<Vec<u8>, CodecError> {
    if mint_authority.len() != ID_LEN {
        return Err(CodecError::MissingMintAuthority);
    }

    let expected = INITIALIZE_MINT_BASE_LEN + compact_option_len(freeze_authority);

    encode_exact(expected, |buf| {
        let mut offset = 0;
        offset += write_u8(buf, offset, InstructionVariant::InitializeMint.into())?;
        offset += write_u8(buf, offset, decimals)?;
        offset += write_id(buf, offset, mint_authority)?;
        offset += write_option_id_compact(buf, offset, freeze_authority)?;
        Ok(offset)
    })
}

/// Encode InitializeAccount: the tag alone.
///
/// Mint and owner travel as account references, not as payload.
pub fn encode_initialize_account() -> Result<Vec<u8>, CodecError> {
    encode_exact(INITIALIZE_ACCOUNT_LEN, |buf| {
        write_u8(buf, 0, InstructionVariant::InitializeAccount.into())
    })
}

/// Shared layout of MintTo, Transfer and Burn.
fn encode_amount(variant: InstructionVariant, amount: u64) -> Result<Vec<u8>, CodecError> {
    encode_exact(AMOUNT_INSTRUCTION_LEN, |buf| {
        let mut offset = 0;
        offset += write_u8(buf, offset, variant.into())?;
        offset += write_u64_le(buf, offset, amount)?;
        Ok(offset)
    })
}

/// Encode MintTo: `[2][amount: u64 LE]`.
pub fn encode_mint_to(amount: u64) -> Result<Vec<u8>, CodecError> {
    encode_amount(InstructionVariant::MintTo, amount)
}

/// Encode Transfer: `[3][amount: u64 LE]`.
pub fn encode_transfer(amount: u64) -> Result<Vec<u8>, CodecError> {
    encode_amount(InstructionVariant::Transfer, amount)
}

/// Encode Burn: `[4][amount: u64 LE]`.
pub fn encode_burn(amount: u64) -> Result<Vec<u8>, CodecError> {
    encode_amount(InstructionVariant::Burn, amount)
}

/// Encode SetMintAuthority.
///
/// Always 34 bytes. Unlike InitializeMint's freeze authority, the new
/// authority uses the fixed-width Option: when `None`, the 32-byte slot is
/// still emitted, zero-filled.
///
/// ```text
/// [0]      tag (5)
/// [1]      option tag (0 = None, 1 = Some)
/// [2..34]  new_authority, or zeros
/// ```
pub fn encode_set_mint_authority(new_authority: Option<&[u8]>) -> Result<Vec<u8>, CodecError> {
    encode_exact(SET_MINT_AUTHORITY_LEN, |buf| {
        let mut offset = 0;
        offset += write_u8(buf, offset, InstructionVariant::SetMintAuthority.into())?;
        offset += write_option_id_fixed(buf, offset, new_authority)?;
        Ok(offset)
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================
