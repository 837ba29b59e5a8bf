//! Primitive Read/Write Helpers
//!
//! The building blocks every instruction and record layout is made of:
//! single bytes, little-endian u64s, 32-byte identifiers and the two Option
//! conventions.
//!
//! Every function takes a buffer and an offset and returns how many bytes
//! it consumed or produced, so callers can walk a layout field by field:
//!
//! ```ignore
//! let mut offset = 0;
//! offset += write_u8(&mut buf, offset, tag)?;
//! offset += write_u64_le(&mut buf, offset, amount)?;
//! ```
//!
//! No function here panics on short input. Any access past the end of the
//! buffer returns `CodecError::BufferTooShort`.
//!
//! # Option Conventions
//!
//! ```text
//! Compact (instruction payloads):
//!   None       -> [0]                      1 byte
//!   Some(id)   -> [1][id: 32 bytes]        33 bytes
//!
//! Fixed (account records):
//!   None       -> [0][slot: 32 bytes]      33 bytes (slot ignored on read)
//!   Some(id)   -> [t][id: 32 bytes]        33 bytes (t = any nonzero on read)
//! ```

use crate::error::CodecError;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::pubkey::Pubkey;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Size of an identifier on the wire.
pub const ID_LEN: usize = 32;

/// Size of an encoded u64.
pub const U64_LEN: usize = 8;

/// Option tag written for `None`.
pub const OPTION_TAG_NONE: u8 = 0;

/// Option tag written for `Some`.
pub const OPTION_TAG_SOME: u8 = 1;

/// Size of a fixed-width `Option<id>`: tag plus a 32-byte slot.
pub const FIXED_OPTION_ID_LEN: usize = 1 + ID_LEN;

// =============================================================================
// BOUNDS CHECKING
// =============================================================================

/// Borrow `len` bytes starting at `offset`.
fn slot(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], CodecError> {
    let end = offset.saturating_add(len);
    buf.get(offset..end).ok_or(CodecError::BufferTooShort {
        needed: end,
        actual: buf.len(),
    })
}

/// Mutably borrow `len` bytes starting at `offset`.
fn slot_mut(buf: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8], CodecError> {
    let end = offset.saturating_add(len);
    let actual = buf.len();
    buf.get_mut(offset..end)
        .ok_or(CodecError::BufferTooShort { needed: end, actual })
}

/// Check that `id` is exactly 32 bytes.
pub fn check_id(id: &[u8]) -> Result<&[u8; ID_LEN], CodecError> {
    <&[u8; ID_LEN]>::try_from(id).map_err(|_| CodecError::InvalidIdLength { actual: id.len() })
}

// =============================================================================
// SCALARS
// =============================================================================

/// Write a single byte. Returns 1.
pub fn write_u8(buf: &mut [u8], offset: usize, value: u8) -> Result<usize, CodecError> {
    slot_mut(buf, offset, 1)?[0] = value;
    Ok(1)
}

/// Read a single byte.
pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, CodecError> {
    Ok(slot(buf, offset, 1)?[0])
}

/// Write a u64 in little-endian order. Returns 8.
pub fn write_u64_le(buf: &mut [u8], offset: usize, value: u64) -> Result<usize, CodecError> {
    let dst = slot_mut(buf, offset, U64_LEN)?;
    *array_mut_ref![dst, 0, U64_LEN] = value.to_le_bytes();
    Ok(U64_LEN)
}

/// Read a little-endian u64.
pub fn read_u64_le(buf: &[u8], offset: usize) -> Result<u64, CodecError> {
    let src = slot(buf, offset, U64_LEN)?;
    Ok(u64::from_le_bytes(*array_ref![src, 0, U64_LEN]))
}

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Copy a 32-byte identifier into the buffer. Returns 32.
///
/// # Errors
///
/// `InvalidIdLength` if `id` is not exactly 32 bytes. The length is checked
/// before the buffer, so a bad identifier is reported even when the buffer
/// is also too small.
pub fn write_id(buf: &mut [u8], offset: usize, id: &[u8]) -> Result<usize, CodecError> {
    let id = check_id(id)?;
    slot_mut(buf, offset, ID_LEN)?.copy_from_slice(id);
    Ok(ID_LEN)
}

/// Read a 32-byte identifier.
///
/// The returned `Pubkey` is an owned copy; it does not borrow from `buf`.
pub fn read_id(buf: &[u8], offset: usize) -> Result<Pubkey, CodecError> {
    let src = slot(buf, offset, ID_LEN)?;
    Ok(Pubkey::new_from_array(*array_ref![src, 0, ID_LEN]))
}

/// View an optional key as the raw bytes the Option writers take.
pub fn option_id_bytes(id: Option<&Pubkey>) -> Option<&[u8]> {
    id.map(|key| key.as_ref())
}

// =============================================================================
// COMPACT OPTION (INSTRUCTION PAYLOADS)
// =============================================================================

/// Encoded size of `id` under the compact convention: 1 or 33.
pub fn compact_option_len(id: Option<&[u8]>) -> usize {
    match id {
        Some(_) => 1 + ID_LEN,
        None => 1,
    }
}

/// Write an optional identifier using the compact convention.
///
/// Returns the number of bytes written: 1 for `None`, 33 for `Some`.
pub fn write_option_id_compact(
    buf: &mut [u8],
    offset: usize,
    id: Option<&[u8]>,
) -> Result<usize, CodecError> {
    match id {
        Some(id) => {
            let id = check_id(id)?;
            let dst = slot_mut(buf, offset, FIXED_OPTION_ID_LEN)?;
            let (tag, body) = mut_array_refs![array_mut_ref![dst, 0, FIXED_OPTION_ID_LEN], 1, ID_LEN];
            tag[0] = OPTION_TAG_SOME;
            body.copy_from_slice(id);
            Ok(FIXED_OPTION_ID_LEN)
        }
        None => write_u8(buf, offset, OPTION_TAG_NONE),
    }
}

/// Read an optional identifier written with the compact convention.
///
/// Returns the value and the number of bytes consumed (1 or 33).
///
/// # Errors
///
/// `InvalidOptionTag` for any tag other than 0 or 1. Without a valid tag
/// there is no way to know where the next field starts.
pub fn read_option_id_compact(
    buf: &[u8],
    offset: usize,
) -> Result<(Option<Pubkey>, usize), CodecError> {
    match read_u8(buf, offset)? {
        OPTION_TAG_NONE => Ok((None, 1)),
        OPTION_TAG_SOME => Ok((Some(read_id(buf, offset + 1)?), FIXED_OPTION_ID_LEN)),
        tag => Err(CodecError::InvalidOptionTag(tag)),
    }
}

// =============================================================================
// FIXED OPTION (ACCOUNT RECORDS)
// =============================================================================

/// Write an optional identifier using the fixed convention.
///
/// Always writes 33 bytes. For `None` the slot is zero-filled.
pub fn write_option_id_fixed(
    buf: &mut [u8],
    offset: usize,
    id: Option<&[u8]>,
) -> Result<usize, CodecError> {
    let id = id.map(check_id).transpose()?;
    let dst = slot_mut(buf, offset, FIXED_OPTION_ID_LEN)?;
    let (tag, body) = mut_array_refs![array_mut_ref![dst, 0, FIXED_OPTION_ID_LEN], 1, ID_LEN];

    match id {
        Some(id) => {
            tag[0] = OPTION_TAG_SOME;
            body.copy_from_slice(id);
        }
        None => {
            tag[0] = OPTION_TAG_NONE;
            body.fill(0);
        }
    }

    Ok(FIXED_OPTION_ID_LEN)
}

/// Read an optional identifier written with the fixed convention.
///
/// Always consumes 33 bytes. A zero tag yields `None` and the slot is not
/// inspected; any nonzero tag yields `Some(slot)`.
pub fn read_option_id_fixed(
    buf: &[u8],
    offset: usize,
) -> Result<(Option<Pubkey>, usize), CodecError> {
    let src = slot(buf, offset, FIXED_OPTION_ID_LEN)?;
    let (tag, body) = array_refs![array_ref![src, 0, FIXED_OPTION_ID_LEN], 1, ID_LEN];

    let id = match tag[0] {
        OPTION_TAG_NONE => None,
        _ => Some(Pubkey::new_from_array(*body)),
    };

    Ok((id, FIXED_OPTION_ID_LEN))
}

// =============================================================================
// UNIT TESTS
// =============================================================================
