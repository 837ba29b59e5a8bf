//! Mint Account State
//!
//! A Mint defines a token type: who may create more of it, how much exists
//! and how amounts are displayed.
//!
//! # Size: 76 bytes

use super::{read_flag, Pack};
use crate::codec::*;
use crate::error::CodecError;
use solana_program::pubkey::Pubkey;

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data.
///
/// # Memory Layout (76 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 1    │ is_initialized   │ bool (0 = false)            │
/// │ 1      │ 1    │ decimals         │ u8                          │
/// │ 2      │ 33   │ mint_authority   │ fixed Option<Pubkey>        │
/// │ 35     │ 8    │ supply           │ u64                         │
/// │ 43     │ 33   │ freeze_authority │ fixed Option<Pubkey>        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ Total  │ 76   │                  │                             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
///
/// # Fixed Option<Pubkey> Layout (33 bytes)
///
/// ```text
/// ┌──────────────────────────────────────┐
/// │ Byte 0     │ Tag (0 = None)          │
/// │ Bytes 1-32 │ Pubkey (ignored if None)│
/// └──────────────────────────────────────┘
/// ```
///
/// The slot is present even when the tag is 0, which is why the supply
/// always starts at offset 35.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mint {
    /// Whether InitializeMint has run on this account.
    pub is_initialized: bool,

    /// Number of decimal places for display purposes.
    pub decimals: u8,

    /// The authority that can mint new tokens.
    ///
    /// `None` means the supply is fixed forever.
    pub mint_authority: Option<Pubkey>,

    /// Total number of tokens currently in existence.
    pub supply: u64,

    /// The authority that can freeze token accounts.
    pub freeze_authority: Option<Pubkey>,
}

impl Mint {
    /// Size of Mint when serialized to bytes.
    ///
    /// 1 (is_initialized) + 1 (decimals) + 33 (mint_authority)
    /// + 8 (supply) + 33 (freeze_authority) = 76
    pub const LEN: usize = 1 + 1 + FIXED_OPTION_ID_LEN + U64_LEN + FIXED_OPTION_ID_LEN;

    /// A freshly initialized mint: zero supply, given authorities.
    pub fn new(decimals: u8, mint_authority: Pubkey, freeze_authority: Option<Pubkey>) -> Self {
        Self {
            is_initialized: true,
            decimals,
            mint_authority: Some(mint_authority),
            supply: 0,
            freeze_authority,
        }
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    const LEN: usize = Mint::LEN;

    fn unpack(input: &[u8]) -> Result<Self, CodecError> {
        let mut offset = 0;

        let is_initialized = read_flag(input, offset)?;
        offset += 1;

        let decimals = read_u8(input, offset)?;
        offset += 1;

        let (mint_authority, consumed) = read_option_id_fixed(input, offset)?;
        offset += consumed;

        let supply = read_u64_le(input, offset)?;
        offset += U64_LEN;

        let (freeze_authority, _) = read_option_id_fixed(input, offset)?;

        Ok(Mint {
            is_initialized,
            decimals,
            mint_authority,
            supply,
            freeze_authority,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<usize, CodecError> {
        let mut offset = 0;
        offset += write_u8(output, offset, self.is_initialized as u8)?;
        offset += write_u8(output, offset, self.decimals)?;
        offset += write_option_id_fixed(
            output,
            offset,
            option_id_bytes(self.mint_authority.as_ref()),
        )?;
        offset += write_u64_le(output, offset, self.supply)?;
        offset += write_option_id_fixed(
            output,
            offset,
            option_id_bytes(self.freeze_authority.as_ref()),
        )?;
        Ok(offset)
    }
}

/// Decode a Mint from a raw account buffer.
///
/// # Errors
///
/// `BufferTooShort` if `data` is shorter than 76 bytes. Longer buffers are
/// accepted and the extra bytes ignored.
///
/// # Example
///
/// ```ignore
/// let account = banks_client.get_account(mint_address).await?.unwrap();
/// let mint = decode_mint(&account.data)?;
/// println!("supply: {}", mint.supply);
/// ```
pub fn decode_mint(data: &[u8]) -> Result<Mint, CodecError> {
    Mint::unpack_from_slice(data)
}

// =============================================================================
// UNIT TESTS
// =============================================================================


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY 76 BYTES?
=============

1  (is_initialized)
+ 1  (decimals)
+ 33 (mint_authority: 1 tag + 32 slot)
+ 8  (supply)
+ 33 (freeze_authority: 1 tag + 32 slot)
= 76 bytes

FIXED VS COMPACT OPTION
=======================

The same optional key is 1 or 33 bytes inside an InitializeMint payload,
but always 33 bytes inside the stored record:

    InitializeMint payload, freeze_authority = None:
    [00][09][authority x 32][00]                      35 bytes

    Mint record, freeze_authority = None:
    [01][09][01][authority x 32][supply x 8][00][?? x 32]   76 bytes

Reading the record with the compact rule would start the supply at offset
3 whenever mint_authority is None, and every field after it would be wrong.

THE EXAMPLE BUFFER
==================

    offset  bytes                  field
    0       01                     is_initialized = true
    1       09                     decimals = 9
    2       01                     mint_authority tag = Some
    3..35   AA x 32                mint_authority
    35..43  E8 03 00 00 00 00 00 00  supply = 1000
    43      00                     freeze_authority tag = None
    44..76  00 x 32                ignored

BOOLEAN BYTES
=============

is_initialized is read as "nonzero means true", the same rule the fixed
Option tag uses. Packing always writes 0 or 1.
*/
