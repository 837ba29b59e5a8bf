//! Token Account State
//!
//! A TokenAccount holds a balance of one mint for one owner. It has no
//! optional fields: mint and owner are bare 32-byte keys.
//!
//! # Size: 74 bytes

use super::{read_flag, Pack};
use crate::codec::*;
use crate::error::CodecError;
use solana_program::pubkey::Pubkey;

/// Token account data.
///
/// # Memory Layout (74 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 1    │ is_initialized   │ bool                        │
/// │ 1      │ 32   │ mint             │ Pubkey                      │
/// │ 33     │ 32   │ owner            │ Pubkey                      │
/// │ 65     │ 8    │ amount           │ u64                         │
/// │ 73     │ 1    │ is_frozen        │ bool                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ Total  │ 74   │                  │                             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenAccount {
    /// Whether InitializeAccount has run on this account.
    pub is_initialized: bool,

    /// The mint this account holds tokens of.
    ///
    /// Only the raw key; the Mint record itself is never loaded here.
    pub mint: Pubkey,

    /// The owner allowed to transfer or burn from this account.
    pub owner: Pubkey,

    /// Token balance in base units.
    pub amount: u64,

    /// Frozen accounts cannot send tokens.
    pub is_frozen: bool,
}

impl TokenAccount {
    /// Size of TokenAccount when serialized: 1 + 32 + 32 + 8 + 1 = 74.
    pub const LEN: usize = 1 + ID_LEN + ID_LEN + U64_LEN + 1;

    /// A freshly initialized, empty, unfrozen account.
    pub fn new(mint: Pubkey, owner: Pubkey) -> Self {
        Self {
            is_initialized: true,
            mint,
            owner,
            amount: 0,
            is_frozen: false,
        }
    }
}

impl Pack for TokenAccount {
    const LEN: usize = TokenAccount::LEN;

    fn unpack(input: &[u8]) -> Result<Self, CodecError> {
        let is_initialized = read_flag(input, 0)?;
        let mint = read_id(input, 1)?;
        let owner = read_id(input, 1 + ID_LEN)?;
        let amount = read_u64_le(input, 1 + 2 * ID_LEN)?;
        let is_frozen = read_flag(input, 1 + 2 * ID_LEN + U64_LEN)?;

        Ok(TokenAccount {
            is_initialized,
            mint,
            owner,
            amount,
            is_frozen,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<usize, CodecError> {
        let mut offset = 0;
        offset += write_u8(output, offset, self.is_initialized as u8)?;
        offset += write_id(output, offset, self.mint.as_ref())?;
        offset += write_id(output, offset, self.owner.as_ref())?;
        offset += write_u64_le(output, offset, self.amount)?;
        offset += write_u8(output, offset, self.is_frozen as u8)?;
        Ok(offset)
    }
}

/// Decode a TokenAccount from a raw account buffer.
///
/// # Errors
///
/// `BufferTooShort` if `data` is shorter than 74 bytes.
pub fn decode_token_account(data: &[u8]) -> Result<TokenAccount, CodecError> {
    TokenAccount::unpack_from_slice(data)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
