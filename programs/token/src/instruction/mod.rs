//! Instruction Types
//!
//! This module defines the six instructions the token runtime accepts and
//! how each is laid out on the wire.
//!
//! # Instruction Format
//!
//! ```text
//! [tag: u8][payload: varies by tag]
//! ```
//!
//! # Tag Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | InitializeMint |
//! | 1 | InitializeAccount |
//! | 2 | MintTo |
//! | 3 | Transfer |
//! | 4 | Burn |
//! | 5 | SetMintAuthority |
//!
//! # Submodules
//!
//! - `encode`: one byte-level encoder per variant
//! - `builders`: wrap an encoded payload into a `solana_program` Instruction

pub mod builders;
pub mod encode;

pub use encode::*;

use crate::codec::{
    option_id_bytes, read_id, read_option_id_compact, read_option_id_fixed, read_u64_le, read_u8,
};
use crate::error::CodecError;
use solana_program::pubkey::Pubkey;

// =============================================================================
// INSTRUCTION VARIANT
// =============================================================================

/// The numbered set of instruction tags.
///
/// The numeric values are the first byte of every payload. After
/// deployment, NEVER renumber them.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionVariant {
    /// Create a new token type
    InitializeMint = 0,

    /// Create a new token account for a mint
    InitializeAccount = 1,

    /// Increase supply into a token account
    MintTo = 2,

    /// Move tokens between accounts
    Transfer = 3,

    /// Destroy tokens from an account
    Burn = 4,

    /// Replace or remove the mint authority
    SetMintAuthority = 5,
}

impl InstructionVariant {
    /// Every variant, in tag order.
    pub const ALL: [InstructionVariant; 6] = [
        InstructionVariant::InitializeMint,
        InstructionVariant::InitializeAccount,
        InstructionVariant::MintTo,
        InstructionVariant::Transfer,
        InstructionVariant::Burn,
        InstructionVariant::SetMintAuthority,
    ];

    /// Human-readable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            InstructionVariant::InitializeMint => "InitializeMint",
            InstructionVariant::InitializeAccount => "InitializeAccount",
            InstructionVariant::MintTo => "MintTo",
            InstructionVariant::Transfer => "Transfer",
            InstructionVariant::Burn => "Burn",
            InstructionVariant::SetMintAuthority => "SetMintAuthority",
        }
    }
}

impl From<InstructionVariant> for u8 {
    fn from(variant: InstructionVariant) -> Self {
        variant as u8
    }
}

impl TryFrom<u8> for InstructionVariant {
    type Error = CodecError;

    /// Parse a tag byte.
    ///
    /// # Errors
    ///
    /// `UnknownVariant` for anything outside 0-5.
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(InstructionVariant::InitializeMint),
            1 => Ok(InstructionVariant::InitializeAccount),
            2 => Ok(InstructionVariant::MintTo),
            3 => Ok(InstructionVariant::Transfer),
            4 => Ok(InstructionVariant::Burn),
            5 => Ok(InstructionVariant::SetMintAuthority),
            _ => Err(CodecError::UnknownVariant(tag)),
        }
    }
}

// =============================================================================
// TOKEN INSTRUCTION ENUM
// =============================================================================

/// A typed instruction payload.
///
/// Each variant carries only the fields that go into its payload. Accounts
/// are not part of the payload; see [`builders`] for the account lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenInstruction {
    /// Initialize a new mint.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: tag (0)
    /// [1]: decimals (u8)
    /// [2..34]: mint_authority (Pubkey, 32 bytes)
    /// [34]: freeze_authority_option (0 = None, 1 = Some)
    /// [35..67]: freeze_authority (Pubkey, 32 bytes, if option = 1)
    /// ```
    InitializeMint {
        /// Number of decimals for display purposes
        decimals: u8,

        /// Authority that can mint new tokens
        mint_authority: Pubkey,

        /// Optional authority that can freeze token accounts
        freeze_authority: Option<Pubkey>,
    },

    /// Initialize a new token account.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: tag (1)
    /// ```
    InitializeAccount,

    /// Mint new tokens to an account.
    ///
    /// ```text
    /// [0]: tag (2)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    MintTo {
        /// Amount of tokens to mint
        amount: u64,
    },

    /// Transfer tokens between accounts.
    ///
    /// ```text
    /// [0]: tag (3)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    Transfer {
        /// Amount of tokens to transfer
        amount: u64,
    },

    /// Burn tokens from an account.
    ///
    /// ```text
    /// [0]: tag (4)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    Burn {
        /// Amount of tokens to burn
        amount: u64,
    },

    /// Change or remove the mint authority.
    ///
    /// ```text
    /// [0]: tag (5)
    /// [1]: new_authority_option (0 = None, nonzero = Some)
    /// [2..34]: new_authority (Pubkey, 32 bytes, zeros when None)
    /// ```
    SetMintAuthority {
        /// New authority (None removes it permanently)
        new_authority: Option<Pubkey>,
    },
}

impl TokenInstruction {
    /// The tag this instruction is encoded with.
    pub fn variant(&self) -> InstructionVariant {
        match self {
            TokenInstruction::InitializeMint { .. } => InstructionVariant::InitializeMint,
            TokenInstruction::InitializeAccount => InstructionVariant::InitializeAccount,
            TokenInstruction::MintTo { .. } => InstructionVariant::MintTo,
            TokenInstruction::Transfer { .. } => InstructionVariant::Transfer,
            TokenInstruction::Burn { .. } => InstructionVariant::Burn,
            TokenInstruction::SetMintAuthority { .. } => InstructionVariant::SetMintAuthority,
        }
    }

    // =========================================================================
    // INSTRUCTION PACKING
    // =========================================================================

    /// Pack the instruction into its wire payload.
    ///
    /// Dispatches to the per-variant encoder in [`encode`].
    pub fn pack(&self) -> Result<Vec<u8>, CodecError> {
        match self {
            TokenInstruction::InitializeMint {
                decimals,
                mint_authority,
                freeze_authority,
            } => encode_initialize_mint(
                *decimals,
                mint_authority.as_ref(),
                option_id_bytes(freeze_authority.as_ref()),
            ),
            TokenInstruction::InitializeAccount => encode_initialize_account(),
            TokenInstruction::MintTo { amount } => encode_mint_to(*amount),
            TokenInstruction::Transfer { amount } => encode_transfer(*amount),
            TokenInstruction::Burn { amount } => encode_burn(*amount),
            TokenInstruction::SetMintAuthority { new_authority } => {
                encode_set_mint_authority(option_id_bytes(new_authority.as_ref()))
            }
        }
    }

    // =========================================================================
    // INSTRUCTION PARSING (UNPACK)
    // =========================================================================

    /// Parse a wire payload back into a typed instruction.
    ///
    /// Trailing bytes after the variant's layout are ignored.
    ///
    /// # Errors
    ///
    /// * `BufferTooShort` - empty input, or the payload ends mid-field
    /// * `UnknownVariant` - first byte is not a known tag
    /// * `InvalidOptionTag` - InitializeMint freeze option tag is not 0 or 1
    pub fn unpack(input: &[u8]) -> Result<Self, CodecError> {
        let variant = InstructionVariant::try_from(read_u8(input, 0)?)?;

        Ok(match variant {
            InstructionVariant::InitializeMint => {
                let decimals = read_u8(input, 1)?;
                let mint_authority = read_id(input, 2)?;
                let (freeze_authority, _) = read_option_id_compact(input, INITIALIZE_MINT_BASE_LEN)?;

                TokenInstruction::InitializeMint {
                    decimals,
                    mint_authority,
                    freeze_authority,
                }
            }

            InstructionVariant::InitializeAccount => TokenInstruction::InitializeAccount,

            InstructionVariant::MintTo => TokenInstruction::MintTo {
                amount: read_u64_le(input, 1)?,
            },

            InstructionVariant::Transfer => TokenInstruction::Transfer {
                amount: read_u64_le(input, 1)?,
            },

            InstructionVariant::Burn => TokenInstruction::Burn {
                amount: read_u64_le(input, 1)?,
            },

            InstructionVariant::SetMintAuthority => {
                let (new_authority, _) = read_option_id_fixed(input, 1)?;
                TokenInstruction::SetMintAuthority { new_authority }
            }
        })
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

TWO OPTION LAYOUTS IN ONE INSTRUCTION SET
=========================================

InitializeMint.freeze_authority (compact):

    None:      [0x00]
    Some(k):   [0x01][k: 32 bytes]

SetMintAuthority.new_authority (fixed):

    None:      [0x00][0x00 x 32]
    Some(k):   [0x01][k: 32 bytes]

Both are "an optional 32-byte key", but the runtime reads them with
different widths. Each encoder owns its convention; there is no shared
"encode optional key" step that both go through.

    encode_initialize_mint(9, &authority, None)
    -> 35 bytes: [00][09][authority x 32][00]

    encode_set_mint_authority(None)
    -> 34 bytes: [05][00][00 x 32]

PACK VS ENCODE
==============

encode_*:  raw byte-level API, takes &[u8] identifiers and validates them
pack():    typed API, Pubkey fields can never be the wrong length

pack() dispatches to encode_* with an exhaustive match, so adding a
seventh variant fails to compile until it has an encoder.

UNPACK
======

unpack() is the inverse of pack(). The runtime performs the same parse on
its side; the client uses it in tests and to inspect captured payloads.

    let ix = TokenInstruction::Transfer { amount: 1000 };
    let bytes = ix.pack()?;
    assert_eq!(TokenInstruction::unpack(&bytes)?, ix);
*/
