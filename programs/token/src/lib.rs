//! # SPL Token Codec
//!
//! Client-side wire codec for a minimal SPL-style token program.
//! Encodes instruction payloads sent to the program and decodes the account
//! records it stores.
//!
//! ## Overview
//!
//! The two directions use different Option layouts for 32-byte keys:
//!
//! - Instruction payloads: compact (`[0]` or `[1][key]`)
//! - Account records: fixed (`[tag][32-byte slot]`, always 33 bytes)
//!
//! SetMintAuthority is the one instruction that uses the fixed layout.
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | Mint | 76 bytes | Defines a token type |
//! | TokenAccount | 74 bytes | Holds tokens for an owner |
//!
//! ## Instructions
//!
//! | # | Instruction | Payload bytes |
//! |---|-------------|---------------|
//! | 0 | InitializeMint | 35 or 67 |
//! | 1 | InitializeAccount | 1 |
//! | 2 | MintTo | 9 |
//! | 3 | Transfer | 9 |
//! | 4 | Burn | 9 |
//! | 5 | SetMintAuthority | 34 |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Primitive reads/writes shared by both directions
pub mod codec;

/// Optional logging around encode/decode calls
pub mod diagnostics;

/// Error type with stable numeric codes
pub mod error;

/// Instruction tags, payload encoders and builders
pub mod instruction;

/// Account record structures (Mint, TokenAccount)
pub mod state;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use codec::amount_from;
pub use error::CodecError;
pub use instruction::{
    encode_burn, encode_initialize_account, encode_initialize_mint, encode_mint_to,
    encode_set_mint_authority, encode_transfer, InstructionVariant, TokenInstruction,
};
pub use state::{decode_mint, decode_token_account, Mint, Pack, TokenAccount};
