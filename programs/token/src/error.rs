//! Codec Error Types
//!
//! Every failure the codec can report. Encoding and decoding are
//! deterministic, so none of these are transient: the caller decides whether
//! to abort or surface the error, nothing here is retried.
//!
//! # Error Codes
//!
//! | Code | Variant | Raised by |
//! |------|---------|-----------|
//! | 0 | InvalidIdLength | `write_id`, identifier arguments |
//! | 1 | AmountOutOfRange | `amount_from` |
//! | 2 | MissingMintAuthority | `encode_initialize_mint` |
//! | 3 | LengthMismatch | every encoder (internal invariant) |
//! | 4 | BufferTooShort | every read/write, both decoders |
//! | 5 | UnknownVariant | `InstructionVariant::try_from`, `TokenInstruction::unpack` |
//! | 6 | InvalidOptionTag | `read_option_id_compact` |
//!
//! # Usage
//!
//! ```ignore
//! use spl_token_codec::CodecError;
//!
//! match decode_mint(&data) {
//!     Ok(mint) => println!("supply: {}", mint.supply),
//!     Err(CodecError::BufferTooShort { needed, actual }) => {
//!         println!("need {} bytes, got {}", needed, actual)
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use solana_program::program_error::ProgramError;
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the codec.
///
/// # Important
///
/// The numeric codes returned by [`CodecError::code`] are part of the
/// contract with anything that inspects `ProgramError::Custom` values.
/// NEVER reorder them. Add new errors at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Error 0: An identifier is not exactly 32 bytes.
    #[error("Identifier must be 32 bytes, got {actual}")]
    InvalidIdLength {
        /// Length of the rejected identifier
        actual: usize,
    },

    /// Error 1: An amount does not fit in an unsigned 64-bit integer.
    ///
    /// Negative values are out of range too.
    #[error("Amount does not fit in u64")]
    AmountOutOfRange,

    /// Error 2: InitializeMint was given no usable mint authority.
    ///
    /// The mint authority is the one identifier that is never Option-wrapped
    /// on the wire, so an empty or mis-sized value cannot be encoded.
    #[error("Mint authority is required and must be 32 bytes")]
    MissingMintAuthority,

    /// Error 3: An encoder produced an unexpected number of bytes.
    ///
    /// This is a bug in the codec itself, never in the caller's input.
    #[error("Encoded length mismatch: expected {expected} bytes, produced {actual}")]
    LengthMismatch {
        /// Statically known length for the variant
        expected: usize,
        /// Length actually produced
        actual: usize,
    },

    /// Error 4: A buffer is too small for the requested read or write.
    #[error("Buffer too short: need {needed} bytes, have {actual}")]
    BufferTooShort {
        /// Bytes the operation needs (end offset of the access)
        needed: usize,
        /// Bytes available
        actual: usize,
    },

    /// Error 5: A tag byte outside the numbered instruction set.
    #[error("Unknown instruction variant {0}")]
    UnknownVariant(u8),

    /// Error 6: A compact Option tag that is neither 0 nor 1.
    #[error("Invalid option tag {0}")]
    InvalidOptionTag(u8),
}

impl CodecError {
    /// Stable numeric code for this error.
    pub fn code(&self) -> u32 {
        match self {
            CodecError::InvalidIdLength { .. } => 0,
            CodecError::AmountOutOfRange => 1,
            CodecError::MissingMintAuthority => 2,
            CodecError::LengthMismatch { .. } => 3,
            CodecError::BufferTooShort { .. } => 4,
            CodecError::UnknownVariant(_) => 5,
            CodecError::InvalidOptionTag(_) => 6,
        }
    }
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert CodecError to ProgramError.
///
/// Lets code that already returns `ProgramResult` use `?` on codec calls:
///
/// ```ignore
/// fn read_supply(data: &[u8]) -> Result<u64, ProgramError> {
///     Ok(decode_mint(data)?.supply)
/// }
/// ```
impl From<CodecError> for ProgramError {
    fn from(e: CodecError) -> Self {
        ProgramError::Custom(e.code())
    }
}
