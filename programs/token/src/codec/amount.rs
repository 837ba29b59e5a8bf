//! Amount Conversion
//!
//! Token amounts are u64 on the wire. Callers holding amounts in wider or
//! signed integer types narrow them here instead of with `as`, which would
//! silently truncate.

use crate::error::CodecError;
use num_traits::PrimInt;

/// Convert any primitive integer into a wire amount.
///
/// # Errors
///
/// `AmountOutOfRange` if `value` is negative or larger than `u64::MAX`.
///
/// # Example
///
/// ```ignore
/// let amount = amount_from(1_000_000_000_000u128)?;
/// let data = encode_mint_to(amount)?;
/// ```
pub fn amount_from<T: PrimInt>(value: T) -> Result<u64, CodecError> {
    value.to_u64().ok_or(CodecError::AmountOutOfRange)
}
