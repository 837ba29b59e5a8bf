//! Diagnostics Hook
//!
//! Optional logging around the pure encode/decode calls. Nothing in the
//! codec itself logs; callers that want a trace opt in here.
//!
//! Logs go through `msg!`, so they show up in program logs on-chain and on
//! stdout when running off-chain.
//!
//! ```ignore
//! let data = diagnostics::encode_logged(&TokenInstruction::MintTo { amount: 5 })?;
//! // Program log: encode MintTo: 9 bytes
//! ```

use crate::error::CodecError;
use crate::instruction::TokenInstruction;
use crate::state::{decode_mint, decode_token_account, Mint, TokenAccount};
use solana_program::msg;

/// Run `f`, logging `label` with its outcome, and return the result as-is.
pub fn traced<T, F>(label: &str, f: F) -> Result<T, CodecError>
where
    F: FnOnce() -> Result<T, CodecError>,
{
    let result = f();
    match &result {
        Ok(_) => msg!("{}: ok", label),
        Err(e) => msg!("{}: failed (code {}): {}", label, e.code(), e),
    }
    result
}

/// Log a summary of an encoded instruction payload.
pub fn log_instruction(data: &[u8]) {
    match TokenInstruction::unpack(data) {
        Ok(ix) => msg!("{} ({} bytes): {:?}", ix.variant().name(), data.len(), ix),
        Err(e) => msg!("undecodable instruction ({} bytes): {}", data.len(), e),
    }
}

/// Pack an instruction and log the variant and encoded length.
pub fn encode_logged(ix: &TokenInstruction) -> Result<Vec<u8>, CodecError> {
    let data = traced(ix.variant().name(), || ix.pack())?;
    msg!("encode {}: {} bytes", ix.variant().name(), data.len());
    Ok(data)
}

/// Decode a Mint and log the result.
pub fn decode_mint_logged(data: &[u8]) -> Result<Mint, CodecError> {
    let mint = traced("decode Mint", || decode_mint(data))?;
    msg!(
        "Mint: initialized={} decimals={} supply={} mint_authority={:?} freeze_authority={:?}",
        mint.is_initialized,
        mint.decimals,
        mint.supply,
        mint.mint_authority,
        mint.freeze_authority
    );
    Ok(mint)
}

/// Decode a TokenAccount and log the result.
pub fn decode_token_account_logged(data: &[u8]) -> Result<TokenAccount, CodecError> {
    let account = traced("decode TokenAccount", || decode_token_account(data))?;
    msg!(
        "TokenAccount: mint={} owner={} amount={} frozen={}",
        account.mint,
        account.owner,
        account.amount,
        account.is_frozen
    );
    Ok(account)
}
