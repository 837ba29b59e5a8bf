//! Instruction Builders
//!
//! Pair an encoded payload with the account list the runtime expects for
//! that instruction. The result is ready to hand to whatever signs and
//! submits transactions.
//!
//! ```ignore
//! let ix = builders::mint_to(&program_id, &mint, &destination, &authority, 1_000)?;
//! let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), &[&payer, &authority], blockhash);
//! ```

use super::{
    encode_burn, encode_initialize_account, encode_initialize_mint, encode_mint_to,
    encode_set_mint_authority, encode_transfer,
};
use crate::codec::option_id_bytes;
use crate::error::CodecError;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    sysvar,
};

/// Build InitializeMint.
///
/// Accounts expected:
/// 0. `[writable]` The mint to initialize
/// 1. `[]` Rent sysvar
pub fn initialize_mint(
    program_id: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
) -> Result<Instruction, CodecError> {
    let data = encode_initialize_mint(
        decimals,
        mint_authority.as_ref(),
        option_id_bytes(freeze_authority),
    )?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data,
    })
}

/// Build InitializeAccount.
///
/// Accounts expected:
/// 0. `[writable]` The token account to initialize
/// 1. `[]` The mint this account holds
/// 2. `[]` The owner of the new account
/// 3. `[]` Rent sysvar
pub fn initialize_account(
    program_id: &Pubkey,
    account: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<Instruction, CodecError> {
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*account, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: encode_initialize_account()?,
    })
}

/// Build MintTo.
///
/// Accounts expected:
/// 0. `[writable]` The mint
/// 1. `[writable]` Destination token account
/// 2. `[signer]` Mint authority
pub fn mint_to(
    program_id: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, CodecError> {
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*mint_authority, true),
        ],
        data: encode_mint_to(amount)?,
    })
}

/// Build Transfer.
///
/// Accounts expected:
/// 0. `[writable]` Source token account
/// 1. `[writable]` Destination token account
/// 2. `[signer]` Source account owner
pub fn transfer(
    program_id: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Result<Instruction, CodecError> {
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*source, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data: encode_transfer(amount)?,
    })
}

/// Build Burn.
///
/// Accounts expected:
/// 0. `[writable]` Token account to burn from
/// 1. `[writable]` The mint
/// 2. `[signer]` Token account owner
pub fn burn(
    program_id: &Pubkey,
    account: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Result<Instruction, CodecError> {
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*account, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data: encode_burn(amount)?,
    })
}

/// Build SetMintAuthority.
///
/// Accounts expected:
/// 0. `[writable]` The mint
/// 1. `[signer]` Current mint authority
pub fn set_mint_authority(
    program_id: &Pubkey,
    mint: &Pubkey,
    current_authority: &Pubkey,
    new_authority: Option<&Pubkey>,
) -> Result<Instruction, CodecError> {
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*current_authority, true),
        ],
        data: encode_set_mint_authority(option_id_bytes(new_authority))?,
    })
}
