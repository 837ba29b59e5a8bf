//! End-to-end Wire Tests
//!
//! Encoded instructions go through a real `BanksClient`, land in a small
//! runtime double that stores fixed-layout records, and the resulting
//! account bytes are decoded back on the client side.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p spl_token_codec
//! ```

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_instruction,
};
use solana_program_test::*;
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_token_codec::{
    decode_mint, decode_token_account,
    instruction::{builders, TokenInstruction},
    state::{Mint, Pack, TokenAccount},
};

// =============================================================================
// RUNTIME DOUBLE
// =============================================================================

/// Extra bytes allocated past each record, as a real runtime may do.
const ACCOUNT_SLACK: usize = 6;

/// Stores records exactly as the token runtime lays them out.
///
/// Business rules (signer checks, balances) are not enforced here; the
/// double only exercises the wire format in both directions.
fn process_instruction(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = TokenInstruction::unpack(instruction_data)?;
    let account_info_iter = &mut accounts.iter();

    match instruction {
        TokenInstruction::InitializeMint {
            decimals,
            mint_authority,
            freeze_authority,
        } => {
            let mint_info = next_account_info(account_info_iter)?;
            Mint::new(decimals, mint_authority, freeze_authority)
                .pack_into_slice(&mut mint_info.data.borrow_mut())?;
        }

        TokenInstruction::InitializeAccount => {
            let account_info = next_account_info(account_info_iter)?;
            let mint_info = next_account_info(account_info_iter)?;
            let owner_info = next_account_info(account_info_iter)?;
            TokenAccount::new(*mint_info.key, *owner_info.key)
                .pack_into_slice(&mut account_info.data.borrow_mut())?;
        }

        TokenInstruction::MintTo { amount } => {
            let mint_info = next_account_info(account_info_iter)?;
            let dest_info = next_account_info(account_info_iter)?;
            adjust_supply(mint_info, amount, true)?;
            adjust_balance(dest_info, amount, true)?;
        }

        TokenInstruction::Transfer { amount } => {
            let source_info = next_account_info(account_info_iter)?;
            let dest_info = next_account_info(account_info_iter)?;
            adjust_balance(source_info, amount, false)?;
            adjust_balance(dest_info, amount, true)?;
        }

        TokenInstruction::Burn { amount } => {
            let account_info = next_account_info(account_info_iter)?;
            let mint_info = next_account_info(account_info_iter)?;
            adjust_balance(account_info, amount, false)?;
            adjust_supply(mint_info, amount, false)?;
        }

        TokenInstruction::SetMintAuthority { new_authority } => {
            let mint_info = next_account_info(account_info_iter)?;
            let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
            mint.mint_authority = new_authority;
            mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
        }
    }

    Ok(())
}

fn apply(value: u64, amount: u64, increase: bool) -> Result<u64, ProgramError> {
    let result = if increase {
        value.checked_add(amount)
    } else {
        value.checked_sub(amount)
    };
    result.ok_or(ProgramError::InvalidArgument)
}

fn adjust_supply(mint_info: &AccountInfo, amount: u64, increase: bool) -> ProgramResult {
    let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    mint.supply = apply(mint.supply, amount, increase)?;
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    Ok(())
}

fn adjust_balance(account_info: &AccountInfo, amount: u64, increase: bool) -> ProgramResult {
    let mut account = TokenAccount::unpack_from_slice(&account_info.data.borrow())?;
    account.amount = apply(account.amount, amount, increase)?;
    account.pack_into_slice(&mut account_info.data.borrow_mut())?;
    Ok(())
}

// =============================================================================
// TEST SETUP HELPERS
// =============================================================================

fn program_id() -> Pubkey {
    Pubkey::new_from_array([7u8; 32])
}

fn program_test() -> ProgramTest {
    ProgramTest::new(
        "token_runtime_double",
        program_id(),
        processor!(process_instruction),
    )
}

/// Create a program-owned account of `len` bytes.
async fn create_account(context: &mut ProgramTestContext, account: &Keypair, len: usize) {
    let rent = context.banks_client.get_rent().await.unwrap();

    let create_ix = system_instruction::create_account(
        &context.payer.pubkey(),
        &account.pubkey(),
        rent.minimum_balance(len),
        len as u64,
        &program_id(),
    );

    let tx = Transaction::new_signed_with_payer(
        &[create_ix],
        Some(&context.payer.pubkey()),
        &[&context.payer, account],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await.unwrap();
}

/// Sign with the payer plus `signers` and submit.
async fn submit(
    context: &mut ProgramTestContext,
    ix: solana_program::instruction::Instruction,
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let blockhash = context.banks_client.get_latest_blockhash().await.unwrap();

    let mut all_signers: Vec<&Keypair> = vec![&context.payer];
    all_signers.extend_from_slice(signers);

    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&context.payer.pubkey()),
        &all_signers,
        blockhash,
    );

    context.banks_client.process_transaction(tx).await
}

async fn raw_data(context: &mut ProgramTestContext, address: &Pubkey) -> Vec<u8> {
    context
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .unwrap()
        .data
}

/// Create and initialize a mint, returning its keypair.
async fn setup_mint(
    context: &mut ProgramTestContext,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
) -> Keypair {
    let mint = Keypair::new();
    create_account(context, &mint, Mint::LEN + ACCOUNT_SLACK).await;

    let ix = builders::initialize_mint(
        &program_id(),
        &mint.pubkey(),
        mint_authority,
        freeze_authority,
        decimals,
    )
    .unwrap();
    submit(context, ix, &[]).await.unwrap();

    mint
}

/// Create and initialize a token account, returning its keypair.
async fn setup_token_account(
    context: &mut ProgramTestContext,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Keypair {
    let account = Keypair::new();
    create_account(context, &account, TokenAccount::LEN + ACCOUNT_SLACK).await;

    let ix = builders::initialize_account(&program_id(), &account.pubkey(), mint, owner).unwrap();
    submit(context, ix, &[]).await.unwrap();

    account
}

// =============================================================================
// MINT RECORD TESTS
// =============================================================================

#[tokio::test]
async fn test_initialize_mint_record_layout() {
    let mut context = program_test().start_with_context().await;
    let mint_authority = Keypair::new();

    let mint = setup_mint(&mut context, &mint_authority.pubkey(), None, 9).await;

    let data = raw_data(&mut context, &mint.pubkey()).await;
    assert_eq!(data.len(), Mint::LEN + ACCOUNT_SLACK);

    // Fixed layout: supply stays at offset 35 with or without authorities
    assert_eq!(data[0], 1);
    assert_eq!(data[1], 9);
    assert_eq!(data[2], 1);
    assert_eq!(&data[3..35], mint_authority.pubkey().as_ref());
    assert_eq!(&data[35..43], &[0u8; 8]);
    assert_eq!(data[43], 0);
    assert_eq!(&data[44..76], &[0u8; 32]);

    let decoded = decode_mint(&data).unwrap();
    assert_eq!(decoded, Mint::new(9, mint_authority.pubkey(), None));
}

#[tokio::test]
async fn test_initialize_mint_with_freeze_authority() {
    let mut context = program_test().start_with_context().await;
    let mint_authority = Keypair::new();
    let freeze_authority = Keypair::new();

    let mint = setup_mint(
        &mut context,
        &mint_authority.pubkey(),
        Some(&freeze_authority.pubkey()),
        6,
    )
    .await;

    let decoded = decode_mint(&raw_data(&mut context, &mint.pubkey()).await).unwrap();

    assert!(decoded.is_initialized);
    assert_eq!(decoded.decimals, 6);
    assert_eq!(decoded.freeze_authority, Some(freeze_authority.pubkey()));
}

#[tokio::test]
async fn test_set_mint_authority_to_none() {
    let mut context = program_test().start_with_context().await;
    let mint_authority = Keypair::new();

    let mint = setup_mint(&mut context, &mint_authority.pubkey(), None, 0).await;

    let ix = builders::set_mint_authority(
        &program_id(),
        &mint.pubkey(),
        &mint_authority.pubkey(),
        None,
    )
    .unwrap();
    submit(&mut context, ix, &[&mint_authority]).await.unwrap();

    let data = raw_data(&mut context, &mint.pubkey()).await;
    let decoded = decode_mint(&data).unwrap();

    assert_eq!(decoded.mint_authority, None);
    assert!(decoded.is_initialized);
    // The cleared slot is zero-filled, not removed
    assert_eq!(&data[2..35], &[0u8; 33]);
}

#[tokio::test]
async fn test_set_mint_authority_to_new_key() {
    let mut context = program_test().start_with_context().await;
    let mint_authority = Keypair::new();
    let new_authority = Pubkey::new_unique();

    let mint = setup_mint(&mut context, &mint_authority.pubkey(), None, 0).await;

    let ix = builders::set_mint_authority(
        &program_id(),
        &mint.pubkey(),
        &mint_authority.pubkey(),
        Some(&new_authority),
    )
    .unwrap();
    submit(&mut context, ix, &[&mint_authority]).await.unwrap();

    let decoded = decode_mint(&raw_data(&mut context, &mint.pubkey()).await).unwrap();
    assert_eq!(decoded.mint_authority, Some(new_authority));
}

// =============================================================================
// TOKEN ACCOUNT TESTS
// =============================================================================

#[tokio::test]
async fn test_initialize_account_record_layout() {
    let mut context = program_test().start_with_context().await;
    let mint_authority = Keypair::new();
    let owner = Pubkey::new_unique();

    let mint = setup_mint(&mut context, &mint_authority.pubkey(), None, 9).await;
    let account = setup_token_account(&mut context, &mint.pubkey(), &owner).await;

    let data = raw_data(&mut context, &account.pubkey()).await;
    assert_eq!(&data[1..33], mint.pubkey().as_ref());
    assert_eq!(&data[33..65], owner.as_ref());

    let decoded = decode_token_account(&data).unwrap();
    assert_eq!(decoded, TokenAccount::new(mint.pubkey(), owner));
}

#[tokio::test]
async fn test_mint_transfer_burn_flow() {
    let mut context = program_test().start_with_context().await;
    let mint_authority = Keypair::new();
    let alice = Keypair::new();
    let bob = Pubkey::new_unique();

    let mint = setup_mint(&mut context, &mint_authority.pubkey(), None, 9).await;
    let alice_account = setup_token_account(&mut context, &mint.pubkey(), &alice.pubkey()).await;
    let bob_account = setup_token_account(&mut context, &mint.pubkey(), &bob).await;

    let minted = 1_000_000_000_000u64;
    let ix = builders::mint_to(
        &program_id(),
        &mint.pubkey(),
        &alice_account.pubkey(),
        &mint_authority.pubkey(),
        minted,
    )
    .unwrap();
    assert_eq!(ix.data.len(), 9);
    submit(&mut context, ix, &[&mint_authority]).await.unwrap();

    let ix = builders::transfer(
        &program_id(),
        &alice_account.pubkey(),
        &bob_account.pubkey(),
        &alice.pubkey(),
        250_000,
    )
    .unwrap();
    submit(&mut context, ix, &[&alice]).await.unwrap();

    let ix = builders::burn(
        &program_id(),
        &alice_account.pubkey(),
        &mint.pubkey(),
        &alice.pubkey(),
        50_000,
    )
    .unwrap();
    submit(&mut context, ix, &[&alice]).await.unwrap();

    let mint_state = decode_mint(&raw_data(&mut context, &mint.pubkey()).await).unwrap();
    let alice_state =
        decode_token_account(&raw_data(&mut context, &alice_account.pubkey()).await).unwrap();
    let bob_state =
        decode_token_account(&raw_data(&mut context, &bob_account.pubkey()).await).unwrap();

    assert_eq!(mint_state.supply, minted - 50_000);
    assert_eq!(alice_state.amount, minted - 250_000 - 50_000);
    assert_eq!(bob_state.amount, 250_000);
    assert_eq!(bob_state.mint, mint.pubkey());
    assert!(!alice_state.is_frozen);
}

// =============================================================================
// ERROR PROPAGATION
// =============================================================================

#[tokio::test]
async fn test_unknown_variant_is_rejected_with_its_code() {
    let mut context = program_test().start_with_context().await;

    let ix = solana_program::instruction::Instruction {
        program_id: program_id(),
        accounts: vec![],
        data: vec![6],
    };

    let err = submit(&mut context, ix, &[]).await.unwrap_err();
    let err = err.unwrap();

    assert_eq!(
        err,
        solana_sdk::transaction::TransactionError::InstructionError(
            0,
            solana_sdk::instruction::InstructionError::Custom(5),
        )
    );
}
