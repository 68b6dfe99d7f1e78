//! Instruction builders and decoders for the token-2022 program.
//!
//! Every instruction payload begins with a one-byte discriminant naming a
//! [`TokenInstruction`] variant, followed by that variant's fields. Builders
//! assemble ready-to-submit [`Instruction`]s from typed inputs; decoders
//! reverse them, either positionally (`*_unchecked`) or validated against
//! the expected program and variant. One module per modeled variant.
//!
//! [`Instruction`]: solana_program::instruction::Instruction

pub mod initialize_mint_close_authority;
pub mod reallocate;

pub use {initialize_mint_close_authority::*, reallocate::*};

use {
    crate::error::TokenInstructionError,
    num_derive::{FromPrimitive, ToPrimitive},
    num_traits::FromPrimitive,
};

/// Minimum number of multisignature co-signers.
pub const MIN_SIGNERS: usize = 1;
/// Maximum number of multisignature co-signers.
pub const MAX_SIGNERS: usize = 11;

/// Instructions understood by the token-2022 program.
///
/// Discriminant values are a stable external contract; a retired value is
/// never reused for a different meaning. Variants up to
/// [`UiAmountToAmount`](Self::UiAmountToAmount) are shared with the original
/// token program, the rest are extension-specific.
#[derive(Clone, Copy, Debug, Eq, PartialEq, FromPrimitive, ToPrimitive)]
#[repr(u8)]
pub enum TokenInstruction {
    /// Initialize a new mint
    InitializeMint = 0,
    /// Initialize a new token account
    InitializeAccount = 1,
    /// Initialize a multisignature authority
    InitializeMultisig = 2,
    /// Transfer tokens
    Transfer = 3,
    /// Approve a delegate
    Approve = 4,
    /// Revoke a delegate
    Revoke = 5,
    /// Set an authority on a mint or token account
    SetAuthority = 6,
    /// Mint new tokens
    MintTo = 7,
    /// Burn tokens
    Burn = 8,
    /// Close a token account
    CloseAccount = 9,
    /// Freeze a token account
    FreezeAccount = 10,
    /// Thaw a frozen token account
    ThawAccount = 11,
    /// Transfer tokens, checked against mint and decimals
    TransferChecked = 12,
    /// Approve a delegate, checked against mint and decimals
    ApproveChecked = 13,
    /// Mint new tokens, checked against decimals
    MintToChecked = 14,
    /// Burn tokens, checked against decimals
    BurnChecked = 15,
    /// Initialize a token account, owner given as instruction data
    InitializeAccount2 = 16,
    /// Sync a native token account's amount with its lamports
    SyncNative = 17,
    /// Initialize a token account without rent sysvar
    InitializeAccount3 = 18,
    /// Initialize a multisignature authority without rent sysvar
    InitializeMultisig2 = 19,
    /// Initialize a new mint without rent sysvar
    InitializeMint2 = 20,
    /// Report the required size of a token account for a mint
    GetAccountDataSize = 21,
    /// Initialize the immutable owner extension on a token account
    InitializeImmutableOwner = 22,
    /// Convert a token amount to its UI representation
    AmountToUiAmount = 23,
    /// Convert a UI amount back to a token amount
    UiAmountToAmount = 24,
    /// Initialize the close authority on a mint
    InitializeMintCloseAuthority = 25,
    /// Transfer fee extension sub-instructions
    TransferFeeExtension = 26,
    /// Confidential transfer extension sub-instructions
    ConfidentialTransferExtension = 27,
    /// Default account state extension sub-instructions
    DefaultAccountStateExtension = 28,
    /// Reallocate a token account to fit new extensions
    Reallocate = 29,
    /// Required memo transfer extension sub-instructions
    MemoTransferExtension = 30,
    /// Create the native mint
    CreateNativeMint = 31,
    /// Initialize the non-transferable extension on a mint
    InitializeNonTransferableMint = 32,
    /// Interest-bearing mint extension sub-instructions
    InterestBearingMintExtension = 33,
    /// CPI guard extension sub-instructions
    CpiGuardExtension = 34,
    /// Initialize the permanent delegate on a mint
    InitializePermanentDelegate = 35,
    /// Transfer hook extension sub-instructions
    TransferHookExtension = 36,
    /// Confidential transfer fee extension sub-instructions
    ConfidentialTransferFeeExtension = 37,
    /// Withdraw excess lamports from a mint, account or multisig
    WithdrawExcessLamports = 38,
    /// Metadata pointer extension sub-instructions
    MetadataPointerExtension = 39,
    /// Group pointer extension sub-instructions
    GroupPointerExtension = 40,
    /// Group member pointer extension sub-instructions
    GroupMemberPointerExtension = 41,
    /// Confidential mint-burn extension sub-instructions
    ConfidentialMintBurnExtension = 42,
    /// Scaled UI amount extension sub-instructions
    ScaledUiAmountExtension = 43,
    /// Pausable extension sub-instructions
    PausableExtension = 44,
}

impl TokenInstruction {
    /// Reads the instruction discriminant off the front of a payload.
    ///
    /// Fails with [`TokenInstructionError::InvalidInstructionData`] when the
    /// payload is empty and [`TokenInstructionError::InvalidInstructionType`]
    /// when no variant claims the leading byte. The rest of the payload is
    /// not touched.
    pub fn decode_type(input: &[u8]) -> Result<Self, TokenInstructionError> {
        let tag = input
            .first()
            .ok_or(TokenInstructionError::InvalidInstructionData)?;
        FromPrimitive::from_u8(*tag).ok_or(TokenInstructionError::InvalidInstructionType)
    }
}
