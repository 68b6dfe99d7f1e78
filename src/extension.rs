//! Extension types that can be attached to token-2022 mints and accounts.

use num_enum::{FromPrimitive, IntoPrimitive};

/// Serialized width of an extension type tag, in bytes.
pub const TYPE_SIZE: usize = 2;

/// Extensions understood by the token-2022 program.
///
/// Tag values are a stable external contract shared with the on-chain
/// program; they are never renumbered. Tags minted after this client was
/// built decode to [`ExtensionType::Unknown`], which carries the raw value
/// so it survives a decode/encode round trip unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum ExtensionType {
    /// Padding for not-yet-initialized extension space
    Uninitialized = 0,
    /// Transfer fee rate and accompanying authorities
    TransferFeeConfig = 1,
    /// Transfer fees withheld on a token account
    TransferFeeAmount = 2,
    /// Authority allowed to close a mint
    MintCloseAuthority = 3,
    /// Confidential transfer state on a mint
    ConfidentialTransferMint = 4,
    /// Confidential transfer state on a token account
    ConfidentialTransferAccount = 5,
    /// Default state for new token accounts of a mint
    DefaultAccountState = 6,
    /// Token account ownership cannot be reassigned
    ImmutableOwner = 7,
    /// Incoming transfers to a token account must carry a memo
    MemoTransfer = 8,
    /// Tokens of the mint cannot be transferred
    NonTransferable = 9,
    /// Interest accrual state on a mint
    InterestBearingConfig = 10,
    /// Guards a token account against unexpected behavior during
    /// cross-program invocations
    CpiGuard = 11,
    /// Delegate authority on a mint that survives owner changes
    PermanentDelegate = 12,
    /// Marks a token account holding a non-transferable token
    NonTransferableAccount = 13,
    /// Program invoked on every transfer of the mint
    TransferHook = 14,
    /// Marks a token account whose mint carries a transfer hook
    TransferHookAccount = 15,
    /// Confidential transfer fees withheld on a mint
    ConfidentialTransferFeeConfig = 16,
    /// Confidential transfer fees withheld on a token account
    ConfidentialTransferFeeAmount = 17,
    /// Address of the account holding the mint's metadata
    MetadataPointer = 18,
    /// Token metadata stored directly on the mint
    TokenMetadata = 19,
    /// Address of the account holding the mint's group configuration
    GroupPointer = 20,
    /// Token group configuration stored directly on the mint
    TokenGroup = 21,
    /// Address of the account holding the mint's group membership
    GroupMemberPointer = 22,
    /// Token group membership stored directly on the mint
    TokenGroupMember = 23,
    /// Confidential minting and burning on a mint
    ConfidentialMintBurn = 24,
    /// Multiplier applied to displayed token amounts
    ScaledUiAmount = 25,
    /// Mint whose transfers can be paused
    Pausable = 26,
    /// Marks a token account whose mint is pausable
    PausableAccount = 27,
    /// Tag value this client does not recognize
    #[num_enum(catch_all)]
    Unknown(u16),
}

impl ExtensionType {
    /// Builds an extension type from a raw integer tag, keeping only the
    /// low 16 bits. Bits above the wire width are dropped, so an
    /// out-of-range tag does not survive a round trip.
    pub fn from_raw(raw: u64) -> Self {
        Self::from(raw as u16)
    }
}
