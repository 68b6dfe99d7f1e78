//! The `Reallocate` instruction grows a token account so it can hold a new
//! set of extensions.

use {
    crate::{
        error::TokenInstructionError,
        extension::{ExtensionType, TYPE_SIZE},
        instructions::TokenInstruction,
    },
    solana_program::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program,
    },
};

/// Wire layout of a `Reallocate` payload: the instruction discriminant
/// followed by little-endian `u16` extension type tags filling the rest of
/// the buffer. There is no count prefix; the number of tags is recovered
/// from the payload length.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReallocateInstructionData {
    /// Raw discriminant byte; [`TokenInstruction::Reallocate`] when built by
    /// this client.
    pub instruction_type: u8,
    /// Extensions the account must have room for, in payload order.
    pub extension_types: Vec<ExtensionType>,
}

impl ReallocateInstructionData {
    /// Serializes the payload. The result is always
    /// `1 + TYPE_SIZE * extension_types.len()` bytes.
    pub fn pack(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(1 + TYPE_SIZE * self.extension_types.len());
        data.push(self.instruction_type);
        for extension_type in &self.extension_types {
            data.extend_from_slice(&u16::from(*extension_type).to_le_bytes());
        }
        data
    }

    /// Deserializes a payload, consuming the whole buffer.
    ///
    /// The discriminant byte is carried through without being checked. Fails
    /// when the buffer is empty or the remainder after the discriminant is
    /// not a whole number of `TYPE_SIZE`-byte tags.
    pub fn unpack(input: &[u8]) -> Result<Self, TokenInstructionError> {
        let (&instruction_type, rest) = input
            .split_first()
            .ok_or(TokenInstructionError::InvalidInstructionData)?;
        if rest.len() % TYPE_SIZE != 0 {
            return Err(TokenInstructionError::InvalidInstructionData);
        }
        let extension_types = rest
            .chunks_exact(TYPE_SIZE)
            .map(|chunk| ExtensionType::from(u16::from_le_bytes([chunk[0], chunk[1]])))
            .collect();
        Ok(Self {
            instruction_type,
            extension_types,
        })
    }
}

/// Construct a `Reallocate` instruction.
///
/// # Account references
///   0. `[WRITE]` The token account to reallocate
///   1. `[WRITE, SIGNER]` The funding account for the reallocation
///   2. `[WRITE, SIGNER]` The token account's owner, or its multisignature
///      authority
///   3. System program
///   4. ..`4+N` `N` multisignature co-signer accounts
pub fn reallocate(
    token_program_id: &Pubkey,
    account: &Pubkey,
    payer: &Pubkey,
    owner: &Pubkey,
    signers: &[&Pubkey],
    extension_types: &[ExtensionType],
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(*account, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new(*owner, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    for signer in signers {
        accounts.push(AccountMeta::new_readonly(**signer, false));
    }

    let data = ReallocateInstructionData {
        instruction_type: TokenInstruction::Reallocate as u8,
        extension_types: extension_types.to_vec(),
    }
    .pack();

    Instruction {
        program_id: *token_program_id,
        accounts,
        data,
    }
}

/// A decoded, validated `Reallocate` instruction.
///
/// Produced by [`decode_reallocate_instruction`]: the program id and
/// discriminant have been checked and every required account reference is
/// present.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedReallocateInstruction {
    /// Program the instruction targets.
    pub program_id: Pubkey,
    /// The token account to reallocate.
    pub account: AccountMeta,
    /// The funding account for the reallocation.
    pub payer: AccountMeta,
    /// The token account's owner or its multisignature authority.
    pub owner: AccountMeta,
    /// Multisignature co-signer accounts, in instruction order. The system
    /// program reference the builder places ahead of them is not included.
    pub signers: Vec<AccountMeta>,
    /// Extensions the account must have room for.
    pub extension_types: Vec<ExtensionType>,
}

/// A decoded, unvalidated `Reallocate` instruction.
///
/// Purely positional: account references that are not present decode to
/// `None`, and neither the program id nor the discriminant is checked.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedReallocateInstructionUnchecked {
    pub program_id: Pubkey,
    pub account: Option<AccountMeta>,
    pub payer: Option<AccountMeta>,
    pub owner: Option<AccountMeta>,
    /// Account references from position 3 on, minus a leading entry holding
    /// the well-known system program id, which is the builder's inserted
    /// slot rather than a co-signer.
    pub signers: Vec<AccountMeta>,
    /// Raw discriminant byte, carried through without being checked.
    pub instruction_type: u8,
    pub extension_types: Vec<ExtensionType>,
}

/// Decode a `Reallocate` instruction, validating it against the expected
/// token program.
///
/// Checks run in a fixed order, the first failure winning: the program id
/// must match `token_program_id`, the payload must fit the wire layout, the
/// discriminant must be [`TokenInstruction::Reallocate`], and the account,
/// payer and owner references must all be present. Co-signers beyond those
/// are optional.
pub fn decode_reallocate_instruction(
    instruction: &Instruction,
    token_program_id: &Pubkey,
) -> Result<DecodedReallocateInstruction, TokenInstructionError> {
    if instruction.program_id != *token_program_id {
        return Err(TokenInstructionError::InvalidProgramId);
    }

    let decoded = decode_reallocate_instruction_unchecked(instruction)?;
    if decoded.instruction_type != TokenInstruction::Reallocate as u8 {
        return Err(TokenInstructionError::InvalidInstructionType);
    }
    match (decoded.account, decoded.payer, decoded.owner) {
        (Some(account), Some(payer), Some(owner)) => Ok(DecodedReallocateInstruction {
            program_id: decoded.program_id,
            account,
            payer,
            owner,
            signers: decoded.signers,
            extension_types: decoded.extension_types,
        }),
        _ => Err(TokenInstructionError::InvalidInstructionKeys),
    }
}

/// Decode a `Reallocate` instruction without validating the program id, the
/// discriminant or the account references.
///
/// Still fails with [`TokenInstructionError::InvalidInstructionData`] when
/// the payload does not fit the wire layout, since there is nothing
/// positional to recover from it.
pub fn decode_reallocate_instruction_unchecked(
    instruction: &Instruction,
) -> Result<DecodedReallocateInstructionUnchecked, TokenInstructionError> {
    let data = ReallocateInstructionData::unpack(&instruction.data)?;

    let mut signers: Vec<AccountMeta> =
        instruction.accounts.get(3..).unwrap_or_default().to_vec();
    if let Some(first) = signers.first() {
        if system_program::check_id(&first.pubkey) {
            signers.remove(0);
        }
    }

    Ok(DecodedReallocateInstructionUnchecked {
        program_id: instruction.program_id,
        account: instruction.accounts.first().cloned(),
        payer: instruction.accounts.get(1).cloned(),
        owner: instruction.accounts.get(2).cloned(),
        signers,
        instruction_type: data.instruction_type,
        extension_types: data.extension_types,
    })
}

#[cfg(test)]
mod tests {
    use {super::*, crate::id, assert_matches::assert_matches};

    #[test]
    fn test_pack_produces_discriminant_then_le_tags() {
        let data = ReallocateInstructionData {
            instruction_type: TokenInstruction::Reallocate as u8,
            extension_types: vec![ExtensionType::MintCloseAuthority],
        };
        assert_eq!(data.pack(), vec![29, 0x03, 0x00]);

        let data = ReallocateInstructionData {
            instruction_type: TokenInstruction::Reallocate as u8,
            extension_types: vec![
                ExtensionType::TransferFeeAmount,
                ExtensionType::MemoTransfer,
                ExtensionType::Unknown(0x1234),
            ],
        };
        assert_eq!(data.pack(), vec![29, 0x02, 0x00, 0x08, 0x00, 0x34, 0x12]);
    }

    #[test]
    fn test_packed_len_tracks_extension_count() {
        for count in 0..=4 {
            let data = ReallocateInstructionData {
                instruction_type: TokenInstruction::Reallocate as u8,
                extension_types: vec![ExtensionType::ImmutableOwner; count],
            };
            assert_eq!(data.pack().len(), 1 + TYPE_SIZE * count);
        }
    }

    #[test]
    fn test_unpack_round_trips_pack() {
        let data = ReallocateInstructionData {
            instruction_type: TokenInstruction::Reallocate as u8,
            extension_types: vec![
                ExtensionType::MintCloseAuthority,
                ExtensionType::Unknown(999),
            ],
        };
        assert_eq!(ReallocateInstructionData::unpack(&data.pack()), Ok(data));
    }

    #[test]
    fn test_unpack_rejects_malformed_payloads() {
        assert_matches!(
            ReallocateInstructionData::unpack(&[]),
            Err(TokenInstructionError::InvalidInstructionData)
        );
        assert_matches!(
            ReallocateInstructionData::unpack(&[29, 0x03]),
            Err(TokenInstructionError::InvalidInstructionData)
        );
        assert_matches!(
            ReallocateInstructionData::unpack(&[29, 0x03, 0x00, 0x07]),
            Err(TokenInstructionError::InvalidInstructionData)
        );
    }

    #[test]
    fn test_unpack_keeps_foreign_discriminant() {
        let data = ReallocateInstructionData::unpack(&[0xEE, 0x03, 0x00]).unwrap();
        assert_eq!(data.instruction_type, 0xEE);
        assert_eq!(data.extension_types, vec![ExtensionType::MintCloseAuthority]);
    }

    #[test]
    fn test_reallocate_builder_account_order_and_flags() {
        let account = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let signer = Pubkey::new_unique();
        let instruction = reallocate(
            &id(),
            &account,
            &payer,
            &owner,
            &[&signer],
            &[ExtensionType::MintCloseAuthority],
        );

        assert_eq!(instruction.program_id, id());
        assert_eq!(
            instruction.accounts,
            vec![
                AccountMeta::new(account, false),
                AccountMeta::new(payer, true),
                AccountMeta::new(owner, true),
                AccountMeta::new_readonly(system_program::id(), false),
                AccountMeta::new_readonly(signer, false),
            ]
        );
        assert_eq!(instruction.data, vec![29, 0x03, 0x00]);
    }

    #[test]
    fn test_unchecked_decode_skips_builder_system_program_slot() {
        let signer = Pubkey::new_unique();
        let instruction = reallocate(
            &id(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &[&signer],
            &[],
        );

        let decoded = decode_reallocate_instruction_unchecked(&instruction).unwrap();
        assert_eq!(decoded.signers, vec![AccountMeta::new_readonly(signer, false)]);
    }

    #[test]
    fn test_unchecked_decode_keeps_foreign_fourth_account() {
        let fourth = Pubkey::new_unique();
        let fifth = Pubkey::new_unique();
        let mut instruction = reallocate(
            &id(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &[&fifth],
            &[],
        );
        instruction.accounts[3] = AccountMeta::new_readonly(fourth, true);

        let decoded = decode_reallocate_instruction_unchecked(&instruction).unwrap();
        assert_eq!(
            decoded.signers,
            vec![
                AccountMeta::new_readonly(fourth, true),
                AccountMeta::new_readonly(fifth, false),
            ]
        );
    }

    #[test]
    fn test_unchecked_decode_tolerates_missing_accounts() {
        let instruction = Instruction {
            program_id: Pubkey::new_unique(),
            accounts: vec![],
            data: vec![29],
        };

        let decoded = decode_reallocate_instruction_unchecked(&instruction).unwrap();
        assert_eq!(decoded.account, None);
        assert_eq!(decoded.payer, None);
        assert_eq!(decoded.owner, None);
        assert_eq!(decoded.signers, vec![]);
        assert_eq!(decoded.extension_types, vec![]);
    }
}
