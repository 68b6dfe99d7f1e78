//! The `InitializeMintCloseAuthority` instruction records which authority,
//! if any, may later close a mint. It must run before `InitializeMint`.

use {
    crate::{error::TokenInstructionError, instructions::TokenInstruction},
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program_option::COption,
        pubkey::{Pubkey, PUBKEY_BYTES},
    },
};

/// Wire layout of an `InitializeMintCloseAuthority` payload: the instruction
/// discriminant, a one-byte `Some`/`None` tag, and the close authority's 32
/// bytes when present.
#[derive(Clone, Debug, PartialEq)]
pub struct InitializeMintCloseAuthorityInstructionData {
    /// Raw discriminant byte;
    /// [`TokenInstruction::InitializeMintCloseAuthority`] when built by this
    /// client.
    pub instruction_type: u8,
    /// Authority allowed to close the mint, if any.
    pub close_authority: COption<Pubkey>,
}

impl InitializeMintCloseAuthorityInstructionData {
    /// Serializes the payload: 2 bytes without a close authority,
    /// `2 + PUBKEY_BYTES` with one.
    pub fn pack(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(2 + PUBKEY_BYTES);
        data.push(self.instruction_type);
        match &self.close_authority {
            COption::Some(close_authority) => {
                data.push(1);
                data.extend_from_slice(close_authority.as_ref());
            }
            COption::None => data.push(0),
        }
        data
    }

    /// Deserializes a payload, consuming the whole buffer. The discriminant
    /// byte is carried through without being checked.
    pub fn unpack(input: &[u8]) -> Result<Self, TokenInstructionError> {
        let (&instruction_type, rest) = input
            .split_first()
            .ok_or(TokenInstructionError::InvalidInstructionData)?;
        let close_authority = match rest.split_first() {
            Some((&0, rest)) if rest.is_empty() => COption::None,
            Some((&1, rest)) if rest.len() == PUBKEY_BYTES => COption::Some(
                Pubkey::try_from(rest)
                    .map_err(|_| TokenInstructionError::InvalidInstructionData)?,
            ),
            _ => return Err(TokenInstructionError::InvalidInstructionData),
        };
        Ok(Self {
            instruction_type,
            close_authority,
        })
    }
}

/// Construct an `InitializeMintCloseAuthority` instruction.
///
/// # Account references
///   0. `[WRITE]` The mint to initialize
pub fn initialize_mint_close_authority(
    token_program_id: &Pubkey,
    mint: &Pubkey,
    close_authority: Option<&Pubkey>,
) -> Instruction {
    let accounts = vec![AccountMeta::new(*mint, false)];

    let data = InitializeMintCloseAuthorityInstructionData {
        instruction_type: TokenInstruction::InitializeMintCloseAuthority as u8,
        close_authority: close_authority.copied().into(),
    }
    .pack();

    Instruction {
        program_id: *token_program_id,
        accounts,
        data,
    }
}

/// A decoded, validated `InitializeMintCloseAuthority` instruction.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedInitializeMintCloseAuthorityInstruction {
    /// Program the instruction targets.
    pub program_id: Pubkey,
    /// The mint to initialize.
    pub mint: AccountMeta,
    /// Authority allowed to close the mint, if any.
    pub close_authority: COption<Pubkey>,
}

/// A decoded, unvalidated `InitializeMintCloseAuthority` instruction.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedInitializeMintCloseAuthorityInstructionUnchecked {
    pub program_id: Pubkey,
    pub mint: Option<AccountMeta>,
    /// Raw discriminant byte, carried through without being checked.
    pub instruction_type: u8,
    pub close_authority: COption<Pubkey>,
}

/// Decode an `InitializeMintCloseAuthority` instruction, validating it
/// against the expected token program.
///
/// Checks run in a fixed order, the first failure winning: the program id
/// must match `token_program_id`, the payload must fit the wire layout, the
/// discriminant must be
/// [`TokenInstruction::InitializeMintCloseAuthority`], and the mint
/// reference must be present.
pub fn decode_initialize_mint_close_authority_instruction(
    instruction: &Instruction,
    token_program_id: &Pubkey,
) -> Result<DecodedInitializeMintCloseAuthorityInstruction, TokenInstructionError> {
    if instruction.program_id != *token_program_id {
        return Err(TokenInstructionError::InvalidProgramId);
    }

    let decoded = decode_initialize_mint_close_authority_instruction_unchecked(instruction)?;
    if decoded.instruction_type != TokenInstruction::InitializeMintCloseAuthority as u8 {
        return Err(TokenInstructionError::InvalidInstructionType);
    }
    match decoded.mint {
        Some(mint) => Ok(DecodedInitializeMintCloseAuthorityInstruction {
            program_id: decoded.program_id,
            mint,
            close_authority: decoded.close_authority,
        }),
        None => Err(TokenInstructionError::InvalidInstructionKeys),
    }
}

/// Decode an `InitializeMintCloseAuthority` instruction without validating
/// the program id, the discriminant or the account references.
pub fn decode_initialize_mint_close_authority_instruction_unchecked(
    instruction: &Instruction,
) -> Result<DecodedInitializeMintCloseAuthorityInstructionUnchecked, TokenInstructionError> {
    let data = InitializeMintCloseAuthorityInstructionData::unpack(&instruction.data)?;

    Ok(DecodedInitializeMintCloseAuthorityInstructionUnchecked {
        program_id: instruction.program_id,
        mint: instruction.accounts.first().cloned(),
        instruction_type: data.instruction_type,
        close_authority: data.close_authority,
    })
}
