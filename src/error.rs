//! Errors returned by the instruction decoders.

use thiserror::Error;

/// Structural failures raised while decoding a token instruction.
///
/// Each failure mode is its own kind so a caller can tell an instruction
/// meant for another program apart from a corrupt or mismatched one. None of
/// them is retryable.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum TokenInstructionError {
    /// The instruction targets a different program.
    #[error("instruction program id does not match the expected token program")]
    InvalidProgramId,

    /// The payload does not fit the instruction's wire layout.
    #[error("instruction data does not fit the expected layout")]
    InvalidInstructionData,

    /// The payload is structurally sound but carries another variant's
    /// discriminant.
    #[error("instruction type does not match the expected variant")]
    InvalidInstructionType,

    /// The instruction carries fewer account references than the variant
    /// requires.
    #[error("instruction is missing required account references")]
    InvalidInstructionKeys,
}
