//! A client-side instruction codec for the SPL Token-2022 program.
//!
//! Builders assemble ready-to-submit [`Instruction`]s from typed inputs.
//! Decoders reverse them: the validated form checks the program id, the
//! payload layout, the discriminant and the required account references in
//! that order, reporting the first mismatch as a distinct
//! [`TokenInstructionError`] kind, while the `*_unchecked` form destructures
//! purely positionally. Transaction assembly, signing and submission are out
//! of scope.
//!
//! [`Instruction`]: solana_program::instruction::Instruction
//! [`TokenInstructionError`]: error::TokenInstructionError

pub mod error;
pub mod extension;
pub mod instructions;

// Program id of the token-2022 program.
solana_program::declare_id!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
