//! # Error Types
//!
//! Two deliberately separate taxonomies:
//!
//! - [`ValidationError`] — a value failed identifier validation at
//!   construction time (newtype constructors, deserialization).
//! - [`FormatError`] — a caller asked to mask input that cannot possibly
//!   be a complete identifier. This is a contract violation, distinct
//!   from "the identifier is invalid": a UI uses the distinction to show
//!   "still typing" versus "this is not an identifier at all".

use thiserror::Error;

use crate::config::IdentifierKind;

/// An identifier value failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a valid CPF (wrong length, degenerate sequence, or bad
    /// check digits).
    #[error("invalid CPF: {0:?}")]
    InvalidCpf(String),

    /// Not a valid CNPJ (wrong length, degenerate sequence, or bad
    /// check digits).
    #[error("invalid CNPJ: {0:?}")]
    InvalidCnpj(String),
}

/// A formatting operation was asked to work on malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input does not normalize to the digit count the identifier
    /// kind requires, so there is nothing to mask.
    #[error("{kind} must have {expected} digits, found {found}")]
    WrongLength {
        /// Which identifier kind was being masked.
        kind: IdentifierKind,
        /// Digit count the kind requires.
        expected: usize,
        /// Digit count the input normalized to.
        found: usize,
    },
}
