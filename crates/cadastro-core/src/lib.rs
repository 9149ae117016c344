//! # cadastro-core — Brazilian Registry Identifier Engine
//!
//! Validation, formatting, and generation for Brazilian registry
//! identifiers: CPF (11-digit individual taxpayer number) and CNPJ
//! (14-digit legal-entity number). Both kinds share one weighted-sum
//! modulo-11 check-digit scheme; this crate implements it once, as a
//! single engine parameterized by an [`IdentifierConfig`], instantiated
//! twice. Adding a third identifier kind is a configuration change,
//! not a code fork.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`Cpf`] and [`Cnpj`]
//!    validate at construction time. No bare strings for identifiers.
//!
//! 2. **Total validation, fallible formatting.** [`IdentifierEngine::validate`]
//!    and [`IdentifierEngine::matches_format`] return a boolean for *every*
//!    input — they never panic and never error. Only
//!    [`IdentifierEngine::mask`] is fallible, because masking something
//!    that cannot be a complete identifier is a caller error, not a
//!    validation outcome.
//!
//! 3. **No shared mutable state.** Every operation is a pure function over
//!    immutable configuration; `generate` draws from the thread-local RNG
//!    but holds nothing. The engine is `Send + Sync` by construction.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cadastro-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No logging — observability belongs to the calling orchestration
//!   layer, never to the pure engine.

pub mod checksum;
pub mod config;
pub mod engine;
pub mod error;
pub mod identity;

pub use config::{IdentifierConfig, IdentifierKind, CNPJ_CONFIG, CPF_CONFIG};
pub use engine::{IdentifierEngine, CNPJ, CPF};
pub use error::{FormatError, ValidationError};
pub use identity::{Cnpj, Cpf};
