//! # cadastro-cli — Handler Modules
//!
//! Argument types and `run_*` handlers for each subcommand. The binary
//! entry point in `main.rs` owns parsing and dispatch; handlers return
//! the process exit code (0 for accepted/valid, 1 for rejected).

use clap::ValueEnum;

use cadastro_core::{IdentifierEngine, CNPJ, CPF};

pub mod format;
pub mod generate;
pub mod pipeline;
pub mod validate;

/// Identifier kinds the engine-backed subcommands operate on.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// 11-digit individual taxpayer identifier.
    Cpf,
    /// 14-digit legal-entity identifier.
    Cnpj,
}

impl EngineKind {
    /// The configured engine for this kind.
    pub fn engine(self) -> &'static IdentifierEngine {
        match self {
            Self::Cpf => &CPF,
            Self::Cnpj => &CNPJ,
        }
    }
}
