//! # Mask / Unmask Subcommands
//!
//! Formatting without validation: `mask` inserts the canonical
//! separators (and fails on inputs with the wrong digit count),
//! `unmask` strips everything that is not a digit.

use clap::Args;

use crate::EngineKind;

/// Arguments shared by the mask and unmask subcommands.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Identifier kind the value belongs to.
    #[arg(value_enum)]
    pub kind: EngineKind,

    /// The value to reformat.
    pub value: String,
}

/// Print the masked form of an identifier.
///
/// # Errors
///
/// Fails when the value does not normalize to a complete identifier —
/// there is nothing to mask.
pub fn run_mask(args: &FormatArgs) -> anyhow::Result<u8> {
    let masked = args.kind.engine().mask(&args.value)?;
    println!("{masked}");
    Ok(0)
}

/// Print the canonical digit form of an identifier. Never fails.
pub fn run_unmask(args: &FormatArgs) -> anyhow::Result<u8> {
    println!("{}", args.kind.engine().unmask(&args.value));
    Ok(0)
}
