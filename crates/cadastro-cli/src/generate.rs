//! # Generate Subcommand
//!
//! Prints freshly generated valid identifiers, masked by default.

use clap::Args;

use crate::EngineKind;

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Identifier kind to generate.
    #[arg(value_enum)]
    pub kind: EngineKind,

    /// How many identifiers to generate.
    #[arg(long, default_value_t = 1)]
    pub count: u32,

    /// Print canonical digits instead of the masked form.
    #[arg(long)]
    pub raw: bool,
}

/// Generate identifiers, one per line.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<u8> {
    let engine = args.kind.engine();
    for _ in 0..args.count {
        let digits = engine.generate();
        if args.raw {
            println!("{digits}");
        } else {
            let masked = engine
                .mask(&digits)
                .expect("generated identifiers are complete");
            println!("{masked}");
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_always_succeeds() {
        let args = GenerateArgs {
            kind: EngineKind::Cpf,
            count: 5,
            raw: false,
        };
        assert_eq!(run_generate(&args).unwrap(), 0);
    }
}
