//! # cadastro CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cadastro_cli::format::{run_mask, run_unmask, FormatArgs};
use cadastro_cli::generate::{run_generate, GenerateArgs};
use cadastro_cli::pipeline::{run_pipeline_cmd, PipelineArgs};
use cadastro_cli::validate::{run_validate, ValidateArgs};

/// Brazilian registry identifier toolkit.
///
/// Validates, masks, and generates CPF and CNPJ identifiers, checks
/// email syntax and password policy, and runs the orchestration
/// pipeline over a full input record.
#[derive(Parser, Debug)]
#[command(name = "cadastro", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a CPF, CNPJ, email, or password.
    Validate(ValidateArgs),

    /// Generate valid identifiers.
    Generate(GenerateArgs),

    /// Render an identifier in its masked form.
    Mask(FormatArgs),

    /// Strip an identifier down to its digits.
    Unmask(FormatArgs),

    /// Run the full processing pipeline over one record.
    Pipeline(PipelineArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Generate(args) => run_generate(&args),
        Commands::Mask(args) => run_mask(&args),
        Commands::Unmask(args) => run_unmask(&args),
        Commands::Pipeline(args) => run_pipeline_cmd(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_validate() {
        let cli = Cli::try_parse_from(["cadastro", "validate", "cpf", "123.456.789-09"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn cli_parse_generate_with_count() {
        let cli =
            Cli::try_parse_from(["cadastro", "generate", "cnpj", "--count", "3", "--raw"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.count, 3);
        assert!(args.raw);
    }

    #[test]
    fn cli_parse_pipeline() {
        let cli = Cli::try_parse_from([
            "cadastro",
            "pipeline",
            "--email",
            "user@empresa.com",
            "--password",
            "Str0ng!Pass",
            "--cnpj",
            "11222333000181",
        ])
        .unwrap();
        let Commands::Pipeline(args) = cli.command else {
            panic!("expected pipeline");
        };
        assert_eq!(args.domain, "empresa.com");
        assert!(!args.json);
    }

    #[test]
    fn cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["cadastro", "validate", "rg", "x"]).is_err());
    }

    #[test]
    fn cli_verbosity_accumulates() {
        let cli = Cli::try_parse_from(["cadastro", "-vv", "generate", "cpf"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
