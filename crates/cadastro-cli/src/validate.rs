//! # Validate Subcommand
//!
//! Checks one value — CPF, CNPJ, email, or password — and reports the
//! verdict. For passwords, every violated policy rule is listed.

use clap::{Args, ValueEnum};

use cadastro_core::{CNPJ, CPF};
use cadastro_credential::{check_password, validate_email};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// What kind of value to validate.
    #[arg(value_enum)]
    pub kind: ValidateKind,

    /// The value to check.
    pub value: String,
}

/// Value kinds the validate subcommand understands.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateKind {
    /// 11-digit individual taxpayer identifier.
    Cpf,
    /// 14-digit legal-entity identifier.
    Cnpj,
    /// Email address syntax.
    Email,
    /// Password policy.
    Password,
}

/// Validate one value; exit code 0 when valid, 1 when not.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<u8> {
    let valid = match args.kind {
        ValidateKind::Cpf => CPF.validate(&args.value),
        ValidateKind::Cnpj => CNPJ.validate(&args.value),
        ValidateKind::Email => validate_email(&args.value),
        ValidateKind::Password => {
            let violations = check_password(&args.value);
            for violation in &violations {
                println!("violation: {violation}");
            }
            violations.is_empty()
        }
    };

    if valid {
        println!("valid");
        Ok(0)
    } else {
        println!("invalid");
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: ValidateKind, value: &str) -> ValidateArgs {
        ValidateArgs {
            kind,
            value: value.to_string(),
        }
    }

    #[test]
    fn valid_inputs_exit_zero() {
        assert_eq!(
            run_validate(&args(ValidateKind::Cpf, "123.456.789-09")).unwrap(),
            0
        );
        assert_eq!(
            run_validate(&args(ValidateKind::Cnpj, "11222333000181")).unwrap(),
            0
        );
        assert_eq!(
            run_validate(&args(ValidateKind::Email, "user@example.com")).unwrap(),
            0
        );
        assert_eq!(
            run_validate(&args(ValidateKind::Password, "Str0ng!Pass")).unwrap(),
            0
        );
    }

    #[test]
    fn invalid_inputs_exit_one() {
        assert_eq!(
            run_validate(&args(ValidateKind::Cpf, "123.456.789-10")).unwrap(),
            1
        );
        assert_eq!(
            run_validate(&args(ValidateKind::Email, "nope")).unwrap(),
            1
        );
        assert_eq!(
            run_validate(&args(ValidateKind::Password, "weak")).unwrap(),
            1
        );
    }
}
