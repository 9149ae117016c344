//! # Identifier Newtypes
//!
//! Validated wrappers for the two identifier kinds. A [`Cpf`] cannot be
//! passed where a [`Cnpj`] is expected, and neither can hold an invalid
//! value: construction runs full check-digit validation and stores the
//! canonical digits-only form.
//!
//! ## Validation
//!
//! Constructors accept any formatting the engine can normalize —
//! `"12345678909"` and `"123.456.789-09"` construct the same [`Cpf`].
//! Invalid values are rejected at construction *and* at deserialization
//! time — never silently accepted.

use serde::{Deserialize, Serialize};

use crate::engine::{CNPJ, CPF};
use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A validated CPF — Brazilian individual taxpayer identifier.
///
/// Stored in canonical 11-digit form; [`formatted()`](Self::formatted)
/// renders the masked `XXX.XXX.XXX-XX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF from a string in any formatting, validating the
    /// check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] when the value does not
    /// validate (wrong digit count, degenerate sequence, or check-digit
    /// mismatch).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !CPF.validate(&raw) {
            return Err(ValidationError::InvalidCpf(raw));
        }
        Ok(Self(CPF.normalize(&raw)))
    }

    /// Generate a random valid CPF fixture.
    pub fn generate() -> Self {
        Self(CPF.generate())
    }

    /// The canonical 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The masked `XXX.XXX.XXX-XX` form.
    pub fn formatted(&self) -> String {
        CPF.mask(&self.0).expect("validated at construction")
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A validated CNPJ — Brazilian legal-entity identifier.
///
/// Stored in canonical 14-digit form; [`formatted()`](Self::formatted)
/// renders the masked `XX.XXX.XXX/XXXX-XX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ from a string in any formatting, validating the
    /// check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] when the value does not
    /// validate.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !CNPJ.validate(&raw) {
            return Err(ValidationError::InvalidCnpj(raw));
        }
        Ok(Self(CNPJ.normalize(&raw)))
    }

    /// Generate a random valid CNPJ fixture.
    pub fn generate() -> Self {
        Self(CNPJ.generate())
    }

    /// The canonical 14-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The masked `XX.XXX.XXX/XXXX-XX` form.
    pub fn formatted(&self) -> String {
        CNPJ.mask(&self.0).expect("validated at construction")
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- CPF --

    #[test]
    fn cpf_valid_canonical() {
        let cpf = Cpf::new("12345678909").unwrap();
        assert_eq!(cpf.as_str(), "12345678909");
        assert_eq!(cpf.formatted(), "123.456.789-09");
    }

    #[test]
    fn cpf_valid_masked_input() {
        let cpf = Cpf::new("123.456.789-09").unwrap();
        assert_eq!(cpf.as_str(), "12345678909"); // stored without separators
        assert_eq!(cpf.to_string(), "123.456.789-09");
    }

    #[test]
    fn cpf_rejects_invalid() {
        assert!(Cpf::new("").is_err());
        assert!(Cpf::new("123.456.789-10").is_err()); // bad check digit
        assert!(Cpf::new("11111111111").is_err()); // degenerate
        assert!(Cpf::new("1234567890").is_err()); // 10 digits
    }

    #[test]
    fn cpf_error_carries_input() {
        let err = Cpf::new("bogus").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCpf("bogus".to_string()));
    }

    #[test]
    fn cpf_generate_round_trips() {
        let cpf = Cpf::generate();
        assert_eq!(Cpf::new(cpf.as_str()).unwrap(), cpf);
    }

    #[test]
    fn cpf_serde_round_trip() {
        let cpf = Cpf::new("12345678909").unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"12345678909\"");
        let back: Cpf = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cpf);
    }

    #[test]
    fn cpf_deserialize_rejects_invalid() {
        let result: Result<Cpf, _> = serde_json::from_str("\"12345678910\"");
        assert!(result.is_err());
    }

    // -- CNPJ --

    #[test]
    fn cnpj_valid_both_formats() {
        let a = Cnpj::new("11222333000181").unwrap();
        let b = Cnpj::new("11.222.333/0001-81").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.formatted(), "11.222.333/0001-81");
    }

    #[test]
    fn cnpj_rejects_invalid() {
        assert!(Cnpj::new("").is_err());
        assert!(Cnpj::new("11.222.333/0001-82").is_err()); // bad check digit
        assert!(Cnpj::new("11111111111111").is_err()); // degenerate
        assert!(Cnpj::new("112223330001").is_err()); // 12 digits
    }

    #[test]
    fn cnpj_parse_via_fromstr() {
        let cnpj: Cnpj = "11.222.333/0001-81".parse().unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
        assert!("11.222.333/0001-82".parse::<Cnpj>().is_err());
    }

    #[test]
    fn cnpj_generate_validates() {
        for _ in 0..10 {
            let cnpj = Cnpj::generate();
            assert!(Cnpj::new(cnpj.formatted()).is_ok());
        }
    }
}
