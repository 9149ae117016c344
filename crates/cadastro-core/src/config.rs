//! # Identifier Configuration
//!
//! Everything that distinguishes CPF from CNPJ lives here as data:
//! digit counts, the two check-digit weight tables, and the separator
//! layout of the masked form. The engine itself is kind-agnostic.

use serde::{Deserialize, Serialize};

/// Which Brazilian registry an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    /// Cadastro de Pessoas Físicas — individual taxpayer number.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica — legal-entity number.
    Cnpj,
}

impl IdentifierKind {
    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static configuration for one identifier kind.
///
/// The two check digits are computed over independently configured
/// weight tables; do not assume any length relationship between them
/// beyond what each table states.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierConfig {
    /// The kind this configuration describes.
    pub kind: IdentifierKind,
    /// Digit count of a complete identifier.
    pub total_length: usize,
    /// Weight table for the first check digit; consumes
    /// `first_weights.len()` leading digits.
    pub first_weights: &'static [u32],
    /// Weight table for the second check digit; consumes
    /// `second_weights.len()` leading digits (which include the
    /// first check digit's position).
    pub second_weights: &'static [u32],
    /// Separator characters of the masked form, keyed by the 0-based
    /// digit index they are inserted immediately before.
    pub separators: &'static [(usize, char)],
    /// Modulus of the check-digit scheme. 11 for both kinds; kept as
    /// configuration for generality.
    pub modulus: u32,
    /// Remainders below this threshold map to check digit 0.
    pub remainder_threshold: u32,
}

/// CPF: 11 digits, masked as `XXX.XXX.XXX-XX`.
pub const CPF_CONFIG: IdentifierConfig = IdentifierConfig {
    kind: IdentifierKind::Cpf,
    total_length: 11,
    first_weights: &[10, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    separators: &[(3, '.'), (6, '.'), (9, '-')],
    modulus: 11,
    remainder_threshold: 2,
};

/// CNPJ: 14 digits, masked as `XX.XXX.XXX/XXXX-XX`.
pub const CNPJ_CONFIG: IdentifierConfig = IdentifierConfig {
    kind: IdentifierKind::Cnpj,
    total_length: 14,
    first_weights: &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    separators: &[(2, '.'), (5, '.'), (8, '/'), (12, '-')],
    modulus: 11,
    remainder_threshold: 2,
};

impl IdentifierConfig {
    /// Digit-group structure of the masked form: the size of the leading
    /// group, followed by each separator with the size of the group it
    /// introduces.
    ///
    /// CPF yields `(3, [('.', 3), ('.', 3), ('-', 2)])`;
    /// CNPJ yields `(2, [('.', 3), ('.', 3), ('/', 4), ('-', 2)])`.
    pub fn group_structure(&self) -> (usize, Vec<(char, usize)>) {
        let lead = self
            .separators
            .first()
            .map_or(self.total_length, |&(pos, _)| pos);

        let mut groups = Vec::with_capacity(self.separators.len());
        for (i, &(pos, sep)) in self.separators.iter().enumerate() {
            let end = self
                .separators
                .get(i + 1)
                .map_or(self.total_length, |&(next, _)| next);
            groups.push((sep, end - pos));
        }
        (lead, groups)
    }
}
