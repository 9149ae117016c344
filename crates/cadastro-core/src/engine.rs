//! # Identifier Engine
//!
//! One engine, two configurations. Every operation the crate exposes —
//! normalization, full validation, masking, format-state matching, and
//! fixture generation — is implemented here once over an
//! [`IdentifierConfig`], and exported as the two static instances
//! [`CPF`] and [`CNPJ`].

use rand::Rng;

use crate::checksum::check_digit;
use crate::config::{IdentifierConfig, CNPJ_CONFIG, CPF_CONFIG};
use crate::error::FormatError;

/// The engine configured for CPF (11 digits, `XXX.XXX.XXX-XX`).
pub static CPF: IdentifierEngine = IdentifierEngine::new(&CPF_CONFIG);

/// The engine configured for CNPJ (14 digits, `XX.XXX.XXX/XXXX-XX`).
pub static CNPJ: IdentifierEngine = IdentifierEngine::new(&CNPJ_CONFIG);

/// Validation, formatting, and generation for one identifier kind.
///
/// Stateless: holds only a reference to static configuration, so it is
/// freely shareable across threads. All methods are pure except
/// [`generate`](Self::generate), which draws from the thread-local RNG.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierEngine {
    config: &'static IdentifierConfig,
}

impl IdentifierEngine {
    /// Create an engine over a static configuration.
    pub const fn new(config: &'static IdentifierConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &'static IdentifierConfig {
        self.config
    }

    /// Strip everything but ASCII digits, preserving order.
    ///
    /// Total: empty input yields empty output, garbage yields whatever
    /// digits it contained.
    pub fn normalize(&self, raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }

    /// Validate a complete identifier in any formatting.
    ///
    /// Total over all strings: wrong digit count, degenerate all-same
    /// sequences, and check-digit mismatches all return `false`. Never
    /// panics, never errors.
    pub fn validate(&self, raw: &str) -> bool {
        let digits = self.normalize(raw);
        if digits.len() != self.config.total_length {
            return false;
        }

        // Degenerate sequences like "111...1" satisfy the checksum
        // arithmetic but are not issued identifiers. This also covers
        // the all-zero case.
        if self.has_all_same_digits(&digits) {
            return false;
        }

        let first = check_digit(
            &digits,
            self.config.first_weights,
            self.config.modulus,
            self.config.remainder_threshold,
        );
        let second = check_digit(
            &digits,
            self.config.second_weights,
            self.config.modulus,
            self.config.remainder_threshold,
        );

        let bytes = digits.as_bytes();
        let first_pos = u32::from(bytes[self.config.total_length - 2] - b'0');
        let second_pos = u32::from(bytes[self.config.total_length - 1] - b'0');

        first_pos == first && second_pos == second
    }

    fn has_all_same_digits(&self, digits: &str) -> bool {
        let mut chars = digits.chars();
        match chars.next() {
            Some(first) => chars.all(|c| c == first),
            None => false,
        }
    }

    /// Render the canonical masked form.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::WrongLength`] when the input does not
    /// normalize to exactly the required digit count — masking a
    /// malformed identifier is a caller error, distinct from the
    /// boolean outcome of [`validate`](Self::validate).
    pub fn mask(&self, raw: &str) -> Result<String, FormatError> {
        let digits = self.normalize(raw);
        if digits.len() != self.config.total_length {
            return Err(FormatError::WrongLength {
                kind: self.config.kind,
                expected: self.config.total_length,
                found: digits.len(),
            });
        }

        let mut masked = String::with_capacity(self.config.total_length + self.config.separators.len());
        for (i, c) in digits.chars().enumerate() {
            if let Some(&(_, sep)) = self.config.separators.iter().find(|&&(pos, _)| pos == i) {
                masked.push(sep);
            }
            masked.push(c);
        }
        Ok(masked)
    }

    /// Strip mask separators (and anything else that is not a digit).
    ///
    /// Identical to [`normalize`](Self::normalize); total, never fails.
    pub fn unmask(&self, raw: &str) -> String {
        self.normalize(raw)
    }

    /// Whether a string is a complete masked, complete unmasked, or
    /// partially-typed representation of this identifier kind.
    ///
    /// The partial form models left-to-right typing against an input
    /// mask: an optionally-empty leading digit group, then each
    /// separator group in order, each group holding at most its
    /// capacity. Separator groups may be absent, but never appear out
    /// of relative order. The empty string matches — it is the
    /// "nothing typed yet" starting state, not an error.
    ///
    /// This checks shape only; it does not verify check digits.
    pub fn matches_format(&self, raw: &str) -> bool {
        self.is_complete_unmasked(raw) || self.matches_partial(raw)
    }

    fn is_complete_unmasked(&self, s: &str) -> bool {
        s.len() == self.config.total_length && s.chars().all(|c| c.is_ascii_digit())
    }

    /// Parse against the group structure. The complete masked form is
    /// the fully-populated special case of the partial form, so one
    /// parser covers both.
    fn matches_partial(&self, s: &str) -> bool {
        let (lead, groups) = self.config.group_structure();
        let mut rest = s;

        if !Self::take_digits(&mut rest, lead) {
            return false;
        }
        for (sep, capacity) in groups {
            if let Some(after) = rest.strip_prefix(sep) {
                rest = after;
                if !Self::take_digits(&mut rest, capacity) {
                    return false;
                }
            }
        }
        rest.is_empty()
    }

    /// Consume the leading digit run from `rest`; false if it exceeds
    /// `capacity` (a longer run could never be continued by the next
    /// separator group).
    fn take_digits(rest: &mut &str, capacity: usize) -> bool {
        let run = rest.chars().take_while(char::is_ascii_digit).count();
        if run > capacity {
            return false;
        }
        *rest = &rest[run..];
        true
    }

    /// Generate a random identifier guaranteed to validate.
    ///
    /// Draws `total_length - 2` uniform decimal digits from the
    /// thread-local RNG and appends the two computed check digits.
    /// Not cryptographically secure: this produces test fixtures,
    /// not credentials.
    pub fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        let mut digits = String::with_capacity(self.config.total_length);
        for _ in 0..self.config.total_length - 2 {
            let d: u32 = rng.gen_range(0..10);
            digits.push(char::from_digit(d, 10).expect("single decimal digit"));
        }

        let first = check_digit(
            &digits,
            self.config.first_weights,
            self.config.modulus,
            self.config.remainder_threshold,
        );
        digits.push(char::from_digit(first, 10).expect("check digit is 0..=9"));

        let second = check_digit(
            &digits,
            self.config.second_weights,
            self.config.modulus,
            self.config.remainder_threshold,
        );
        digits.push(char::from_digit(second, 10).expect("check digit is 0..=9"));

        digits
    }
}
