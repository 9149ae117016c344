//! # Password Policy
//!
//! Character-class and anti-pattern rules for passwords: length bounds,
//! four required character classes, rejection of common keyboard
//! sequences, and rejection of character runs. [`check_password`]
//! reports every violated rule; [`validate_password`] is the boolean
//! wrapper over an empty violation list.

use thiserror::Error;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 128;

/// Accepted symbol characters for the symbol-class requirement.
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Substrings rejected anywhere in the password, case-insensitively.
/// Numeric and keyboard-row runs that dominate breached-password lists.
const FORBIDDEN_SEQUENCES: &[&str] = &["123", "abc", "qwe", "asd", "zxc"];

/// A single violated password rule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    /// Shorter than the 8-character minimum.
    #[error("password must be at least {MIN_LENGTH} characters")]
    TooShort,

    /// Longer than the 128-character maximum.
    #[error("password must be at most {MAX_LENGTH} characters")]
    TooLong,

    /// No ASCII uppercase letter.
    #[error("password must contain an uppercase letter")]
    MissingUppercase,

    /// No ASCII lowercase letter.
    #[error("password must contain a lowercase letter")]
    MissingLowercase,

    /// No decimal digit.
    #[error("password must contain a digit")]
    MissingDigit,

    /// No symbol character.
    #[error("password must contain a symbol")]
    MissingSymbol,

    /// Contains a forbidden keyboard sequence such as `123` or `qwe`.
    #[error("password must not contain common sequences")]
    ForbiddenSequence,

    /// Contains a run of three or more identical characters.
    #[error("password must not repeat a character three times in a row")]
    RepeatedRun,
}

/// Check a password against every rule, returning all violations in
/// rule order. Empty means the password is acceptable.
pub fn check_password(password: &str) -> Vec<PolicyViolation> {
    let mut violations = Vec::new();

    if password.chars().count() < MIN_LENGTH {
        violations.push(PolicyViolation::TooShort);
    }
    if password.chars().count() > MAX_LENGTH {
        violations.push(PolicyViolation::TooLong);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(PolicyViolation::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(PolicyViolation::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PolicyViolation::MissingDigit);
    }
    if !password.chars().any(|c| SYMBOLS.contains(c)) {
        violations.push(PolicyViolation::MissingSymbol);
    }
    if has_forbidden_sequence(password) {
        violations.push(PolicyViolation::ForbiddenSequence);
    }
    if has_repeated_run(password) {
        violations.push(PolicyViolation::RepeatedRun);
    }

    violations
}

/// Whether a password satisfies every policy rule.
pub fn validate_password(password: &str) -> bool {
    check_password(password).is_empty()
}

fn has_forbidden_sequence(password: &str) -> bool {
    let lowered = password.to_lowercase();
    FORBIDDEN_SEQUENCES.iter().any(|seq| lowered.contains(seq))
}

/// Any character repeated three or more times consecutively.
fn has_repeated_run(password: &str) -> bool {
    let mut chars = password.chars();
    let Some(mut prev) = chars.next() else {
        return false;
    };
    let mut run = 1;
    for c in chars {
        if c == prev {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = c;
            run = 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strong_passwords() {
        assert!(validate_password("Str0ng!Pass"));
        assert!(validate_password("My#Secur3Word"));
        assert!(validate_password("T3ste!@#ok"));
    }

    #[test]
    fn rejects_short_and_long() {
        assert_eq!(check_password("Ab1!x"), vec![PolicyViolation::TooShort]);
        let long = format!("Ab1!{}", "xY9?".repeat(32));
        assert!(check_password(&long).contains(&PolicyViolation::TooLong));
    }

    #[test]
    fn requires_each_character_class() {
        assert!(check_password("lower9!only").contains(&PolicyViolation::MissingUppercase));
        assert!(check_password("UPPER9!ONLY").contains(&PolicyViolation::MissingLowercase));
        assert!(check_password("NoDigits!here").contains(&PolicyViolation::MissingDigit));
        assert!(check_password("NoSymbol9here").contains(&PolicyViolation::MissingSymbol));
    }

    #[test]
    fn rejects_keyboard_sequences() {
        for pw in [
            "Valid123!pw",
            "Rst!9ABCde",
            "Pw9!qwerty",
            "Pw9!Asdf-ok",
            "Pw9!zxcvOk",
        ] {
            assert!(
                check_password(pw).contains(&PolicyViolation::ForbiddenSequence),
                "{pw:?} should trip the sequence rule"
            );
        }
    }

    #[test]
    fn sequence_check_is_case_insensitive() {
        assert!(check_password("Pw9!QWErty").contains(&PolicyViolation::ForbiddenSequence));
    }

    #[test]
    fn rejects_repeated_runs() {
        assert!(check_password("Paaa9!word").contains(&PolicyViolation::RepeatedRun));
        assert!(check_password("Pw9!!!word").contains(&PolicyViolation::RepeatedRun));
        // Two in a row is fine.
        assert!(!check_password("Paa9!word").contains(&PolicyViolation::RepeatedRun));
    }

    #[test]
    fn empty_password_reports_everything_missing() {
        let violations = check_password("");
        assert!(violations.contains(&PolicyViolation::TooShort));
        assert!(violations.contains(&PolicyViolation::MissingUppercase));
        assert!(violations.contains(&PolicyViolation::MissingLowercase));
        assert!(violations.contains(&PolicyViolation::MissingDigit));
        assert!(violations.contains(&PolicyViolation::MissingSymbol));
        assert!(!violations.contains(&PolicyViolation::RepeatedRun));
    }

    #[test]
    fn violations_come_in_rule_order() {
        let violations = check_password("abc");
        assert_eq!(
            violations,
            vec![
                PolicyViolation::TooShort,
                PolicyViolation::MissingUppercase,
                PolicyViolation::MissingDigit,
                PolicyViolation::MissingSymbol,
                PolicyViolation::ForbiddenSequence,
            ]
        );
    }
}
