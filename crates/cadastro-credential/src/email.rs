//! # Email Syntax Validation
//!
//! Pragmatic syntactic checks for email addresses: the shape
//! `local@domain.tld`, RFC-derived length caps (64-char local part,
//! 253-char domain), and dot-placement rules. This is format checking
//! for input handling, not deliverability verification.

const MAX_LOCAL_LENGTH: usize = 64;
const MAX_DOMAIN_LENGTH: usize = 253;

/// Whether a string is a syntactically acceptable email address.
///
/// Accepts `local@domain.tld` where the local part uses
/// `[A-Za-z0-9._%+-]`, the domain uses `[A-Za-z0-9.-]` and ends in an
/// alphabetic label of at least two characters. Rejects over-long
/// parts and leading, trailing, or consecutive dots on either side of
/// the `@`. Total: any string gets a boolean.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = split_once_at(email) else {
        return false;
    };

    if local.len() > MAX_LOCAL_LENGTH || domain.len() > MAX_DOMAIN_LENGTH {
        return false;
    }

    valid_local_part(local) && valid_domain(domain)
}

/// Split on the single `@`; addresses with zero or multiple `@` signs
/// are malformed.
fn split_once_at(email: &str) -> Option<(&str, &str)> {
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some((local, domain))
}

fn valid_local_part(local: &str) -> bool {
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
    {
        return false;
    }
    !local.starts_with('.') && !local.ends_with('.') && !local.contains("..")
}

fn valid_domain(domain: &str) -> bool {
    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
    {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return false;
    }

    // Must end in an alphabetic top-level label of at least two chars.
    match domain.rsplit_once('.') {
        Some((_, tld)) => tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}

/// Trim surrounding whitespace and lowercase.
///
/// Empty input yields the empty string; no validation is performed.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// The domain part of a valid address, `None` when the address does
/// not validate.
pub fn extract_domain(email: &str) -> Option<&str> {
    if !validate_email(email) {
        return None;
    }
    email.split_once('@').map(|(_, domain)| domain)
}

/// The local part of a valid address, `None` when the address does
/// not validate.
pub fn extract_local_part(email: &str) -> Option<&str> {
    if !validate_email(email) {
        return None;
    }
    email.split_once('@').map(|(local, _)| local)
}

/// Whether a valid address belongs to `domain`, exactly or through a
/// subdomain. Matching is case-insensitive and label-aligned:
/// `mail.empresa.com` is from `empresa.com`, `notempresa.com` is not.
/// False for invalid addresses or an empty target domain.
pub fn is_from_domain(email: &str, domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }
    let Some(email_domain) = extract_domain(email) else {
        return false;
    };

    let email_domain = email_domain.to_lowercase();
    let target = domain.to_lowercase();

    email_domain == target || email_domain.ends_with(&format!(".{target}"))
}
