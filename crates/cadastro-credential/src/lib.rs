//! # cadastro-credential — Email and Password Checks
//!
//! Syntactic email validation and password policy enforcement. These sit
//! next to the identifier engine in the processing pipeline but share no
//! algorithm with it — every function here is a total predicate over its
//! input, with no I/O and no shared state.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cadastro-*` crates.
//! - No `unsafe` code.
//! - No logging — callers decide what to report.

pub mod email;
pub mod password;

pub use email::{
    extract_domain, extract_local_part, is_from_domain, normalize_email, validate_email,
};
pub use password::{check_password, validate_password, PolicyViolation};
