//! End-to-end pipeline tests across the engine, credential, and
//! service crates.

use cadastro_core::{Cnpj, CNPJ};
use cadastro_credential::validate_password;
use cadastro_service::{run_pipeline, PipelineConfig, PipelineInput, PipelineOutcome};

fn input(email: &str, password: &str, cnpj: &str) -> PipelineInput {
    PipelineInput {
        email: email.to_string(),
        password: password.to_string(),
        cnpj: cnpj.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Rejection paths
// ---------------------------------------------------------------------------

#[test]
fn every_field_failure_is_reported_independently() {
    let outcome = run_pipeline(
        &input("bogus", "weak", "11.222.333/0001-82"),
        &PipelineConfig::default(),
    )
    .unwrap();

    let PipelineOutcome::Rejected { details } = outcome else {
        panic!("should reject");
    };
    assert!(!details.email);
    assert!(!details.password);
    assert!(!details.cnpj);
}

#[test]
fn single_bad_field_rejects_the_run() {
    let outcome = run_pipeline(
        &input("user@empresa.com", "Str0ng!Pass", "11111111111111"),
        &PipelineConfig::default(),
    )
    .unwrap();
    assert!(!outcome.is_completed());
}

// ---------------------------------------------------------------------------
// Completed runs
// ---------------------------------------------------------------------------

#[test]
fn completed_run_with_generated_cnpj() {
    // The pipeline accepts any valid CNPJ, including freshly
    // generated fixtures.
    let cnpj = Cnpj::generate();
    let outcome = run_pipeline(
        &input("user@empresa.com", "Str0ng!Pass", &cnpj.formatted()),
        &PipelineConfig::default(),
    )
    .unwrap();

    let PipelineOutcome::Completed(run) = outcome else {
        panic!("should complete");
    };
    assert_eq!(run.processed.unmasked_cnpj, cnpj.as_str());
    assert_eq!(run.processed.masked_cnpj, cnpj.formatted());
    assert!(run.integrity.is_valid);
}

#[test]
fn fixture_cnpj_is_itself_valid() {
    let outcome = run_pipeline(
        &input("user@empresa.com", "Str0ng!Pass", "11222333000181"),
        &PipelineConfig::default(),
    )
    .unwrap();
    let PipelineOutcome::Completed(run) = outcome else {
        panic!("should complete");
    };
    assert!(CNPJ.validate(&run.fixtures.cnpj));
    assert_ne!(run.fixtures.cnpj, "11222333000181");
}

#[test]
fn fixture_password_is_rejected_by_policy() {
    // The fixture password trips the sequence rule; the pipeline
    // keeps it to exercise the invalid-record path.
    let outcome = run_pipeline(
        &input("user@empresa.com", "Str0ng!Pass", "11222333000181"),
        &PipelineConfig::default(),
    )
    .unwrap();
    let PipelineOutcome::Completed(run) = outcome else {
        panic!("should complete");
    };
    assert!(!validate_password(&run.fixtures.password));
    assert_eq!(run.summary.invalid_records, 1);
}

#[test]
fn export_round_trips_through_serde() {
    let outcome = run_pipeline(
        &input("user@empresa.com", "Str0ng!Pass", "11222333000181"),
        &PipelineConfig::default(),
    )
    .unwrap();
    let PipelineOutcome::Completed(run) = outcome else {
        panic!("should complete");
    };

    let parsed: serde_json::Value = serde_json::from_str(&run.export.content).unwrap();
    assert_eq!(
        parsed["report"]["total_records"],
        run.report.total_records as u64
    );
    assert_eq!(parsed["backup"]["checksum"], run.backup.checksum.as_str());
    assert_eq!(parsed["audit"]["total_operations"], 9);

    // No password field leaks into any exported artifact.
    assert!(!run.export.content.contains("Str0ng!Pass"));
}

#[test]
fn runs_have_unique_ids() {
    let a = run_pipeline(
        &input("user@empresa.com", "Str0ng!Pass", "11222333000181"),
        &PipelineConfig::default(),
    )
    .unwrap();
    let b = run_pipeline(
        &input("user@empresa.com", "Str0ng!Pass", "11222333000181"),
        &PipelineConfig::default(),
    )
    .unwrap();

    let (PipelineOutcome::Completed(a), PipelineOutcome::Completed(b)) = (a, b) else {
        panic!("both should complete");
    };
    assert_ne!(a.run_id, b.run_id);
}
