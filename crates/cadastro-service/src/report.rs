//! # Pipeline Artifacts
//!
//! The typed artifacts a pipeline run produces. Everything serializes
//! with serde so a run can be exported, displayed, or archived as JSON.
//!
//! Passwords never appear in any artifact — records carry validity
//! flags only. The original input echo in [`Backup`] is likewise
//! limited to email and CNPJ.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Per-field validation verdicts for the pipeline input.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldValidation {
    /// Email passed syntactic validation.
    pub email: bool,
    /// Password passed the policy check.
    pub password: bool,
    /// CNPJ passed check-digit validation.
    pub cnpj: bool,
}

impl FieldValidation {
    /// Whether every field validated.
    pub fn all_valid(&self) -> bool {
        self.email && self.password && self.cnpj
    }
}

/// Derived views of the validated input.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedInput {
    /// Trimmed, lowercased email.
    pub normalized_email: String,
    /// Domain part of the email.
    pub domain: Option<String>,
    /// Whether the email belongs to the configured company domain.
    pub from_company_domain: bool,
    /// CNPJ in masked form.
    pub masked_cnpj: String,
    /// CNPJ in canonical digit form.
    pub unmasked_cnpj: String,
    /// Whether the masked form passes the format-state matcher.
    pub cnpj_format_valid: bool,
}

/// Generated fixtures used for the synthetic batch record.
#[derive(Debug, Clone, Serialize)]
pub struct TestFixtures {
    /// A freshly generated valid CNPJ.
    pub cnpj: String,
    /// A timestamped address on the company domain.
    pub email: String,
    /// The fixed fixture password.
    pub password: String,
}

/// Outcome of one stubbed upstream API call.
#[derive(Debug, Clone, Serialize)]
pub struct ApiCallResult {
    /// Whether the call succeeded. The stub always succeeds.
    pub success: bool,
    /// Human-readable status.
    pub message: String,
}

/// One processed record of the batch stage.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRecord {
    /// Position in the batch.
    pub index: usize,
    /// The record's email as submitted.
    pub email: String,
    /// The record's CNPJ as submitted.
    pub cnpj: String,
    /// Whether email, password, and CNPJ all validated.
    pub is_valid: bool,
    /// Normalized email.
    pub processed_email: String,
    /// Masked CNPJ.
    pub processed_cnpj: String,
}

/// Aggregate statistics over the batch stage.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingReport {
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
    /// Records in the batch.
    pub total_records: usize,
    /// Records where every field validated.
    pub valid_records: usize,
    /// Records with at least one invalid field.
    pub invalid_records: usize,
    /// Stub API calls made during the run.
    pub api_calls: usize,
    /// Domain extracted from the input email.
    pub domain: Option<String>,
    /// Whether the input email is on the company domain.
    pub from_company_domain: bool,
}

/// Archived copy of the batch with a content fingerprint.
#[derive(Debug, Clone, Serialize)]
pub struct Backup {
    /// When the backup was taken.
    pub timestamp: DateTime<Utc>,
    /// The batch records as processed.
    pub data: Vec<BatchRecord>,
    /// SHA-256 hex digest over the serialized batch.
    pub checksum: String,
    /// Serialized size of the batch in bytes.
    pub size: usize,
    /// Input email the run started from.
    pub input_email: String,
    /// Input CNPJ the run started from.
    pub input_cnpj: String,
}

/// Consistency checks over the run's own artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrityCheck {
    /// Whether every check passed.
    pub is_valid: bool,
    /// Descriptions of failed checks.
    pub errors: Vec<String>,
    /// Number of checks performed.
    pub total_checks: usize,
}

/// Heuristic audit counters over the batch.
#[derive(Debug, Clone, Serialize)]
pub struct AuditSummary {
    /// When the audit ran.
    pub timestamp: DateTime<Utc>,
    /// Records whose email contains a suspicious marker
    /// (`test` or `admin`).
    pub suspicious_emails: usize,
    /// Records sharing the input CNPJ.
    pub duplicate_cnpjs: usize,
    /// Pipeline operations covered by this audit.
    pub total_operations: usize,
}

/// JSON export of the run's artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedData {
    /// Export format tag.
    pub format: String,
    /// Pretty-printed JSON content.
    pub content: String,
    /// Content size in bytes.
    pub size: usize,
}

/// One-line-per-stage summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    /// Records processed in the batch stage.
    pub total_processed: usize,
    /// Valid batch records.
    pub valid_records: usize,
    /// Invalid batch records.
    pub invalid_records: usize,
    /// Stub API calls made.
    pub api_calls: usize,
    /// Backup artifact produced.
    pub backup_created: bool,
    /// Integrity checks all passed.
    pub integrity_valid: bool,
    /// Audit stage completed.
    pub audit_completed: bool,
    /// Export artifact produced.
    pub data_exported: bool,
}

/// Everything a completed run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    /// Unique identifier of this run.
    pub run_id: Uuid,
    /// When the run completed.
    pub timestamp: DateTime<Utc>,
    /// Stage summary.
    pub summary: PipelineSummary,
    /// Derived input views.
    pub processed: ProcessedInput,
    /// Generated fixtures.
    pub fixtures: TestFixtures,
    /// Batch records.
    pub batch: Vec<BatchRecord>,
    /// Aggregate report.
    pub report: ProcessingReport,
    /// Archived batch.
    pub backup: Backup,
    /// Consistency verdict.
    pub integrity: IntegrityCheck,
    /// Audit counters.
    pub audit: AuditSummary,
    /// JSON export.
    pub export: ExportedData,
}

/// Result of a pipeline run: rejected up front, or completed with the
/// full artifact set.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PipelineOutcome {
    /// Input failed field validation; nothing was processed.
    Rejected {
        /// Which fields failed.
        details: FieldValidation,
    },
    /// Every stage ran.
    Completed(Box<PipelineRun>),
}

impl PipelineOutcome {
    /// Whether the run completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}
