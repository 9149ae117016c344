//! # cadastro-service — Orchestration Pipeline
//!
//! Drives the identifier engine and credential checks through a
//! multi-step processing run: validate the input fields, derive the
//! processed views, generate test fixtures, exercise the (stubbed)
//! upstream API, process a batch, and produce the report, backup,
//! integrity, audit, and export artifacts.
//!
//! Observability lives here and only here: each stage emits a `tracing`
//! event. The engine and the credential predicates stay silent — they
//! are pure functions, and interleaving logging with their logic would
//! couple validation semantics to a process-wide concern.

pub mod pipeline;
pub mod report;

pub use pipeline::{run_pipeline, PipelineConfig, PipelineError, PipelineInput};
pub use report::{
    ApiCallResult, AuditSummary, Backup, BatchRecord, ExportedData, FieldValidation,
    IntegrityCheck, PipelineOutcome, PipelineRun, PipelineSummary, ProcessedInput,
    ProcessingReport, TestFixtures,
};
