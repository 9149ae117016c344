//! # Pipeline Subcommand
//!
//! Runs the full orchestration pipeline over one input record and
//! prints either a stage summary or the exported JSON.

use clap::Args;

use cadastro_service::{run_pipeline, PipelineConfig, PipelineInput, PipelineOutcome};

/// Arguments for the pipeline subcommand.
#[derive(Args, Debug)]
pub struct PipelineArgs {
    /// Email address of the record.
    #[arg(long)]
    pub email: String,

    /// Password of the record.
    #[arg(long)]
    pub password: String,

    /// CNPJ of the record, masked or not.
    #[arg(long)]
    pub cnpj: String,

    /// Company domain to check the email against.
    #[arg(long, default_value = "empresa.com")]
    pub domain: String,

    /// Print the full exported JSON instead of the summary.
    #[arg(long)]
    pub json: bool,
}

/// Run the pipeline; exit code 0 when it completes, 1 when the input
/// is rejected.
pub fn run_pipeline_cmd(args: &PipelineArgs) -> anyhow::Result<u8> {
    let input = PipelineInput {
        email: args.email.clone(),
        password: args.password.clone(),
        cnpj: args.cnpj.clone(),
    };
    let config = PipelineConfig {
        company_domain: args.domain.clone(),
    };

    match run_pipeline(&input, &config)? {
        PipelineOutcome::Rejected { details } => {
            println!("rejected");
            println!("  email:    {}", verdict(details.email));
            println!("  password: {}", verdict(details.password));
            println!("  cnpj:     {}", verdict(details.cnpj));
            Ok(1)
        }
        PipelineOutcome::Completed(run) => {
            if args.json {
                println!("{}", run.export.content);
            } else {
                println!("completed run {}", run.run_id);
                println!("  records:   {}", run.summary.total_processed);
                println!("  valid:     {}", run.summary.valid_records);
                println!("  invalid:   {}", run.summary.invalid_records);
                println!("  api calls: {}", run.summary.api_calls);
                println!("  integrity: {}", verdict(run.summary.integrity_valid));
                println!("  backup:    {}", run.backup.checksum);
            }
            Ok(0)
        }
    }
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "invalid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_run_exits_zero() {
        let args = PipelineArgs {
            email: "user@empresa.com".to_string(),
            password: "Str0ng!Pass".to_string(),
            cnpj: "11.222.333/0001-81".to_string(),
            domain: "empresa.com".to_string(),
            json: false,
        };
        assert_eq!(run_pipeline_cmd(&args).unwrap(), 0);
    }

    #[test]
    fn rejected_run_exits_one() {
        let args = PipelineArgs {
            email: "bogus".to_string(),
            password: "Str0ng!Pass".to_string(),
            cnpj: "11.222.333/0001-81".to_string(),
            domain: "empresa.com".to_string(),
            json: false,
        };
        assert_eq!(run_pipeline_cmd(&args).unwrap(), 1);
    }
}
