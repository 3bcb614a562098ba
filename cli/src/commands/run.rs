use e2e_aws_core::{Aws, AwsConfig, Executor, SnapshotCleanup};

use crate::commands::cli::{Commands, EcrCommand, EfsCommand, RdsCommand, StackCommand};
use crate::error::CliError;

pub fn build_config(args: &crate::commands::cli::Args) -> Result<AwsConfig, CliError> {
    let mut cfg = match args.config.as_deref() {
        Some(path) => e2e_aws_core::load_from(path)?,
        None => e2e_aws_core::load_default()?,
    };
    if let Some(program) = &args.program {
        cfg.program = program.clone();
    }
    e2e_aws_core::config::validate(&cfg)?;
    Ok(cfg)
}

pub fn apply_overrides(cfg: &mut AwsConfig, cmd: &Commands) {
    if let Commands::Rds(RdsCommand::PurgeSnapshots {
        continue_on_error: true,
    }) = cmd
    {
        cfg.snapshot_cleanup = SnapshotCleanup::ContinueOnError;
    }
}

/// Runs one sub-command and returns the lines to print.
pub async fn dispatch<E: Executor>(aws: &Aws<E>, cmd: Commands) -> Result<Vec<String>, CliError> {
    let mut out = Vec::new();
    match cmd {
        Commands::Stack(StackCommand::Create {
            name,
            template_body,
            wait,
        }) => {
            aws.create_stack(&name, &template_body).await?;
            if wait {
                aws.wait_stack_create_complete(&name).await?;
            }
        }
        Commands::Stack(StackCommand::WaitCreate(s)) => {
            aws.wait_stack_create_complete(&s.name).await?
        }
        Commands::Stack(StackCommand::Outputs(s)) => {
            let outputs = aws.stack_outputs(&s.name).await?;
            out.push(serde_json::to_string_pretty(&outputs).map_err(CliError::Output)?);
        }
        Commands::Stack(StackCommand::Delete { name, wait }) => {
            aws.delete_stack(&name).await?;
            if wait {
                aws.wait_stack_delete_complete(&name).await?;
            }
        }
        Commands::Stack(StackCommand::WaitDelete(s)) => {
            aws.wait_stack_delete_complete(&s.name).await?
        }
        Commands::Ecr(EcrCommand::Create { name }) => out.push(aws.create_ecr_repo(&name).await?),
        Commands::Ecr(EcrCommand::LoginPassword) => out.push(aws.ecr_login_password().await?),
        Commands::Ecr(EcrCommand::Delete { name }) => aws.delete_ecr_repo(&name).await?,
        Commands::Efs(EfsCommand::Size) => out.push(aws.file_system_size().await?.to_string()),
        Commands::Rds(RdsCommand::PurgeSnapshots { .. }) => {
            aws.delete_all_db_cluster_snapshots().await?
        }
    }
    Ok(out)
}
