use clap::Parser;
mod commands;
mod error;

use commands::{cli, run};
use e2e_aws_core::Aws;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    if let Err(e) = run_cli(args).await {
        tracing::error!(error = %e, "e2e-aws failed");
        std::process::exit(e.exit_code());
    }
}

async fn run_cli(args: cli::Args) -> Result<(), error::CliError> {
    let mut cfg = run::build_config(&args)?;
    run::apply_overrides(&mut cfg, &args.command);

    let aws = Aws::from_config(&cfg);
    for line in run::dispatch(&aws, args.command).await? {
        println!("{line}");
    }
    Ok(())
}
