use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Provision and tear down aws resources used by end-to-end tests")]
pub struct Args {
    /// Config file (TOML). Defaults to ./e2e-aws.toml, then the user config dir.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override the aws executable.
    #[arg(long, global = true)]
    pub program: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// CloudFormation stacks.
    #[command(subcommand)]
    Stack(StackCommand),
    /// ECR repositories.
    #[command(subcommand)]
    Ecr(EcrCommand),
    /// EFS file systems.
    #[command(subcommand)]
    Efs(EfsCommand),
    /// RDS cluster snapshots.
    #[command(subcommand)]
    Rds(RdsCommand),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct StackName {
    #[arg(long)]
    pub name: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum StackCommand {
    Create {
        #[arg(long)]
        name: String,
        /// Passed verbatim as `--template-body`, e.g. `file://vpc.yml`.
        #[arg(long)]
        template_body: String,
        /// Wait for stack-create-complete before returning.
        #[arg(long, default_value_t = false)]
        wait: bool,
    },
    WaitCreate(StackName),
    /// Print the stack outputs as JSON.
    Outputs(StackName),
    Delete {
        #[arg(long)]
        name: String,
        /// Wait for stack-delete-complete before returning.
        #[arg(long, default_value_t = false)]
        wait: bool,
    },
    WaitDelete(StackName),
}

#[derive(Subcommand, Debug, Clone)]
pub enum EcrCommand {
    /// Create a repository and print its URI.
    Create {
        #[arg(long)]
        name: String,
    },
    LoginPassword,
    Delete {
        #[arg(long)]
        name: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum EfsCommand {
    /// Print the size in bytes of the first file system.
    Size,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RdsCommand {
    /// Delete every manual cluster snapshot.
    PurgeSnapshots {
        /// Keep deleting after a failure and report all failures at the end.
        #[arg(long, default_value_t = false)]
        continue_on_error: bool,
    },
}
