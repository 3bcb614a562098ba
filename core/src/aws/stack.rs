use crate::command::CommandLine;
use crate::errors::AwsError;
use crate::exec::Executor;

use super::types::StackOutput;
use super::{require_non_empty, Aws};

impl<E: Executor> Aws<E> {
    /// `aws cloudformation create-stack --stack-name $name --template-body $template_path`
    pub async fn create_stack(&self, name: &str, template_path: &str) -> Result<(), AwsError> {
        require_non_empty("name", name)?;
        require_non_empty("template_path", template_path)?;
        self.exec(
            CommandLine::new("cloudformation")
                .arg("create-stack")
                .flag("--stack-name", name)
                .flag("--template-body", template_path),
        )
        .await?;
        tracing::info!(target: "e2e_aws.aws", stack = name, "stack creation started");
        Ok(())
    }

    /// `aws cloudformation wait stack-create-complete --stack-name $name`
    ///
    /// Blocks until the stack reaches a terminal state or the CLI's own waiter
    /// gives up.
    pub async fn wait_stack_create_complete(&self, name: &str) -> Result<(), AwsError> {
        require_non_empty("name", name)?;
        self.exec(wait_command("stack-create-complete", name)).await
    }

    /// `aws cloudformation describe-stacks --stack-name $name | jq -r .Stacks[0].Outputs`
    ///
    /// A stack without outputs prints `null`, which decodes to an empty list.
    pub async fn stack_outputs(&self, name: &str) -> Result<Vec<StackOutput>, AwsError> {
        require_non_empty("name", name)?;
        let out = self
            .exec_capture(
                CommandLine::new("cloudformation")
                    .arg("describe-stacks")
                    .flag("--stack-name", name)
                    .pipe_jq(".Stacks[0].Outputs"),
            )
            .await?;
        decode_outputs(&out.stdout)
    }

    /// `aws cloudformation delete-stack --stack-name $name`
    pub async fn delete_stack(&self, name: &str) -> Result<(), AwsError> {
        require_non_empty("name", name)?;
        self.exec(
            CommandLine::new("cloudformation")
                .arg("delete-stack")
                .flag("--stack-name", name),
        )
        .await?;
        tracing::info!(target: "e2e_aws.aws", stack = name, "stack deletion started");
        Ok(())
    }

    /// `aws cloudformation wait stack-delete-complete --stack-name $name`
    pub async fn wait_stack_delete_complete(&self, name: &str) -> Result<(), AwsError> {
        require_non_empty("name", name)?;
        self.exec(wait_command("stack-delete-complete", name)).await
    }
}

fn wait_command(waiter: &str, name: &str) -> CommandLine {
    CommandLine::new("cloudformation")
        .arg("wait")
        .arg(waiter)
        .flag("--stack-name", name)
}

fn decode_outputs(stdout: &[u8]) -> Result<Vec<StackOutput>, AwsError> {
    let outputs: Option<Vec<StackOutput>> = serde_json::from_slice(stdout)?;
    Ok(outputs.unwrap_or_default())
}
