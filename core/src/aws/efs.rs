use crate::command::CommandLine;
use crate::errors::AwsError;
use crate::exec::Executor;

use super::Aws;

impl<E: Executor> Aws<E> {
    /// `aws efs describe-file-systems | jq -r '.FileSystems[0].SizeInBytes.Value'`
    ///
    /// Size in bytes of the first file system returned by the call.
    pub async fn file_system_size(&self) -> Result<u64, AwsError> {
        let out = self
            .exec_capture(
                CommandLine::new("efs")
                    .arg("describe-file-systems")
                    .pipe_jq("'.FileSystems[0].SizeInBytes.Value'"),
            )
            .await?;
        parse_size(&out.stdout_lossy())
    }
}

fn parse_size(raw: &str) -> Result<u64, AwsError> {
    let trimmed = raw.trim();
    trimmed.parse::<u64>().map_err(|source| AwsError::ParseSize {
        raw: trimmed.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingExecutor;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn size_is_parsed_from_filtered_output() {
        let aws = Aws::with_executor(RecordingExecutor::new().respond_stdout("6144\n"));
        assert_eq!(aws.file_system_size().await.unwrap(), 6144);
        assert_eq!(
            aws.executor().commands(),
            vec!["aws efs describe-file-systems | jq -r '.FileSystems[0].SizeInBytes.Value'"]
        );
    }

    #[test]
    fn parse_size_accepts_large_values() {
        assert_eq!(parse_size("0").unwrap(), 0);
        assert_eq!(parse_size(" 18446744073709551615 ").unwrap(), u64::MAX);
    }

    #[test]
    fn parse_size_rejects_non_numeric_text() {
        for raw in ["null", "", "-1", "12.5"] {
            let err = parse_size(raw).unwrap_err();
            assert!(matches!(err, AwsError::ParseSize { .. }), "{raw}");
        }
    }
}
