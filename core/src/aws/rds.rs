use crate::command::CommandLine;
use crate::errors::{AwsError, SnapshotFailure};
use crate::exec::Executor;

use super::types::SnapshotListing;
use super::{Aws, SnapshotCleanup};

impl<E: Executor> Aws<E> {
    /// Removes all manual RDS cluster snapshots so test runs don't hit the
    /// account's snapshot quota.
    ///
    /// Lists with `aws rds describe-db-cluster-snapshots --snapshot-type manual`
    /// and then runs `aws rds delete-db-cluster-snapshot` once per record, in
    /// listing order. The `--snapshot-type manual` filter is a deliberate
    /// departure from listing every snapshot: automated snapshots can't be
    /// deleted by hand and would only produce failures here.
    ///
    /// Records without an identifier are skipped with a warning.
    pub async fn delete_all_db_cluster_snapshots(&self) -> Result<(), AwsError> {
        let out = self
            .exec_capture(
                CommandLine::new("rds")
                    .arg("describe-db-cluster-snapshots")
                    .flag("--snapshot-type", "manual"),
            )
            .await?;
        let listing: SnapshotListing = serde_json::from_slice(&out.stdout)?;
        tracing::debug!(
            target: "e2e_aws.aws",
            count = listing.snapshots.len(),
            "listed manual cluster snapshots"
        );

        let mut attempted = 0;
        let mut failed = Vec::new();
        for snapshot in listing.snapshots {
            if snapshot.identifier.trim().is_empty() {
                tracing::warn!(
                    target: "e2e_aws.aws",
                    cluster = %snapshot.cluster,
                    "skipping cluster snapshot without identifier"
                );
                continue;
            }
            attempted += 1;
            let delete = CommandLine::new("rds")
                .arg("delete-db-cluster-snapshot")
                .flag("--db-cluster-snapshot-identifier", snapshot.identifier.as_str());
            match self.exec(delete).await {
                Ok(()) => {
                    tracing::info!(
                        target: "e2e_aws.aws",
                        snapshot = %snapshot.identifier,
                        cluster = %snapshot.cluster,
                        "cluster snapshot deleted"
                    );
                }
                Err(err) if self.snapshot_cleanup == SnapshotCleanup::StopOnFirstError => {
                    return Err(err);
                }
                Err(AwsError::Exec(error)) => failed.push(SnapshotFailure {
                    identifier: snapshot.identifier,
                    error,
                }),
                Err(err) => return Err(err),
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(AwsError::SnapshotCleanup { attempted, failed })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingExecutor;
    use pretty_assertions::assert_eq;

    const LISTING: &str = r#"{
  "DBClusterSnapshots": [
    {"DBClusterSnapshotIdentifier": "snap-a", "DBClusterIdentifier": "cluster-1", "SnapshotType": "manual"},
    {"DBClusterSnapshotIdentifier": "snap-b", "DBClusterIdentifier": "cluster-1", "SnapshotType": "manual"},
    {"DBClusterSnapshotIdentifier": "snap-c", "DBClusterIdentifier": "cluster-2", "SnapshotType": "manual"}
  ]
}"#;

    fn delete_cmd(id: &str) -> String {
        format!("aws rds delete-db-cluster-snapshot --db-cluster-snapshot-identifier {id}")
    }

    #[tokio::test]
    async fn empty_listing_issues_no_deletions() {
        let aws = Aws::with_executor(
            RecordingExecutor::new().respond_stdout(r#"{"DBClusterSnapshots": []}"#),
        );
        aws.delete_all_db_cluster_snapshots().await.unwrap();
        assert_eq!(
            aws.executor().commands(),
            vec!["aws rds describe-db-cluster-snapshots --snapshot-type manual"]
        );
    }

    #[tokio::test]
    async fn deletes_every_snapshot_in_listing_order() {
        let aws = Aws::with_executor(RecordingExecutor::new().respond_stdout(LISTING));
        aws.delete_all_db_cluster_snapshots().await.unwrap();

        let commands = aws.executor().commands();
        assert_eq!(commands.len(), 4);
        assert_eq!(
            &commands[1..],
            &[delete_cmd("snap-a"), delete_cmd("snap-b"), delete_cmd("snap-c")]
        );
    }

    #[tokio::test]
    async fn stops_at_first_failed_deletion_by_default() {
        let aws = Aws::with_executor(
            RecordingExecutor::new()
                .respond_stdout(LISTING)
                .respond_ok()
                .respond_exit(254, "InvalidDBClusterSnapshotStateFault"),
        );
        let err = aws.delete_all_db_cluster_snapshots().await.unwrap_err();

        assert!(matches!(err, AwsError::Exec(_)));
        let commands = aws.executor().commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2], delete_cmd("snap-b"));
    }

    #[tokio::test]
    async fn continue_on_error_attempts_all_and_aggregates() {
        let aws = Aws::with_executor(
            RecordingExecutor::new()
                .respond_stdout(LISTING)
                .respond_exit(254, "busy")
                .respond_ok()
                .respond_exit(254, "busy"),
        )
        .snapshot_cleanup(SnapshotCleanup::ContinueOnError);

        let err = aws.delete_all_db_cluster_snapshots().await.unwrap_err();
        match err {
            AwsError::SnapshotCleanup { attempted, failed } => {
                assert_eq!(attempted, 3);
                let ids: Vec<_> = failed.iter().map(|f| f.identifier.as_str()).collect();
                assert_eq!(ids, vec!["snap-a", "snap-c"]);
                assert_eq!(failed[0].error.exit_code(), Some(254));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(aws.executor().commands().len(), 4);
    }

    #[tokio::test]
    async fn records_without_identifier_are_skipped() {
        let listing = r#"{"DBClusterSnapshots": [
  {"DBClusterIdentifier": "cluster-1"},
  {"DBClusterSnapshotIdentifier": "snap-b", "DBClusterIdentifier": "cluster-1"},
  {"DBClusterSnapshotIdentifier": " ", "DBClusterIdentifier": "cluster-2"}
]}"#;
        let aws = Aws::with_executor(RecordingExecutor::new().respond_stdout(listing));
        aws.delete_all_db_cluster_snapshots().await.unwrap();

        let commands = aws.executor().commands();
        assert_eq!(&commands[1..], &[delete_cmd("snap-b")]);
    }

    #[tokio::test]
    async fn listing_failure_issues_no_deletions() {
        let aws = Aws::with_executor(RecordingExecutor::new().respond_exit(255, "AccessDenied"));
        assert!(aws.delete_all_db_cluster_snapshots().await.is_err());
        assert_eq!(aws.executor().commands().len(), 1);
    }

    #[tokio::test]
    async fn malformed_listing_is_a_decode_error() {
        let aws = Aws::with_executor(RecordingExecutor::new().respond_stdout("\"oops\""));
        let err = aws.delete_all_db_cluster_snapshots().await.unwrap_err();
        assert!(matches!(err, AwsError::Decode(_)));
    }
}
