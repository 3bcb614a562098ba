use serde::{Deserialize, Serialize};

/// One entry of a CloudFormation stack's `Outputs` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StackOutput {
    pub output_key: String,
    pub output_value: String,
    pub export_name: String,
}

/// Part of one record returned by `aws rds describe-db-cluster-snapshots`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbClusterSnapshot {
    #[serde(rename = "DBClusterSnapshotIdentifier")]
    pub identifier: String,
    #[serde(rename = "DBClusterIdentifier")]
    pub cluster: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnapshotListing {
    #[serde(rename = "DBClusterSnapshots")]
    pub snapshots: Vec<DbClusterSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stack_output_ignores_unknown_and_missing_fields() {
        let out: StackOutput = serde_json::from_str(
            r#"{"OutputKey":"VpcId","OutputValue":"vpc-123","Description":"the vpc"}"#,
        )
        .unwrap();
        assert_eq!(
            out,
            StackOutput {
                output_key: "VpcId".into(),
                output_value: "vpc-123".into(),
                export_name: String::new(),
            }
        );
    }

    #[test]
    fn snapshot_listing_without_key_is_empty() {
        let listing: SnapshotListing = serde_json::from_str("{}").unwrap();
        assert!(listing.snapshots.is_empty());
    }
}
