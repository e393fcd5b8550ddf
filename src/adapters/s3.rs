use crate::domain::ports::BackupBucket;
use crate::utils::error::{Result, TitlesError};
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client as S3Client;

/// Fixed bucket/key pair fetched only to prove the bucket is reachable.
#[derive(Debug, Clone)]
pub struct S3BackupBucket {
    client: S3Client,
    bucket: String,
    probe_key: String,
}

impl S3BackupBucket {
    pub fn new(client: S3Client, bucket: String, probe_key: String) -> Self {
        Self {
            client,
            bucket,
            probe_key,
        }
    }
}

#[async_trait]
impl BackupBucket for S3BackupBucket {
    async fn probe_get_object(&self) -> Result<()> {
        // The body stream is dropped unread.
        self.client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.probe_key)
            .send()
            .await
            .map_err(|e| TitlesError::object_store(DisplayErrorContext(e)))?;

        Ok(())
    }
}
