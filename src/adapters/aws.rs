use crate::adapters::{dynamodb::DynamoTitleStore, s3::S3BackupBucket, sqs::SqsEventQueue};
use crate::config::AppConfig;
use crate::core::title_service::TitleService;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use std::sync::Arc;

/// SDK clients built once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct AwsClients {
    pub dynamodb: aws_sdk_dynamodb::Client,
    pub sqs: aws_sdk_sqs::Client,
    pub s3: aws_sdk_s3::Client,
}

impl AwsClients {
    pub async fn load(config: &AppConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws.region.clone()));
        if let Some(endpoint) = &config.aws.endpoint_url {
            tracing::info!("Using AWS endpoint override: {}", endpoint);
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        // Path-style addressing is what LocalStack-style endpoints expect.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.aws.endpoint_url.is_some())
            .build();

        Self {
            dynamodb: aws_sdk_dynamodb::Client::new(&sdk_config),
            sqs: aws_sdk_sqs::Client::new(&sdk_config),
            s3: aws_sdk_s3::Client::from_conf(s3_config),
        }
    }

    pub fn into_service(self, config: &AppConfig) -> TitleService {
        TitleService::new(
            Arc::new(DynamoTitleStore::new(
                self.dynamodb,
                config.store.table_name.clone(),
            )),
            Arc::new(SqsEventQueue::new(self.sqs, config.queue.url.clone())),
            Arc::new(S3BackupBucket::new(
                self.s3,
                config.backup.bucket.clone(),
                config.backup.probe_key.clone(),
            )),
        )
    }
}
