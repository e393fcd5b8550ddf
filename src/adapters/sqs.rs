use crate::domain::model::ChangeEvent;
use crate::domain::ports::EventQueue;
use crate::utils::error::{Result, TitlesError};
use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::Client as SqsClient;

#[derive(Debug, Clone)]
pub struct SqsEventQueue {
    client: SqsClient,
    queue_url: String,
}

impl SqsEventQueue {
    pub fn new(client: SqsClient, queue_url: String) -> Self {
        Self { client, queue_url }
    }
}

#[async_trait]
impl EventQueue for SqsEventQueue {
    async fn publish(&self, event: &ChangeEvent) -> Result<()> {
        let body = event.to_message_body()?;

        let output = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| TitlesError::queue("send_message", DisplayErrorContext(e)))?;

        tracing::debug!(
            event_type = event.event_type(),
            message_id = output.message_id().unwrap_or_default(),
            "change event sent"
        );
        Ok(())
    }

    async fn probe_receive(&self) -> Result<()> {
        let output = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(1)
            .send()
            .await
            .map_err(|e| TitlesError::queue("receive_message", DisplayErrorContext(e)))?;

        tracing::debug!(received = output.messages().len(), "queue probe succeeded");
        Ok(())
    }
}
