//! Kafka candidate-event consumer
//!
//! Pulls candidate events from the configured topic indefinitely and hands
//! each one to the event processor, strictly sequentially: the loop blocks
//! on each event's pipeline before polling the next message. Offsets are
//! acknowledged automatically by the broker client, decoupled from
//! processing outcome.

use futures::stream::StreamExt;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::{BorrowedMessage, Message};
use std::future::Future;
use tracing::{debug, error, info};

use super::{EventProcessor, KafkaConfig};
use crate::error::{Error, Result};
use crate::models::AssignmentCandidateEvent;

/// Consumer that feeds candidate events into the processing pipeline.
pub struct EventConsumer {
    /// Kafka consumer instance
    consumer: StreamConsumer,

    /// Per-event pipeline
    processor: EventProcessor,

    /// Subscribed topic (for logging)
    topic: String,
}

impl EventConsumer {
    /// Create a new event consumer and subscribe to the configured topic.
    ///
    /// Creation or subscription failure is fatal: without a broker
    /// connection there is nothing to recover.
    pub fn new(config: &KafkaConfig, processor: EventProcessor) -> Result<Self> {
        let consumer: StreamConsumer = config
            .build_consumer_config()
            .create()
            .map_err(|e| Error::kafka(format!("Failed to create Kafka consumer: {}", e)))?;

        consumer
            .subscribe(&[&config.topic])
            .map_err(|e| Error::kafka(format!("Failed to subscribe to topic: {}", e)))?;

        Ok(Self {
            consumer,
            processor,
            topic: config.topic.clone(),
        })
    }

    /// Consume messages until the shutdown future resolves.
    ///
    /// Processing is at-most-one-in-flight: each message's pipeline is
    /// awaited before the next poll, so events are handled in broker
    /// delivery order. Shutdown is observed between messages, never
    /// mid-message.
    pub async fn run(self, shutdown: impl Future<Output = ()>) -> Result<()> {
        info!(topic = %self.topic, "Starting Kafka consumer");

        let stream = self.consumer.stream();
        tokio::pin!(stream);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown signal received, stopping consumer");
                    break;
                },
                message = stream.next() => match message {
                    Some(Ok(msg)) => self.handle_message(&msg).await,
                    Some(Err(e)) => {
                        error!(error = %e, "Kafka consumer error");
                    },
                    None => continue,
                },
            }
        }

        info!("Kafka consumer stopped");
        Ok(())
    }

    /// Deserialize and dispatch a single message.
    ///
    /// A malformed message is logged and skipped; the loop continues.
    async fn handle_message(&self, message: &BorrowedMessage<'_>) {
        let partition = message.partition();
        let offset = message.offset();

        let payload = match message.payload() {
            Some(data) => data,
            None => {
                error!(partition, offset, "Message has no payload, skipping");
                return;
            },
        };

        match parse_candidate_event(payload) {
            Ok(event) => {
                debug!(partition, offset, "Dispatching assignment candidate");
                let report = self.processor.process(&event).await;
                debug!(
                    partition,
                    offset,
                    recommended = report.result.recommended,
                    submitted = report.submitted,
                    "Event handled"
                );
            },
            Err(e) => {
                error!(
                    error = %e,
                    partition,
                    offset,
                    "Failed to deserialize message, skipping"
                );
            },
        }
    }
}

/// Parse a message payload into a candidate event.
pub(crate) fn parse_candidate_event(payload: &[u8]) -> Result<AssignmentCandidateEvent> {
    let json_str = std::str::from_utf8(payload)
        .map_err(|e| Error::internal(format!("message payload is not valid UTF-8: {}", e)))?;

    serde_json::from_str(json_str).map_err(Error::from)
}

/// Shutdown signal handler
///
/// Waits for CTRL+C or SIGTERM to gracefully stop the consumer loop.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL+C, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
