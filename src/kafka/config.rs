//! Kafka configuration module

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Kafka consumer configuration settings
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct KafkaConfig {
    /// Kafka broker addresses (comma-separated)
    #[serde(default = "default_brokers")]
    #[envconfig(from = "KAFKA_BROKER", default = "localhost:9094")]
    pub brokers: String,

    /// Consumer group ID
    #[serde(default = "default_group_id")]
    #[envconfig(from = "KAFKA_GROUP_ID", default = "llm-assignment-consumer-group")]
    pub group_id: String,

    /// Topic carrying course-assignment candidate events
    #[serde(default = "default_topic")]
    #[envconfig(from = "KAFKA_TOPIC", default = "course-assignment-llm")]
    pub topic: String,

    /// Offset reset behavior on first join (earliest, latest)
    #[serde(default = "default_auto_offset_reset")]
    #[envconfig(from = "KAFKA_AUTO_OFFSET_RESET", default = "earliest")]
    pub auto_offset_reset: String,

    /// Acknowledge offsets automatically, decoupled from processing outcome
    #[serde(default = "default_enable_auto_commit")]
    #[envconfig(from = "KAFKA_ENABLE_AUTO_COMMIT", default = "true")]
    pub enable_auto_commit: bool,

    /// Session timeout in milliseconds
    #[serde(default = "default_session_timeout")]
    #[envconfig(from = "KAFKA_SESSION_TIMEOUT_MS", default = "30000")]
    pub session_timeout_ms: u32,
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: default_brokers(),
            group_id: default_group_id(),
            topic: default_topic(),
            auto_offset_reset: default_auto_offset_reset(),
            enable_auto_commit: default_enable_auto_commit(),
            session_timeout_ms: default_session_timeout(),
        }
    }
}

impl KafkaConfig {
    /// Get session timeout as Duration
    pub fn session_timeout(&self) -> Duration {
        Duration::from_millis(self.session_timeout_ms as u64)
    }

    /// Build rdkafka consumer configuration
    pub fn build_consumer_config(&self) -> rdkafka::ClientConfig {
        let mut config = rdkafka::ClientConfig::new();

        config
            .set("bootstrap.servers", &self.brokers)
            .set("group.id", &self.group_id)
            .set("enable.auto.commit", self.enable_auto_commit.to_string())
            .set("auto.offset.reset", &self.auto_offset_reset)
            .set("session.timeout.ms", self.session_timeout_ms.to_string())
            .set("enable.partition.eof", "false");

        config
    }
}

// Default value functions
fn default_brokers() -> String {
    "localhost:9094".to_string()
}

fn default_group_id() -> String {
    "llm-assignment-consumer-group".to_string()
}

fn default_topic() -> String {
    "course-assignment-llm".to_string()
}

fn default_auto_offset_reset() -> String {
    "earliest".to_string()
}

fn default_enable_auto_commit() -> bool {
    true
}

fn default_session_timeout() -> u32 {
    30000 // 30 seconds
}
