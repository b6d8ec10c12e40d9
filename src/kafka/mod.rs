//! Kafka integration module for the assignment pipeline
//!
//! This module provides:
//! - Consumer configuration with an rdkafka `ClientConfig` builder
//! - The sequential consumer loop with graceful shutdown
//! - The per-event processor orchestrating the enrichment/recommendation
//!   pipeline

mod config;
mod consumer;
mod processor;

pub use config::KafkaConfig;
pub use consumer::{shutdown_signal, EventConsumer};
pub use processor::{EventProcessor, ProcessingReport};
