//! CourseMatch - LLM-assisted course assignment review
//!
//! This application consumes course-assignment candidate events from Kafka,
//! enriches each candidate with faculty experience and course metadata,
//! consults an LLM for a binary recommendation, and reports the result to
//! the administrative backend.

use std::sync::Arc;

use coursematch::clients::{BackendReporter, CompletionClient, CourseClient, ExperienceClient};
use coursematch::kafka::{shutdown_signal, EventConsumer, EventProcessor};
use coursematch::{logging, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Validate configuration
    config.validate()?;

    // Initialize logging/tracing
    logging::init_tracing(&config.app)?;

    // Log configuration (with sensitive data masked)
    config.log_config();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting CourseMatch");

    // One HTTP client shared across all collaborators
    let http = reqwest::Client::new();

    let processor = EventProcessor::new(
        Arc::new(ExperienceClient::new(http.clone(), &config.experience)),
        Arc::new(CourseClient::new(http.clone(), &config.backend)),
        Arc::new(CompletionClient::new(http.clone(), &config.llm)),
        Arc::new(BackendReporter::new(http, &config.backend)),
    );

    let consumer = EventConsumer::new(&config.kafka, processor)?;
    consumer.run(shutdown_signal()).await?;

    tracing::info!("CourseMatch shutdown complete");
    Ok(())
}
