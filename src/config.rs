//! Configuration module for CourseMatch
//!
//! This module handles loading and validating configuration from environment
//! variables, providing strongly-typed configuration structures for all
//! application components.

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::kafka::KafkaConfig;

/// Main configuration structure for CourseMatch
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct Config {
    /// Application-level configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub app: AppConfig,

    /// Kafka configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub kafka: KafkaConfig,

    /// Administrative backend configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub backend: BackendConfig,

    /// LLM completion endpoint configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub llm: LlmConfig,

    /// Faculty experience service configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub experience: ExperienceConfig,
}

/// Application-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct AppConfig {
    /// Log level
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Environment (development, staging, production)
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,
}

impl AppConfig {
    /// Check if running in production mode (selects JSON log formatting)
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Administrative backend configuration
///
/// The backend serves course metadata and receives recommendation results.
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct BackendConfig {
    /// Base URL of the administrative backend API
    #[envconfig(from = "BACKEND_API_URL", default = "http://localhost:20001")]
    pub base_url: String,

    /// Request timeout in seconds
    #[envconfig(from = "BACKEND_TIMEOUT_SECS", default = "10")]
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Course detail endpoint for a given course
    pub fn course_url(&self, course_id: &str) -> String {
        format!(
            "{}/admin/courses/{}",
            self.base_url.trim_end_matches('/'),
            course_id
        )
    }

    /// Endpoint that receives recommendation results
    pub fn llm_result_url(&self) -> String {
        format!(
            "{}/admin/assignments/llm-result",
            self.base_url.trim_end_matches('/')
        )
    }
}

/// LLM completion endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct LlmConfig {
    /// Chat-completion endpoint URL
    #[envconfig(
        from = "LLM_API_URL",
        default = "https://api.cerebras.ai/v1/chat/completions"
    )]
    pub endpoint: String,

    /// Bearer token for the completion endpoint
    #[envconfig(from = "LLM_API_KEY", default = "")]
    pub api_key: String,

    /// Model identifier
    #[envconfig(from = "LLM_MODEL", default = "llama-3.1-70b")]
    pub model: String,

    /// Maximum completion tokens (the answer is a single YES/NO token)
    #[envconfig(from = "LLM_MAX_TOKENS", default = "10")]
    pub max_tokens: u32,

    /// Sampling temperature (kept low for stable, literal answers)
    #[envconfig(from = "LLM_TEMPERATURE", default = "0.1")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[envconfig(from = "LLM_TIMEOUT_SECS", default = "30")]
    pub request_timeout_secs: u64,
}

impl LlmConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Mask the API key for logging
    pub fn masked_key(&self) -> &'static str {
        if self.api_key.is_empty() {
            "(unset)"
        } else {
            "***"
        }
    }
}

/// Faculty experience service configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct ExperienceConfig {
    /// URL template with a `{faculty_id}` placeholder
    #[envconfig(
        from = "FACULTY_EXPERIENCE_API_URL",
        default = "https://api.example.com/faculty/{faculty_id}/experience"
    )]
    pub url_template: String,

    /// Request timeout in seconds
    #[envconfig(from = "EXPERIENCE_TIMEOUT_SECS", default = "10")]
    pub request_timeout_secs: u64,
}

impl ExperienceConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        // Parse configuration from environment
        Config::init_from_env().map_err(Error::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.kafka.brokers.is_empty() {
            return Err(Error::config("Kafka brokers cannot be empty"));
        }

        if self.kafka.topic.is_empty() {
            return Err(Error::config("Kafka topic cannot be empty"));
        }

        if self.backend.base_url.is_empty() {
            return Err(Error::config("Backend API URL cannot be empty"));
        }

        if self.llm.endpoint.is_empty() {
            return Err(Error::config("LLM endpoint URL cannot be empty"));
        }

        if !self.experience.url_template.contains("{faculty_id}") {
            return Err(Error::config(
                "Experience service URL template must contain a {faculty_id} placeholder",
            ));
        }

        Ok(())
    }

    /// Log configuration (with sensitive data masked)
    pub fn log_config(&self) {
        tracing::info!(
            environment = %self.app.environment,
            log_level = %self.app.log_level,
            "Application configuration"
        );

        tracing::info!(
            brokers = %self.kafka.brokers,
            group_id = %self.kafka.group_id,
            topic = %self.kafka.topic,
            auto_commit = %self.kafka.enable_auto_commit,
            "Kafka configuration"
        );

        tracing::info!(
            base_url = %self.backend.base_url,
            timeout_secs = %self.backend.request_timeout_secs,
            "Backend configuration"
        );

        tracing::info!(
            endpoint = %self.llm.endpoint,
            model = %self.llm.model,
            api_key = %self.llm.masked_key(),
            max_tokens = %self.llm.max_tokens,
            temperature = %self.llm.temperature,
            "LLM configuration"
        );

        tracing::info!(
            url_template = %self.experience.url_template,
            timeout_secs = %self.experience.request_timeout_secs,
            "Experience service configuration"
        );
    }
}
