//! LLM recommendation engine client
//!
//! Builds a deterministic prompt from the enrichment data, queries a
//! chat-completion endpoint, and parses a YES/NO decision from the model's
//! free-text reply. The answer counts as positive only when it starts with
//! "YES" after trimming and upper-casing; everything else, including an
//! empty or malformed reply, is negative.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{ClientError, ClientResult, RecommendationEngine};
use crate::config::LlmConfig;
use crate::models::{CourseDetails, FacultyExperience};

/// System role sent with every consultation.
const SYSTEM_PROMPT: &str = "You are an expert in academic course assignment. \
    Analyze faculty qualifications and course requirements.";

/// Client for the chat-completion endpoint.
pub struct CompletionClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

/// Chat completion request body.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

/// Chat message.
#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

impl Message {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Chat completion response body (fields we care about).
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl CompletionClient {
    /// Create a new completion client.
    pub fn new(http: Client, config: &LlmConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: config.request_timeout(),
        }
    }

    /// Send a chat completion request and return the first choice's content.
    async fn complete(&self, request: &ChatRequest) -> ClientResult<String> {
        let start = std::time::Instant::now();

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "LLM request failed");
                ClientError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "LLM API error");
            return Err(ClientError::Api(format!(
                "LLM API error: {} - {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ClientError::Parse("no choices in completion response".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "LLM chat completion"
        );

        Ok(content)
    }
}

#[async_trait]
impl RecommendationEngine for CompletionClient {
    async fn recommend(
        &self,
        faculty: &FacultyExperience,
        course: &CourseDetails,
    ) -> ClientResult<bool> {
        let prompt = build_prompt(faculty, course);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let answer = self.complete(&request).await?;
        let recommended = parse_decision(&answer);

        info!(
            answer = %answer.trim(),
            recommended,
            "LLM recommendation"
        );

        Ok(recommended)
    }
}

/// Build the consultation prompt.
///
/// The text is deterministic for a given enrichment pair: experience and
/// publication entries joined with ", ", and `Unknown`/`Unknown Course`
/// substituted for missing course fields.
fn build_prompt(faculty: &FacultyExperience, course: &CourseDetails) -> String {
    let experience_text = faculty.experience.join(", ");
    let publications_text = faculty.publications.join(", ");
    let course_code = course.code.as_deref().unwrap_or("Unknown");
    let course_name = course.name.as_deref().unwrap_or("Unknown Course");

    format!(
        "Based on the following information, determine if the faculty member \
         should be assigned to teach this course.\n\
         \n\
         Faculty Experience: {experience_text}\n\
         Faculty Publications: {publications_text}\n\
         Course: {course_code} - {course_name}\n\
         \n\
         Consider:\n\
         1. Relevance of faculty experience to course content\n\
         2. Alignment of faculty expertise with course requirements\n\
         3. Faculty's publication history related to course topics\n\
         \n\
         Respond with ONLY \"YES\" or \"NO\"."
    )
}

/// Parse the model's free-text reply into a binary decision.
fn parse_decision(answer: &str) -> bool {
    answer.trim().to_uppercase().starts_with("YES")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decision_positive() {
        assert!(parse_decision("YES"));
        assert!(parse_decision("yes"));
        assert!(parse_decision("  Yes  "));
        assert!(parse_decision("YES, clearly qualified"));
        assert!(parse_decision("\nyes.\n"));
    }

    #[test]
    fn test_parse_decision_negative() {
        assert!(!parse_decision("NO"));
        assert!(!parse_decision("no"));
        assert!(!parse_decision(""));
        assert!(!parse_decision("   "));
        assert!(!parse_decision("Maybe"));
        assert!(!parse_decision("The answer is YES")); // must start with YES
        assert!(!parse_decision("N/A"));
    }

    #[test]
    fn test_prompt_contains_enrichment_data() {
        let faculty = FacultyExperience {
            experience: vec!["ML".to_string(), "Databases".to_string()],
            publications: vec!["Paper A".to_string()],
        };
        let course = CourseDetails {
            code: Some("CS401".to_string()),
            name: Some("Machine Learning".to_string()),
        };

        let prompt = build_prompt(&faculty, &course);
        assert!(prompt.contains("Faculty Experience: ML, Databases"));
        assert!(prompt.contains("Faculty Publications: Paper A"));
        assert!(prompt.contains("Course: CS401 - Machine Learning"));
        assert!(prompt.contains("Respond with ONLY \"YES\" or \"NO\"."));
    }

    #[test]
    fn test_prompt_placeholders_for_missing_course() {
        let prompt = build_prompt(&FacultyExperience::default(), &CourseDetails::default());
        assert!(prompt.contains("Faculty Experience: \n"));
        assert!(prompt.contains("Faculty Publications: \n"));
        assert!(prompt.contains("Course: Unknown - Unknown Course"));
    }

    #[test]
    fn test_prompt_lists_evaluation_criteria() {
        let prompt = build_prompt(&FacultyExperience::default(), &CourseDetails::default());
        assert!(prompt.contains("1. Relevance of faculty experience to course content"));
        assert!(prompt.contains("2. Alignment of faculty expertise with course requirements"));
        assert!(prompt.contains("3. Faculty's publication history related to course topics"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let faculty = FacultyExperience {
            experience: vec!["ML".to_string()],
            publications: vec![],
        };
        let course = CourseDetails {
            code: Some("CS401".to_string()),
            name: None,
        };

        assert_eq!(build_prompt(&faculty, &course), build_prompt(&faculty, &course));
    }

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "llama-3.1-70b".to_string(),
            messages: vec![Message::system("sys"), Message::user("ask")],
            max_tokens: 10,
            temperature: 0.1,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama-3.1-70b");
        assert_eq!(json["max_tokens"], 10);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "ask");
    }

    #[test]
    fn test_chat_response_parsing() {
        let body = r#"{
            "id": "cmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "YES"}}
            ],
            "usage": {"total_tokens": 12}
        }"#;

        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "YES");
    }

    #[test]
    fn test_chat_response_without_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.choices.is_empty());
    }
}
