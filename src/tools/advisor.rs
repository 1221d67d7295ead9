//! Advisory chat tool
//!
//! Sends a free-text question to an OpenAI-compatible chat endpoint with the
//! computed recommendations as context. Presentation-layer only; the planner
//! core never depends on this.

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::Recommendation;

/// System message sent with every advisory request
const SYSTEM_MESSAGE: &str =
    "You are a helpful assistant providing food recommendations based on the given dataset.";

/// Environment variable holding the API key (required)
pub const API_KEY_ENV: &str = "NUTRIPLAN_CHAT_API_KEY";
/// Environment variable overriding the endpoint base URL
pub const BASE_URL_ENV: &str = "NUTRIPLAN_CHAT_BASE_URL";
/// Environment variable overriding the model name
pub const MODEL_ENV: &str = "NUTRIPLAN_CHAT_MODEL";

const DEFAULT_BASE_URL: &str = "https://dashscope-intl.aliyuncs.com/compatible-mode/v1";
const DEFAULT_MODEL: &str = "qwen-plus";

/// Response for ask_advisor
#[derive(Debug, Serialize)]
pub struct AdvisorResponse {
    pub answer: String,
    pub model: String,
    pub context_items: usize,
}

/// Render the recommendation list as prompt context lines
pub fn build_context(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return "No specific dataset recommendations available.".to_string();
    }

    let mut text = String::from("Here are some food options from the dataset:\n");
    for rec in recommendations {
        text.push_str(&format!("- {} ({} kcal)\n", rec.name, rec.calories));
    }
    text
}

/// Ask the chat endpoint a question, grounded in the given recommendations
pub fn ask_advisor(
    question: &str,
    recommendations: &[Recommendation],
) -> Result<AdvisorResponse, String> {
    let api_key = std::env::var(API_KEY_ENV)
        .map_err(|_| format!("advisory chat is not configured: set {}", API_KEY_ENV))?;
    let base_url =
        std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let full_prompt = format!("{}\nUser question: {}", build_context(recommendations), question);

    let body = json!({
        "model": model,
        "messages": [
            {"role": "system", "content": SYSTEM_MESSAGE},
            {"role": "user", "content": full_prompt},
        ],
    });

    tracing::debug!(model = %model, context_items = recommendations.len(), "advisor request");

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(format!("{}/chat/completions", base_url.trim_end_matches('/')))
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .map_err(|e| format!("chat endpoint request failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().unwrap_or_default();
        return Err(format!("chat endpoint returned {}: {}", status, detail));
    }

    let payload: Value = response
        .json()
        .map_err(|e| format!("chat endpoint returned invalid JSON: {}", e))?;

    let answer = payload
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .ok_or_else(|| "chat endpoint response had no message content".to_string())?
        .to_string();

    Ok(AdvisorResponse {
        answer,
        model,
        context_items: recommendations.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_with_items() {
        let recs = vec![
            Recommendation::new("Nasi Goreng", 630.0),
            Recommendation::new("Es Teh", 90.0),
        ];
        let context = build_context(&recs);
        assert!(context.starts_with("Here are some food options"));
        assert!(context.contains("- Nasi Goreng (630 kcal)"));
        assert!(context.contains("- Es Teh (90 kcal)"));
    }

    #[test]
    fn test_context_without_items() {
        assert_eq!(
            build_context(&[]),
            "No specific dataset recommendations available."
        );
    }
}
