// SPDX-License-Identifier: MIT

//! OpenAI-compatible chat client for vision naming

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::encode::EncodedImage;
use crate::{PixnameError, Result};

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API credential
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

const SYSTEM_PROMPT: &str = "You name image files succinctly for easy search. \
    Respond with a single short snake_case name, no spaces, lowercase, \
    ASCII letters/numbers/underscores only. 3-6 words, max 42 characters. \
    Do not include the file extension or any punctuation beyond underscores.";

const USER_PROMPT: &str = "Give a concise, descriptive base name for this image. \
    Return only the name, nothing else.";

/// Narrow seam over the external naming service.
///
/// One method: encoded image + model id in, suggestion text out. Keeps the
/// batch runner testable with a stub.
#[async_trait]
pub trait NameSuggester: Send + Sync {
    /// Ask the service for a short free-text name for the image
    async fn suggest_name(&self, image: &EncodedImage, model: &str) -> Result<String>;
}

/// Client for an OpenAI-compatible chat-completions endpoint
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a client with an explicit API key and base URL
    pub fn new(api_key: String, base_url: &str) -> Self {
        // The upstream default timeout is effectively unbounded; a stuck
        // request should fail the batch instead of hanging it.
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Create a client reading the API key from the environment
    pub fn from_env(base_url: &str) -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            PixnameError::Config(format!("{} is not set in the environment", API_KEY_VAR))
        })?;
        Ok(Self::new(api_key, base_url))
    }
}

#[async_trait]
impl NameSuggester for OpenAiClient {
    async fn suggest_name(&self, image: &EncodedImage, model: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        // Low temperature and a tight token cap keep the output terse and
        // close to deterministic.
        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: USER_PROMPT.to_string(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: image.data_url(),
                            },
                        },
                    ]),
                },
            ],
            temperature: 0.2,
            max_tokens: 20,
        };

        debug!("Sending vision request: model={}", model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PixnameError::Service(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let result: ChatResponse = response.json().await?;
        let text = result
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or_else(|| PixnameError::Service("response contained no choices".to_string()))?;

        Ok(text.trim().to_string())
    }
}
