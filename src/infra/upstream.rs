//! Client for the upstream research model (an Anthropic-style messages API).
//!
//! One request per appraisal: the fixed research prompt as the system text
//! and the putter name as the sole user message. The reply's first text block
//! is the raw report handed to the formatter.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::research::ResearchProvider;
use crate::config::UpstreamSettings;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Research prompt the upstream model answers with a sectioned report. The
/// section wording here must stay in lockstep with the formatter's section
/// vocabulary.
const SYSTEM_PROMPT: &str = "\
# Your Role
You are a golf equipment expert specializing in Scotty Cameron putters. Given \
the name of a putter model, research its pricing and specifications and write \
a detailed report for collectors weighing a purchase.

# Writing Behaviors
Your writing should not be flowery. Stick to objective facts about the putter. \
Begin with a brief overview of the model, then work through the research \
sections below. Use bold section titles exactly as given, dash bullets for \
enumerations, and `label: value` lines for individual facts.

# Research Parameters
**Basic Information**
   - Year of release
   - Model family/line (e.g., Newport, Phantom X, Special Select, TeI3)
   - Original retail price (if available)
   - Type (blade, mid-mallet, mallet)
   - Production status (standard release, limited edition, tour only)

**Current Market Value**
   - Price range for excellent condition (minimal wear, original headcover)
   - Price range for good condition (normal play wear)
   - Price range for project condition (restoration candidate)
   - Factors that affect this specific model's value

**Buying Recommendations**
   - Fair price benchmarks
   - Condition issues to watch for with this model
   - Restoration potential through the Custom Shop

**Authentication Tips**
   - Key markings and stampings to verify authenticity
   - Common counterfeit indicators for this model
   - Serial number location (if applicable)

**Technical Specifications**
   - Material composition (e.g., 303 stainless steel, GSS, Teryllium)
   - Face technology, neck/hosel design, balance properties
   - Weight technology and standard grip

**Collectibility Factors**
   - Rarity, notable professional usage, special variations
   - Historical significance in the lineup

**Comparable Models**
   - Similar models to consider as alternatives
   - How this model compares to current lineup offerings

# Pricing Advice
Ensure all pricing information reflects current market conditions to the best \
of your ability.";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream api key is not configured")]
    MissingApiKey,
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("upstream response carried no text content")]
    MalformedResponse,
}

#[derive(Debug)]
pub struct MessagesClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl MessagesClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or(UpstreamError::MissingApiKey)?;
        let endpoint = Url::parse(&settings.base_url)?.join("/v1/messages")?;
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("stima/", env!("CARGO_PKG_VERSION"))
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl ResearchProvider for MessagesClient {
    async fn research(&self, name: &str) -> Result<String, UpstreamError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system: SYSTEM_PROMPT,
            messages: vec![Message {
                role: "user",
                content: name,
            }],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&bytes)
                .map(|parsed| parsed.error.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
            return Err(UpstreamError::Status { status, message });
        }

        let parsed: MessagesResponse =
            serde_json::from_slice(&bytes).map_err(|_| UpstreamError::MalformedResponse)?;
        parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text" && !block.text.is_empty())
            .map(|block| block.text)
            .ok_or(UpstreamError::MalformedResponse)
    }
}
