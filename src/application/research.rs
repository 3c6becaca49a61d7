//! Research workflow: validate a putter name, ask the upstream provider,
//! format the answer.

use std::{sync::Arc, time::Instant};

use async_trait::async_trait;
use metrics::{counter, histogram};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::report;
use crate::infra::upstream::UpstreamError;

/// Seam between the application and whatever produces raw report text.
/// The production implementation is the messages-API client; tests swap in
/// canned providers.
#[async_trait]
pub trait ResearchProvider: Send + Sync {
    async fn research(&self, name: &str) -> Result<String, UpstreamError>;
}

#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("please provide a putter name")]
    EmptyName,
    #[error("upstream research failed: {0}")]
    Upstream(#[from] UpstreamError),
}

/// A completed appraisal: the upstream's raw text and its formatted markup.
#[derive(Debug, Clone)]
pub struct ResearchReport {
    pub name: String,
    pub raw_text: String,
    pub html: String,
}

pub struct ResearchService {
    provider: Arc<dyn ResearchProvider>,
}

impl ResearchService {
    pub fn new(provider: Arc<dyn ResearchProvider>) -> Self {
        Self { provider }
    }

    /// Research one putter model and format the report. Formatting itself is
    /// total; only an empty name or an upstream failure can surface here.
    pub async fn research(&self, name: &str) -> Result<ResearchReport, ResearchError> {
        let name = name.trim();
        if name.is_empty() {
            counter!("stima_research_failures_total").increment(1);
            return Err(ResearchError::EmptyName);
        }

        counter!("stima_research_requests_total").increment(1);

        let started = Instant::now();
        let outcome = self.provider.research(name).await;
        histogram!("stima_upstream_latency_ms").record(started.elapsed().as_millis() as f64);

        let raw_text = match outcome {
            Ok(text) => text,
            Err(err) => {
                counter!("stima_research_failures_total").increment(1);
                warn!(
                    target = "stima::research",
                    putter = name,
                    error = %err,
                    "upstream research failed"
                );
                return Err(err.into());
            }
        };

        let html = report::format(&raw_text);
        info!(
            target = "stima::research",
            putter = name,
            raw_bytes = raw_text.len(),
            html_bytes = html.len(),
            "report formatted"
        );

        Ok(ResearchReport {
            name: name.to_string(),
            raw_text,
            html,
        })
    }
}
