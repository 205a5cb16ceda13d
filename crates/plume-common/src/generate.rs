//! AI-assisted content generation through the internal API.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::PlumeError;
use crate::response::error_for_response;

/// Produces post body text from a prompt.
pub trait ContentGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, PlumeError>>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    content: String,
}

/// `POST {api_base}/generate` with `{ prompt }`, answered with `{ content }`.
#[derive(Clone)]
pub struct HttpGenerator {
    client: reqwest::Client,
    url: String,
}

impl HttpGenerator {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl ContentGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, PlumeError> {
        let response = self
            .client
            .post(&self.url)
            .json(&GenerateRequest { prompt })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_for_response(response).await);
        }

        let text = response.text().await?;
        let GenerateResponse { content } = serde_json::from_str(&text)?;
        tracing::debug!(len = content.len(), "generated content");
        Ok(content)
    }
}
