//! Gamification points, awarded through the internal API.

use std::future::Future;

use serde::Serialize;

use crate::error::PlumeError;
use crate::model::Did;
use crate::response::error_for_response;

/// Awards points to a user.
pub trait PointsClient {
    fn award(&self, did: &Did, points: u32) -> impl Future<Output = Result<(), PlumeError>>;
}

#[derive(Serialize)]
struct AwardRequest<'a> {
    did: &'a str,
    points: u32,
}

/// `POST {api_base}/points` with `{ did, points }`.
#[derive(Clone)]
pub struct HttpPointsClient {
    client: reqwest::Client,
    url: String,
}

impl HttpPointsClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl PointsClient for HttpPointsClient {
    async fn award(&self, did: &Did, points: u32) -> Result<(), PlumeError> {
        let response = self
            .client
            .post(&self.url)
            .json(&AwardRequest {
                did: did.as_str(),
                points,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_for_response(response).await);
        }
        tracing::debug!(%did, points, "points awarded");
        Ok(())
    }
}
