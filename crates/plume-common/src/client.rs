//! Content protocol client: creates and edits post records on the user's PDS.

use std::future::Future;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use smol_str::SmolStr;

use crate::error::PlumeError;
use crate::model::{Did, POST_NSID, PostContent, PostId, PostRecord};
use crate::response::error_message;

/// What the content protocol answered: a status plus the record or an error string.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientResponse {
    pub status: StatusCode,
    pub outcome: Result<PostRecord, String>,
}

impl ClientResponse {
    pub fn ok(record: PostRecord) -> Self {
        Self {
            status: StatusCode::OK,
            outcome: Ok(record),
        }
    }

    pub fn failed(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            outcome: Err(message.into()),
        }
    }

    /// Collapse into a plain result, folding failure status into the error.
    pub fn into_result(self) -> Result<PostRecord, PlumeError> {
        match self.outcome {
            Ok(record) if self.status.is_success() => Ok(record),
            Ok(_) => Err(PlumeError::status(self.status, "")),
            Err(message) => Err(PlumeError::status(self.status, message)),
        }
    }
}

/// Persists posts to the decentralized backend.
pub trait PostClient {
    fn create_post(
        &self,
        content: PostContent,
    ) -> impl Future<Output = Result<ClientResponse, PlumeError>>;

    fn edit_post(
        &self,
        id: &PostId,
        content: PostContent,
    ) -> impl Future<Output = Result<ClientResponse, PlumeError>>;
}

/// Authenticated session on a PDS.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub did: Did,
    pub access_jwt: SmolStr,
}

impl Session {
    /// Read `PLUME_DID` and `PLUME_ACCESS_JWT`.
    pub fn from_env() -> Result<Self, PlumeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PlumeError> {
        let did = lookup("PLUME_DID")
            .ok_or_else(|| PlumeError::Config("PLUME_DID is not set".to_owned()))?;
        let access_jwt = lookup("PLUME_ACCESS_JWT")
            .filter(|jwt| !jwt.is_empty())
            .ok_or_else(|| PlumeError::Config("PLUME_ACCESS_JWT is not set".to_owned()))?;
        Ok(Self {
            did: Did::new(did)?,
            access_jwt: access_jwt.into(),
        })
    }
}

#[derive(Deserialize)]
struct WriteOutput {
    uri: SmolStr,
    cid: SmolStr,
}

/// [`PostClient`] speaking XRPC `com.atproto.repo.*` over reqwest.
#[derive(Clone)]
pub struct XrpcPostClient {
    client: reqwest::Client,
    pds_url: String,
    session: Session,
}

impl XrpcPostClient {
    pub fn new(client: reqwest::Client, pds_url: impl Into<String>, session: Session) -> Self {
        Self {
            client,
            pds_url: pds_url.into(),
            session,
        }
    }

    pub fn did(&self) -> &Did {
        &self.session.did
    }

    fn xrpc_url(&self, method: &str) -> String {
        format!("{}/xrpc/{}", self.pds_url.trim_end_matches('/'), method)
    }

    async fn write(
        &self,
        method: &str,
        mut body: serde_json::Value,
        content: PostContent,
    ) -> Result<ClientResponse, PlumeError> {
        body["record"] = record_value(&content)?;

        let response = self
            .client
            .post(self.xrpc_url(method))
            .bearer_auth(&self.session.access_jwt)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let message = error_message(status, &text);
            tracing::warn!(method, status = status.as_u16(), %message, "record write failed");
            return Ok(ClientResponse::failed(status, message));
        }

        let output: WriteOutput = serde_json::from_str(&text)?;
        Ok(ClientResponse {
            status,
            outcome: Ok(PostRecord {
                uri: output.uri,
                cid: output.cid,
                content,
            }),
        })
    }
}

/// Serialize post content as a typed record.
fn record_value(content: &PostContent) -> Result<serde_json::Value, PlumeError> {
    let mut value = serde_json::to_value(content)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("$type".into(), POST_NSID.into());
    }
    Ok(value)
}

impl PostClient for XrpcPostClient {
    async fn create_post(&self, content: PostContent) -> Result<ClientResponse, PlumeError> {
        let body = json!({
            "repo": self.session.did.as_str(),
            "collection": POST_NSID,
        });
        self.write("com.atproto.repo.createRecord", body, content)
            .await
    }

    async fn edit_post(
        &self,
        id: &PostId,
        content: PostContent,
    ) -> Result<ClientResponse, PlumeError> {
        let body = json!({
            "repo": self.session.did.as_str(),
            "collection": POST_NSID,
            "rkey": id.as_str(),
        });
        self.write("com.atproto.repo.putRecord", body, content)
            .await
    }
}
