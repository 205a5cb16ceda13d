//! Media upload: raw bytes in, content identifier out.

use std::future::Future;

use bytes::Bytes;
use http::StatusCode;
use http::header::CONTENT_TYPE;
use mime_sniffer::MimeTypeSniffer;
use serde::Deserialize;
use smol_str::SmolStr;

use crate::error::PlumeError;
use crate::model::MediaRef;
use crate::response::error_message;

/// A file picked by the user.
#[derive(Clone, Debug)]
pub struct MediaFile {
    pub name: SmolStr,
    pub data: Bytes,
}

impl MediaFile {
    pub fn new(name: impl Into<SmolStr>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// MIME type sniffed from the bytes.
    pub fn mime_type(&self) -> SmolStr {
        self.data
            .sniff_mime_type()
            .map(SmolStr::new)
            .unwrap_or_else(|| SmolStr::new_static("application/octet-stream"))
    }
}

/// Payload of a successful upload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub cid: SmolStr,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<SmolStr>,
}

/// Status code plus the result payload, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadResponse {
    pub status: StatusCode,
    pub result: Option<UploadResult>,
    pub message: Option<String>,
}

impl UploadResponse {
    /// Build the media reference for a finished upload.
    ///
    /// `link_for` maps a CID to its content-addressed URL.
    pub fn into_media(
        self,
        file: &MediaFile,
        link_for: impl FnOnce(&str) -> String,
    ) -> Result<MediaRef, PlumeError> {
        match self.result {
            Some(result) if self.status.is_success() => Ok(MediaRef {
                link: link_for(&result.cid),
                mime_type: result
                    .mime_type
                    .unwrap_or_else(|| file.mime_type()),
                name: file.name.clone(),
                cid: result.cid,
            }),
            _ => Err(PlumeError::status(
                self.status,
                self.message.unwrap_or_else(|| "upload failed".to_owned()),
            )),
        }
    }
}

/// Uploads media for a post.
pub trait MediaUploader {
    fn upload(&self, file: &MediaFile) -> impl Future<Output = Result<UploadResponse, PlumeError>>;
}

/// `POST {upload_url}` with the raw bytes and a sniffed `Content-Type`.
#[derive(Clone)]
pub struct HttpUploader {
    client: reqwest::Client,
    url: String,
}

impl HttpUploader {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl MediaUploader for HttpUploader {
    async fn upload(&self, file: &MediaFile) -> Result<UploadResponse, PlumeError> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, file.mime_type().as_str())
            .query(&[("name", file.name.as_str())])
            .body(file.data.clone())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Ok(UploadResponse {
                status,
                result: None,
                message: Some(error_message(status, &text)),
            });
        }

        let result: UploadResult = serde_json::from_str(&text)?;
        tracing::debug!(cid = %result.cid, name = %file.name, "uploaded media");
        Ok(UploadResponse {
            status,
            result: Some(result),
            message: None,
        })
    }
}
