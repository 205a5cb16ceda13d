//! Shared records, errors, configuration and service clients for plume.

pub mod client;
pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod points;
pub mod response;
#[cfg(feature = "telemetry")]
pub mod telemetry;
pub mod upload;

pub use crate::client::{ClientResponse, PostClient, Session, XrpcPostClient};
pub use crate::config::{ComposerConfig, FileStore, Loader, Saver, content_link};
pub use crate::error::PlumeError;
pub use crate::generate::{ContentGenerator, HttpGenerator};
pub use crate::model::{Category, Did, MediaRef, POST_NSID, PostContent, PostId, PostRecord};
pub use crate::points::{HttpPointsClient, PointsClient};
pub use crate::upload::{HttpUploader, MediaFile, MediaUploader, UploadResponse, UploadResult};
pub use smol_str::SmolStr;
