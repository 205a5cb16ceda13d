//! Post records and the small identifier types around them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::PlumeError;

/// Collection NSID for post records.
pub const POST_NSID: &str = "app.plume.feed.post";

/// A decentralized identifier (`did:method:identifier`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SmolStr", into = "SmolStr")]
pub struct Did(SmolStr);

impl Did {
    pub fn new(s: impl Into<SmolStr>) -> Result<Self, PlumeError> {
        let s = s.into();
        let mut parts = s.splitn(3, ':');
        let valid = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some("did"), Some(method), Some(id))
                if !method.is_empty()
                    && method.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                    && !id.is_empty()
                    && !id.ends_with(':')
        );
        if valid {
            Ok(Self(s))
        } else {
            Err(PlumeError::InvalidDid(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<SmolStr> for Did {
    type Error = PlumeError;

    fn try_from(s: SmolStr) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Did> for SmolStr {
    fn from(did: Did) -> Self {
        did.0
    }
}

impl FromStr for Did {
    type Err = PlumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record key of an existing post.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub SmolStr);

impl PostId {
    pub fn new(rkey: impl Into<SmolStr>) -> Self {
        Self(rkey.into())
    }

    /// Take the record key from an `at://did/collection/rkey` URI.
    pub fn from_uri(uri: &str) -> Option<Self> {
        let rest = uri.strip_prefix("at://")?;
        let rkey = rest.rsplit('/').next()?;
        if rkey.is_empty() || rkey == rest {
            return None;
        }
        Some(Self(rkey.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed set of post categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Technology,
    Art,
    Music,
    Gaming,
    News,
    Education,
}

impl Category {
    /// Dropdown order.
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Technology,
        Category::Art,
        Category::Music,
        Category::Gaming,
        Category::News,
        Category::Education,
    ];

    /// Wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Technology => "technology",
            Category::Art => "art",
            Category::Music => "music",
            Category::Gaming => "gaming",
            Category::News => "news",
            Category::Education => "education",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Technology => "Technology",
            Category::Art => "Art",
            Category::Music => "Music",
            Category::Gaming => "Gaming",
            Category::News => "News",
            Category::Education => "Education",
        }
    }
}

impl FromStr for Category {
    type Err = PlumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PlumeError::InvalidCategory(s.into()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uploaded image attached to a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    /// Content identifier returned by the upload service
    pub cid: SmolStr,
    /// Content-addressed gateway link
    pub link: String,
    pub mime_type: SmolStr,
    /// Original filename
    pub name: SmolStr,
}

/// The content of a post as stored by the content protocol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostContent {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaRef>,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

/// A stored post: where it lives plus its content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub uri: SmolStr,
    pub cid: SmolStr,
    pub content: PostContent,
}

impl PostRecord {
    pub fn id(&self) -> Option<PostId> {
        PostId::from_uri(&self.uri)
    }
}
