//! The in-memory post draft.

use chrono::{DateTime, Utc};
use plume_common::{Category, MediaRef, PostContent};

use crate::formatting::{FormatAction, apply_format};
use crate::text::{EditorRope, TextBuffer};
use crate::types::Selection;

/// Unsaved post content, mutated by input events and submitted as a whole.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub body: EditorRope,
    /// Uploaded media, in upload order.
    pub media: Vec<MediaRef>,
    pub category: Option<Category>,
}

/// Which required field is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
    Category,
    Title,
    Body,
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingField::Category => "category is required",
            MissingField::Title => "title is required",
            MissingField::Body => "body is required",
        }
    }
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing post (edit mode).
    pub fn from_post(content: &PostContent) -> Self {
        Self {
            title: content.title.clone(),
            body: EditorRope::from_str(&content.body),
            media: content.media.clone(),
            category: Some(content.category),
        }
    }

    pub fn body_text(&self) -> String {
        self.body.to_string()
    }

    pub fn set_body(&mut self, text: &str) {
        self.body.set(text);
    }

    /// First missing required field, checked in category, title, body order.
    pub fn missing_field(&self) -> Option<MissingField> {
        if self.category.is_none() {
            Some(MissingField::Category)
        } else if self.title.trim().is_empty() {
            Some(MissingField::Title)
        } else if self.body.is_blank() {
            Some(MissingField::Body)
        } else {
            None
        }
    }

    /// Category, title and body are all present and not just whitespace.
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Wrap part of the body; returns the selection to restore.
    pub fn apply_format(&mut self, selection: Selection, action: &FormatAction) -> Selection {
        apply_format(&mut self.body, selection, action)
    }

    pub fn push_media(&mut self, media: MediaRef) {
        self.media.push(media);
    }

    /// Snapshot the draft as record content; `None` while incomplete.
    pub fn to_content(&self, created_at: DateTime<Utc>) -> Option<PostContent> {
        let category = self.category?;
        if !self.is_complete() {
            return None;
        }
        Some(PostContent {
            title: self.title.clone(),
            body: self.body_text(),
            media: self.media.clone(),
            category,
            created_at,
        })
    }

    /// Reset title, body, media and category.
    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
        self.media.clear();
        self.category = None;
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty() && self.media.is_empty() && self.category.is_none()
    }
}
