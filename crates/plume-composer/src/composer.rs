//! Composer state and the synchronous halves of each flow.
//!
//! Every async flow is split in three: a `begin_*` call that validates and
//! flips the relevant flag, a free-standing `run_*` future in
//! [`crate::flows`] that talks to the services without borrowing the
//! composer, and a `finish_*` call that applies the outcome. UI frameworks
//! that keep the composer in reactive state can render between the phases.

use chrono::Utc;
use plume_common::{
    Category, ComposerConfig, Did, MediaFile, MediaRef, PlumeError, PostContent, PostId,
    PostRecord,
};
use plume_editor_core::{CategoryMenu, FormatAction, PostDraft, Selection, SubmissionStatus};

use crate::navigator::{Navigator, return_to_root};

/// Whether a submission creates a new post or rewrites an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Edit(PostId),
}

/// Everything a submission needs, detached from the composer.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitJob {
    pub target: SubmitTarget,
    pub content: PostContent,
    pub author: Did,
    pub points: u32,
}

/// A pending upload, detached from the composer.
#[derive(Clone, Debug)]
pub struct UploadJob {
    pub file: MediaFile,
    pub gateway_url: String,
}

/// Post editor state.
#[derive(Clone, Debug)]
pub struct Composer {
    draft: PostDraft,
    status: SubmissionStatus,
    menu: CategoryMenu,
    uploading: bool,
    generating: bool,
    upload_error: Option<String>,
    generate_error: Option<String>,
    editing: Option<PostRecord>,
    author: Did,
    config: ComposerConfig,
}

impl Composer {
    /// Fresh composer for a new post.
    pub fn new(author: Did, config: ComposerConfig) -> Self {
        Self {
            draft: PostDraft::new(),
            status: SubmissionStatus::Idle,
            menu: CategoryMenu::default(),
            uploading: false,
            generating: false,
            upload_error: None,
            generate_error: None,
            editing: None,
            author,
            config,
        }
    }

    /// Composer pre-filled from an existing post; submitting edits it.
    pub fn editing(author: Did, config: ComposerConfig, post: PostRecord) -> Self {
        let mut composer = Self::new(author, config);
        composer.draft = PostDraft::from_post(&post.content);
        composer.editing = Some(post);
        composer
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn author(&self) -> &Did {
        &self.author
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    pub fn generate_error(&self) -> Option<&str> {
        self.generate_error.as_deref()
    }

    pub fn menu(&self) -> &CategoryMenu {
        &self.menu
    }

    pub fn submit_label(&self) -> &'static str {
        self.status.label(self.is_editing())
    }

    // === Input ===

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_body(&mut self, body: &str) {
        self.draft.set_body(body);
    }

    pub fn select_category(&mut self, category: Category) {
        self.draft.category = Some(category);
        self.menu.close();
    }

    pub fn toggle_category_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn dismiss_category_menu(&mut self) {
        self.menu.close();
    }

    /// Wrap the body selection; returns the selection to restore after render.
    pub fn apply_format(&mut self, action: &FormatAction, selection: Selection) -> Selection {
        self.draft.apply_format(selection, action)
    }

    /// Draft is complete and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.draft.is_complete() && self.status.is_idle()
    }

    // === Upload ===

    pub fn begin_upload(&mut self, file: MediaFile) -> UploadJob {
        self.uploading = true;
        self.upload_error = None;
        UploadJob {
            file,
            gateway_url: self.config.gateway_url.clone(),
        }
    }

    pub fn finish_upload(&mut self, result: Result<MediaRef, PlumeError>) {
        self.uploading = false;
        match result {
            Ok(media) => {
                tracing::debug!(cid = %media.cid, "media attached to draft");
                self.draft.push_media(media);
            }
            Err(e) => {
                tracing::error!(error = %e, "image upload failed");
                self.upload_error = Some(format!("Upload failed: {}", e.inline_message()));
            }
        }
    }

    // === Generation ===

    /// Returns the prompt to send, or `None` if a generation is already running.
    pub fn begin_generate(&mut self) -> Option<String> {
        if self.generating {
            return None;
        }
        self.generating = true;
        self.generate_error = None;
        Some(self.config.generation_prompt.clone())
    }

    pub fn finish_generate(&mut self, result: Result<String, PlumeError>) {
        self.generating = false;
        match result {
            Ok(content) => self.draft.set_body(&content),
            Err(e) => {
                tracing::error!(error = %e, "content generation failed");
                self.generate_error = Some(format!("Generation failed: {}", e.inline_message()));
            }
        }
    }

    // === Submission ===

    /// Validate the draft and move to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<SubmitJob, PlumeError> {
        if let Some(missing) = self.draft.missing_field() {
            return Err(PlumeError::NotReady(missing.as_str()));
        }
        let created_at = self
            .editing
            .as_ref()
            .map(|post| post.content.created_at)
            .unwrap_or_else(Utc::now);
        let content = self
            .draft
            .to_content(created_at)
            .ok_or(PlumeError::NotReady("draft is incomplete"))?;
        let target = match &self.editing {
            Some(post) => SubmitTarget::Edit(
                post.id()
                    .ok_or(PlumeError::NotReady("edited post has no record key"))?,
            ),
            None => SubmitTarget::Create,
        };
        if !self.status.begin() {
            return Err(PlumeError::NotReady("a submission is already in progress"));
        }
        tracing::debug!(?target, "submitting post");
        Ok(SubmitJob {
            target,
            content,
            author: self.author.clone(),
            points: self.config.points_per_post,
        })
    }

    /// Apply the submission outcome and hand it back. On success the draft is cleared.
    pub fn finish_submit(
        &mut self,
        result: Result<PostRecord, PlumeError>,
    ) -> Result<PostRecord, PlumeError> {
        match &result {
            Ok(record) => {
                tracing::info!(uri = %record.uri, "post saved");
                self.status.finish(Ok(()));
                self.draft.clear();
                self.editing = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "post submission failed");
                self.status.finish(Err(e.inline_message()));
            }
        }
        result
    }

    /// After the status delay: back to idle, and home after a success.
    pub fn settle_submit<N: Navigator + ?Sized>(&mut self, navigator: &N) {
        let succeeded = matches!(self.status, SubmissionStatus::Success);
        self.status.reset();
        if succeeded {
            return_to_root(navigator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn author() -> Did {
        Did::new("did:plc:author").unwrap()
    }

    fn filled() -> Composer {
        let mut composer = Composer::new(author(), ComposerConfig::default());
        composer.set_title("Hello");
        composer.set_body("World");
        composer.select_category(Category::Technology);
        composer
    }

    fn record() -> PostRecord {
        PostRecord {
            uri: "at://did:plc:author/app.plume.feed.post/3kxyz".into(),
            cid: "bafyrecord".into(),
            content: PostContent {
                title: "Old".into(),
                body: "old body".into(),
                media: vec![],
                category: Category::News,
                created_at: DateTime::from_timestamp(1_600_000_000, 0).unwrap(),
            },
        }
    }

    #[test]
    fn can_submit_requires_all_fields() {
        let mut composer = Composer::new(author(), ComposerConfig::default());
        assert!(!composer.can_submit());
        composer.set_title("Hello");
        composer.set_body("World");
        assert!(!composer.can_submit());
        composer.select_category(Category::Art);
        assert!(composer.can_submit());
        composer.set_body("   ");
        assert!(!composer.can_submit());
    }

    #[test]
    fn begin_submit_rejects_incomplete_draft() {
        let mut composer = Composer::new(author(), ComposerConfig::default());
        let err = composer.begin_submit().unwrap_err();
        assert!(matches!(err, PlumeError::NotReady("category is required")));
        assert!(composer.status().is_idle());
    }

    #[test]
    fn begin_submit_twice_is_refused() {
        let mut composer = filled();
        let job = composer.begin_submit().unwrap();
        assert_eq!(job.target, SubmitTarget::Create);
        assert_eq!(job.points, 10);
        assert!(!composer.can_submit());
        assert!(composer.begin_submit().is_err());
    }

    #[test]
    fn edit_mode_targets_existing_record() {
        let mut composer = Composer::editing(author(), ComposerConfig::default(), record());
        assert_eq!(composer.draft().title, "Old");
        assert_eq!(composer.submit_label(), "Update");
        composer.set_title("New");
        let job = composer.begin_submit().unwrap();
        assert_eq!(job.target, SubmitTarget::Edit(PostId::new("3kxyz")));
        assert_eq!(job.content.created_at, record().content.created_at);
        assert_eq!(job.content.title, "New");
    }

    #[test]
    fn select_category_closes_menu() {
        let mut composer = filled();
        composer.toggle_category_menu();
        assert!(composer.menu().open);
        composer.select_category(Category::Gaming);
        assert!(!composer.menu().open);
        assert_eq!(composer.draft().category, Some(Category::Gaming));
    }

    #[test]
    fn failed_upload_keeps_draft_and_reports() {
        let mut composer = filled();
        let job = composer.begin_upload(MediaFile::new("a.png", Vec::<u8>::new()));
        assert!(composer.is_uploading());
        assert_eq!(job.gateway_url, "https://ipfs.io");
        composer.finish_upload(Err(PlumeError::Status {
            status: 500,
            message: "disk full".into(),
        }));
        assert!(!composer.is_uploading());
        assert_eq!(composer.upload_error(), Some("Upload failed: disk full"));
        assert!(composer.can_submit());
    }

    #[test]
    fn unreadable_file_reports_without_upload() {
        let mut composer = filled();
        composer.finish_upload(Err(PlumeError::Io(std::io::Error::other(
            "could not read cat.png: permission denied",
        ))));
        assert!(!composer.is_uploading());
        assert_eq!(
            composer.upload_error(),
            Some("Upload failed: could not read cat.png: permission denied")
        );
        assert!(composer.draft().media.is_empty());
    }

    #[test]
    fn generation_replaces_body_and_clears_flag() {
        let mut composer = filled();
        let prompt = composer.begin_generate().unwrap();
        assert_eq!(prompt, composer.config().generation_prompt);
        assert!(composer.begin_generate().is_none());
        composer.finish_generate(Ok("# Generated".into()));
        assert!(!composer.is_generating());
        assert_eq!(composer.draft().body_text(), "# Generated");
    }

    #[test]
    fn apply_format_returns_selection() {
        let mut composer = filled();
        let sel = composer.apply_format(&FormatAction::Italic, Selection::new(0, 5));
        assert_eq!(composer.draft().body_text(), "*World*");
        assert_eq!(sel, Selection::new(1, 6));
    }
}
