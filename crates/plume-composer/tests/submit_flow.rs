use std::cell::{Cell, RefCell};

use http::StatusCode;
use plume_common::telemetry::{self, TelemetryConfig};
use plume_common::{
    Category, ClientResponse, ComposerConfig, ContentGenerator, Did, MediaFile, MediaRef,
    MediaUploader, PlumeError, PointsClient, PostClient, PostContent, PostId, PostRecord,
    UploadResponse, UploadResult,
};
use plume_composer::{Composer, ComposerServices, Navigator};

#[derive(Default)]
struct FakePosts {
    fail_with: Option<(StatusCode, &'static str)>,
    created: RefCell<Vec<PostContent>>,
    edited: RefCell<Vec<(PostId, PostContent)>>,
}

impl FakePosts {
    fn respond(&self, rkey: &str, content: PostContent) -> ClientResponse {
        match self.fail_with {
            Some((status, message)) => ClientResponse::failed(status, message),
            None => ClientResponse::ok(PostRecord {
                uri: format!("at://did:plc:author/app.plume.feed.post/{rkey}").into(),
                cid: "bafyrecord".into(),
                content,
            }),
        }
    }
}

impl PostClient for FakePosts {
    async fn create_post(&self, content: PostContent) -> Result<ClientResponse, PlumeError> {
        self.created.borrow_mut().push(content.clone());
        Ok(self.respond("3new", content))
    }

    async fn edit_post(
        &self,
        id: &PostId,
        content: PostContent,
    ) -> Result<ClientResponse, PlumeError> {
        self.edited.borrow_mut().push((id.clone(), content.clone()));
        Ok(self.respond(id.as_str(), content))
    }
}

#[derive(Default)]
struct FakePoints {
    fail: bool,
    awards: RefCell<Vec<(Did, u32)>>,
}

impl PointsClient for FakePoints {
    async fn award(&self, did: &Did, points: u32) -> Result<(), PlumeError> {
        self.awards.borrow_mut().push((did.clone(), points));
        if self.fail {
            Err(PlumeError::status(StatusCode::SERVICE_UNAVAILABLE, "points offline"))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
struct FakeGenerator {
    fail: bool,
    calls: Cell<usize>,
}

impl ContentGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, PlumeError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(PlumeError::status(StatusCode::BAD_GATEWAY, "model down"));
        }
        Ok(format!("generated from {} chars", prompt.chars().count()))
    }
}

#[derive(Default)]
struct FakeUploader {
    fail: bool,
}

impl MediaUploader for FakeUploader {
    async fn upload(&self, _file: &MediaFile) -> Result<UploadResponse, PlumeError> {
        Ok(if self.fail {
            UploadResponse {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                result: None,
                message: Some("file too large".into()),
            }
        } else {
            UploadResponse {
                status: StatusCode::OK,
                result: Some(UploadResult {
                    cid: "bafyimage".into(),
                    size: Some(4),
                    mime_type: None,
                }),
                message: None,
            }
        })
    }
}

#[derive(Default)]
struct FakeServices {
    posts: FakePosts,
    points: FakePoints,
    generator: FakeGenerator,
    uploader: FakeUploader,
}

impl ComposerServices for FakeServices {
    type Posts = FakePosts;
    type Points = FakePoints;
    type Generator = FakeGenerator;
    type Uploader = FakeUploader;

    fn posts(&self) -> &FakePosts {
        &self.posts
    }

    fn points(&self) -> &FakePoints {
        &self.points
    }

    fn generator(&self) -> &FakeGenerator {
        &self.generator
    }

    fn uploader(&self) -> &FakeUploader {
        &self.uploader
    }
}

struct FakeNavigator {
    path: String,
    redirects: RefCell<Vec<String>>,
}

impl FakeNavigator {
    fn at(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            redirects: RefCell::new(Vec::new()),
        }
    }
}

impl Navigator for FakeNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_owned());
    }
}

fn author() -> Did {
    Did::new("did:plc:author").unwrap()
}

fn config() -> ComposerConfig {
    telemetry::init(TelemetryConfig::from_env("plume-composer-tests"));
    ComposerConfig {
        points_per_post: 7,
        status_delay_ms: 0,
        ..Default::default()
    }
}

fn filled() -> Composer {
    let mut composer = Composer::new(author(), config());
    composer.set_title("Launch day");
    composer.set_body("We shipped it.");
    composer.select_category(Category::Technology);
    composer
}

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

#[tokio::test]
async fn create_awards_points_once_and_redirects() {
    let services = FakeServices::default();
    let navigator = FakeNavigator::at("/compose");
    let mut composer = filled();

    let record = composer.submit(&services, &navigator).await.unwrap();

    assert_eq!(record.id(), Some(PostId::new("3new")));
    assert_eq!(services.posts.created.borrow().len(), 1);
    assert_eq!(*services.points.awards.borrow(), vec![(author(), 7u32)]);
    assert!(composer.status().is_idle());
    assert!(composer.draft().is_empty());
    assert_eq!(*navigator.redirects.borrow(), vec!["/".to_owned()]);
}

#[tokio::test]
async fn points_failure_does_not_fail_submission() {
    let services = FakeServices {
        points: FakePoints {
            fail: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let navigator = FakeNavigator::at("/compose");
    let mut composer = filled();

    let job = composer.begin_submit().unwrap();
    let result = plume_composer::run_submit(&services, job).await;
    assert!(result.is_ok());
    composer.finish_submit(result).unwrap();
    assert_eq!(composer.submit_label(), "Posted!");
    assert!(composer.draft().is_empty());
    assert_eq!(services.points.awards.borrow().len(), 1);

    composer.settle_submit(&navigator);
    assert!(composer.status().is_idle());
    assert_eq!(navigator.redirects.borrow().len(), 1);
}

#[tokio::test]
async fn edit_uses_existing_id_without_points() {
    let services = FakeServices::default();
    let navigator = FakeNavigator::at("/edit/3kxyz");
    let existing = PostRecord {
        uri: "at://did:plc:author/app.plume.feed.post/3kxyz".into(),
        cid: "bafyold".into(),
        content: PostContent {
            title: "Old title".into(),
            body: "Old body".into(),
            media: vec![],
            category: Category::Music,
            created_at: chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        },
    };
    let mut composer = Composer::editing(author(), config(), existing.clone());
    assert_eq!(composer.submit_label(), "Update");
    composer.set_title("New title");

    composer.submit(&services, &navigator).await.unwrap();

    let edited = services.posts.edited.borrow();
    assert_eq!(edited.len(), 1);
    assert_eq!(edited[0].0, PostId::new("3kxyz"));
    assert_eq!(edited[0].1.title, "New title");
    assert_eq!(edited[0].1.created_at, existing.content.created_at);
    assert!(services.posts.created.borrow().is_empty());
    assert!(services.points.awards.borrow().is_empty());
    assert!(!composer.is_editing());
}

#[tokio::test]
async fn failure_shows_error_then_returns_to_idle_keeping_draft() {
    let services = FakeServices {
        posts: FakePosts {
            fail_with: Some((StatusCode::BAD_REQUEST, "title too long")),
            ..Default::default()
        },
        ..Default::default()
    };
    let navigator = FakeNavigator::at("/compose");
    let mut composer = filled();
    composer
        .upload_image(&services, MediaFile::new("cat.png", PNG))
        .await;
    assert_eq!(composer.draft().media.len(), 1);

    let job = composer.begin_submit().unwrap();
    assert_eq!(composer.submit_label(), "Posting...");
    let result = plume_composer::run_submit(&services, job).await;
    let err = composer.finish_submit(result).unwrap_err();
    assert_eq!(err.inline_message(), "title too long");
    assert_eq!(composer.submit_label(), "Failed");
    assert_eq!(composer.status().error_message(), Some("title too long"));

    composer.settle_submit(&navigator);
    assert!(composer.status().is_idle());
    assert_eq!(composer.draft().title, "Launch day");
    assert_eq!(composer.draft().body_text(), "We shipped it.");
    assert_eq!(composer.draft().media.len(), 1);
    assert!(services.points.awards.borrow().is_empty());
    assert!(navigator.redirects.borrow().is_empty());
}

#[tokio::test]
async fn no_redirect_when_already_at_root() {
    let services = FakeServices::default();
    let navigator = FakeNavigator::at("/");
    let mut composer = filled();

    composer.submit(&services, &navigator).await.unwrap();

    assert!(navigator.redirects.borrow().is_empty());
    assert!(composer.status().is_idle());
}

#[tokio::test]
async fn incomplete_draft_never_reaches_services() {
    let services = FakeServices::default();
    let navigator = FakeNavigator::at("/compose");
    let mut composer = Composer::new(author(), config());
    composer.set_title("Only a title");

    let err = composer.submit(&services, &navigator).await.unwrap_err();

    assert!(matches!(err, PlumeError::NotReady(_)));
    assert!(services.posts.created.borrow().is_empty());
    assert!(composer.status().is_idle());
}

#[tokio::test]
async fn upload_success_attaches_gateway_link() {
    let services = FakeServices::default();
    let mut composer = filled();

    composer
        .upload_image(&services, MediaFile::new("cat.png", PNG))
        .await;

    assert!(!composer.is_uploading());
    assert_eq!(composer.upload_error(), None);
    assert_eq!(
        composer.draft().media,
        vec![MediaRef {
            cid: "bafyimage".into(),
            link: "https://ipfs.io/ipfs/bafyimage".into(),
            mime_type: "image/png".into(),
            name: "cat.png".into(),
        }]
    );
}

#[tokio::test]
async fn upload_failure_is_reported_inline() {
    let services = FakeServices {
        uploader: FakeUploader { fail: true },
        ..Default::default()
    };
    let mut composer = filled();

    composer
        .upload_image(&services, MediaFile::new("huge.png", PNG))
        .await;

    assert!(!composer.is_uploading());
    assert_eq!(composer.upload_error(), Some("Upload failed: file too large"));
    assert!(composer.draft().media.is_empty());
}

#[tokio::test]
async fn generation_fills_body() {
    let services = FakeServices::default();
    let mut composer = filled();

    composer.generate_content(&services).await;

    assert_eq!(services.generator.calls.get(), 1);
    assert!(composer.draft().body_text().starts_with("generated from"));
    assert!(!composer.is_generating());
}

#[tokio::test]
async fn generation_failure_is_reported_inline() {
    let services = FakeServices {
        generator: FakeGenerator {
            fail: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut composer = filled();

    composer.generate_content(&services).await;

    assert_eq!(services.generator.calls.get(), 1);
    assert!(!composer.is_generating());
    assert_eq!(
        composer.generate_error(),
        Some("Generation failed: model down")
    );
    assert_eq!(composer.draft().body_text(), "We shipped it.");
    assert!(composer.status().is_idle());

    // A retry clears the previous error
    let services = FakeServices::default();
    composer.generate_content(&services).await;
    assert_eq!(composer.generate_error(), None);
}
