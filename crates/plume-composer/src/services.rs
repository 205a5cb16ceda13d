//! The external collaborators the composer talks to.

use plume_common::{
    ComposerConfig, ContentGenerator, HttpGenerator, HttpPointsClient, HttpUploader,
    MediaUploader, PointsClient, PostClient, Session, XrpcPostClient,
};

/// Bundle of services a composer flow can call.
///
/// The app wires up [`HttpServices`]; tests substitute in-memory fakes.
pub trait ComposerServices {
    type Posts: PostClient;
    type Points: PointsClient;
    type Generator: ContentGenerator;
    type Uploader: MediaUploader;

    fn posts(&self) -> &Self::Posts;
    fn points(&self) -> &Self::Points;
    fn generator(&self) -> &Self::Generator;
    fn uploader(&self) -> &Self::Uploader;
}

/// reqwest-backed services sharing one connection pool.
#[derive(Clone)]
pub struct HttpServices {
    pub posts: XrpcPostClient,
    pub points: HttpPointsClient,
    pub generator: HttpGenerator,
    pub uploader: HttpUploader,
}

impl HttpServices {
    pub fn new(config: &ComposerConfig, session: Session) -> Self {
        let client = reqwest::Client::new();
        Self {
            posts: XrpcPostClient::new(client.clone(), config.pds_url.clone(), session),
            points: HttpPointsClient::new(client.clone(), config.points_url()),
            generator: HttpGenerator::new(client.clone(), config.generate_url()),
            uploader: HttpUploader::new(client, config.upload_url.clone()),
        }
    }
}

impl ComposerServices for HttpServices {
    type Posts = XrpcPostClient;
    type Points = HttpPointsClient;
    type Generator = HttpGenerator;
    type Uploader = HttpUploader;

    fn posts(&self) -> &Self::Posts {
        &self.posts
    }

    fn points(&self) -> &Self::Points {
        &self.points
    }

    fn generator(&self) -> &Self::Generator {
        &self.generator
    }

    fn uploader(&self) -> &Self::Uploader {
        &self.uploader
    }
}
