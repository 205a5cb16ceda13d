//! Service calls for each composer flow, plus all-in-one drivers.

use n0_future::time::sleep;
use plume_common::{
    ContentGenerator, MediaFile, MediaRef, MediaUploader, PlumeError, PointsClient, PostClient,
    PostRecord, content_link,
};

use crate::composer::{Composer, SubmitJob, SubmitTarget, UploadJob};
use crate::navigator::Navigator;
use crate::services::ComposerServices;

/// Upload the file and turn the response into a media reference.
pub async fn run_upload<S: ComposerServices>(
    services: &S,
    job: UploadJob,
) -> Result<MediaRef, PlumeError> {
    let response = services.uploader().upload(&job.file).await?;
    response.into_media(&job.file, |cid| content_link(&job.gateway_url, cid))
}

/// Ask the generator for a body.
pub async fn run_generate<S: ComposerServices>(
    services: &S,
    prompt: String,
) -> Result<String, PlumeError> {
    services.generator().generate(&prompt).await
}

/// Create or edit the post; on creation, award points.
///
/// The points call never affects the result: its failure is logged and dropped.
pub async fn run_submit<S: ComposerServices>(
    services: &S,
    job: SubmitJob,
) -> Result<PostRecord, PlumeError> {
    let SubmitJob {
        target,
        content,
        author,
        points,
    } = job;

    let record = match &target {
        SubmitTarget::Create => services.posts().create_post(content).await?,
        SubmitTarget::Edit(id) => services.posts().edit_post(id, content).await?,
    }
    .into_result()?;

    if target == SubmitTarget::Create {
        match services.points().award(&author, points).await {
            Ok(()) => tracing::debug!(%author, points, "awarded points for new post"),
            Err(e) => tracing::warn!(%author, error = %e, "failed to award points"),
        }
    }

    Ok(record)
}

impl Composer {
    /// Upload an image and attach it to the draft.
    pub async fn upload_image<S: ComposerServices>(&mut self, services: &S, file: MediaFile) {
        let job = self.begin_upload(file);
        let result = run_upload(services, job).await;
        self.finish_upload(result);
    }

    /// Replace the body with generated content.
    pub async fn generate_content<S: ComposerServices>(&mut self, services: &S) {
        let Some(prompt) = self.begin_generate() else {
            return;
        };
        let result = run_generate(services, prompt).await;
        self.finish_generate(result);
    }

    /// Submit the draft, hold the status for the configured delay, then settle.
    ///
    /// Returns the saved record, or the error that was shown.
    pub async fn submit<S: ComposerServices, N: Navigator + ?Sized>(
        &mut self,
        services: &S,
        navigator: &N,
    ) -> Result<PostRecord, PlumeError> {
        let job = self.begin_submit()?;
        let result = run_submit(services, job).await;
        let result = self.finish_submit(result);

        sleep(self.config().status_delay()).await;
        self.settle_submit(navigator);
        result
    }
}
