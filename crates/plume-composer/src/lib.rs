//! The post composer: draft state, submission status and the service flows
//! that upload media, generate content and save posts.

pub mod composer;
pub mod flows;
pub mod navigator;
pub mod services;

pub use crate::composer::{Composer, SubmitJob, SubmitTarget, UploadJob};
pub use crate::flows::{run_generate, run_submit, run_upload};
pub use crate::navigator::{Navigator, ROOT_PATH, return_to_root};
pub use crate::services::{ComposerServices, HttpServices};
