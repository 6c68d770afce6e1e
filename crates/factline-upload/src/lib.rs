//! Video platform upload clients.
//!
//! - `YouTubeClient`: refresh-token auth plus the resumable upload
//!   protocol, with a Shorts variant that rewrites title/description/tags
//! - `InstagramClient`: Graph-style container-then-publish flow
//! - `PlatformUploader`: routes a rendered file set to the configured
//!   platforms; each upload is independent and failure leaves that
//!   platform's URL absent

pub mod error;
pub mod instagram;
pub mod uploader;
pub mod youtube;

pub use error::{PlatformResult, UploadError};
pub use instagram::{InstagramClient, InstagramConfig};
pub use uploader::PlatformUploader;
pub use youtube::{YouTubeClient, YouTubeConfig, YouTubeCredentials};
