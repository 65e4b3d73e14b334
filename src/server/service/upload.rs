//! Image upload spooling and forwarding.
//!
//! Multipart images are validated, spooled to the local upload directory,
//! forwarded to the external image host, and the spool file is removed
//! whether or not forwarding succeeded.

use std::path::PathBuf;

use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::warn;

use crate::server::{config::UploadConfig, error::AppError};

const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// An image file extracted from a multipart request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Response body returned by the external image host.
#[derive(Deserialize)]
struct MediaUploadResponse {
    url: String,
}

/// Service forwarding uploaded images to the external image host.
pub struct UploadService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a UploadConfig,
}

impl<'a> UploadService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a UploadConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Validates, spools, and forwards an image, returning its public URL.
    ///
    /// # Arguments
    /// - `upload` - The image file from the multipart request
    ///
    /// # Returns
    /// - `Ok(String)` - URL of the image on the external host
    /// - `Err(AppError::BadRequest)` - Not an image, too large, or uploads not configured
    /// - `Err(AppError)` - Spooling or forwarding failed
    pub async fn upload_image(&self, upload: ImageUpload) -> Result<String, AppError> {
        if !upload.content_type.starts_with("image/") {
            return Err(AppError::BadRequest(
                "Only image files are allowed".to_string(),
            ));
        }
        if upload.data.len() > MAX_IMAGE_BYTES {
            return Err(AppError::BadRequest(
                "Image must be smaller than 5 MB".to_string(),
            ));
        }

        let Some(media_upload_url) = &self.config.media_upload_url else {
            return Err(AppError::BadRequest(
                "Image uploads are not configured".to_string(),
            ));
        };

        let spool_path = self.spool_path(&upload.filename);
        tokio::fs::write(&spool_path, &upload.data).await?;

        let result = self.forward(media_upload_url, &upload).await;

        // The spool file is temporary regardless of the forwarding outcome.
        if let Err(err) = tokio::fs::remove_file(&spool_path).await {
            warn!("Failed to remove spooled upload {:?}: {}", spool_path, err);
        }

        result
    }

    /// Sends the image to the external host as a multipart form.
    async fn forward(
        &self,
        media_upload_url: &str,
        upload: &ImageUpload,
    ) -> Result<String, AppError> {
        let part = Part::bytes(upload.data.clone())
            .file_name(upload.filename.clone())
            .mime_str(&upload.content_type)?;

        let mut form = Form::new().part("image", part);
        if let Some(api_key) = &self.config.media_api_key {
            form = form.text("key", api_key.clone());
        }

        let response: MediaUploadResponse = self
            .http_client
            .post(media_upload_url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.url)
    }

    /// Builds a collision-free spool path from the original filename.
    fn spool_path(&self, filename: &str) -> PathBuf {
        let safe: String = filename
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            .collect();

        self.config
            .dir
            .join(format!("{}-{}", Utc::now().timestamp_millis(), safe))
    }
}
