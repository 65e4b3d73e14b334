//! Multipart form reader shared by the upload-carrying endpoints.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::server::{error::AppError, service::upload::ImageUpload};

/// A fully read multipart form: text fields plus at most one image file.
pub struct MultipartForm {
    fields: HashMap<String, Vec<String>>,
    pub image: Option<ImageUpload>,
}

impl MultipartForm {
    /// Drains a multipart request into memory.
    ///
    /// Parts named in `image_fields` that carry a filename are treated as the
    /// image upload (last one wins); everything else is collected as text.
    /// Repeated field names accumulate, which is how tag lists arrive.
    ///
    /// # Arguments
    /// - `multipart` - The request's multipart extractor
    /// - `image_fields` - Field names that may carry the image file
    ///
    /// # Returns
    /// - `Ok(MultipartForm)` - Parsed fields and optional image
    /// - `Err(AppError::MultipartErr)` - Malformed multipart body
    pub async fn read(
        mut multipart: Multipart,
        image_fields: &[&str],
    ) -> Result<Self, AppError> {
        let mut fields: HashMap<String, Vec<String>> = HashMap::new();
        let mut image = None;

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if image_fields.contains(&name.as_str()) && field.file_name().is_some() {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await?.to_vec();

                image = Some(ImageUpload {
                    filename,
                    content_type,
                    data,
                });
            } else {
                let value = field.text().await?;
                fields.entry(name).or_default().push(value);
            }
        }

        Ok(Self { fields, image })
    }

    /// Gets the first value of a text field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Gets every value of a repeated text field.
    pub fn values(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
