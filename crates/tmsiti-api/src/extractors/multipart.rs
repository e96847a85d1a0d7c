//! `multipart/form-data` bodies with text fields and file parts.
//!
//! Parts are read eagerly; handlers then take the fields they expect by
//! name. A file input submitted without a file (no name, no bytes) is
//! treated as absent.

use std::collections::HashMap;

use axum::extract::multipart::Multipart;
use axum::extract::{FromRequest, Request};

use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_service::FileUpload;

use crate::error::ApiError;

/// A fully read multipart body.
#[derive(Debug, Default)]
pub struct MultipartForm {
    texts: HashMap<String, String>,
    files: HashMap<String, FileUpload>,
}

fn bad_multipart(e: impl std::fmt::Display) -> AppError {
    AppError::validation(format!("Invalid multipart body: {e}"))
}

impl<S> FromRequest<S> for MultipartForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await.map_err(bad_multipart)?;
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        FileUpload {
                            file_name,
                            content_type,
                            data,
                        },
                    );
                }
                None => {
                    let value = field.text().await.map_err(bad_multipart)?;
                    form.texts.insert(name, value);
                }
            }
        }

        Ok(form)
    }
}

impl MultipartForm {
    /// A non-blank text field, trimmed.
    pub fn required(&mut self, field: &str) -> AppResult<String> {
        match self.text(field) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(AppError::validation(format!("Field '{field}' is required"))),
        }
    }

    /// Like [`required`](Self::required), but an absent field is `None`.
    /// A field that is present must still be non-blank.
    pub fn optional(&mut self, field: &str) -> AppResult<Option<String>> {
        if self.texts.contains_key(field) {
            self.required(field).map(Some)
        } else {
            Ok(None)
        }
    }

    /// A text field as sent, trimmed. Blank values are kept.
    pub fn text(&mut self, field: &str) -> Option<String> {
        self.texts.remove(field).map(|v| v.trim().to_string())
    }

    /// A file part, if one was sent.
    pub fn file(&mut self, field: &str) -> Option<FileUpload> {
        self.files.remove(field)
    }

    /// A file part that must be present.
    pub fn required_file(&mut self, field: &str) -> AppResult<FileUpload> {
        self.file(field)
            .ok_or_else(|| AppError::validation(format!("Field '{field}' is required")))
    }
}

/// Reject values longer than `max` characters.
pub fn check_max_chars(value: &str, field: &str, max: usize) -> AppResult<()> {
    if value.chars().count() > max {
        return Err(AppError::validation(format!(
            "Field '{field}' must be at most {max} characters"
        )));
    }
    Ok(())
}
