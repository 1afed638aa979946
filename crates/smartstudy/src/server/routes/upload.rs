//! Text extraction endpoint

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};

use super::{extract_upload, multipart_error};
use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{response::UploadResponse, FileType};

/// Types accepted by /upload-file
const UPLOAD_TYPES: &[FileType] = &[FileType::Pdf, FileType::Docx];

/// POST /upload-file - Extract cleaned text from a PDF or DOCX upload
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!("Rejected upload body: {}", rejection.body_text());
        Error::invalid_input("No file part in the request")
    })?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(multipart_error)?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) =
        upload.ok_or_else(|| Error::invalid_input("No file part in the request"))?;

    if filename.is_empty() {
        return Err(Error::invalid_input("No selected file"));
    }
    if !UPLOAD_TYPES.contains(&FileType::from_filename(&filename)) {
        return Err(Error::invalid_input("Invalid file type"));
    }

    tracing::info!("Upload: {} ({} bytes)", filename, data.len());

    let document = extract_upload(&state, filename, data, UPLOAD_TYPES)
        .await
        .map_err(|e| e.failed("Failed to extract text from file"))?;

    Ok(Json(UploadResponse {
        text: document.text,
    }))
}
