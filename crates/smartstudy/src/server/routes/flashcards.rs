//! Flashcard endpoint

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;

use super::{complete, extract_upload, multipart_error};
use crate::error::{Error, Result};
use crate::generation::{parse_records_or, PromptBuilder};
use crate::server::state::AppState;
use crate::types::{
    request::{parse_count, DEFAULT_FLASHCARD_COUNT},
    response::FlashcardsResponse,
    FileType, FlashcardRecord,
};

/// Types accepted by /flashcards
const FLASHCARD_TYPES: &[FileType] = &[FileType::Pdf, FileType::Docx, FileType::Txt];

/// Form fields of a flashcard request
#[derive(Debug, Default)]
struct FlashcardForm {
    text: String,
    count: Option<u32>,
    file: Option<(String, Bytes)>,
}

impl FlashcardForm {
    async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "text" => {
                    form.text = field.text().await.map_err(multipart_error)?;
                }
                "count" => {
                    let raw = field.text().await.map_err(multipart_error)?;
                    if !raw.trim().is_empty() {
                        let count = parse_count(&raw)
                            .ok_or_else(|| Error::invalid_input("Invalid count"))?;
                        form.count = Some(count);
                    }
                }
                "file" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let data = field.bytes().await.map_err(multipart_error)?;
                    // A file input left empty still sends a part with no filename
                    if !filename.is_empty() {
                        form.file = Some((filename, data));
                    }
                }
                other => tracing::debug!("Ignoring form field '{}'", other),
            }
        }

        Ok(form)
    }
}

/// POST /flashcards - Study cards from pasted text and/or an uploaded file
pub async fn generate_flashcards(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<FlashcardsResponse>> {
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!("Rejected flashcard body: {}", rejection.body_text());
        Error::invalid_input("No content to generate flashcards")
    })?;
    let form = FlashcardForm::read(multipart).await?;
    let count = form.count.unwrap_or(DEFAULT_FLASHCARD_COUNT);

    let file_text = match form.file {
        Some((filename, data)) => match extract_upload(&state, filename, data, FLASHCARD_TYPES).await {
            Ok(document) => document.text,
            Err(Error::UnsupportedFileType(_)) => {
                return Err(Error::invalid_input("Unsupported file format"));
            }
            Err(e) => return Err(e.failed("Failed to extract text from file")),
        },
        None => String::new(),
    };

    let content = format!("{}\n{}", form.text.trim(), file_text.trim());
    if content.trim().is_empty() {
        return Err(Error::invalid_input("No content to generate flashcards"));
    }

    tracing::info!("Flashcards: {} cards from {} chars", count, content.len());

    let prompt = PromptBuilder::build_flashcard_prompt(&content, count);
    let flashcards = match complete(&state, &prompt).await {
        Ok(output) => parse_records_or(&output, || vec![FlashcardRecord::fallback()]),
        Err(e) => {
            tracing::warn!("Flashcard generation failed, returning default card: {}", e);
            vec![FlashcardRecord::fallback()]
        }
    };

    Ok(Json(FlashcardsResponse { flashcards }))
}
