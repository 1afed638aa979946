//! Upload-to-text pipeline: spool, check type, extract, clean

use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::parser::FileParser;
use super::upload::ScopedUpload;
use crate::config::ExtractionConfig;
use crate::error::{Error, Result};
use crate::types::{ExtractedDocument, FileType};

/// Turns uploaded bytes into cleaned text
#[derive(Debug, Clone)]
pub struct TextExtractor {
    upload_dir: PathBuf,
    parser: FileParser,
}

impl TextExtractor {
    /// Create an extractor from configuration
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            upload_dir: config.upload_dir.clone(),
            parser: FileParser::new(Duration::from_secs(config.pdf_timeout_secs))
                .with_max_pdf_workers(config.max_pdf_workers),
        }
    }

    /// Extract the text of one upload.
    ///
    /// The bytes are spooled to a temp file that is removed before this
    /// returns, whatever the outcome. Types outside `accepted` fail with
    /// `UnsupportedFileType` without being parsed.
    pub fn extract(
        &self,
        filename: &str,
        data: &[u8],
        accepted: &[FileType],
    ) -> Result<ExtractedDocument> {
        let start = Instant::now();
        let upload = ScopedUpload::create(&self.upload_dir, filename, data)?;

        let file_type = upload.file_type();
        if !accepted.contains(&file_type) {
            return Err(Error::UnsupportedFileType(filename.to_string()));
        }

        let text = self.parser.extract_path(upload.filename(), file_type, upload.path())?;

        tracing::info!(
            "Extracted {} chars from '{}' ({}, {} bytes) in {}ms",
            text.len(),
            filename,
            file_type.display_name(),
            upload.size_bytes(),
            start.elapsed().as_millis()
        );

        Ok(ExtractedDocument {
            filename: upload.filename().to_string(),
            file_type,
            size_bytes: upload.size_bytes(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor_in(dir: &std::path::Path) -> TextExtractor {
        TextExtractor::new(&ExtractionConfig {
            upload_dir: dir.to_path_buf(),
            pdf_timeout_secs: 5,
            max_pdf_workers: 2,
        })
    }

    fn dir_is_empty(dir: &std::path::Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[test]
    fn test_extracts_txt_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = extractor_in(dir.path());

        let doc = extractor
            .extract("notes.txt", b"  Newton's   laws ", &[FileType::Txt])
            .unwrap();

        assert_eq!(doc.text, "Newton's laws");
        assert_eq!(doc.file_type, FileType::Txt);
        assert!(dir_is_empty(dir.path()));
    }

    #[test]
    fn test_rejected_type_is_cleaned_up() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = extractor_in(dir.path());

        let err = extractor
            .extract("notes.txt", b"hello", &[FileType::Pdf, FileType::Docx])
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedFileType(_)));
        assert!(dir_is_empty(dir.path()));
    }

    #[test]
    fn test_failed_extraction_is_cleaned_up() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = extractor_in(dir.path());

        let err = extractor
            .extract("broken.docx", b"not a zip archive", &[FileType::Docx])
            .unwrap_err();

        assert!(matches!(err, Error::Extraction { .. }));
        assert!(dir_is_empty(dir.path()));
    }
}
