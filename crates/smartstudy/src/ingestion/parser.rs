//! PDF, DOCX and plain-text extraction

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use super::cleaner::clean_text;
use crate::error::{Error, Result};
use crate::types::FileType;

/// Multi-format file parser
#[derive(Debug, Clone)]
pub struct FileParser {
    pdf_timeout: Duration,
    max_pdf_workers: usize,
    /// pdf-extract threads still alive, shared by clones
    pdf_workers: Arc<AtomicUsize>,
}

impl Default for FileParser {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

impl FileParser {
    /// Create a parser with the given primary PDF extractor timeout
    pub fn new(pdf_timeout: Duration) -> Self {
        Self {
            pdf_timeout,
            max_pdf_workers: 4,
            pdf_workers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Cap the number of live pdf-extract threads
    pub fn with_max_pdf_workers(mut self, max: usize) -> Self {
        self.max_pdf_workers = max;
        self
    }

    /// Extract and clean the text of a document.
    ///
    /// `file_type` comes from the declared extension; `Unknown` is rejected
    /// before any bytes are inspected.
    pub fn extract(&self, filename: &str, file_type: FileType, data: &[u8]) -> Result<String> {
        let raw = self.parse(filename, file_type, data)?;
        Ok(clean_text(&raw))
    }

    /// Extract and clean the text of a document stored on disk
    pub fn extract_path(&self, filename: &str, file_type: FileType, path: &Path) -> Result<String> {
        if !file_type.is_supported() {
            return Err(Error::UnsupportedFileType(filename.to_string()));
        }
        let data = std::fs::read(path)?;
        self.extract(filename, file_type, &data)
    }

    /// Parse a document into raw text without cleaning
    pub fn parse(&self, filename: &str, file_type: FileType, data: &[u8]) -> Result<String> {
        match file_type {
            FileType::Pdf => self.parse_pdf(filename, data),
            FileType::Docx => Self::parse_docx(filename, data),
            FileType::Txt => Self::parse_text(filename, data),
            FileType::Unknown => Err(Error::UnsupportedFileType(filename.to_string())),
        }
    }

    /// Parse PDF document, one line break between pages
    fn parse_pdf(&self, filename: &str, data: &[u8]) -> Result<String> {
        let content = match WorkerSlot::acquire(&self.pdf_workers, self.max_pdf_workers) {
            Some(slot) => self.extract_pdf_with_timeout(filename, data, slot)?,
            None => {
                tracing::warn!(
                    "{} pdf-extract workers busy, using lopdf for '{}'",
                    self.max_pdf_workers,
                    filename
                );
                Self::extract_pdf_pages(filename, data)?
            }
        };

        if content.trim().is_empty() {
            return Err(Error::extraction(filename, "No text content could be extracted from PDF"));
        }

        Ok(content)
    }

    /// Run pdf-extract on a worker thread so a hang or panic on a bad font
    /// cannot take the request down with it.
    ///
    /// A timed-out worker is detached and keeps its slot until it finishes,
    /// so hung documents can never hold more than `max_pdf_workers` threads.
    fn extract_pdf_with_timeout(&self, filename: &str, data: &[u8], slot: WorkerSlot) -> Result<String> {
        let data_vec = data.to_vec();
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let _slot = slot;
            let result = pdf_extract::extract_text_from_mem_by_pages(&data_vec);
            let _ = tx.send(result);
        });

        match rx.recv_timeout(self.pdf_timeout) {
            Ok(Ok(pages)) => {
                let _ = handle.join();
                Ok(pages.join("\n"))
            }
            Ok(Err(e)) => {
                let _ = handle.join();
                tracing::warn!("pdf-extract failed on '{}': {}, trying lopdf", filename, e);
                Self::extract_pdf_pages(filename, data)
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                tracing::error!(
                    "pdf-extract timed out on '{}' after {}s, trying lopdf",
                    filename,
                    self.pdf_timeout.as_secs()
                );
                Self::extract_pdf_pages(filename, data)
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                tracing::error!("pdf-extract thread crashed on '{}', trying lopdf", filename);
                Self::extract_pdf_pages(filename, data)
            }
        }
    }

    /// Fallback extraction: lopdf, one page at a time in page order
    fn extract_pdf_pages(filename: &str, data: &[u8]) -> Result<String> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| Error::extraction(filename, format!("Failed to load PDF: {}", e)))?;

        let mut all_text = String::new();
        // get_pages is a BTreeMap keyed by page number
        for page_number in doc.get_pages().keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(text) => {
                    all_text.push_str(&text);
                    all_text.push('\n');
                }
                Err(e) => {
                    tracing::debug!("No text on page {} of '{}': {}", page_number, filename, e);
                }
            }
        }

        if all_text.trim().is_empty() {
            return Err(Error::extraction(
                filename,
                "PDF appears to be image-based or has no extractable text",
            ));
        }

        Ok(all_text)
    }

    /// Parse DOCX document: top-level paragraphs, newline-separated
    fn parse_docx(filename: &str, data: &[u8]) -> Result<String> {
        let doc = docx_rs::read_docx(data).map_err(|e| Error::extraction(filename, e.to_string()))?;

        let mut paragraphs = Vec::new();
        for child in doc.document.children {
            if let docx_rs::DocumentChild::Paragraph(p) = child {
                let mut text = String::new();
                for child in p.children {
                    if let docx_rs::ParagraphChild::Run(run) = child {
                        for child in run.children {
                            if let docx_rs::RunChild::Text(t) = child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                paragraphs.push(text);
            }
        }

        Ok(paragraphs.join("\n"))
    }

    /// Parse plain text; must be valid UTF-8
    fn parse_text(filename: &str, data: &[u8]) -> Result<String> {
        std::str::from_utf8(data)
            .map(str::to_string)
            .map_err(|e| Error::extraction(filename, format!("File is not valid UTF-8: {}", e)))
    }
}

/// One live pdf-extract thread; released on drop, including during unwind
struct WorkerSlot(Arc<AtomicUsize>);

impl WorkerSlot {
    fn acquire(workers: &Arc<AtomicUsize>, max: usize) -> Option<Self> {
        workers
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| (n < max).then_some(n + 1))
            .ok()
            .map(|_| Self(Arc::clone(workers)))
    }
}

impl Drop for WorkerSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}
