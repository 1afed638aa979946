//! Temporary on-disk copies of uploaded files

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;
use crate::types::FileType;

/// An uploaded file spooled to disk for the duration of one request.
///
/// The backing file is removed when this value is dropped, which covers
/// every exit path of the handler that owns it, unwinding included.
#[derive(Debug)]
pub struct ScopedUpload {
    filename: String,
    file_type: FileType,
    size_bytes: usize,
    file: NamedTempFile,
}

impl ScopedUpload {
    /// Write `data` into a fresh temp file under `dir`
    pub fn create(dir: &Path, filename: &str, data: &[u8]) -> Result<Self> {
        let file_type = FileType::from_filename(filename);
        let suffix = match file_type {
            FileType::Unknown => String::new(),
            known => format!(".{}", known.extension()),
        };

        let mut file = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(&suffix)
            .tempfile_in(dir)?;
        file.write_all(data)?;
        file.flush()?;

        tracing::debug!(
            "Spooled '{}' ({} bytes) to {}",
            filename,
            data.len(),
            file.path().display()
        );

        Ok(Self {
            filename: filename.to_string(),
            file_type,
            size_bytes: data.len(),
            file,
        })
    }

    /// Filename as sent by the client
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Type declared by the filename extension
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Number of bytes written
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Location of the temp file
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let upload = ScopedUpload::create(dir.path(), "notes.txt", b"hello").unwrap();
        let path = upload.path().to_path_buf();

        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
        assert_eq!(upload.file_type(), FileType::Txt);
        assert_eq!(upload.size_bytes(), 5);

        drop(upload);
        assert!(!path.exists());
    }

    #[test]
    fn test_unknown_extension_is_still_spooled() {
        let dir = tempfile::tempdir().unwrap();
        let upload = ScopedUpload::create(dir.path(), "slides.pptx", b"PK").unwrap();
        assert_eq!(upload.file_type(), FileType::Unknown);
        assert!(upload.path().exists());
    }
}
