//! Document text extraction for PDF, DOCX and TXT uploads

mod cleaner;
mod parser;
mod pipeline;
mod upload;

pub use cleaner::clean_text;
pub use parser::FileParser;
pub use pipeline::TextExtractor;
pub use upload::ScopedUpload;
