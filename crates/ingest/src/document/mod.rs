mod image;
mod pdf;
mod txt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("OCR failed: {0}")]
    Ocr(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of extracting text from an uploaded document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Original filename.
    pub filename: String,
    /// File type: "pdf", "png", "jpg", "jpeg", "txt"
    pub file_type: String,
    /// Extracted text. May be empty (scanned PDF without a text layer,
    /// blank image) — that is not an extraction failure.
    pub text: String,
}

/// Extract text from file bytes based on the filename extension.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<ExtractedDocument, ExtractionError> {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    let text = match ext.as_str() {
        "pdf" => pdf::extract_pdf(bytes)?,
        "png" | "jpg" | "jpeg" => image::extract_image(bytes, &ext)?,
        "txt" | "text" => txt::extract_txt(bytes),
        other => return Err(ExtractionError::UnsupportedType(other.to_string())),
    };

    Ok(ExtractedDocument {
        filename: filename.to_string(),
        file_type: ext,
        text,
    })
}
