use super::ExtractionError;

pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        // pdf-extract succeeded but found no text layer (scanned/image PDF).
        // Empty text yields zero chunks downstream, which callers can report.
        tracing::warn!("PDF contains no extractable text (scanned or image-only?)");
    }

    Ok(trimmed.to_string())
}
