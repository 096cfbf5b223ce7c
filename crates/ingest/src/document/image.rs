use std::path::PathBuf;
use std::process::Command;

use super::ExtractionError;

/// Uploaded image staged on disk for the OCR binary; removed on every exit
/// path, including errors, via Drop.
struct TempImage(PathBuf);

impl Drop for TempImage {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// Run OCR over image bytes by shelling out to the Tesseract CLI.
///
/// The binary is `tesseract` on PATH unless overridden with `TESSERACT_CMD`.
pub fn extract_image(bytes: &[u8], ext: &str) -> Result<String, ExtractionError> {
    let path = std::env::temp_dir().join(format!("ocr_{}.{ext}", uuid::Uuid::new_v4()));
    std::fs::write(&path, bytes)?;
    let staged = TempImage(path);

    let cmd = std::env::var("TESSERACT_CMD").unwrap_or_else(|_| "tesseract".to_string());
    let output = Command::new(&cmd)
        .arg(&staged.0)
        .arg("stdout")
        .output()
        .map_err(|e| ExtractionError::Ocr(format!("failed to run '{cmd}': {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExtractionError::Ocr(format!(
            "'{cmd}' exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
