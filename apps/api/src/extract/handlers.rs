//! Axum route handler for PDF text extraction.
//!
//! Extraction quality is NOT validated here: any readable text — including
//! the manual-entry placeholder — is a valid document for the analysis
//! endpoint. The caller decides what to do with `requiresManualInput`.

use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;

/// Upload cap, matching the UI's advertised 5 MB limit.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Extractions shorter than this are treated as failed (scanned or image-only
/// PDFs typically yield a few stray glyphs rather than nothing).
const MIN_EXTRACTED_CHARS: usize = 50;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub text: String,
    pub requires_manual_input: bool,
    pub file_name: String,
}

/// POST /api/v1/extract
///
/// Accepts a multipart `file` field containing a PDF and returns its plain
/// text. Never 500s on an unreadable-but-valid upload — those get a
/// placeholder response asking for manual entry instead.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if content_type != "application/pdf" {
            return Err(AppError::Validation(
                "Only PDF files are accepted".to_string(),
            ));
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) = upload.ok_or_else(|| {
        AppError::Validation("No file provided. Upload a PDF in the 'file' field.".to_string())
    })?;

    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File size must be less than 5MB".to_string(),
        ));
    }

    info!("Extracting text from {} ({} bytes)", file_name, data.len());

    // pdf-extract is synchronous and CPU-bound
    let extracted = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&data).ok()
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task panicked: {e}")))?;

    Ok(Json(extraction_or_placeholder(extracted, &file_name)))
}

/// Turns an extraction attempt into a response, substituting the manual-entry
/// placeholder when the PDF yielded no usable text.
fn extraction_or_placeholder(extracted: Option<String>, file_name: &str) -> ExtractResponse {
    match extracted {
        Some(text) if text.trim().len() >= MIN_EXTRACTED_CHARS => ExtractResponse {
            text,
            requires_manual_input: false,
            file_name: file_name.to_string(),
        },
        _ => {
            warn!("No usable text extracted from {file_name}");
            ExtractResponse {
                text: format!(
                    "[No selectable text could be extracted from {file_name}]\n\n\
                     The file may be a scanned or image-only PDF.\n\
                     For now, please paste your resume text manually."
                ),
                requires_manual_input: true,
                file_name: file_name.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_extraction_passes_text_through() {
        let text = "Jane Doe — Senior Engineer. Ten years building distributed systems in Rust.";
        let response = extraction_or_placeholder(Some(text.to_string()), "cv.pdf");
        assert_eq!(response.text, text);
        assert!(!response.requires_manual_input);
        assert_eq!(response.file_name, "cv.pdf");
    }

    #[test]
    fn test_short_extraction_yields_placeholder() {
        let response = extraction_or_placeholder(Some("a b".to_string()), "scan.pdf");
        assert!(response.requires_manual_input);
        assert!(response.text.contains("scan.pdf"));
        assert!(response.text.contains("manually"));
    }

    #[test]
    fn test_failed_extraction_yields_placeholder() {
        let response = extraction_or_placeholder(None, "broken.pdf");
        assert!(response.requires_manual_input);
        assert!(response.text.contains("broken.pdf"));
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = extraction_or_placeholder(None, "x.pdf");
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("requiresManualInput").is_some());
        assert!(value.get("fileName").is_some());
    }
}
