use tracing::warn;

/// Boundary to the PDF decoder. Implementations must never fail past
/// this seam: undecodable bytes come back as an empty string, which the
/// processor turns into a per-file parse note instead of aborting the
/// batch.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> String;
}

/// Production extractor backed by `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> String {
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "pdf text extraction failed");
                String::new()
            }
        }
    }
}
