//! Plain-text extraction from uploaded resume documents (.pdf, .docx, .txt).
//!
//! Runs before the recommendation engine; the engine only ever sees text.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::{debug, warn};

const DOCX_BODY: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format '{0}'. Only .pdf, .docx and .txt are supported.")]
    UnsupportedFormat(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("Extraction task aborted: {0}")]
    Aborted(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl DocumentKind {
    /// Detects the document kind from the file extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            "txt" => Ok(DocumentKind::Text),
            _ => Err(ExtractError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Extracts plain text from a document. Blocking; call from `spawn_blocking`.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let kind = DocumentKind::from_filename(filename)?;
    debug!("Extracting {kind:?} text from '{filename}' ({} bytes)", bytes.len());

    let text = match kind {
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::Docx => extract_docx(bytes)?,
        DocumentKind::Text => String::from_utf8_lossy(bytes).into_owned(),
    };

    if text.trim().is_empty() {
        warn!("Text extraction for '{filename}' returned empty content");
    }
    Ok(text)
}

/// Async wrapper that keeps parsing off the runtime threads.
pub async fn extract_text_blocking(filename: String, bytes: Vec<u8>) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_text(&filename, &bytes))
        .await
        .map_err(|e| ExtractError::Aborted(e.to_string()))?
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed files instead of returning an error
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractError::Pdf("malformed PDF document".to_string()))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(format!("not a zip archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| ExtractError::Docx(format!("missing {DOCX_BODY}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    document_xml_text(&xml)
}

/// Collects `w:t` runs, one line per `w:p` paragraph.
fn document_xml_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let run = t.unescape().map_err(|e| ExtractError::Docx(e.to_string()))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(e.to_string())),
            _ => {}
        }
    }

    Ok(text)
}
