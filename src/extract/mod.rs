use std::fs;
use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use tracing::debug;

use crate::error::{Error, Result};

/// Resume file formats that can be turned into plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::PlainText),
            "" => Err(Error::UnsupportedFormat(path.display().to_string())),
            other => Err(Error::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// Reads a resume file and returns its text content.
///
/// Files over `max_bytes` are refused before being read into memory.
pub fn extract_text(path: &Path, max_bytes: u64) -> Result<String> {
    let format = DocumentFormat::from_path(path)?;

    let size = fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(Error::ExtractionFailure(format!(
            "{} is {} bytes, limit is {}",
            path.display(),
            size,
            max_bytes
        )));
    }

    let bytes = fs::read(path)?;
    let text = match format {
        DocumentFormat::Pdf => extract_pdf(&bytes)?,
        DocumentFormat::Docx => extract_docx(&bytes)?,
        DocumentFormat::PlainText => String::from_utf8_lossy(&bytes).into_owned(),
    };
    debug!(path = %path.display(), ?format, chars = text.len(), "extracted resume text");

    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(text)
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| Error::ExtractionFailure(format!("pdf: {}", e)))
}

fn extract_docx(bytes: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| Error::ExtractionFailure(format!("docx: {:?}", e)))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

// Runs within one paragraph are fragments of the same line.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const LIMIT: u64 = 1024 * 1024;

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("cv.PDF")).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("cv.docx")).unwrap(),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("/tmp/cv.txt")).unwrap(),
            DocumentFormat::PlainText
        );
        assert!(matches!(
            DocumentFormat::from_path(Path::new("cv.odt")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            DocumentFormat::from_path(Path::new("resume")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_plain_text_is_read_lossily() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "cv.txt", b"Skills: Rust\xff, Go\n");
        let text = extract_text(&path, LIMIT).unwrap();
        assert!(text.starts_with("Skills: Rust"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_blank_file_is_empty_input() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "cv.txt", b"  \n\n ");
        assert!(matches!(extract_text(&path, LIMIT), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_oversized_file_is_refused() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "cv.txt", &[b'a'; 64]);
        assert!(matches!(
            extract_text(&path, 32),
            Err(Error::ExtractionFailure(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(matches!(extract_text(&path, LIMIT), Err(Error::Io(_))));
    }

    #[test]
    fn test_corrupt_docx_fails_extraction() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "cv.docx", b"not a zip archive");
        assert!(matches!(
            extract_text(&path, LIMIT),
            Err(Error::ExtractionFailure(_))
        ));
    }

    #[test]
    fn test_docx_paragraphs_are_joined_by_newlines() {
        use docx_rs::{Docx, Run};

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cv.docx");
        let file = fs::File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Projects")))
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Chess"))
                    .add_run(Run::new().add_text("Engine")),
            )
            .build()
            .pack(file)
            .unwrap();

        let text = extract_text(&path, LIMIT).unwrap();
        assert_eq!(text, "Projects\nChessEngine");
    }
}
