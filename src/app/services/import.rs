use std::fs;
use std::path::Path;

use thiserror::Error;

/// Largest file accepted for import.
pub const MAX_IMPORT_SIZE: u64 = 10 * 1024 * 1024;

/// Extensions accepted by [`import_text_file`].
pub const ACCEPTED_EXTENSIONS: &[&str] = &["txt"];

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("file is too large ({size} bytes, max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("unsupported file type: {0}")]
    UnsupportedExtension(String),

    #[error("file is empty")]
    Empty,

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a plain-text file as document content.
///
/// The text is trimmed; a file that is empty after trimming is rejected.
pub fn import_text_file(path: &Path) -> Result<String, ImportError> {
    let extension = file_extension(path);
    if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ImportError::UnsupportedExtension(extension));
    }

    let size = fs::metadata(path)?.len();
    if size > MAX_IMPORT_SIZE {
        return Err(ImportError::TooLarge {
            size,
            max: MAX_IMPORT_SIZE,
        });
    }

    let text = fs::read_to_string(path)?;
    let content = normalize_imported_text(&text);
    if content.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(content)
}

/// Trim surrounding whitespace and fold CRLF line endings to `\n`.
pub fn normalize_imported_text(text: &str) -> String {
    text.trim().replace("\r\n", "\n")
}

/// Lowercased extension without the dot, or an empty string.
fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}
