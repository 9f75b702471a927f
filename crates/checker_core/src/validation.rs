use thiserror::Error;

use crate::CheckerSettings;

/// Metadata of a file handed over by the chooser or a drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// A file that passed validation. Only `on_file_chosen` produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile(FileInfo);

impl SelectedFile {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.0.size_bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.0.mime_type
    }

    pub fn file_info(&self) -> &FileInfo {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("unsupported file type {mime_type:?}, expected {expected}")]
    InvalidFileType { mime_type: String, expected: String },
    #[error("file is {size_bytes} bytes, limit is {max_bytes}")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no resume file selected")]
    MissingFile,
    #[error("job description has {chars} characters, minimum is {min}")]
    DescriptionTooShort { chars: usize, min: usize },
}

/// Validates a freshly chosen or dropped file.
///
/// The type check runs before the size check, so a large non-PDF reports
/// `InvalidFileType`.
pub fn on_file_chosen(file: FileInfo, settings: &CheckerSettings) -> Result<SelectedFile, FileError> {
    if file.mime_type != settings.accepted_mime_type {
        return Err(FileError::InvalidFileType {
            mime_type: file.mime_type,
            expected: settings.accepted_mime_type.clone(),
        });
    }
    if file.size_bytes > settings.max_file_bytes {
        return Err(FileError::FileTooLarge {
            size_bytes: file.size_bytes,
            max_bytes: settings.max_file_bytes,
        });
    }
    Ok(SelectedFile(file))
}

/// Checks the submit preconditions in order: file first, then description.
pub fn on_submit_attempt(
    selected: Option<&SelectedFile>,
    description: &str,
    settings: &CheckerSettings,
) -> Result<(), ValidationError> {
    if selected.is_none() {
        return Err(ValidationError::MissingFile);
    }
    let chars = description.trim_matches(is_trimmed).chars().count();
    if chars < settings.min_description_chars {
        return Err(ValidationError::DescriptionTooShort {
            chars,
            min: settings.min_description_chars,
        });
    }
    Ok(())
}

/// Characters stripped from both ends of a description before counting.
/// This is the browser's `String.prototype.trim` set: Unicode white space
/// plus the byte order mark, without U+0085.
fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}
