//! Document model - the text buffer and file state
//!
//! The document is the single source of truth for text content. The host
//! persistence framework owns its lifecycle; the reconciler reads it to
//! seed the widget and writes it back on widget-originated edits.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};

use crate::syntax::LanguageId;

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            text: String::new(),
            file_path: None,
            is_modified: false,
        }
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            file_path: None,
            is_modified: false,
        }
    }

    /// Load a document from a file path.
    ///
    /// Files that are neither valid UTF-8 nor ASCII are unopenable; the
    /// error surfaces to the caller rather than silently truncating.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let text = decode_text(&bytes)
            .ok_or_else(|| anyhow!("{} is not valid UTF-8 or ASCII text", path.display()))?;
        Ok(Self {
            text,
            file_path: Some(path.to_path_buf()),
            is_modified: false,
        })
    }

    /// Save the document as UTF-8 to its file path
    pub fn save(&mut self) -> anyhow::Result<()> {
        let path = self
            .file_path
            .as_ref()
            .ok_or_else(|| anyhow!("Document has no file path"))?;
        std::fs::write(path, self.text.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        self.is_modified = false;
        tracing::debug!("saved {} ({} bytes)", path.display(), self.text.len());
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the full text. Called from the widget change callback.
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.is_modified = true;
        }
    }

    /// Get the display name for this document
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Detected language for syntax highlighting
    pub fn language(&self) -> LanguageId {
        self.file_path
            .as_deref()
            .map(LanguageId::from_path)
            .unwrap_or(LanguageId::PlainText)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode file bytes as UTF-8, falling back to ASCII.
///
/// The ASCII step mirrors the persistence contract: it only accepts byte
/// values below 0x80, so it never reinterprets other encodings.
pub fn decode_text(bytes: &[u8]) -> Option<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(text.to_string());
    }
    if bytes.is_ascii() {
        return Some(bytes.iter().map(|&b| b as char).collect());
    }
    None
}
