//! Language identification
//!
//! Maps file extensions to language IDs and provides language metadata.
//! Unknown extensions resolve to `PlainText` rather than erroring; the
//! grammar lookup for `PlainText` yields nothing and the editor widget
//! displays the document unhighlighted.

use std::path::Path;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    Markdown,
    /// Inline markdown grammar, only reachable as an injection of `Markdown`
    MarkdownInline,
    Rust,
    Json,
    Html,
    Css,
    JavaScript,
}

impl LanguageId {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" => LanguageId::Markdown,
            "rs" => LanguageId::Rust,
            "json" => LanguageId::Json,
            "html" | "htm" => LanguageId::Html,
            "css" => LanguageId::Css,
            "js" | "mjs" | "cjs" => LanguageId::JavaScript,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Resolve an injection capture name to a language.
    ///
    /// Grammars reference sub-languages by name (e.g. markdown injects
    /// "markdown_inline" into inline spans); resolution happens lazily at
    /// highlight time and misses are non-fatal.
    pub fn from_injection_name(name: &str) -> Option<Self> {
        match name {
            "markdown_inline" | "markdown-inline" => Some(LanguageId::MarkdownInline),
            "html" => Some(LanguageId::Html),
            "css" => Some(LanguageId::Css),
            "javascript" | "js" => Some(LanguageId::JavaScript),
            "json" => Some(LanguageId::Json),
            "rust" => Some(LanguageId::Rust),
            _ => None,
        }
    }

    /// Sub-language names this language injects, if any
    pub fn injections(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Markdown => &["markdown_inline"],
            LanguageId::Html => &["css", "javascript"],
            _ => &[],
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::Markdown => "Markdown",
            LanguageId::MarkdownInline => "Markdown (inline)",
            LanguageId::Rust => "Rust",
            LanguageId::Json => "JSON",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::JavaScript => "JavaScript",
        }
    }

    /// Check if this language has syntax highlighting support
    pub fn has_highlighting(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }

    /// Whether documents of this language can be shown in the Markdown preview
    pub fn is_markdown(&self) -> bool {
        matches!(self, LanguageId::Markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(LanguageId::from_extension("md"), LanguageId::Markdown);
        assert_eq!(LanguageId::from_extension("MD"), LanguageId::Markdown);
        assert_eq!(LanguageId::from_extension("markdown"), LanguageId::Markdown);
        assert_eq!(LanguageId::from_extension("rs"), LanguageId::Rust);
        assert_eq!(LanguageId::from_extension("json"), LanguageId::Json);
        assert_eq!(LanguageId::from_extension("txt"), LanguageId::PlainText);
        assert_eq!(LanguageId::from_extension("unknown"), LanguageId::PlainText);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            LanguageId::from_path(Path::new("/path/to/README.md")),
            LanguageId::Markdown
        );
        assert_eq!(LanguageId::from_path(Path::new("main.rs")), LanguageId::Rust);
        assert_eq!(
            LanguageId::from_path(Path::new("no_extension")),
            LanguageId::PlainText
        );
    }

    #[test]
    fn test_injections() {
        assert_eq!(LanguageId::Markdown.injections(), &["markdown_inline"]);
        assert_eq!(
            LanguageId::from_injection_name("markdown_inline"),
            Some(LanguageId::MarkdownInline)
        );
        assert_eq!(LanguageId::from_injection_name("cobol"), None);
        assert!(LanguageId::Rust.injections().is_empty());
    }

    #[test]
    fn test_markdown_gates_preview() {
        assert!(LanguageId::Markdown.is_markdown());
        assert!(!LanguageId::Html.is_markdown());
        assert!(!LanguageId::PlainText.is_markdown());
    }
}
