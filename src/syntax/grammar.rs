//! Grammar loading for the editor widget
//!
//! Compiles tree-sitter languages and their highlight queries into
//! `Grammar` values the widget consumes opaquely. Grammars that fail to
//! compile degrade to plain-text display; the failure is remembered so a
//! broken grammar is not re-attempted on every reconciliation pass.

use std::collections::HashMap;

use tree_sitter::{Language, Query};

use super::languages::LanguageId;

// Highlight queries shipped with the grammar crates
const MARKDOWN_HIGHLIGHTS: &str = tree_sitter_md::HIGHLIGHT_QUERY_BLOCK;
const MARKDOWN_INLINE_HIGHLIGHTS: &str = tree_sitter_md::HIGHLIGHT_QUERY_INLINE;
const RUST_HIGHLIGHTS: &str = tree_sitter_rust::HIGHLIGHTS_QUERY;
const JSON_HIGHLIGHTS: &str = tree_sitter_json::HIGHLIGHTS_QUERY;
const HTML_HIGHLIGHTS: &str = tree_sitter_html::HIGHLIGHTS_QUERY;
const CSS_HIGHLIGHTS: &str = tree_sitter_css::HIGHLIGHTS_QUERY;
const JAVASCRIPT_HIGHLIGHTS: &str = tree_sitter_javascript::HIGHLIGHT_QUERY;

/// A compiled grammar: the parser language plus its highlight query.
///
/// Handed to [`EditorWidget::set_content`](crate::editor::EditorWidget)
/// as an opaque highlighting recipe.
pub struct Grammar {
    pub id: LanguageId,
    pub language: Language,
    pub highlight_query: Query,
}

impl Grammar {
    /// Compile the grammar for a language.
    ///
    /// Returns `Err` when the language has no grammar (`PlainText`) or the
    /// highlight query fails to compile against the shipped parser.
    pub fn load(id: LanguageId) -> Result<Self, String> {
        let (language, highlights): (Language, &str) = match id {
            LanguageId::PlainText => {
                return Err("plain text has no grammar".to_string());
            }
            LanguageId::Markdown => (tree_sitter_md::LANGUAGE.into(), MARKDOWN_HIGHLIGHTS),
            LanguageId::MarkdownInline => (
                tree_sitter_md::INLINE_LANGUAGE.into(),
                MARKDOWN_INLINE_HIGHLIGHTS,
            ),
            LanguageId::Rust => (tree_sitter_rust::LANGUAGE.into(), RUST_HIGHLIGHTS),
            LanguageId::Json => (tree_sitter_json::LANGUAGE.into(), JSON_HIGHLIGHTS),
            LanguageId::Html => (tree_sitter_html::LANGUAGE.into(), HTML_HIGHLIGHTS),
            LanguageId::Css => (tree_sitter_css::LANGUAGE.into(), CSS_HIGHLIGHTS),
            LanguageId::JavaScript => (
                tree_sitter_javascript::LANGUAGE.into(),
                JAVASCRIPT_HIGHLIGHTS,
            ),
        };

        let highlight_query = Query::new(&language, highlights)
            .map_err(|e| format!("highlight query for {}: {}", id.display_name(), e))?;

        Ok(Self {
            id,
            language,
            highlight_query,
        })
    }

    /// Sub-language names this grammar injects
    pub fn injection_names(&self) -> &'static [&'static str] {
        self.id.injections()
    }
}

/// Cache of compiled grammars, including remembered failures.
#[derive(Default)]
pub struct GrammarRegistry {
    cache: HashMap<LanguageId, Option<Grammar>>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the grammar for a language, compiling it on first use.
    ///
    /// `None` means plain-text display: either the language has no grammar
    /// or compilation failed earlier.
    pub fn get(&mut self, id: LanguageId) -> Option<&Grammar> {
        self.cache
            .entry(id)
            .or_insert_with(|| match Grammar::load(id) {
                Ok(grammar) => Some(grammar),
                Err(e) => {
                    if id.has_highlighting() {
                        tracing::warn!(
                            "grammar for {} failed to load, falling back to plain text: {}",
                            id.display_name(),
                            e
                        );
                    }
                    None
                }
            })
            .as_ref()
    }

    /// Resolve an injected sub-grammar by capture name.
    ///
    /// Misses (unknown name, sub-grammar fails to compile) return `None`;
    /// the injected span simply stays unhighlighted. Results share the
    /// cache with top-level lookups, so a sub-grammar is compiled at most
    /// once and a broken one warns at most once.
    pub fn resolve_injection(&mut self, name: &str) -> Option<&Grammar> {
        let id = LanguageId::from_injection_name(name)?;
        self.get(id)
    }
}
