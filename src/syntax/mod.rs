//! Syntax highlighting support
//!
//! Language detection, grammar compilation, and the highlight-class
//! taxonomy shared with the theme system.

mod grammar;
mod highlights;
mod languages;

pub use grammar::{Grammar, GrammarRegistry};
pub use highlights::{nearest_class, HIGHLIGHT_NAMES};
pub use languages::LanguageId;
