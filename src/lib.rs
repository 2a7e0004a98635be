//! penmark - embeddable text editor shell
//!
//! The reconciliation core for an editor shell: keeps an externally-owned
//! document, a stateful native text-editing widget, and an optional
//! Markdown preview renderer consistent without update loops or clobbered
//! edits. The widget and renderer are opaque collaborators behind traits;
//! the host supplies concrete implementations.

pub mod config;
pub mod config_paths;
pub mod editor;
pub mod model;
pub mod preview;
pub mod syntax;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editor::{DisplayOptions, EditorWidget, LoadToken, SurfaceReconciler};
pub use model::Document;
pub use preview::{PreviewBridge, PreviewRenderer};
pub use syntax::{GrammarRegistry, LanguageId};
pub use theme::{Appearance, Theme};
