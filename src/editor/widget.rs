//! The native text-editing widget contract
//!
//! The platform widget is stateful and opaque: it owns text storage,
//! cursor, selection, scroll position, and runs highlighting internally.
//! The reconciler only ever talks to this trait, which lets tests
//! substitute a recording fake.

use crate::syntax::Grammar;
use crate::theme::Appearance;

/// Display-only widget options.
///
/// Re-applied idempotently on every reconciliation pass; toggling these
/// must never require a content reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_line_numbers: bool,
    pub editable: bool,
    pub indent_width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            editable: true,
            indent_width: 4,
        }
    }
}

/// Capability set of the native editor widget.
///
/// Widget-originated edits flow the other way: the host receives the
/// widget's change notification and forwards the new text to
/// [`SurfaceReconciler::text_changed`](super::SurfaceReconciler::text_changed).
pub trait EditorWidget {
    /// Replace the full text content and highlighting grammar.
    ///
    /// Destroys cursor and scroll state; the reconciler calls this only
    /// when the load token changes.
    fn set_content(&mut self, text: &str, grammar: Option<&Grammar>);

    /// Apply display-only options (cheap, idempotent)
    fn set_display_options(&mut self, options: &DisplayOptions);

    /// Apply theme and fonts without touching content, cursor, or scroll
    fn apply_appearance(&mut self, appearance: &Appearance);

    /// Present the widget's built-in find affordance
    fn present_find(&mut self);
}
