//! Load-vs-edit arbitration between the document and the widget
//!
//! The document model is the single source of truth. Text is pushed into
//! the widget exactly once per programmatic load, identified by a
//! [`LoadToken`]; widget-originated edits flow back into the document and
//! never re-push. Without the token comparison every user edit would
//! round-trip into a content replace, destroying cursor position and
//! looping forever.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::Document;
use crate::syntax::Grammar;
use crate::theme::Appearance;

use super::find::FindTrigger;
use super::widget::{DisplayOptions, EditorWidget};

/// Opaque marker distinguishing a programmatic text load from a user edit.
///
/// Minted once per load request; compared by equality on every
/// reconciliation pass. Process-unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(u64);

impl LoadToken {
    /// Mint a fresh token for a new load request
    pub fn mint() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        LoadToken(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// What a reconciliation pass actually did, for callers that log or assert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Widget content was replaced (token changed)
    pub content_pushed: bool,
    /// The find affordance was presented (trigger was armed)
    pub find_presented: bool,
}

/// Mediates between the externally-owned document and the native widget.
///
/// Lives as long as the document is open; dropping it is the only
/// teardown.
pub struct SurfaceReconciler<W: EditorWidget> {
    widget: W,
    applied_token: LoadToken,
    find: FindTrigger,
}

impl<W: EditorWidget> SurfaceReconciler<W> {
    /// Create the surface: install static options, paint, and push the
    /// initial text exactly once.
    pub fn create(
        mut widget: W,
        document: &Document,
        token: LoadToken,
        options: &DisplayOptions,
        appearance: &Appearance,
        grammar: Option<&Grammar>,
    ) -> Self {
        widget.set_display_options(options);
        widget.apply_appearance(appearance);
        widget.set_content(document.text(), grammar);
        tracing::debug!(?token, "editor surface created");
        Self {
            widget,
            applied_token: token,
            find: FindTrigger::new(),
        }
    }

    /// One reconciliation pass.
    ///
    /// Content is re-pushed iff `requested` differs from the last applied
    /// token, and a content push re-applies `appearance` with it so a
    /// reload restores paint along with text and grammar. Display options
    /// are re-applied unconditionally so toggling line numbers never
    /// requires a reload. An armed find trigger is drained at the end of
    /// the pass.
    pub fn reconcile(
        &mut self,
        document: &Document,
        requested: LoadToken,
        options: &DisplayOptions,
        appearance: &Appearance,
        grammar: Option<&Grammar>,
    ) -> ReconcileOutcome {
        let mut outcome = ReconcileOutcome::default();

        self.widget.set_display_options(options);

        if requested != self.applied_token {
            self.widget.apply_appearance(appearance);
            self.widget.set_content(document.text(), grammar);
            self.applied_token = requested;
            outcome.content_pushed = true;
            tracing::debug!(?requested, "pushed document text into widget");
        }

        if self.find.take() {
            self.widget.present_find();
            outcome.find_presented = true;
        }

        outcome
    }

    /// Theme-only update: repaint without replacing content, so cursor,
    /// selection, and scroll position survive.
    pub fn apply_appearance(&mut self, appearance: &Appearance) {
        self.widget.apply_appearance(appearance);
    }

    /// Widget change callback: forward the widget's new text into the
    /// document model.
    ///
    /// Never mints a token and never touches widget content; doing either
    /// here is the infinite-loop hazard this type exists to prevent.
    pub fn text_changed(&mut self, document: &mut Document, new_text: &str) {
        document.set_text(new_text);
    }

    /// Arm the one-shot find intent; the next pass presents and clears it
    pub fn request_find(&mut self) {
        self.find.request();
    }

    /// Token of the last applied programmatic load
    pub fn applied_token(&self) -> LoadToken {
        self.applied_token
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }
}
