//! Editor surface reconciliation
//!
//! Owns the load-vs-edit arbitration between the document model and the
//! opaque native widget, plus the one-shot find trigger.

mod find;
mod reconciler;
mod widget;

pub use find::FindTrigger;
pub use reconciler::{LoadToken, ReconcileOutcome, SurfaceReconciler};
pub use widget::{DisplayOptions, EditorWidget};
