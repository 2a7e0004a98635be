//! Reconciliation state machine tests: token arbitration, edit
//! round-trips, display-option independence, theme-only updates, and the
//! one-shot find trigger.

mod common;

use common::{test_appearance, FakeWidget};
use penmark::editor::{DisplayOptions, LoadToken, SurfaceReconciler};
use penmark::model::Document;
use penmark::syntax::{GrammarRegistry, LanguageId};
use penmark::theme::FontPreferences;

fn create_reconciler(text: &str) -> (SurfaceReconciler<FakeWidget>, Document, LoadToken) {
    let doc = Document::with_text(text);
    let token = LoadToken::mint();
    let reconciler = SurfaceReconciler::create(
        FakeWidget::new(),
        &doc,
        token,
        &DisplayOptions::default(),
        &test_appearance(),
        None,
    );
    (reconciler, doc, token)
}

#[test]
fn test_create_pushes_content_once() {
    let (reconciler, _, token) = create_reconciler("hello");
    assert_eq!(reconciler.widget().content_pushes, vec!["hello"]);
    assert_eq!(reconciler.applied_token(), token);
}

#[test]
fn test_token_idempotence() {
    let (mut reconciler, doc, token) = create_reconciler("hello");
    let options = DisplayOptions::default();
    let appearance = test_appearance();

    let outcome = reconciler.reconcile(&doc, token, &options, &appearance, None);
    assert!(!outcome.content_pushed);
    let outcome = reconciler.reconcile(&doc, token, &options, &appearance, None);
    assert!(!outcome.content_pushed);

    // Only the initial create push, no matter how many passes run
    assert_eq!(reconciler.widget().content_pushes.len(), 1);
}

#[test]
fn test_new_token_repushes() {
    let (mut reconciler, mut doc, _) = create_reconciler("hello");
    let appearance = test_appearance();
    doc.set_text("replaced externally");
    let new_token = LoadToken::mint();

    let outcome = reconciler.reconcile(&doc, new_token, &DisplayOptions::default(), &appearance, None);
    assert!(outcome.content_pushed);
    assert_eq!(reconciler.widget().last_content(), Some("replaced externally"));
    assert_eq!(reconciler.applied_token(), new_token);

    // Same token again: no-op on content
    let outcome = reconciler.reconcile(&doc, new_token, &DisplayOptions::default(), &appearance, None);
    assert!(!outcome.content_pushed);
    assert_eq!(reconciler.widget().content_pushes.len(), 2);
}

#[test]
fn test_edit_round_trip_does_not_repush() {
    let (mut reconciler, mut doc, token) = create_reconciler("abc");
    let appearance = test_appearance();

    // Widget reports a user edit
    reconciler.text_changed(&mut doc, "abcd");
    assert_eq!(doc.text(), "abcd");
    assert!(doc.is_modified);

    // The edit did not mint a token: the next pass leaves the widget alone
    let outcome = reconciler.reconcile(&doc, token, &DisplayOptions::default(), &appearance, None);
    assert!(!outcome.content_pushed);
    assert_eq!(reconciler.widget().content_pushes.len(), 1);
}

#[test]
fn test_display_option_independence() {
    let (mut reconciler, doc, token) = create_reconciler("text");
    let appearance = test_appearance();

    let mut options = DisplayOptions::default();
    options.show_line_numbers = false;
    reconciler.reconcile(&doc, token, &options, &appearance, None);
    options.show_line_numbers = true;
    reconciler.reconcile(&doc, token, &options, &appearance, None);

    // Options re-applied every pass, content never replaced
    assert_eq!(reconciler.widget().display_option_applies.len(), 3);
    assert_eq!(reconciler.widget().content_pushes.len(), 1);
    let applied = &reconciler.widget().display_option_applies;
    assert!(!applied[1].show_line_numbers);
    assert!(applied[2].show_line_numbers);
}

#[test]
fn test_theme_only_update_preserves_content() {
    let (mut reconciler, _, _) = create_reconciler("text");
    assert_eq!(reconciler.widget().appearance_applies, 1);

    // Font size change: new appearance, same token
    let bigger = penmark::theme::Appearance::resolve(
        penmark::Theme::default_dark(),
        &FontPreferences {
            family: "Menlo".to_string(),
            size: 18.0,
        },
        &common::FixedCatalog::with_families(&["Menlo"]),
    );
    reconciler.apply_appearance(&bigger);

    assert_eq!(reconciler.widget().appearance_applies, 2);
    assert_eq!(reconciler.widget().content_pushes.len(), 1);
}

#[test]
fn test_reload_restores_appearance() {
    let (mut reconciler, doc, token) = create_reconciler("text");
    let options = DisplayOptions::default();
    let appearance = test_appearance();

    // Same token: no repaint beyond the initial create
    reconciler.reconcile(&doc, token, &options, &appearance, None);
    assert_eq!(reconciler.widget().appearance_applies, 1);

    // A reload restores paint along with text and grammar
    let outcome = reconciler.reconcile(&doc, LoadToken::mint(), &options, &appearance, None);
    assert!(outcome.content_pushed);
    assert_eq!(reconciler.widget().appearance_applies, 2);
}

#[test]
fn test_find_trigger_is_one_shot() {
    let (mut reconciler, doc, token) = create_reconciler("text");
    let options = DisplayOptions::default();
    let appearance = test_appearance();

    let outcome = reconciler.reconcile(&doc, token, &options, &appearance, None);
    assert!(!outcome.find_presented);

    reconciler.request_find();
    let outcome = reconciler.reconcile(&doc, token, &options, &appearance, None);
    assert!(outcome.find_presented);
    assert_eq!(reconciler.widget().find_presentations, 1);

    // Cleared within the pass; the next one is quiet
    let outcome = reconciler.reconcile(&doc, token, &options, &appearance, None);
    assert!(!outcome.find_presented);

    // Re-arming works again
    reconciler.request_find();
    reconciler.reconcile(&doc, token, &options, &appearance, None);
    assert_eq!(reconciler.widget().find_presentations, 2);
}

#[test]
fn test_grammar_flows_to_widget_on_push() {
    let mut registry = GrammarRegistry::new();
    let doc = Document::with_text("# heading");
    let token = LoadToken::mint();
    let reconciler = SurfaceReconciler::create(
        FakeWidget::new(),
        &doc,
        token,
        &DisplayOptions::default(),
        &test_appearance(),
        registry.get(LanguageId::Markdown),
    );
    assert_eq!(
        reconciler.widget().content_grammars,
        vec![Some(LanguageId::Markdown)]
    );
}

#[test]
fn test_unknown_language_displays_unhighlighted() {
    let mut registry = GrammarRegistry::new();
    let language = LanguageId::from_extension("xyz");
    assert_eq!(language, LanguageId::PlainText);

    let doc = Document::with_text("plain contents");
    let reconciler = SurfaceReconciler::create(
        FakeWidget::new(),
        &doc,
        LoadToken::mint(),
        &DisplayOptions::default(),
        &test_appearance(),
        registry.get(language),
    );
    assert_eq!(reconciler.widget().content_grammars, vec![None]);
    assert_eq!(reconciler.widget().last_content(), Some("plain contents"));
}
