//! Shared test helpers for integration tests
//!
//! Note: Items may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use penmark::editor::{DisplayOptions, EditorWidget};
use penmark::preview::PreviewRenderer;
use penmark::syntax::{Grammar, LanguageId};
use penmark::theme::{Appearance, FontCatalog, FontPreferences, Theme};

/// Recording fake for the native editor widget
#[derive(Default)]
pub struct FakeWidget {
    pub content_pushes: Vec<String>,
    pub content_grammars: Vec<Option<LanguageId>>,
    pub display_option_applies: Vec<DisplayOptions>,
    pub appearance_applies: usize,
    pub find_presentations: usize,
}

impl FakeWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_content(&self) -> Option<&str> {
        self.content_pushes.last().map(|s| s.as_str())
    }
}

impl EditorWidget for FakeWidget {
    fn set_content(&mut self, text: &str, grammar: Option<&Grammar>) {
        self.content_pushes.push(text.to_string());
        self.content_grammars.push(grammar.map(|g| g.id));
    }

    fn set_display_options(&mut self, options: &DisplayOptions) {
        self.display_option_applies.push(options.clone());
    }

    fn apply_appearance(&mut self, _appearance: &Appearance) {
        self.appearance_applies += 1;
    }

    fn present_find(&mut self) {
        self.find_presentations += 1;
    }
}

/// Recording fake for the embedded web renderer
#[derive(Default, Clone)]
pub struct FakeRenderer {
    pub scripts: Rc<RefCell<Vec<String>>>,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_count(&self) -> usize {
        self.scripts.borrow().len()
    }

    pub fn last_script(&self) -> Option<String> {
        self.scripts.borrow().last().cloned()
    }
}

impl PreviewRenderer for FakeRenderer {
    fn evaluate(&self, script: &str) {
        self.scripts.borrow_mut().push(script.to_string());
    }
}

/// Catalog with a fixed set of families
pub struct FixedCatalog {
    pub families: Vec<String>,
}

impl FixedCatalog {
    pub fn with_families(families: &[&str]) -> Self {
        Self {
            families: families.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FontCatalog for FixedCatalog {
    fn has_family(&self, family: &str) -> bool {
        self.families.iter().any(|f| f == family)
    }

    fn monospace_family(&self) -> String {
        "SystemMono".to_string()
    }
}

/// Default appearance resolved against an empty font catalog
pub fn test_appearance() -> Appearance {
    Appearance::resolve(
        Theme::default_dark(),
        &FontPreferences::default(),
        &FixedCatalog::with_families(&[]),
    )
}
