//! Markdown preview bridge
//!
//! Owns the lifecycle of one embedded web renderer: page-ready gating,
//! pending-render queuing, the serialized render command, and the
//! navigation policy. Update cadence is explicit-trigger only; there is
//! no keystroke-driven re-render.

use super::escape::escape_template_literal;

/// Capability set of the embedded web renderer.
///
/// The host constructs the renderer with the bundled harness page already
/// loading, wires its ready callback to [`PreviewBridge::page_loaded`],
/// and routes navigation requests through [`decide_navigation`].
pub trait PreviewRenderer {
    /// Execute a script in the rendered page. Failures are the renderer's
    /// problem; a dead renderer just leaves the surface blank.
    fn evaluate(&self, script: &str);
}

/// Where a navigation request should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the renderer navigate (initial harness load, anchors)
    Allow,
    /// Block in-place navigation and open the URL in the system browser
    OpenExternally,
}

/// Classify a navigation request from inside the rendered page.
///
/// Outbound web links are never followed in-place; everything else
/// (the harness load itself, about:blank, anchors) proceeds.
pub fn decide_navigation(url: &str) -> NavigationDecision {
    if url.starts_with("http://") || url.starts_with("https://") {
        NavigationDecision::OpenExternally
    } else {
        NavigationDecision::Allow
    }
}

/// Apply the navigation policy, opening external links in the default
/// browser. Returns whether the renderer may proceed with the navigation.
pub fn handle_navigation(url: &str) -> bool {
    match decide_navigation(url) {
        NavigationDecision::OpenExternally => {
            tracing::debug!("opening preview link externally: {}", url);
            if let Err(e) = open::that(url) {
                tracing::warn!("failed to open {} in browser: {}", url, e);
            }
            false
        }
        NavigationDecision::Allow => true,
    }
}

/// The serialized render command for one document snapshot
pub fn render_command(markdown: &str) -> String {
    format!("renderMarkdown(`{}`);", escape_template_literal(markdown))
}

/// State for one embedded renderer instance.
///
/// Created with the preview surface, dropped with it; a reopened preview
/// starts from a fresh bridge.
pub struct PreviewBridge<R: PreviewRenderer> {
    renderer: R,
    is_ready: bool,
    /// Last text submitted before the harness signalled ready
    pending_text: Option<String>,
}

impl<R: PreviewRenderer> PreviewBridge<R> {
    /// Wrap a renderer whose harness page has started loading.
    ///
    /// The page load is a single attempt: if it never signals ready, the
    /// surface stays blank and updates keep parking in `pending_text`.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            is_ready: false,
            pending_text: None,
        }
    }

    /// Submit a document snapshot for rendering.
    ///
    /// Before the harness is ready the text is parked, last write wins;
    /// afterwards it renders immediately.
    pub fn update(&mut self, markdown: &str) {
        if self.is_ready {
            self.renderer.evaluate(&render_command(markdown));
        } else {
            tracing::debug!("renderer not ready, parking {} bytes", markdown.len());
            self.pending_text = Some(markdown.to_string());
        }
    }

    /// Single-fire ready signal from the harness page; flushes any parked
    /// text.
    pub fn page_loaded(&mut self) {
        self.is_ready = true;
        if let Some(markdown) = self.pending_text.take() {
            self.renderer.evaluate(&render_command(&markdown));
        }
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
