//! wry-backed preview renderer
//!
//! Desktop hosts with a real window can embed the preview through wry.
//! The webview loads the bundled harness, reports page-ready through the
//! supplied callback, and routes link activations through the navigation
//! policy (external links open in the default browser).

use raw_window_handle::HasWindowHandle;
use wry::{WebView, WebViewBuilder};

use super::bridge::{handle_navigation, PreviewRenderer};
use super::harness::{harness_html, PreviewTheme};

/// Build a child webview hosting the preview harness.
///
/// `on_ready` fires once when the harness page finishes loading; wire it
/// to [`PreviewBridge::page_loaded`](super::PreviewBridge::page_loaded).
/// A failed build leaves the host without a preview surface; there is no
/// retry.
pub fn build_preview_webview<W: HasWindowHandle>(
    window: &W,
    theme: &PreviewTheme,
    on_ready: impl Fn() + 'static,
) -> Result<WebView, wry::Error> {
    WebViewBuilder::new()
        .with_html(harness_html(theme))
        .with_transparent(false)
        .with_navigation_handler(|url| handle_navigation(&url))
        .with_on_page_load_handler(move |event, _url| {
            if matches!(event, wry::PageLoadEvent::Finished) {
                on_ready();
            }
        })
        .build_as_child(window)
}

impl PreviewRenderer for WebView {
    fn evaluate(&self, script: &str) {
        if let Err(e) = self.evaluate_script(script) {
            tracing::warn!("preview script evaluation failed: {}", e);
        }
    }
}
