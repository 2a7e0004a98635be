//! Markdown preview
//!
//! The bridge to the embedded web renderer: harness page generation,
//! ready gating with pending-render queuing, the escaped render command,
//! and navigation interception.

mod bridge;
mod escape;
mod harness;
#[cfg(feature = "webview")]
mod webview;

pub use bridge::{
    decide_navigation, handle_navigation, render_command, NavigationDecision, PreviewBridge,
    PreviewRenderer,
};
pub use escape::escape_template_literal;
pub use harness::{harness_html, PreviewTheme};
#[cfg(feature = "webview")]
pub use webview::build_preview_webview;
