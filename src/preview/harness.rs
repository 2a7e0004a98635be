//! Bundled rendering harness for the Markdown preview
//!
//! Generates the HTML page the embedded renderer loads once per preview
//! surface. The page exposes a single render entry point,
//! `renderMarkdown(text)`, invoked by the bridge's serialized command.

use crate::theme::{Color, Theme};

/// Theme colors for the preview page (CSS-formatted)
#[derive(Debug, Clone)]
pub struct PreviewTheme {
    pub background: String,
    pub text: String,
    pub heading: String,
    pub link: String,
    pub code_background: String,
    pub border: String,
    pub muted: String,
}

impl PreviewTheme {
    /// Derive preview colors from the editor theme
    pub fn from_editor_theme(theme: &Theme) -> Self {
        Self {
            background: theme.editor.background.to_css(),
            text: theme.editor.foreground.to_css(),
            heading: theme.paint_for("text.title").color.to_css(),
            link: theme.paint_for("text.uri").color.to_css(),
            code_background: theme.editor.current_line_background.to_css(),
            border: theme.gutter.border_color.to_css(),
            muted: theme.gutter.foreground.to_css(),
        }
    }
}

impl Default for PreviewTheme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x1E, 0x1E, 0x1E).to_css(),
            text: Color::rgb(0xD4, 0xD4, 0xD4).to_css(),
            heading: Color::rgb(0xFF, 0xFF, 0xFF).to_css(),
            link: Color::rgb(0x56, 0x9C, 0xD6).to_css(),
            code_background: Color::rgb(0x2A, 0x2A, 0x2A).to_css(),
            border: Color::rgb(0x3C, 0x3C, 0x3C).to_css(),
            muted: Color::rgb(0x85, 0x85, 0x85).to_css(),
        }
    }
}

/// Build the complete harness page with themed CSS
pub fn harness_html(theme: &PreviewTheme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <script src="https://cdnjs.cloudflare.com/ajax/libs/marked/12.0.2/marked.min.js"></script>
    <style>{}</style>
</head>
<body>
    <div id="content"></div>
    <script>
    function renderMarkdown(text) {{
        document.getElementById('content').innerHTML = marked.parse(text);
    }}
    </script>
</body>
</html>"#,
        generate_css(theme)
    )
}

/// Generate CSS from theme colors
fn generate_css(theme: &PreviewTheme) -> String {
    format!(
        r#"
body {{
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 15px;
    line-height: 1.6;
    color: {text};
    background: {background};
    padding: 16px;
    max-width: 760px;
    margin: 0 auto;
}}

h1, h2, h3, h4, h5, h6 {{
    color: {heading};
    margin-top: 24px;
    margin-bottom: 12px;
    font-weight: 600;
    line-height: 1.25;
}}

h1, h2 {{
    border-bottom: 1px solid {border};
    padding-bottom: 0.3em;
}}

code {{
    background: {code_background};
    padding: 0.2em 0.4em;
    border-radius: 3px;
    font-family: "SF Mono", Menlo, Consolas, monospace;
    font-size: 0.9em;
}}

pre {{
    background: {code_background};
    padding: 14px;
    border-radius: 6px;
    overflow-x: auto;
}}

pre code {{
    background: none;
    padding: 0;
}}

blockquote {{
    border-left: 4px solid {border};
    margin: 0 0 16px 0;
    padding: 0 16px;
    color: {muted};
}}

a {{
    color: {link};
    text-decoration: none;
}}

a:hover {{
    text-decoration: underline;
}}

hr {{
    height: 1px;
    margin: 24px 0;
    background-color: {border};
    border: 0;
}}

table {{
    border-collapse: collapse;
    margin-bottom: 16px;
}}

th, td {{
    padding: 6px 13px;
    border: 1px solid {border};
}}

img {{
    max-width: 100%;
}}
"#,
        text = theme.text,
        background = theme.background,
        heading = theme.heading,
        link = theme.link,
        code_background = theme.code_background,
        border = theme.border,
        muted = theme.muted,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_exposes_render_entry_point() {
        let html = harness_html(&PreviewTheme::default());
        assert!(html.contains("function renderMarkdown(text)"));
        assert!(html.contains(r#"<div id="content">"#));
    }

    #[test]
    fn test_harness_css_uses_theme_colors() {
        let theme = PreviewTheme {
            background: "#010203".to_string(),
            ..PreviewTheme::default()
        };
        let html = harness_html(&theme);
        assert!(html.contains("background: #010203"));
    }

    #[test]
    fn test_preview_theme_from_editor_theme() {
        let theme = PreviewTheme::from_editor_theme(&Theme::default_dark());
        assert!(theme.background.starts_with('#'));
        assert!(theme.heading.starts_with('#'));
    }
}
