//! Template-literal escaping for the render channel
//!
//! Document text travels to the renderer inside a JS template literal.
//! Escape order is load-bearing: backslash first (or it would re-escape
//! the escapes we add), then the literal delimiter, the interpolation
//! sigil, and finally the line terminators. Any other order reopens
//! injection.

/// Escape text for embedding in a JS template literal
pub fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace('$', "\\$")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
