//! Highlight class taxonomy
//!
//! Capture names assigned by grammars to spans of text. The theme maps
//! these to paint attributes; hierarchical names fall back to their parent
//! (e.g. "keyword.control.import" -> "keyword.control" -> "keyword").

/// Capture names known to the bundled grammars.
///
/// The prose-oriented `text.*` names come from the markdown grammars and
/// get dedicated paints; the rest are generic code classes handled by the
/// base theme table.
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "attribute",
    "boolean",
    "comment",
    "constant",
    "constant.builtin",
    "constructor",
    "escape",
    "function",
    "function.builtin",
    "function.method",
    "keyword",
    "label",
    "number",
    "operator",
    "property",
    "punctuation",
    "punctuation.bracket",
    "punctuation.delimiter",
    "punctuation.special",
    "string",
    "string.special",
    "tag",
    "tag.attribute",
    "text",
    "text.emphasis",
    "text.literal",
    "text.reference",
    "text.strong",
    "text.title",
    "text.uri",
    "type",
    "type.builtin",
    "variable",
    "variable.builtin",
    "variable.parameter",
];

/// Walk a hierarchical capture name up to the nearest entry in `names`.
///
/// Returns the matched name so callers can use it as a stable lookup key.
pub fn nearest_class<'a>(name: &'a str, names: &[&'a str]) -> Option<&'a str> {
    let mut current = name;
    loop {
        if names.contains(&current) {
            return Some(current);
        }
        let Some(dot_pos) = current.rfind('.') else {
            return None;
        };
        current = &current[..dot_pos];
    }
}
