//! Theme system for the editor surface
//!
//! Provides YAML-based theming with compile-time embedded themes and
//! user-defined themes from the config directory, plus the paint lookup
//! the widget uses for highlight classes.
//!
//! Paint resolution is layered: prose classes (markdown emphasis, titles,
//! literals) are checked first, then generic code classes with hierarchical
//! parent fallback, then the plain editor foreground.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/penmark/themes/{id}.yaml`
//! 2. Embedded: built-in themes compiled into the binary

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::syntax::nearest_class;

// Embed theme YAML files at compile time
pub const PAPER_DARK_YAML: &str = include_str!("../themes/paper-dark.yaml");
pub const PAPER_LIGHT_YAML: &str = include_str!("../themes/paper-light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "paper-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "paper-dark",
        yaml: PAPER_DARK_YAML,
    },
    BuiltinTheme {
        id: "paper-light",
        yaml: PAPER_LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// CSS hex string ("#rrggbb" or "#rrggbbaa")
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Paint attributes for one highlight class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl Paint {
    pub const fn plain(color: Color) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    pub ui: UiThemeData,
    /// Generic code highlight classes ("keyword", "string", ...)
    #[serde(default)]
    pub code: HashMap<String, StyleData>,
    /// Prose classes checked before the code table ("text.title", ...)
    #[serde(default)]
    pub prose: HashMap<String, StyleData>,
}

/// UI theme colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub editor: EditorThemeData,
    pub gutter: GutterThemeData,
}

/// Editor area colors
#[derive(Debug, Clone, Deserialize)]
pub struct EditorThemeData {
    pub background: String,
    pub foreground: String,
    pub current_line_background: String,
    pub cursor_color: String,
}

/// Gutter (line numbers) colors
#[derive(Debug, Clone, Deserialize)]
pub struct GutterThemeData {
    pub background: String,
    pub foreground: String,
    pub foreground_active: String,
    #[serde(default)]
    pub border_color: Option<String>,
}

/// One highlight style entry (raw)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StyleData {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub editor: EditorTheme,
    pub gutter: GutterTheme,
    code: HashMap<String, Paint>,
    prose: HashMap<String, Paint>,
}

/// Editor colors (resolved)
#[derive(Debug, Clone)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub current_line_background: Color,
    pub cursor_color: Color,
}

/// Gutter colors (resolved)
#[derive(Debug, Clone)]
pub struct GutterTheme {
    pub background: Color,
    pub foreground: Color,
    pub foreground_active: Color,
    pub border_color: Color,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let foreground = Color::from_hex(&data.ui.editor.foreground)?;

        let resolve_table = |raw: &HashMap<String, StyleData>| -> Result<HashMap<String, Paint>, String> {
            let mut table = HashMap::new();
            for (class, style) in raw {
                let color = style
                    .color
                    .as_ref()
                    .map(|s| Color::from_hex(s))
                    .transpose()?
                    .unwrap_or(foreground);
                table.insert(
                    class.clone(),
                    Paint {
                        color,
                        bold: style.bold,
                        italic: style.italic,
                    },
                );
            }
            Ok(table)
        };

        Ok(Theme {
            name: data.name,
            editor: EditorTheme {
                background: Color::from_hex(&data.ui.editor.background)?,
                foreground,
                current_line_background: Color::from_hex(&data.ui.editor.current_line_background)?,
                cursor_color: Color::from_hex(&data.ui.editor.cursor_color)?,
            },
            gutter: GutterTheme {
                background: Color::from_hex(&data.ui.gutter.background)?,
                foreground: Color::from_hex(&data.ui.gutter.foreground)?,
                foreground_active: Color::from_hex(&data.ui.gutter.foreground_active)?,
                border_color: data
                    .ui
                    .gutter
                    .border_color
                    .as_ref()
                    .map(|s| Color::from_hex(s))
                    .transpose()?
                    .unwrap_or(Color::rgb(0x31, 0x34, 0x38)),
            },
            code: resolve_table(&data.code)?,
            prose: resolve_table(&data.prose)?,
        })
    }

    /// Resolve the paint for a highlight class.
    ///
    /// Layered fallback: prose table first, then the code table with
    /// hierarchical parent stripping, then the plain editor foreground.
    pub fn paint_for(&self, class: &str) -> Paint {
        if let Some(paint) = hierarchical_lookup(&self.prose, class) {
            return *paint;
        }
        if let Some(paint) = hierarchical_lookup(&self.code, class) {
            return *paint;
        }
        Paint::plain(self.editor.foreground)
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(PAPER_DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Paper Dark".to_string(),
                editor: EditorTheme {
                    background: Color::rgb(0x1E, 0x1E, 0x1E),
                    foreground: Color::rgb(0xD4, 0xD4, 0xD4),
                    current_line_background: Color::rgb(0x2A, 0x2A, 0x2A),
                    cursor_color: Color::rgb(0xFF, 0xFF, 0xFF),
                },
                gutter: GutterTheme {
                    background: Color::rgb(0x1E, 0x1E, 0x1E),
                    foreground: Color::rgb(0x85, 0x85, 0x85),
                    foreground_active: Color::rgb(0xC6, 0xC6, 0xC6),
                    border_color: Color::rgb(0x31, 0x34, 0x38),
                },
                code: HashMap::new(),
                prose: HashMap::new(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

/// Walk a hierarchical class name up to the nearest table entry
fn hierarchical_lookup<'a>(table: &'a HashMap<String, Paint>, class: &str) -> Option<&'a Paint> {
    let keys: Vec<&str> = table.keys().map(|k| k.as_str()).collect();
    let matched = nearest_class(class, &keys)?;
    table.get(matched)
}

// ============================================================================
// Fonts
// ============================================================================

/// Gutter line numbers render this much smaller than the primary font
pub const GUTTER_SIZE_OFFSET: f32 = 2.0;
/// Smallest readable gutter point size
pub const MIN_GUTTER_SIZE: f32 = 9.0;

/// User font preferences as stored in config
#[derive(Debug, Clone, PartialEq)]
pub struct FontPreferences {
    pub family: String,
    pub size: f32,
}

impl Default for FontPreferences {
    fn default() -> Self {
        Self {
            family: "Menlo".to_string(),
            size: 14.0,
        }
    }
}

/// Platform font availability, supplied by the host
pub trait FontCatalog {
    /// Whether the family can be instantiated on this platform
    fn has_family(&self, family: &str) -> bool;
    /// The platform's monospaced system font family
    fn monospace_family(&self) -> String;
}

/// A concrete font choice handed to the widget
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

/// Resolve preferences against the platform catalog.
///
/// Unavailable families substitute the monospaced system font at the same
/// point size; this never fails.
pub fn resolve_font(prefs: &FontPreferences, catalog: &dyn FontCatalog) -> FontSpec {
    if catalog.has_family(&prefs.family) {
        FontSpec {
            family: prefs.family.clone(),
            size: prefs.size,
        }
    } else {
        tracing::debug!(
            "font family '{}' unavailable, substituting system monospace",
            prefs.family
        );
        FontSpec {
            family: catalog.monospace_family(),
            size: prefs.size,
        }
    }
}

/// Derive the gutter line-number font from the primary font
pub fn gutter_font(font: &FontSpec) -> FontSpec {
    FontSpec {
        family: font.family.clone(),
        size: (font.size - GUTTER_SIZE_OFFSET).max(MIN_GUTTER_SIZE),
    }
}

/// Everything the widget needs to paint: theme plus resolved fonts.
#[derive(Debug, Clone)]
pub struct Appearance {
    pub theme: Theme,
    pub font: FontSpec,
    pub gutter_font: FontSpec,
}

impl Appearance {
    /// Resolve a theme and font preferences into widget-ready paint state
    pub fn resolve(theme: Theme, prefs: &FontPreferences, catalog: &dyn FontCatalog) -> Self {
        let font = resolve_font(prefs, catalog);
        let gutter_font = gutter_font(&font);
        Self {
            theme,
            font,
            gutter_font,
        }
    }
}
