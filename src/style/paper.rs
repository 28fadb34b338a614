use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PaperPlotError, Result};

/// Font size used by [`PlotStyle::paper`] when none is given.
pub const DEFAULT_PAPER_FONT_SIZE: f64 = 9.0;

/// Generic font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    Serif,
    SansSerif,
    Monospace,
    Cursive,
    Fantasy,
}

impl FontFamily {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Cursive => "cursive",
            Self::Fantasy => "fantasy",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontFamily {
    type Err = PaperPlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "serif" => Ok(Self::Serif),
            "sans-serif" | "sans" => Ok(Self::SansSerif),
            "monospace" | "mono" => Ok(Self::Monospace),
            "cursive" => Ok(Self::Cursive),
            "fantasy" => Ok(Self::Fantasy),
            _ => Err(PaperPlotError::invalid_parameter(
                "font",
                s,
                "unknown font family; expected serif, sans-serif, monospace, cursive or fantasy",
            )),
        }
    }
}

/// Font requested for paper plots.
///
/// Written either as `"default"` or as a `[family, name]` pair such as
/// `["monospace", "DejaVu Sans Mono"]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontSpec {
    /// Serif family with the backend's preferred serif faces.
    #[default]
    Default,
    Named { family: FontFamily, name: String },
}

impl FontSpec {
    /// # Errors
    /// Returns an invalid parameter error for an unknown family.
    pub fn named(family: &str, name: impl Into<String>) -> Result<Self> {
        Ok(Self::Named {
            family: family.parse()?,
            name: name.into(),
        })
    }

    #[must_use]
    pub const fn family(&self) -> FontFamily {
        match self {
            Self::Default => FontFamily::Serif,
            Self::Named { family, .. } => *family,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawFontSpec {
    Keyword(String),
    Pair(String, String),
}

impl TryFrom<RawFontSpec> for FontSpec {
    type Error = PaperPlotError;

    fn try_from(raw: RawFontSpec) -> Result<Self> {
        match raw {
            RawFontSpec::Keyword(word) if word == "default" => Ok(Self::Default),
            RawFontSpec::Keyword(word) => Err(PaperPlotError::invalid_parameter(
                "font",
                word,
                "font must be \"default\" or a [family, name] pair",
            )),
            RawFontSpec::Pair(family, name) => Self::named(&family, name),
        }
    }
}

impl Serialize for FontSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let raw = match self {
            Self::Default => RawFontSpec::Keyword("default".to_string()),
            Self::Named { family, name } => RawFontSpec::Pair(family.to_string(), name.clone()),
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FontSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawFontSpec::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// Complete set of styling defaults handed to a rendering backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotStyle {
    pub font_family: FontFamily,
    /// Preferred faces, tried in order before the family's generic default.
    pub font_names: Vec<String>,
    pub font_size: f64,
    pub legend_font_size: f64,
    pub axes_label_size: f64,
    pub xtick_label_size: f64,
    pub ytick_label_size: f64,
    pub line_width: f64,
    pub marker_size: f64,
    pub use_tex: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            font_family: FontFamily::SansSerif,
            font_names: Vec::new(),
            font_size: 10.0,
            legend_font_size: 10.0,
            axes_label_size: 10.0,
            xtick_label_size: 10.0,
            ytick_label_size: 10.0,
            line_width: 1.5,
            marker_size: 6.0,
            use_tex: false,
        }
    }
}

impl PlotStyle {
    /// Publication style: one font size everywhere, thin lines, small markers.
    ///
    /// # Errors
    /// Returns an invalid parameter error for a non-positive font size.
    pub fn paper(font_size: f64, font: &FontSpec) -> Result<Self> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(PaperPlotError::invalid_parameter(
                "fontsize",
                font_size,
                "must be a positive number",
            ));
        }
        let font_names = match font {
            FontSpec::Default => Vec::new(),
            FontSpec::Named { name, .. } => vec![name.clone()],
        };
        Ok(Self {
            font_family: font.family(),
            font_names,
            font_size,
            legend_font_size: font_size,
            axes_label_size: font_size,
            xtick_label_size: font_size,
            ytick_label_size: font_size,
            line_width: 0.75,
            marker_size: 4.0,
            use_tex: false,
        })
    }

    #[must_use]
    pub const fn with_tex(mut self, use_tex: bool) -> Self {
        self.use_tex = use_tex;
        self
    }
}

/// Owner of the style currently in effect for one plotting session.
///
/// Replaces process-wide mutable defaults: each session holds its own
/// context and passes [`StyleContext::current`] to its backend.
#[derive(Debug, Clone, Default)]
pub struct StyleContext {
    current: PlotStyle,
}

impl StyleContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current(&self) -> &PlotStyle {
        &self.current
    }

    pub fn apply(&mut self, style: PlotStyle) {
        self.current = style;
    }

    /// # Errors
    /// Propagates [`PlotStyle::paper`] errors; the current style is left
    /// unchanged on failure.
    pub fn apply_paper(&mut self, font_size: f64, font: &FontSpec) -> Result<&PlotStyle> {
        self.current = PlotStyle::paper(font_size, font)?;
        Ok(&self.current)
    }

    pub fn restore_defaults(&mut self) {
        self.current = PlotStyle::default();
    }
}
