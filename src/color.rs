//! Colors: the default qualitative palette and brightness ramps.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PaperPlotError, Result};

/// ColorBrewer 8-class qualitative "Accent" palette, in entry order.
pub const COLOR_SET: [&str; 8] = [
    "#386cb0", "#7fc97f", "#f0027f", "#beaed4", "#bf5b17", "#fdc086", "#666666", "#ffff99",
];

/// CSS color names accepted by [`Rgb::parse`], with their hex values.
pub const NAMED_COLORS: [(&str, &str); 30] = [
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("red", "#ff0000"),
    ("green", "#008000"),
    ("blue", "#0000ff"),
    ("yellow", "#ffff00"),
    ("cyan", "#00ffff"),
    ("aqua", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("fuchsia", "#ff00ff"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("darkgray", "#a9a9a9"),
    ("darkgrey", "#a9a9a9"),
    ("lightgray", "#d3d3d3"),
    ("lightgrey", "#d3d3d3"),
    ("silver", "#c0c0c0"),
    ("maroon", "#800000"),
    ("olive", "#808000"),
    ("lime", "#00ff00"),
    ("teal", "#008080"),
    ("navy", "#000080"),
    ("purple", "#800080"),
    ("orange", "#ffa500"),
    ("brown", "#a52a2a"),
    ("pink", "#ffc0cb"),
    ("gold", "#ffd700"),
    ("indigo", "#4b0082"),
    ("violet", "#ee82ee"),
    ("tan", "#d2b48c"),
];

/// Default darkest brightness factor of a color scale.
pub const SCALE_LOW: f64 = 0.4;

/// Default brightest brightness factor of a color scale.
pub const SCALE_HIGH: f64 = 0.9;

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").expect("Invalid regex"));

/// An RGB color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `#rgb`, a single-letter base color
    /// (`b g r c m y k w`) or one of the common CSS names in
    /// [`NAMED_COLORS`] (case-insensitive).
    ///
    /// # Errors
    /// Returns an invalid color error for anything else.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if let Some(color) = base_color(spec) {
            return Ok(color);
        }
        if let Some((_, hex)) = NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(spec))
        {
            return Self::parse(hex);
        }
        let caps = HEX_PATTERN
            .captures(spec)
            .ok_or_else(|| PaperPlotError::InvalidColor(spec.to_string()))?;
        let digits = &caps[1];
        let channel = |hex: &str| -> Result<f64> {
            let value = u8::from_str_radix(hex, 16)
                .map_err(|_| PaperPlotError::InvalidColor(spec.to_string()))?;
            Ok(f64::from(value) / 255.0)
        };
        if digits.len() == 3 {
            let doubled: Vec<String> = digits.chars().map(|c| c.to_string().repeat(2)).collect();
            Ok(Self::new(
                channel(&doubled[0])?,
                channel(&doubled[1])?,
                channel(&doubled[2])?,
            ))
        } else {
            Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ))
        }
    }

    /// Builds a color from channel fractions.
    ///
    /// # Errors
    /// Returns an invalid color error when a channel is outside [0, 1].
    pub fn from_fractions(channels: [f64; 3]) -> Result<Self> {
        if channels.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(PaperPlotError::InvalidColor(format!("{channels:?}")));
        }
        Ok(Self::new(channels[0], channels[1], channels[2]))
    }

    #[must_use]
    pub fn max_channel(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Lowercase `#rrggbb`, rounding each channel to the nearest step.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }

    /// Channels as 0-255 bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to 0..=255
fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn base_color(name: &str) -> Option<Rgb> {
    let color = match name {
        "b" => Rgb::new(0.0, 0.0, 1.0),
        "g" => Rgb::new(0.0, 0.5, 0.0),
        "r" => Rgb::new(1.0, 0.0, 0.0),
        "c" => Rgb::new(0.0, 0.75, 0.75),
        "m" => Rgb::new(0.75, 0.0, 0.75),
        "y" => Rgb::new(0.75, 0.75, 0.0),
        "k" => Rgb::BLACK,
        "w" => Rgb::new(1.0, 1.0, 1.0),
        _ => return None,
    };
    Some(color)
}

/// A color as written by callers: a string (hex or base letter) or an
/// `[r, g, b]` triple of fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Named(String),
    Fractions([f64; 3]),
}

impl ColorSpec {
    /// # Errors
    /// Returns an invalid color error when the color cannot be parsed.
    pub fn resolve(&self) -> Result<Rgb> {
        match self {
            Self::Named(name) => Rgb::parse(name),
            Self::Fractions(channels) => Rgb::from_fractions(*channels),
        }
    }

    /// Whether this entry disables the color (`"none"`).
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::Named(name) if name.eq_ignore_ascii_case("none"))
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

/// The first `count` colors of [`COLOR_SET`].
///
/// # Errors
/// Returns an invalid parameter error when `count` exceeds the palette.
pub fn default_colors(count: usize) -> Result<Vec<Rgb>> {
    if count > COLOR_SET.len() {
        return Err(PaperPlotError::invalid_parameter(
            "colors",
            format!("<default, {count} entries>"),
            format!("not enough default colors ({} available)", COLOR_SET.len()),
        ));
    }
    COLOR_SET[..count].iter().map(|hex| Rgb::parse(hex)).collect()
}

/// Brightness ramp of `base`, from dark (`low`) to bright (`high`).
///
/// The base is first normalized so its strongest channel is 1, then scaled
/// by `num` evenly spaced factors from `low` to `high` inclusive. A black
/// base yields a gray ramp.
///
/// # Errors
/// Returns an invalid parameter error when `low` or `high` is outside [0, 1].
pub fn color_scale(base: &Rgb, num: usize, low: f64, high: f64) -> Result<Vec<Rgb>> {
    for (name, value) in [("low", low), ("high", high)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(PaperPlotError::invalid_parameter(
                name,
                value,
                "brightness must be between 0 and 1",
            ));
        }
    }

    let max = base.max_channel();
    let unit = if max > 0.0 {
        Rgb::new(base.r / max, base.g / max, base.b / max)
    } else {
        Rgb::new(1.0, 1.0, 1.0)
    };

    Ok(linspace(low, high, num)
        .into_iter()
        .map(|s| Rgb::new(unit.r * s, unit.g * s, unit.b * s))
        .collect())
}

#[allow(clippy::cast_precision_loss)] // Ramp lengths are tiny
fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { step.mul_add(i as f64, start) })
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
