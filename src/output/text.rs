use std::fmt::Write;

use indexmap::IndexMap;

use crate::chart::{BarAnchor, BarChartPlan, SeriesPlan};
use crate::color::Rgb;
use crate::error::Result;
use crate::layout::{LayoutResult, Rect};
use crate::style::{FigSize, PlotStyle};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

mod ansi {
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::BOLD, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Two-cell block painted in `color`, or nothing without colors.
    fn swatch(&self, color: &Rgb) -> String {
        if !self.use_colors {
            return String::new();
        }
        let [r, g, b] = color.to_bytes();
        format!("\x1b[48;2;{r};{g};{b}m  {} ", ansi::RESET)
    }

    fn write_fields(output: &mut String, fields: &IndexMap<&str, String>) {
        let width = fields.keys().map(|k| k.len()).max().unwrap_or(0);
        for (key, value) in fields {
            writeln!(output, "  {key:<width$}  {value}").ok();
        }
    }

    fn write_series(&self, output: &mut String, series: &SeriesPlan) {
        let name = series
            .name
            .as_deref()
            .map_or_else(String::new, |n| format!(" \"{n}\""));
        let edge = series
            .edge
            .map_or_else(|| "none".to_string(), |c| c.to_hex());
        let hatch = series
            .hatch
            .as_ref()
            .map_or_else(|| "none".to_string(), |h| format!("{} ({})", h.pattern, h.color));
        writeln!(
            output,
            "entry {}{name}: {}fill {} edge {edge} linewidth {} hatch {hatch}",
            series.entry,
            self.swatch(&series.fill),
            series.fill,
            series.linewidth,
        )
        .ok();
        for (g, bar) in series.bars.iter().enumerate() {
            writeln!(output, "  group {g}: x={:.4} {}", bar.x, rect_text(&bar.rect)).ok();
        }
    }
}

fn rect_text(rect: &Rect) -> String {
    format!(
        "left={:.4} bottom={:.4} width={:.4} height={:.4}",
        rect.left, rect.bottom, rect.width, rect.height
    )
}

fn xlim_text(xlim: [f64; 2]) -> String {
    format!("[{}, {}]", xlim[0], xlim[1])
}

fn layout_fields(layout: &LayoutResult) -> IndexMap<&'static str, String> {
    let mut fields = IndexMap::new();
    fields.insert("mode", format!("{:?}", layout.mode()).to_lowercase());
    fields.insert(
        "shape",
        format!("{} group(s) x {} entry(ies)", layout.num_groups(), layout.num_entries()),
    );
    fields.insert("bar width", layout.bar_width().to_string());
    fields.insert("slot width", layout.slot_width().to_string());
    fields.insert("cluster shrink", layout.cluster_shrink().to_string());
    fields.insert("xlim", xlim_text(layout.xlim()));
    fields
}

impl OutputFormatter for TextFormatter {
    fn format_layout(&self, layout: &LayoutResult) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "{}", self.heading("Layout")).ok();
        Self::write_fields(&mut output, &layout_fields(layout));

        for g in 0..layout.num_groups() {
            writeln!(output).ok();
            writeln!(output, "group {g} (x = {})", layout.xticks()[g]).ok();
            for (e, rect) in layout.group_rects(g).enumerate() {
                writeln!(output, "  entry {e}: {}", rect_text(&rect)).ok();
            }
        }
        Ok(output)
    }

    fn format_plan(&self, plan: &BarChartPlan, style: &PlotStyle) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "{}", self.heading("Bar chart plan")).ok();

        let mut fields = layout_fields(plan.layout());
        let anchor = match plan.anchor {
            BarAnchor::LeftEdge => "left edge",
            BarAnchor::Center => "center",
        };
        fields.insert("anchor", anchor.to_string());
        fields.insert("log scale", plan.log_scale.to_string());
        if let Some(ticks) = &plan.xtick_labels {
            fields.insert(
                "xtick labels",
                format!("{} (rotation {})", ticks.labels.join(", "), ticks.rotation.degrees()),
            );
        }
        if let Some(legend) = &plan.legend {
            fields.insert(
                "legend",
                format!(
                    "{} ({}, {} column(s))",
                    legend.labels.join(", "),
                    legend.loc,
                    legend.columns
                ),
            );
        }
        let font = if style.font_names.is_empty() {
            style.font_family.to_string()
        } else {
            format!("{} ({})", style.font_family, style.font_names.join(", "))
        };
        fields.insert("font", format!("{font}, {}pt", style.font_size));
        Self::write_fields(&mut output, &fields);

        for series in &plan.series {
            writeln!(output).ok();
            self.write_series(&mut output, series);
        }
        Ok(output)
    }

    fn format_palette(&self, colors: &[Rgb]) -> Result<String> {
        let mut output = String::new();
        for (i, color) in colors.iter().enumerate() {
            let [r, g, b] = color.to_bytes();
            writeln!(output, "{i:>3}  {}{color}  rgb({r}, {g}, {b})", self.swatch(color)).ok();
        }
        Ok(output)
    }

    fn format_fig_size(&self, width_pt: f64, size: &FigSize) -> Result<String> {
        Ok(format!(
            "{width_pt}pt -> {:.4} x {:.4} in\n",
            size.width, size.height
        ))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
