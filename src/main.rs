use std::fs;
use std::path::Path;

use clap::Parser;

use paperplot::chart::BarChartPlan;
use paperplot::cli::{Cli, Commands, FigsizeArgs, LayoutArgs, PaletteArgs, PlanArgs};
use paperplot::color::{ColorSpec, SCALE_HIGH, SCALE_LOW, color_scale, default_colors};
use paperplot::config::{ChartFile, ChartLoader, FileChartLoader};
use paperplot::layout::layout;
use paperplot::style::fig_dims;
use paperplot::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_ERROR, PaperPlotError};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Layout(args) => run_layout(args, &cli),
        Commands::Plan(args) => run_plan(args, &cli),
        Commands::Palette(args) => run_palette(args, &cli),
        Commands::Figsize(args) => run_figsize(args, &cli),
    };

    let exit_code = match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    };
    std::process::exit(exit_code);
}

const fn exit_code_for(err: &PaperPlotError) -> i32 {
    if err.is_validation() {
        EXIT_VALIDATION_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}

fn load_chart(path: &Path) -> paperplot::Result<ChartFile> {
    FileChartLoader::new().load_from_path(path)
}

fn run_layout(args: &LayoutArgs, cli: &Cli) -> paperplot::Result<()> {
    let chart = load_chart(&args.chart)?;
    let result = layout(&chart.table()?, &chart.layout)?;

    let output = args.format.formatter(cli.color.into()).format_layout(&result)?;
    write_output(args.output.as_deref(), &output, cli.quiet)
}

fn run_plan(args: &PlanArgs, cli: &Cli) -> paperplot::Result<()> {
    let chart = load_chart(&args.chart)?;
    let plan = BarChartPlan::build(
        &chart.table()?,
        &chart.layout,
        &chart.chart_spec(),
        args.anchor.into(),
    )?;
    let style = chart.plot_style()?;

    let output = args
        .format
        .formatter(cli.color.into())
        .format_plan(&plan, &style)?;
    write_output(args.output.as_deref(), &output, cli.quiet)
}

fn run_palette(args: &PaletteArgs, cli: &Cli) -> paperplot::Result<()> {
    let colors = match &args.base {
        None => default_colors(args.count)?,
        Some(base) => {
            let base = ColorSpec::from(base.as_str()).resolve()?;
            color_scale(
                &base,
                args.count,
                args.low.unwrap_or(SCALE_LOW),
                args.high.unwrap_or(SCALE_HIGH),
            )?
        }
    };

    let output = args.format.formatter(cli.color.into()).format_palette(&colors)?;
    write_output(None, &output, cli.quiet)
}

fn run_figsize(args: &FigsizeArgs, cli: &Cli) -> paperplot::Result<()> {
    if !args.width_pt.is_finite() || args.width_pt <= 0.0 {
        return Err(PaperPlotError::InvalidParameter {
            name: "width_pt".to_string(),
            value: args.width_pt.to_string(),
            reason: "must be a positive number".to_string(),
        });
    }
    let size = fig_dims(args.width_pt);

    let output = args
        .format
        .formatter(cli.color.into())
        .format_fig_size(args.width_pt, &size)?;
    write_output(None, &output, cli.quiet)
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> paperplot::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
