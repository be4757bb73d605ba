//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - initializes logging
//! - runs the fit pipeline
//! - prints summaries/plots
//! - writes outputs and optional exports

use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Command, FitArgs, PlotArgs, SampleArgs};
use crate::data::{SampleConfig, generate_sample};
use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `bzfit` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may provide BZFIT_* defaults; a missing file is fine.
    dotenvy::dotenv().ok();

    // `bzfit points.csv` is shorthand for `bzfit fit --input points.csv`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);

    init_logging(cli.verbose);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Sample(args) => handle_sample(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    // RUST_LOG wins over the flag.
    builder.parse_default_env();
    let _ = builder.try_init();
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    // Points go to stdout by default, so the summary and plot go to stderr.
    if config.plot {
        eprintln!(
            "{}",
            crate::report::format_fit_summary(
                &run.ingest,
                run.fitted_stats.as_ref(),
                run.spline_size,
                &config
            )
        );
        eprintln!(
            "{}",
            crate::plot::render_ascii_plot(
                &run.ingest.points,
                &run.fitted,
                config.plot_width,
                config.plot_height
            )
        );
    }

    crate::io::export::write_points(config.output_path.as_deref(), &run.fitted, config.output_format)?;

    if let Some(path) = &config.export_curve {
        let curve = crate::io::curve::build_curve_file(
            config.fitter,
            run.spline_size,
            &run.ingest.points,
            &run.fitted,
        );
        crate::io::curve::write_curve_json(path, &curve)?;
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = SampleConfig {
        count: args.count,
        seed: args.seed,
        x_min: args.x_min,
        x_max: args.x_max,
        amplitude: args.amplitude,
        cycles: args.cycles,
        noise: args.noise,
    };
    let points = generate_sample(&config)?;
    log::debug!("generated {} sample points (seed {})", points.len(), config.seed);

    crate::io::export::write_points(args.output.as_deref(), &points, args.output_format)
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_ascii_plot_from_curve_file(&curve, args.width, args.height);

    println!("{plot}");
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        input_path: args.input.clone(),
        input_format: args.format,
        fitter: args.fitter,
        spline_size: args.spline_size,
        output_path: args.output.clone(),
        output_format: args.output_format,
        export_curve: args.export_curve.clone(),
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
    }
}

/// Rewrite argv so a bare input path means `fit --input <path>`.
///
/// Rules:
/// - `bzfit`                     -> unchanged (clap prints usage)
/// - `bzfit pts.csv ...`         -> `bzfit fit --input pts.csv ...`
/// - `bzfit <subcommand> ...`    -> unchanged
/// - `bzfit -v/--help/...`       -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_subcommand = matches!(arg1.as_str(), "fit" | "sample" | "plot" | "help");
    if is_subcommand || arg1.starts_with('-') {
        return argv;
    }

    argv.splice(1..1, ["fit".to_string(), "--input".to_string()]);
    argv
}
