//! Brandkit CLI - generates the brand package
//!
//! With no arguments, writes every asset into the current directory
//! and prints the resulting file list.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use brandkit_core::{fonts::DEFAULT_FONT_DIR, list_assets, BrandPipeline, PipelineConfig, BRAND_NAME};

#[derive(Parser)]
#[command(name = "brandkit-cli")]
#[command(about = "Brandkit CLI - Brand Asset Generator")]
struct Cli {
    /// Directory the assets are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Root of the preferred font files (inter/, roboto/)
    #[arg(long, default_value = DEFAULT_FONT_DIR)]
    font_dir: PathBuf,

    /// Do not discover installed fonts
    #[arg(long)]
    no_system_fonts: bool,

    /// Write a JSON build report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("brandkit_core={default_level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let pipeline = BrandPipeline::new(PipelineConfig {
        out_dir: cli.out_dir.clone(),
        font_dir: cli.font_dir,
        system_fonts: !cli.no_system_fonts,
    });

    let report = match pipeline.run() {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "Brand package generation failed");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &cli.report {
        let written = report
            .to_json_pretty()
            .and_then(|json| fs::write(path, json).map_err(Into::into));
        if let Err(e) = written {
            tracing::error!(path = %path.display(), error = %e, "Failed to write build report");
            return ExitCode::FAILURE;
        }
    }

    let files = match list_assets(&cli.out_dir) {
        Ok(files) => files,
        Err(e) => {
            tracing::error!(error = %e, "Failed to list output directory");
            return ExitCode::FAILURE;
        }
    };

    println!("\n{BRAND_NAME} Brand Package Complete!");
    println!("Generated files:");
    for file in files {
        println!("   - {file}");
    }
    if !report.is_complete() {
        println!("Skipped:");
        for s in &report.skipped {
            println!("   - {} ({})", s.filename, s.reason);
        }
    }

    ExitCode::SUCCESS
}
