mod args;

use acodraw_rs::logger;
use acodraw_rs::swatch_pipeline::AcoToTiffPipeline;
use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use args::Args;

fn run(args: &Args) -> anyhow::Result<()> {
    let output = args.output_path();

    info!("Input file: {}", args.input.display());
    info!("Output file: {}", output.display());
    info!("Canvas size (columns x rows): {}", args.canvas);
    info!("Cell size (width x height): {}", args.cell);

    let pipeline = AcoToTiffPipeline::new(args.render_config());
    info!("Compression: {:?}", pipeline.config().compression);

    let palette = pipeline
        .convert_file(&args.input, &output)
        .with_context(|| format!("converting {}", args.input.display()))?;

    info!("Rendered {} colors into {}", palette.len(), output.display());
    Ok(())
}

fn main() -> std::process::ExitCode {
    let args = Args::parse();
    logger::init();

    match run(&args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
