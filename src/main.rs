use clap::Parser;
use paintboard::backend::{self, RunOptions};
use paintboard::snapshot::SaveConfig;
use paintboard::toolbar::{MIN_SURFACE_HEIGHT, MIN_SURFACE_WIDTH};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paintboard")]
#[command(version, about = "Interactive raster paint surface")]
struct Cli {
    /// Surface width in pixels
    #[arg(long, default_value_t = 1200)]
    width: i32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 800)]
    height: i32,

    /// Directory snapshots are saved to (defaults to the pictures directory)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Snapshot filename template (chrono format specifiers)
    #[arg(long, value_name = "TEMPLATE")]
    template: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.width < MIN_SURFACE_WIDTH {
        anyhow::bail!("surface width must be at least {MIN_SURFACE_WIDTH} pixels");
    }
    if cli.height < MIN_SURFACE_HEIGHT {
        anyhow::bail!("surface height must be at least {MIN_SURFACE_HEIGHT} pixels");
    }

    let mut save = SaveConfig::default();
    if let Some(directory) = cli.output_dir {
        save.directory = directory;
    }
    if let Some(template) = cli.template {
        save.template = template;
    }

    log::info!("Starting paint surface ({}x{})", cli.width, cli.height);
    log::info!("Controls:");
    log::info!("  - Freehand: drag below the toolbar");
    log::info!("  - Line / Rectangle: pick the tool, then click twice");
    log::info!("  - Color dropper: pick the tool, then click a canvas pixel");
    log::info!("  - Brush size: +/- buttons or scroll wheel");
    log::info!("  - Save snapshot: SAVE button or S (to {})", save.directory.display());
    log::info!("  - Clear: CLEAR button or Escape");

    backend::run(RunOptions {
        width: cli.width,
        height: cli.height,
        save,
    })?;

    log::info!("Paint surface closed.");
    Ok(())
}
