use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use screenshot_creator::{
    default_destination, DeviceCatalog, DeviceSpec, FontResolver, Result, ScreenshotConfig,
    ScreenshotCreator,
};

/// Frame app screenshots in device bezels with a caption
#[derive(Parser, Debug)]
#[command(name = "screenshot-creator", version, about)]
struct Cli {
    /// Directory with the raw screenshots
    #[arg(long, default_value = "Screenshots")]
    screenshots: PathBuf,

    /// Directory with the device bezel artwork
    #[arg(long, default_value = "Devices")]
    devices: PathBuf,

    /// JSON styling config (colors, font, titles)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font name or font file, overrides the config
    #[arg(long)]
    font: Option<String>,

    /// Extra directory to search for fonts
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Output directory [default: <documents>/ScreenshotCreator]
    #[arg(long)]
    out: Option<PathBuf>,

    /// Phone bezel artwork file name inside the devices directory
    #[arg(long)]
    phone_bezel: Option<String>,

    /// Tablet bezel artwork file name inside the devices directory
    #[arg(long)]
    tablet_bezel: Option<String>,

    /// Render everything but write nothing
    #[arg(long)]
    preview: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ScreenshotConfig::load(path)?,
        None => ScreenshotConfig::default(),
    };
    if let Some(font) = cli.font {
        config.font_name = font;
    }

    let mut phone = DeviceSpec::phone();
    if let Some(artwork) = cli.phone_bezel {
        phone.artwork = artwork;
    }
    let mut tablet = DeviceSpec::tablet();
    if let Some(artwork) = cli.tablet_bezel {
        tablet.artwork = artwork;
    }

    let catalog = DeviceCatalog::load_with(&cli.devices, &phone, &tablet)?;

    let mut fonts = FontResolver::new();
    if let Some(dir) = cli.font_dir {
        fonts = fonts.with_dir(dir);
    }
    let creator = ScreenshotCreator::new(catalog, &cli.screenshots).with_fonts(fonts);

    if cli.preview {
        let framed = creator.preview_all(&config)?;
        for f in &framed {
            info!("🖼  {} → {}x{}", f.identifier, f.image.width(), f.image.height());
        }
        info!("✅ Previewed {} screenshots", framed.len());
        return Ok(());
    }

    let destination = match cli.out {
        Some(dir) => dir,
        None => default_destination()?,
    };

    let report = creator.save_all(&config, &destination)?;
    info!(
        "✅ Framed {} screenshots, {} failed",
        report.written.len(),
        report.failed.len()
    );

    println!("$ open {}", report.destination.display());
    Ok(())
}
