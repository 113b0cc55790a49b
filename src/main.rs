use artspace::ButtonPolicy;
use artspace::core::catalog::{Catalog, load_catalog};
use artspace::core::config::{self, ArtspaceConfig, CliOverrides};
use artspace::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "artspace", about = "Browse a small gallery of artworks in the terminal")]
struct Args {
    /// Catalog file (TOML, or JSON with a .json extension). Defaults to the built-in gallery
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// How Previous/Next look when they cannot move
    #[arg(short, long, value_enum)]
    buttons: Option<ButtonPolicy>,

    /// Where to write the log
    #[arg(long, default_value = "artspace.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Art Space starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}. Using defaults.");
        log::warn!("Config error: {}. Using defaults.", e);
        ArtspaceConfig::default()
    });
    let cli = CliOverrides {
        catalog_file: args.catalog,
        button_policy: args.buttons,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!(
        "Resolved config: catalog={:?}, buttons={}, show_position={}",
        resolved.catalog_file,
        resolved.button_policy.label(),
        resolved.show_position
    );

    let catalog = match &resolved.catalog_file {
        Some(path) => match load_catalog(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to load catalog {}: {}", path.display(), e);
                eprintln!("Error: {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Catalog::builtin(),
    };

    tui::run(resolved, catalog)
}
