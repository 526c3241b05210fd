use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use vitrine::core::config;
use vitrine::core::page::ViewportClass;
use vitrine::tui;

#[derive(Parser)]
#[command(name = "vitrine", about = "Terminal kiosk for an image portfolio deck")]
struct Args {
    /// Root directory the catalog's image paths resolve under
    #[arg(long)]
    photos: Option<PathBuf>,

    /// Page shown on startup ("home", "page-3", or a bare number)
    #[arg(long)]
    page: Option<String>,

    /// Force the wide layout regardless of terminal width
    #[arg(long, conflicts_with = "compact")]
    wide: bool,

    /// Force the compact layout regardless of terminal width
    #[arg(long)]
    compact: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to vitrine.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("vitrine.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Vitrine starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Err(std::io::Error::other(e));
        }
    };
    let viewport = if args.wide {
        Some(ViewportClass::Wide)
    } else if args.compact {
        Some(ViewportClass::Compact)
    } else {
        None
    };
    let resolved = config::resolve(
        &file_config,
        args.photos.as_deref().and_then(|p| p.to_str()),
        args.page.as_deref(),
        viewport,
    );
    log::info!(
        "resolved config: photos={}, start={}",
        resolved.photo_root.display(),
        resolved.start_page.label()
    );

    tui::run(resolved)
}
