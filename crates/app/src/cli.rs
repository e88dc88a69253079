use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "reelmark",
    version,
    about = "Browse tagged intervals of playthrough recordings and preview their clips"
)]
pub struct Cli {
    /// Catalog JSON file. The bundled demo catalog is used when omitted.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// TOML config file. Defaults to ./reelmark.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the preview clips.
    #[arg(long = "assets")]
    pub assets: Option<PathBuf>,

    /// Preview clip extension, e.g. gif or mp4.
    #[arg(long = "ext")]
    pub extension: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}
