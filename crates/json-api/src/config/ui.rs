//! Dashboard Config

use std::path::PathBuf;

use clap::Args;

/// Dashboard asset settings.
#[derive(Debug, Args)]
pub struct UiConfig {
    /// Directory holding the built dashboard, served at `/` when set
    #[arg(long, env = "UI_STATIC_DIR")]
    pub ui_static_dir: Option<PathBuf>,
}
