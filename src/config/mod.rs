pub mod layout;
pub mod storage;

use clap::Parser;

pub use layout::LayoutConfig;
pub use storage::LocalStorage;

#[derive(Debug, Clone, Parser)]
#[command(name = "check-extension")]
#[command(about = "Health check for a browser extension directory")]
pub struct CheckerArgs {
    /// Extension directory to audit
    #[arg(long, default_value = ".")]
    pub dir: String,

    /// Layout override file, resolved inside the audited directory
    #[arg(long, default_value = "extension-check.toml")]
    pub config: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "generate-icons")]
#[command(about = "Generate placeholder icons for a browser extension")]
pub struct GeneratorArgs {
    /// Extension directory that receives the icons/ output
    #[arg(long, default_value = ".")]
    pub dir: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
