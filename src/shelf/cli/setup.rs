use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(about = "Keep track of the books on your shelf", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $SHELF_HOME, then the platform data dir)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the books on the shelf
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a book (missing fields count as empty)
    #[command(alias = "a", display_order = 2)]
    Add {
        /// Book title
        #[arg(short, long)]
        title: Option<String>,

        /// Book author
        #[arg(short, long)]
        author: Option<String>,

        /// ISBN, unique on the shelf
        #[arg(short, long)]
        isbn: Option<String>,
    },

    /// Remove a book by ISBN
    #[command(alias = "rm", display_order = 3)]
    Delete {
        /// ISBN of the book to remove
        isbn: String,
    },

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (slot-key, on-corrupt)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
