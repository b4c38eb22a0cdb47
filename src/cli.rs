use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "repo-persona",
    version,
    about = "Developer persona classification from GitHub repository activity"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output (default: compact)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute personas, projects, radar, interests and top-10 aggregates
    Profile {
        /// Bundle file with {profile, owned, starred, as_of}
        #[arg(short, long)]
        input: Option<String>,

        /// JSON array of owned repos (instead of --input)
        #[arg(long, conflicts_with = "input")]
        owned: Option<String>,

        /// JSON array of starred repos (with --owned)
        #[arg(long, requires = "owned")]
        starred: Option<String>,

        /// JSON profile facts (with --owned)
        #[arg(long, requires = "owned")]
        profile: Option<String>,

        /// Activation threshold 0-100 (default: config, 45)
        #[arg(short, long)]
        threshold: Option<u8>,

        /// Reference time, RFC 3339 or YYYY-MM-DD (default: bundle, then now)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Compute profiles for many bundles (NDJSON output)
    Batch {
        /// Comma-separated bundle paths
        #[arg(long)]
        paths: Option<String>,

        /// File containing bundle paths, one per line
        #[arg(long, conflicts_with = "paths")]
        paths_file: Option<String>,

        /// Directory to scan for *.json bundles
        #[arg(long, conflicts_with_all = ["paths", "paths_file"])]
        dir: Option<String>,

        /// Glob pattern to filter files when using --dir (e.g. "users/*.json")
        #[arg(long, requires = "dir")]
        glob: Option<String>,

        /// Activation threshold 0-100 (default: config, 45)
        #[arg(short, long)]
        threshold: Option<u8>,

        /// Reference time applied to every bundle
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Score a single repo against every category
    Score {
        /// JSON file with one repo record
        #[arg(short, long)]
        repo: String,

        /// Include categories below the evidence floor
        #[arg(long)]
        all: bool,
    },

    /// List taxonomy categories
    Taxonomy {
        /// Only categories in this group (e.g. "language", "ai-ml")
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Check taxonomy integrity and persona coverage
    Doctor,

    /// NDJSON streaming session (stdin → stdout)
    Session,

    /// Start MCP (Model Context Protocol) server over stdio
    Mcp,

    /// Generate default configuration file
    Init {
        /// Path to write the configuration file (default: ~/.config/repo-persona/config.toml)
        #[arg(short, long)]
        path: Option<std::path::PathBuf>,
    },
}
