//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Orbit map analyzer: orbit count checksums, shortest transfer paths, and terminal tree views
#[derive(Parser, Debug)]
#[command(name = "orbitmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version info
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the total orbit count checksum
    Orbits {
        /// Orbit map file, one PARENT)CHILD relation per line
        #[arg(value_hint = ValueHint::FilePath)]
        map_file: PathBuf,
    },

    /// Print the shortest transfer route between two orbit targets
    Transfers {
        /// Orbit map file
        #[arg(value_hint = ValueHint::FilePath)]
        map_file: PathBuf,

        /// Start body id (default from config, conventionally YOU)
        #[arg(short, long)]
        from: Option<String>,

        /// Destination body id (default from config, conventionally SAN)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Show the orbit map as a tree
    Tree {
        /// Orbit map file
        #[arg(value_hint = ValueHint::FilePath)]
        map_file: PathBuf,
    },

    /// List leaf bodies (bodies nothing orbits)
    Leaves {
        /// Orbit map file
        #[arg(value_hint = ValueHint::FilePath)]
        map_file: PathBuf,
    },

    /// Show map statistics: body count, root, depth, orbit checksum
    Stats {
        /// Orbit map file
        #[arg(value_hint = ValueHint::FilePath)]
        map_file: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config path
    Path,
}
