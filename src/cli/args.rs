//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Build element trees incrementally and render them as markup or class declarations
#[derive(Parser, Debug)]
#[command(name = "rsbuilder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a tag-style element tree
    ///
    /// Each child is `NAME=TEXT`. Leading `>` characters nest the child under the
    /// most recent element one level up, e.g. `-c li=one -c '>em=bold'`.
    Html {
        /// Root element name
        root: String,
        /// Child element as NAME=TEXT (repeatable, order preserved)
        #[arg(short = 'c', long = "child", value_name = "NAME=TEXT")]
        children: Vec<String>,
        /// Spaces per nesting level (default from config)
        #[arg(long)]
        indent: Option<usize>,
        /// Write to file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Render a class declaration with constructor fields
    Code {
        /// Class name
        class: String,
        /// Field as NAME=VALUE (repeatable, order preserved)
        #[arg(short = 'f', long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
        /// Spaces per nesting level (default from config)
        #[arg(long)]
        indent: Option<usize>,
        /// Write to file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Show the structure of an element tree
    Outline {
        /// Root element name
        root: String,
        /// Child element as NAME=TEXT, same syntax as `html`
        #[arg(short = 'c', long = "child", value_name = "NAME=TEXT")]
        children: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print the global config file location
    Path,
}
