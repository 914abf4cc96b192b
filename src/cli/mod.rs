//! CLI command definitions and handlers

pub mod map;
pub mod probe;

use clap::{Parser, Subcommand};

/// Translate identifiers between naming domains using bytecode mapping files
#[derive(Parser, Debug)]
#[command(name = "remap")]
#[command(author, version)]
#[command(about = "Translate class, method and field names across bytecode mapping files")]
#[command(after_help = "EXAMPLES:
    remap map joined.srg --class com/example/Foo
    remap map mappings.tiny --class com/example/Foo --method run --descriptor \"(I)V\"
    remap map mappings.tsrg --class a/b --reverse
    remap probe chain.txt

Set REMAP_LOG=debug for parser and registry tracing.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a class, method or field mapping
    #[command(visible_alias = "m")]
    Map(MapArgs),

    /// List the formats able to read a mapping resource
    #[command(visible_alias = "p")]
    Probe(ProbeArgs),
}

/// Arguments for the map command
#[derive(Parser, Debug)]
pub struct MapArgs {
    /// Mapping resource (local path or URL)
    pub resource: String,

    /// Internal name of the class to look up
    #[arg(short, long)]
    pub class: String,

    /// Method name to look up within the class
    #[arg(short, long, conflicts_with = "field")]
    pub method: Option<String>,

    /// Method descriptor, full or parameter-only prefix
    #[arg(short, long, requires = "method")]
    pub descriptor: Option<String>,

    /// Field name to look up within the class
    #[arg(short, long)]
    pub field: Option<String>,

    /// Translate from the target domain back to the source domain
    #[arg(short, long)]
    pub reverse: bool,

    /// Skip malformed mapping lines instead of aborting
    #[arg(short, long)]
    pub lenient: bool,

    /// JSON output
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the probe command
#[derive(Parser, Debug)]
pub struct ProbeArgs {
    /// Mapping resource (local path or URL)
    pub resource: String,

    /// JSON output
    #[arg(long)]
    pub json: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}
