//! Probe command implementation

use crate::cli::{OutputFormat, ProbeArgs};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::resource::{HttpResourceLoader, ResourceLoader};
use crate::format::registry::FormatRegistry;
use crate::output::{self, ProbeResult};

/// Run the probe command
pub fn run(args: ProbeArgs) -> Result<()> {
    let config = Config::load()?;
    let json = args.json || config.general.json;

    let loader = HttpResourceLoader;
    let lines = loader.fetch(&args.resource)?;

    let registry = FormatRegistry::with_default_formats();
    let result = ProbeResult {
        resource: args.resource,
        formats: registry.probe(&lines, &loader),
    };

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    print!("{}", output::format_probe(&result, format));

    Ok(())
}
