//! Map command implementation

use crate::cli::{MapArgs, OutputFormat};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::resource::{HttpResourceLoader, ResourceLoader};
use crate::format::registry::FormatRegistry;
use crate::output::{self, LookupResult};
use tracing::info;

/// Run the map command
pub fn run(args: MapArgs) -> Result<()> {
    let config = Config::load()?;
    let lenient = args.lenient || config.general.lenient;
    let json = args.json || config.general.json;

    let loader = HttpResourceLoader;
    let lines = loader.fetch(&args.resource)?;

    let registry = FormatRegistry::with_default_formats();
    let mapper = registry.resolve(&lines, lenient, &loader)?;
    info!(resource = %args.resource, "resolved mapping resource");

    let result = if let Some(method) = &args.method {
        let descriptor = args.descriptor.as_deref();
        let mapped = if args.reverse {
            mapper.unmap_method(&args.class, method, descriptor)?
        } else {
            mapper.map_method(&args.class, method, descriptor)?
        };
        LookupResult {
            kind: "method",
            query: format!("{}::{}{}", args.class, method, descriptor.unwrap_or("")),
            mapped,
            reverse: args.reverse,
        }
    } else if let Some(field) = &args.field {
        let mapped = if args.reverse {
            mapper.unmap_field(&args.class, field)?
        } else {
            mapper.map_field(&args.class, field)?
        };
        LookupResult {
            kind: "field",
            query: format!("{}.{}", args.class, field),
            mapped,
            reverse: args.reverse,
        }
    } else {
        let mapped = if args.reverse {
            mapper.unmap_class(&args.class)?
        } else {
            mapper.map_class(&args.class)?
        };
        LookupResult {
            kind: "class",
            query: args.class.clone(),
            mapped,
            reverse: args.reverse,
        }
    };

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    print!("{}", output::format_lookup(&result, format));

    Ok(())
}
