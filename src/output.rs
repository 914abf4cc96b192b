//! Output formatting for CLI results

use crate::cli::OutputFormat;
use serde::Serialize;

/// A resolved lookup, ready for printing
#[derive(Debug, Serialize)]
pub struct LookupResult {
    /// "class", "method" or "field"
    pub kind: &'static str,
    /// The qualified name as queried
    pub query: String,
    /// The translated name
    pub mapped: String,
    /// Whether the lookup ran target-to-source
    pub reverse: bool,
}

/// Formats a lookup result for output
pub fn format_lookup(result: &LookupResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => {
            format!("{} {} -> {}\n", result.kind, result.query, result.mapped)
        }
        OutputFormat::Json => json(result),
    }
}

/// A probe outcome: the formats able to read a resource
#[derive(Debug, Serialize)]
pub struct ProbeResult {
    pub resource: String,
    pub formats: Vec<&'static str>,
}

/// Formats a probe result for output
pub fn format_probe(result: &ProbeResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => {
            if result.formats.is_empty() {
                format!("{}: no format claims this resource\n", result.resource)
            } else {
                format!("{}: {}\n", result.resource, result.formats.join(", "))
            }
        }
        OutputFormat::Json => json(result),
    }
}

// Serialization of these plain structs cannot fail.
fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .map(|s| s + "\n")
        .unwrap_or_default()
}
