//! The Tiny v2 versioned tab-delimited format
//!
//! ```text
//! tiny\t2\t0\tleft\tright
//! c\tcom/example/Foo\ta/b
//! \tm\t(I)V\trun\tm0
//! \tf\tI\tcount\tf0
//! ```
//!
//! The header names the format version and the two namespaces being mapped
//! between; exactly two are required. Member kinds are explicit (`m`/`f`)
//! and field descriptors are recorded. Depth 2 (parameter metadata) is
//! recognized and skipped.

use crate::core::error::{Error, Result};
use crate::format::{MappingFormat, ResolveContext};
use crate::mapper::{Mapper, Remapper};
use crate::model::SymbolTable;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^tiny\t2\t[0-9]+\t").expect("static regex")
});

pub struct TinyFormat;

impl MappingFormat for TinyFormat {
    fn name(&self) -> &'static str {
        "tinyv2"
    }

    fn claim(&self, lines: &[String]) -> bool {
        lines.first().map(|l| HEADER.is_match(l)).unwrap_or(false)
    }

    fn parse(
        &self,
        lines: &[String],
        ignore_errors: bool,
        _ctx: &ResolveContext<'_>,
    ) -> Result<Box<dyn Remapper>> {
        let mut table = SymbolTable::default();
        let mut current: Option<String> = None;

        for (index, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let result = if index == 0 {
                parse_header(line)
            } else {
                parse_line(&mut table, &mut current, line)
            };
            if let Err(reason) = result {
                if ignore_errors {
                    warn!(line = index + 1, reason, "skipping malformed tiny line");
                    continue;
                }
                return Err(Error::MalformedInput {
                    line: index + 1,
                    reason: reason.to_string(),
                });
            }
        }
        debug!(classes = table.len(), "parsed tiny v2 mappings");
        Ok(Box::new(Mapper::new(table)))
    }
}

fn parse_header(line: &str) -> std::result::Result<(), &'static str> {
    // tiny <major> <minor> <ns1> <ns2>, tab-separated
    let tokens: Vec<&str> = line.split('\t').collect();
    if tokens.len() != 5 {
        return Err("header must declare exactly two namespaces");
    }
    Ok(())
}

fn parse_line(
    table: &mut SymbolTable,
    current: &mut Option<String>,
    line: &str,
) -> std::result::Result<(), &'static str> {
    let depth = line.bytes().take_while(|&b| b == b'\t').count();
    if depth >= 2 {
        // parameter metadata, not supported by design
        return Ok(());
    }

    let tokens: Vec<&str> = line[depth..].split('\t').collect();
    if depth == 0 {
        if tokens[0] != "c" {
            return Err("root-level element must be a class");
        }
        if tokens.len() != 3 {
            return Err("wrong number of tab-separated tokens");
        }
        table.add_class(tokens[1], tokens[2]);
        *current = Some(tokens[1].to_string());
        return Ok(());
    }

    let Some(parent) = current else {
        return Err("class member without parent class");
    };
    let Some(class) = table.class_mut(parent) else {
        return Err("class member without parent class");
    };
    match tokens[0] {
        "m" if tokens.len() == 4 && tokens[1].starts_with('(') => {
            class.add_method(tokens[2], tokens[3], tokens[1]);
            Ok(())
        }
        "f" if tokens.len() == 4 => {
            class.add_field(tokens[2], tokens[3], Some(tokens[1]));
            Ok(())
        }
        _ => Err("unrecognized class member record"),
    }
}
