//! The SRG symbol-table format
//!
//! One explicit record per line, with both domains' full names inline:
//!
//! ```text
//! CL: com/example/Foo a/b
//! MD: com/example/Foo/run (I)V a/b/m0 (I)V
//! FD: com/example/Foo/count a/b/f0
//! ```
//!
//! Member lines carry their parent's name in both domains, so classes are
//! registered implicitly even when no `CL:` line precedes them.

use crate::core::error::{Error, Result};
use crate::format::{MappingFormat, ResolveContext};
use crate::mapper::{Mapper, Remapper};
use crate::model::SymbolTable;
use tracing::{debug, warn};

pub struct SrgFormat;

impl MappingFormat for SrgFormat {
    fn name(&self) -> &'static str {
        "srg"
    }

    fn claim(&self, lines: &[String]) -> bool {
        let Some(first) = lines.first() else {
            return false;
        };
        let tokens: Vec<&str> = first.split_whitespace().collect();
        tokens.len() <= 5
            && matches!(tokens.first(), Some(&"CL:") | Some(&"MD:") | Some(&"FD:"))
    }

    fn parse(
        &self,
        lines: &[String],
        ignore_errors: bool,
        _ctx: &ResolveContext<'_>,
    ) -> Result<Box<dyn Remapper>> {
        let mut table = SymbolTable::default();
        for (index, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if let Err(reason) = parse_line(&mut table, line) {
                if ignore_errors {
                    warn!(line = index + 1, reason, "skipping malformed srg line");
                    continue;
                }
                return Err(Error::MalformedInput {
                    line: index + 1,
                    reason: reason.to_string(),
                });
            }
        }
        debug!(classes = table.len(), "parsed srg mappings");
        Ok(Box::new(Mapper::new(table)))
    }
}

fn parse_line(table: &mut SymbolTable, line: &str) -> std::result::Result<(), &'static str> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens[0] {
        "CL:" => {
            if tokens.len() != 3 {
                return Err("wrong number of space-separated tokens");
            }
            table.add_class(tokens[1], tokens[2]);
            Ok(())
        }
        "MD:" => {
            if tokens.len() != 5 {
                return Err("wrong number of space-separated tokens");
            }
            add_method(table, tokens[1], tokens[2], tokens[3], tokens[4])
        }
        "FD:" => {
            if tokens.len() != 3 {
                return Err("wrong number of space-separated tokens");
            }
            add_field(table, tokens[1], tokens[2])
        }
        _ => Err("unknown record prefix"),
    }
}

fn add_method(
    table: &mut SymbolTable,
    path: &str,
    descriptor: &str,
    mapped_path: &str,
    mapped_descriptor: &str,
) -> std::result::Result<(), &'static str> {
    let (parent, name) = split_member_path(path)?;
    let (mapped_parent, mapped_name) = split_member_path(mapped_path)?;
    // the mapped descriptor is redundant with the class table; validate shape only
    if !descriptor.starts_with('(') || !mapped_descriptor.starts_with('(') {
        return Err("method record without method descriptor");
    }
    table
        .add_class(parent, mapped_parent)
        .add_method(name, mapped_name, descriptor);
    Ok(())
}

fn add_field(
    table: &mut SymbolTable,
    path: &str,
    mapped_path: &str,
) -> std::result::Result<(), &'static str> {
    let (parent, name) = split_member_path(path)?;
    let (mapped_parent, mapped_name) = split_member_path(mapped_path)?;
    table
        .add_class(parent, mapped_parent)
        .add_field(name, mapped_name, None);
    Ok(())
}

/// Splits `com/example/Foo/member` into parent internal name and member name
fn split_member_path(path: &str) -> std::result::Result<(&str, &str), &'static str> {
    path.rsplit_once('/').ok_or("member path without parent class")
}
