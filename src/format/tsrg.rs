//! The TSRG2 hierarchical format
//!
//! Member lines nest under a class header using indentation depth:
//!
//! ```text
//! tsrg2 left right
//! com/example/Foo a/b
//! \trun (I)V m0
//! \tcount f0
//! ```
//!
//! Depth 0 is a class header, depth 1 a member, depth 2 parameter metadata
//! (recognized and skipped, never an error). The member marker may be a tab
//! or a single space; a mix of both within one file is tolerated, each line
//! being judged on its own.

use crate::core::error::{Error, Result};
use crate::format::{MappingFormat, ResolveContext};
use crate::mapper::{Mapper, Remapper};
use crate::model::SymbolTable;
use tracing::{debug, warn};

pub struct TsrgFormat;

impl MappingFormat for TsrgFormat {
    fn name(&self) -> &'static str {
        "tsrg2"
    }

    fn claim(&self, lines: &[String]) -> bool {
        lines
            .first()
            .map(|l| l.starts_with("tsrg2 "))
            .unwrap_or(false)
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
                    warn!(line = index + 1, reason, "skipping malformed tsrg2 line");
                    continue;
                }
                return Err(Error::MalformedInput {
                    line: index + 1,
                    reason: reason.to_string(),
                });
            }
        }
        debug!(classes = table.len(), "parsed tsrg2 mappings");
        Ok(Box::new(Mapper::new(table)))
    }
}

fn parse_header(line: &str) -> std::result::Result<(), &'static str> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 || tokens[0] != "tsrg2" {
        return Err("header must declare exactly two namespaces");
    }
    Ok(())
}

fn parse_line(
    table: &mut SymbolTable,
    current: &mut Option<String>,
    line: &str,
) -> std::result::Result<(), &'static str> {
    let depth = line
        .bytes()
        .take_while(|&b| b == b'\t' || b == b' ')
        .count();
    if depth >= 2 {
        // parameter metadata, not supported by design
        return Ok(());
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if depth == 0 {
        if tokens.len() != 2 {
            return Err("wrong number of tokens in class header");
        }
        table.add_class(tokens[0], tokens[1]);
        *current = Some(tokens[0].to_string());
        return Ok(());
    }

    let Some(parent) = current else {
        return Err("class member without parent class");
    };
    let Some(class) = table.class_mut(parent) else {
        return Err("class member without parent class");
    };
    match tokens.len() {
        2 => {
            class.add_field(tokens[0], tokens[1], None);
            Ok(())
        }
        3 if tokens[1].starts_with('(') => {
            class.add_method(tokens[0], tokens[2], tokens[1]);
            Ok(())
        }
        _ => Err("wrong number of tokens in member line"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resource::testing::NullLoader;
    use crate::format::registry::FormatRegistry;

    fn parse(text: &str, ignore_errors: bool) -> Result<Box<dyn Remapper>> {
        let registry = FormatRegistry::new();
        let loader = NullLoader;
        let ctx = ResolveContext {
            registry: &registry,
            loader: &loader,
        };
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        TsrgFormat.parse(&lines, ignore_errors, &ctx)
    }

    const SAMPLE: &str = "tsrg2 left right
com/example/Foo a/b
\trun (Lcom/example/Bar;)V m0
\trun (I)V m1
\tcount f0
\t\t0 this this
com/example/Bar c
 other f1";

    #[test]
    fn test_claim() {
        let lines: Vec<String> = SAMPLE.lines().map(str::to_string).collect();
        assert!(TsrgFormat.claim(&lines));
        assert!(!TsrgFormat.claim(&["CL: a b".to_string()]));
    }

    #[test]
    fn test_parse_hierarchy() {
        let mapper = parse(SAMPLE, false).unwrap();
        assert_eq!(mapper.map_class("com/example/Foo").unwrap(), "a/b");
        assert_eq!(
            mapper
                .map_method("com/example/Foo", "run", Some("(I"))
                .unwrap(),
            "m1"
        );
        assert_eq!(mapper.map_field("com/example/Foo", "count").unwrap(), "f0");
        // space-indented member under the second class
        assert_eq!(mapper.map_field("com/example/Bar", "other").unwrap(), "f1");
    }

    #[test]
    fn test_parameter_metadata_is_skipped() {
        // the "\t\t0 this this" line must not error nor add members
        let mapper = parse(SAMPLE, false).unwrap();
        assert!(mapper.map_field("com/example/Foo", "this").is_err());
    }

    #[test]
    fn test_reverse_direction_derives_descriptors() {
        let mapper = parse(SAMPLE, false).unwrap();
        // only the source-domain descriptor is recorded; the reverse lookup
        // must resolve against the rewritten one
        assert_eq!(
            mapper
                .unmap_method("a/b", "m0", Some("(Lc;)V"))
                .unwrap(),
            "run"
        );
    }

    #[test]
    fn test_member_without_class_is_malformed() {
        let result = parse("tsrg2 left right\n\trun (I)V m0", false);
        match result {
            Err(Error::MalformedInput { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("parent class"));
            }
            other => panic!("expected malformed-input, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_bad_header_is_malformed() {
        assert!(parse("tsrg2 left mid right\na b", false).is_err());
    }

    #[test]
    fn test_lenient_mode_skips_bad_lines() {
        let mapper = parse("tsrg2 left right\ncom/example/Foo a/b extra\nx y", true).unwrap();
        assert!(mapper.map_class("com/example/Foo").is_err());
        assert_eq!(mapper.map_class("x").unwrap(), "y");
    }
}
