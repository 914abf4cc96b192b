//! The chain pseudo-format
//!
//! Not a mapping grammar of its own: after the sentinel header, every line is
//! a resource reference (local path or URL). Each reference is fetched,
//! resolved through the registry like any other input, and appended to a
//! [`ChainMapper`] in file order.
//!
//! ```text
//! remap chain
//! mappings/official-to-srg.tsrg
//! https://example.com/srg-to-named.tiny
//! ```

use crate::core::error::Result;
use crate::format::{MappingFormat, ResolveContext};
use crate::mapper::chain::ChainMapper;
use crate::mapper::Remapper;
use tracing::info;

/// First-line sentinel identifying a chain file
pub const CHAIN_SENTINEL: &str = "remap chain";

pub struct ChainFormat;

impl MappingFormat for ChainFormat {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn claim(&self, lines: &[String]) -> bool {
        lines
            .first()
            .map(|l| l.trim_end() == CHAIN_SENTINEL)
            .unwrap_or(false)
    }

    fn parse(
        &self,
        lines: &[String],
        ignore_errors: bool,
        ctx: &ResolveContext<'_>,
    ) -> Result<Box<dyn Remapper>> {
        let mut links: Vec<Box<dyn Remapper>> = Vec::new();
        for location in lines.iter().skip(1) {
            let location = location.trim();
            if location.is_empty() {
                continue;
            }
            let data = ctx.loader.fetch(location)?;
            let format = ctx.registry.select(&data)?;
            info!(format = format.name(), location, "resolving chained resource");
            links.push(format.parse(&data, ignore_errors, ctx)?);
        }
        Ok(Box::new(ChainMapper::new(links)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::core::resource::testing::MemoryLoader;
    use crate::format::registry::FormatRegistry;

    fn loader() -> MemoryLoader {
        MemoryLoader::new(&[
            ("first.srg", "CL: a b"),
            ("second.tsrg", "tsrg2 left right\nb c"),
            ("broken.srg", "CL: a"),
        ])
    }

    fn chain_lines(refs: &[&str]) -> Vec<String> {
        let mut lines = vec![CHAIN_SENTINEL.to_string()];
        lines.extend(refs.iter().map(|r| r.to_string()));
        lines
    }

    #[test]
    fn test_claim_is_exact_sentinel() {
        assert!(ChainFormat.claim(&chain_lines(&[])));
        assert!(!ChainFormat.claim(&["remap chains".to_string()]));
        assert!(!ChainFormat.claim(&["CL: a b".to_string()]));
    }

    #[test]
    fn test_references_resolve_in_order() {
        let registry = FormatRegistry::with_default_formats();
        let loader = loader();
        let ctx = ResolveContext {
            registry: &registry,
            loader: &loader,
        };
        let mapper = ChainFormat
            .parse(&chain_lines(&["first.srg", "second.tsrg"]), false, &ctx)
            .unwrap();
        assert_eq!(mapper.map_class("a").unwrap(), "c");
        assert_eq!(mapper.unmap_class("c").unwrap(), "a");
    }

    #[test]
    fn test_missing_reference_fails_resolution() {
        let registry = FormatRegistry::with_default_formats();
        let loader = loader();
        let ctx = ResolveContext {
            registry: &registry,
            loader: &loader,
        };
        let result = ChainFormat.parse(&chain_lines(&["nope.srg"]), false, &ctx);
        match result {
            Err(Error::InvalidResource { location }) => assert_eq!(location, "nope.srg"),
            other => panic!("expected invalid-resource, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_child_errors_propagate() {
        let registry = FormatRegistry::with_default_formats();
        let loader = loader();
        let ctx = ResolveContext {
            registry: &registry,
            loader: &loader,
        };
        assert!(ChainFormat
            .parse(&chain_lines(&["broken.srg"]), false, &ctx)
            .is_err());
        // lenient parsing flows down into chained resources
        assert!(ChainFormat
            .parse(&chain_lines(&["broken.srg"]), true, &ctx)
            .is_ok());
    }
}
