//! Mapping file formats and the claim/priority contract
//!
//! Every format turns raw text lines into a populated mapper. A format first
//! gets a chance to `claim` the input with a cheap sniff of the header line;
//! the registry then picks the highest-priority claimant and asks it to
//! `parse`.

pub mod chain;
pub mod registry;
pub mod srg;
pub mod tiny;
pub mod tsrg;

use crate::core::error::Result;
use crate::core::resource::ResourceLoader;
use crate::mapper::Remapper;
use self::registry::FormatRegistry;

/// Collaborators available to a format while parsing.
///
/// Only the chain format uses them: every resource reference it encounters
/// is fetched through the loader and re-enters the registry.
pub struct ResolveContext<'a> {
    pub registry: &'a FormatRegistry,
    pub loader: &'a dyn ResourceLoader,
}

/// A mapping file format implementation
pub trait MappingFormat: Send + Sync {
    /// Short identifier used in logs and probe output
    fn name(&self) -> &'static str;

    /// Cheap syntactic sniff of the first line
    fn claim(&self, lines: &[String]) -> bool;

    /// Tie-break weight when several formats claim the same input; higher wins
    fn priority(&self) -> i32 {
        0
    }

    /// Parses the lines into a populated mapper.
    ///
    /// A line violating the format's grammar aborts with a malformed-input
    /// error carrying its 1-based line number, unless `ignore_errors` is set,
    /// in which case the line is skipped and parsing continues.
    fn parse(
        &self,
        lines: &[String],
        ignore_errors: bool,
        ctx: &ResolveContext<'_>,
    ) -> Result<Box<dyn Remapper>>;
}
