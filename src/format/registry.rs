//! Format selection by claim and priority
//!
//! The registry is an explicitly constructed, explicitly passed list of
//! format handlers; hosting applications may extend it with their own
//! implementations. There is no process-wide registry.

use crate::core::error::{Error, Result};
use crate::core::resource::ResourceLoader;
use crate::format::chain::ChainFormat;
use crate::format::srg::SrgFormat;
use crate::format::tiny::TinyFormat;
use crate::format::tsrg::TsrgFormat;
use crate::format::{MappingFormat, ResolveContext};
use crate::mapper::Remapper;
use tracing::debug;

/// Registered mapping format handlers
pub struct FormatRegistry {
    formats: Vec<Box<dyn MappingFormat>>,
}

impl FormatRegistry {
    /// An empty registry; useful when the host wants full control
    pub fn new() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// A registry holding every built-in format
    pub fn with_default_formats() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SrgFormat));
        registry.register(Box::new(TsrgFormat));
        registry.register(Box::new(TinyFormat));
        registry.register(Box::new(ChainFormat));
        registry
    }

    pub fn register(&mut self, format: Box<dyn MappingFormat>) {
        self.formats.push(format);
    }

    /// Picks the highest-priority format claiming the given lines
    pub fn select(&self, lines: &[String]) -> Result<&dyn MappingFormat> {
        self.formats
            .iter()
            .filter(|f| f.claim(lines))
            .max_by_key(|f| f.priority())
            .map(|f| f.as_ref())
            .ok_or(Error::UnclaimedResource)
    }

    /// Selects a format for the lines and parses them into a mapper
    pub fn resolve(
        &self,
        lines: &[String],
        ignore_errors: bool,
        loader: &dyn ResourceLoader,
    ) -> Result<Box<dyn Remapper>> {
        let format = self.select(lines)?;
        debug!(format = format.name(), "selected mapping format");
        let ctx = ResolveContext {
            registry: self,
            loader,
        };
        format.parse(lines, ignore_errors, &ctx)
    }

    /// Names of the formats able to successfully populate from the lines
    pub fn probe(&self, lines: &[String], loader: &dyn ResourceLoader) -> Vec<&'static str> {
        let ctx = ResolveContext {
            registry: self,
            loader,
        };
        self.formats
            .iter()
            .filter(|f| f.claim(lines) && f.parse(lines, false, &ctx).is_ok())
            .map(|f| f.name())
            .collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_default_formats()
    }
}
