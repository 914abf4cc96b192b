//! Remap - identifier translation across bytecode naming domains
//!
//! Parses obfuscation mapping files (SRG, TSRG2, Tiny v2), answers class,
//! method and field lookups in both directions, rewrites type descriptors,
//! and chains several mapping files into a single mapper.

pub mod cli;
pub mod core;
pub mod descriptor;
pub mod format;
pub mod mapper;
pub mod model;
pub mod output;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, MappingKind, Result};
pub use crate::core::resource::{HttpResourceLoader, ResourceLoader};
pub use crate::descriptor::Direction;
pub use crate::format::registry::FormatRegistry;
pub use crate::format::MappingFormat;
pub use crate::mapper::chain::ChainMapper;
pub use crate::mapper::{Mapper, Remapper};
pub use crate::model::SymbolTable;
