//! The symbol model: classes, their members, and the table parsers populate
//!
//! Records are stored arena-style: members refer to their owning class by
//! internal name rather than by reference, and are resolved through the
//! owning table on demand.

use crate::core::error::{Error, MappingKind, Result};
use std::collections::HashMap;

/// Name/descriptor pair identifying one method among its overloads
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    pub name: String,
    pub descriptor: String,
}

impl MethodSignature {
    pub fn new(name: &str, descriptor: &str) -> Self {
        Self {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
        }
    }
}

/// A single method mapping
///
/// The mapped descriptor is never stored: descriptors embed class names that
/// are themselves subject to mapping, so it is derived on demand by the
/// descriptor rewriter once the full class table exists.
#[derive(Debug, Clone)]
pub struct MethodRecord {
    /// Internal name of the owning class
    pub parent: String,
    pub signature: MethodSignature,
    pub mapped_name: String,
}

/// A single field mapping
#[derive(Debug, Clone)]
pub struct FieldRecord {
    /// Internal name of the owning class
    pub parent: String,
    pub name: String,
    pub mapped_name: String,
    /// Type descriptor; some formats do not carry one
    pub descriptor: Option<String>,
}

/// A class mapping together with its member mappings
#[derive(Debug, Clone)]
pub struct ClassRecord {
    /// Internal name in the source domain, slash-separated
    pub name: String,
    /// Internal name in the target domain
    pub mapped_name: String,
    methods: HashMap<MethodSignature, MethodRecord>,
    fields: HashMap<String, FieldRecord>,
}

impl ClassRecord {
    pub fn new(name: &str, mapped_name: &str) -> Self {
        Self {
            name: name.to_string(),
            mapped_name: mapped_name.to_string(),
            methods: HashMap::new(),
            fields: HashMap::new(),
        }
    }

    /// Adds a method mapping to this class
    pub fn add_method(&mut self, name: &str, mapped_name: &str, descriptor: &str) {
        let signature = MethodSignature::new(name, descriptor);
        let record = MethodRecord {
            parent: self.name.clone(),
            signature: signature.clone(),
            mapped_name: mapped_name.to_string(),
        };
        self.methods.insert(signature, record);
    }

    /// Adds a field mapping to this class
    pub fn add_field(&mut self, name: &str, mapped_name: &str, descriptor: Option<&str>) {
        let record = FieldRecord {
            parent: self.name.clone(),
            name: name.to_string(),
            mapped_name: mapped_name.to_string(),
            descriptor: descriptor.map(str::to_string),
        };
        self.fields.insert(name.to_string(), record);
    }

    /// Resolves a method by name and optional descriptor prefix.
    ///
    /// The prefix may omit the return type (e.g. `(I` or `(I)`) to
    /// disambiguate overloads without knowing the full descriptor. Zero
    /// matches is a not-found error; more than one is an ambiguity error —
    /// a candidate is never picked silently.
    pub fn map_method(&self, name: &str, descriptor: Option<&str>) -> Result<&MethodRecord> {
        let prefix = descriptor.unwrap_or("");
        let candidates: Vec<&MethodRecord> = self
            .methods
            .values()
            .filter(|m| m.signature.name == name && m.signature.descriptor.starts_with(prefix))
            .collect();

        match candidates.len() {
            0 => Err(Error::MappingNotFound {
                kind: MappingKind::Method,
                name: format!("{}::{}{}", self.name, name, prefix),
            }),
            1 => Ok(candidates[0]),
            count => Err(Error::AmbiguousMapping {
                name: format!("{}::{}{}", self.name, name, prefix),
                count,
            }),
        }
    }

    /// Resolves a field by name
    pub fn map_field(&self, name: &str) -> Result<&FieldRecord> {
        self.fields.get(name).ok_or_else(|| Error::MappingNotFound {
            kind: MappingKind::Field,
            name: format!("{}.{}", self.name, name),
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodRecord> {
        self.methods.values()
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldRecord> {
        self.fields.values()
    }
}

/// The mutable population phase of a mapper: an arena of class records
/// keyed by source-domain internal name.
///
/// Parsers build a `SymbolTable`, which is then frozen into a
/// [`Mapper`](crate::mapper::Mapper) and never mutated again.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    classes: HashMap<String, ClassRecord>,
}

impl SymbolTable {
    /// Registers a class if it is not already present; names are never
    /// reassigned after creation, so the first registration wins.
    pub fn add_class(&mut self, name: &str, mapped_name: &str) -> &mut ClassRecord {
        self.classes
            .entry(name.to_string())
            .or_insert_with(|| ClassRecord::new(name, mapped_name))
    }

    pub fn get(&self, name: &str) -> Option<&ClassRecord> {
        self.classes.get(name)
    }

    pub fn class_mut(&mut self, name: &str) -> Option<&mut ClassRecord> {
        self.classes.get_mut(name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassRecord> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_class() -> ClassRecord {
        let mut class = ClassRecord::new("com/example/Foo", "a/b");
        class.add_method("foo", "x", "()V");
        class.add_method("foo", "y", "(I)V");
        class.add_field("count", "z", Some("I"));
        class
    }

    #[test]
    fn test_overload_resolution_by_prefix() {
        let class = sample_class();
        let record = class.map_method("foo", Some("(I")).unwrap();
        assert_eq!(record.mapped_name, "y");
        assert_eq!(record.signature.descriptor, "(I)V");

        let record = class.map_method("foo", Some("()")).unwrap();
        assert_eq!(record.mapped_name, "x");
    }

    #[test]
    fn test_bare_lookup_of_overloaded_method_is_ambiguous() {
        let class = sample_class();
        match class.map_method("foo", None) {
            Err(Error::AmbiguousMapping { count, .. }) => assert_eq!(count, 2),
            other => panic!("expected ambiguity, got {:?}", other.map(|r| r.mapped_name.clone())),
        }
    }

    #[test]
    fn test_missing_method_is_not_found() {
        let class = sample_class();
        match class.map_method("bar", None) {
            Err(Error::MappingNotFound { kind, name }) => {
                assert_eq!(kind, MappingKind::Method);
                assert!(name.contains("bar"));
            }
            other => panic!("expected not-found, got {:?}", other.map(|r| r.mapped_name.clone())),
        }
    }

    #[test]
    fn test_field_lookup() {
        let class = sample_class();
        let record = class.map_field("count").unwrap();
        assert_eq!(record.mapped_name, "z");
        assert_eq!(record.descriptor.as_deref(), Some("I"));
        assert!(class.map_field("missing").is_err());
    }

    #[test]
    fn test_first_class_registration_wins() {
        let mut table = SymbolTable::default();
        table.add_class("com/example/Foo", "a/b");
        table.add_class("com/example/Foo", "c/d");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("com/example/Foo").unwrap().mapped_name, "a/b");
    }
}
