//! Populated mapping tables and the queryable lookup seam
//!
//! A [`Mapper`] is the frozen form of a parsed [`SymbolTable`]: read-only,
//! shareable across any number of concurrent readers, and invertible into an
//! independent mapper for the opposite direction.

pub mod chain;

use crate::core::error::{Error, MappingKind, Result};
use crate::descriptor::{self, Direction};
use crate::model::{ClassRecord, FieldRecord, MethodRecord, SymbolTable};
use once_cell::sync::OnceCell;

/// The queryable unit shared by single mappers and chains.
///
/// `map_*` translates source-domain names to the target domain; `unmap_*`
/// goes the other way. Method lookups accept an optional descriptor, full or
/// parameter-only prefix, to disambiguate overloads.
pub trait Remapper: Send + Sync {
    fn map_class(&self, name: &str) -> Result<String>;

    fn unmap_class(&self, name: &str) -> Result<String>;

    fn map_method(&self, parent: &str, name: &str, descriptor: Option<&str>) -> Result<String>;

    fn unmap_method(&self, parent: &str, name: &str, descriptor: Option<&str>) -> Result<String>;

    fn map_field(&self, parent: &str, name: &str) -> Result<String>;

    fn unmap_field(&self, parent: &str, name: &str) -> Result<String>;

    /// Rewrites a full method descriptor across this mapper's domains
    fn rewrite_method_descriptor(&self, descriptor: &str, direction: Direction) -> String;

    /// Builds an independent mapper translating in the opposite direction
    fn invert_box(&self) -> Box<dyn Remapper>;
}

/// A frozen, populated mapping table
#[derive(Debug, Default)]
pub struct Mapper {
    table: SymbolTable,
    // Memoized reverse side; built at most once, after population.
    inverse: OnceCell<Box<Mapper>>,
}

impl Mapper {
    /// Freezes a populated symbol table into a queryable mapper
    pub fn new(table: SymbolTable) -> Self {
        Self {
            table,
            inverse: OnceCell::new(),
        }
    }

    /// Looks up a class record by source-domain name.
    ///
    /// Dot-separated names are accepted and normalized to internal form.
    pub fn lookup_class(&self, name: &str) -> Result<&ClassRecord> {
        let key = name.replace('.', "/");
        self.table
            .get(&key)
            .ok_or_else(|| Error::MappingNotFound {
                kind: MappingKind::Class,
                name: name.to_string(),
            })
    }

    /// Looks up a method record; the descriptor may be a partial prefix
    pub fn lookup_method(
        &self,
        parent: &str,
        name: &str,
        descriptor: Option<&str>,
    ) -> Result<&MethodRecord> {
        self.lookup_class(parent)?.map_method(name, descriptor)
    }

    /// Looks up a field record
    pub fn lookup_field(&self, parent: &str, name: &str) -> Result<&FieldRecord> {
        self.lookup_class(parent)?.map_field(name)
    }

    /// Infallible probe used by the descriptor rewriter: classes without a
    /// mapping (external library types) pass through unchanged there.
    pub fn mapped_class_name(&self, name: &str) -> Option<&str> {
        self.table.get(name).map(|c| c.mapped_name.as_str())
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassRecord> {
        self.table.classes()
    }

    pub fn class_count(&self) -> usize {
        self.table.len()
    }

    /// The memoized reverse side of this mapper
    pub fn inverse(&self) -> &Mapper {
        self.inverse.get_or_init(|| Box::new(self.invert()))
    }

    /// Builds a new, fully independent mapper translating in the opposite
    /// direction.
    ///
    /// Method descriptors of the inverse are derived by rewriting the source
    /// descriptors through this mapper, which is why inversion is only
    /// available once the table is frozen: every embedded class reference
    /// must be resolvable against the complete table.
    pub fn invert(&self) -> Mapper {
        let mut inverted = SymbolTable::default();
        for class in self.table.classes() {
            let reversed = inverted.add_class(&class.mapped_name, &class.name);
            for method in class.methods() {
                let mapped_descriptor = descriptor::rewrite_method_descriptor(
                    &method.signature.descriptor,
                    self,
                    Direction::Forward,
                );
                reversed.add_method(&method.mapped_name, &method.signature.name, &mapped_descriptor);
            }
            for field in class.fields() {
                let mapped_descriptor = field
                    .descriptor
                    .as_deref()
                    .map(|d| descriptor::rewrite_type(d, self, Direction::Forward));
                reversed.add_field(&field.mapped_name, &field.name, mapped_descriptor.as_deref());
            }
        }
        Mapper::new(inverted)
    }
}

impl Remapper for Mapper {
    fn map_class(&self, name: &str) -> Result<String> {
        Ok(self.lookup_class(name)?.mapped_name.clone())
    }

    fn unmap_class(&self, name: &str) -> Result<String> {
        self.inverse().map_class(name)
    }

    fn map_method(&self, parent: &str, name: &str, descriptor: Option<&str>) -> Result<String> {
        Ok(self.lookup_method(parent, name, descriptor)?.mapped_name.clone())
    }

    fn unmap_method(&self, parent: &str, name: &str, descriptor: Option<&str>) -> Result<String> {
        self.inverse().map_method(parent, name, descriptor)
    }

    fn map_field(&self, parent: &str, name: &str) -> Result<String> {
        Ok(self.lookup_field(parent, name)?.mapped_name.clone())
    }

    fn unmap_field(&self, parent: &str, name: &str) -> Result<String> {
        self.inverse().map_field(parent, name)
    }

    fn rewrite_method_descriptor(&self, descriptor: &str, direction: Direction) -> String {
        descriptor::rewrite_method_descriptor(descriptor, self, direction)
    }

    fn invert_box(&self) -> Box<dyn Remapper> {
        Box::new(self.invert())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mapper() -> Mapper {
        let mut table = SymbolTable::default();
        let class = table.add_class("com/example/Foo", "a/b");
        class.add_method("run", "m0", "(Lcom/example/Bar;)V");
        class.add_method("run", "m1", "(I)V");
        class.add_field("count", "f0", Some("I"));
        class.add_field("other", "f1", Some("Lcom/example/Bar;"));
        table.add_class("com/example/Bar", "c");
        Mapper::new(table)
    }

    #[test]
    fn test_class_lookup() {
        let mapper = sample_mapper();
        assert_eq!(mapper.lookup_class("com/example/Foo").unwrap().mapped_name, "a/b");
        assert!(mapper.lookup_class("missing/Class").is_err());
    }

    #[test]
    fn test_dotted_names_are_normalized() {
        let mapper = sample_mapper();
        assert_eq!(mapper.lookup_class("com.example.Foo").unwrap().mapped_name, "a/b");
    }

    #[test]
    fn test_member_lookups() {
        let mapper = sample_mapper();
        let method = mapper.lookup_method("com/example/Foo", "run", Some("(I")).unwrap();
        assert_eq!(method.mapped_name, "m1");
        let field = mapper.lookup_field("com/example/Foo", "count").unwrap();
        assert_eq!(field.mapped_name, "f0");
    }

    #[test]
    fn test_invert_swaps_names_and_rewrites_descriptors() {
        let mapper = sample_mapper();
        let inverted = mapper.invert();

        let class = inverted.lookup_class("a/b").unwrap();
        assert_eq!(class.mapped_name, "com/example/Foo");

        // the inverse keys methods by mapped name and rewritten descriptor
        let method = inverted.lookup_method("a/b", "m0", Some("(Lc;)V")).unwrap();
        assert_eq!(method.mapped_name, "run");

        let field = inverted.lookup_field("a/b", "f1").unwrap();
        assert_eq!(field.mapped_name, "other");
        assert_eq!(field.descriptor.as_deref(), Some("Lc;"));
    }

    #[test]
    fn test_double_inversion_round_trips_names() {
        let mapper = sample_mapper();
        let back = mapper.invert().invert();
        for class in mapper.classes() {
            let round = back.lookup_class(&class.name).unwrap();
            assert_eq!(round.mapped_name, class.mapped_name);
        }
    }

    #[test]
    fn test_inversion_leaves_original_untouched() {
        let mapper = sample_mapper();
        let before = mapper.class_count();
        let _ = mapper.invert();
        assert_eq!(mapper.class_count(), before);
        assert_eq!(mapper.map_class("com/example/Foo").unwrap(), "a/b");
    }

    #[test]
    fn test_unmap_uses_memoized_inverse() {
        let mapper = sample_mapper();
        assert_eq!(mapper.unmap_class("a/b").unwrap(), "com/example/Foo");
        assert_eq!(mapper.unmap_field("a/b", "f0").unwrap(), "count");
        assert_eq!(
            mapper.unmap_method("a/b", "m1", Some("(I)V")).unwrap(),
            "run"
        );
    }
}
