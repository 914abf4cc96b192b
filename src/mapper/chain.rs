//! Ordered composition of mappers
//!
//! A chain `[M1, M2, .., Mn]` translates domain 0 through domain n: forward
//! lookups thread each result into the next link, reverse lookups walk the
//! links back to front. Composition is order-preserving and associative, so
//! a chain may itself contain chains.

use crate::core::error::Result;
use crate::descriptor::Direction;
use crate::mapper::Remapper;

/// An ordered sequence of mappers applied one after the other
pub struct ChainMapper {
    chain: Vec<Box<dyn Remapper>>,
}

impl ChainMapper {
    /// Builds a chain from already-populated links, in application order
    pub fn new(chain: Vec<Box<dyn Remapper>>) -> Self {
        Self { chain }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Builds the reverse chain: each link inverted, in reversed order
    pub fn invert(&self) -> ChainMapper {
        ChainMapper {
            chain: self.chain.iter().rev().map(|link| link.invert_box()).collect(),
        }
    }
}

impl Remapper for ChainMapper {
    fn map_class(&self, name: &str) -> Result<String> {
        let mut name = name.to_string();
        for link in &self.chain {
            name = link.map_class(&name)?;
        }
        Ok(name)
    }

    fn unmap_class(&self, name: &str) -> Result<String> {
        let mut name = name.to_string();
        for link in self.chain.iter().rev() {
            name = link.unmap_class(&name)?;
        }
        Ok(name)
    }

    fn map_method(&self, parent: &str, name: &str, descriptor: Option<&str>) -> Result<String> {
        let mut parent = parent.to_string();
        let mut name = name.to_string();
        let mut descriptor = descriptor.map(str::to_string);
        for link in &self.chain {
            name = link.map_method(&parent, &name, descriptor.as_deref())?;
            // the next link speaks this link's target domain
            if let Some(d) = descriptor.take() {
                descriptor = Some(link.rewrite_method_descriptor(&d, Direction::Forward));
            }
            parent = link.map_class(&parent)?;
        }
        Ok(name)
    }

    fn unmap_method(&self, parent: &str, name: &str, descriptor: Option<&str>) -> Result<String> {
        let mut parent = parent.to_string();
        let mut name = name.to_string();
        let mut descriptor = descriptor.map(str::to_string);
        for link in self.chain.iter().rev() {
            name = link.unmap_method(&parent, &name, descriptor.as_deref())?;
            if let Some(d) = descriptor.take() {
                descriptor = Some(link.rewrite_method_descriptor(&d, Direction::Reverse));
            }
            parent = link.unmap_class(&parent)?;
        }
        Ok(name)
    }

    fn map_field(&self, parent: &str, name: &str) -> Result<String> {
        let mut parent = parent.to_string();
        let mut name = name.to_string();
        for link in &self.chain {
            name = link.map_field(&parent, &name)?;
            parent = link.map_class(&parent)?;
        }
        Ok(name)
    }

    fn unmap_field(&self, parent: &str, name: &str) -> Result<String> {
        let mut parent = parent.to_string();
        let mut name = name.to_string();
        for link in self.chain.iter().rev() {
            name = link.unmap_field(&parent, &name)?;
            parent = link.unmap_class(&parent)?;
        }
        Ok(name)
    }

    fn rewrite_method_descriptor(&self, descriptor: &str, direction: Direction) -> String {
        let mut descriptor = descriptor.to_string();
        match direction {
            Direction::Forward => {
                for link in &self.chain {
                    descriptor = link.rewrite_method_descriptor(&descriptor, direction);
                }
            }
            Direction::Reverse => {
                for link in self.chain.iter().rev() {
                    descriptor = link.rewrite_method_descriptor(&descriptor, direction);
                }
            }
        }
        descriptor
    }

    fn invert_box(&self) -> Box<dyn Remapper> {
        Box::new(self.invert())
    }
}
