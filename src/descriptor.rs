//! Type descriptor rewriting
//!
//! Descriptors follow the standard bytecode encoding: primitives as single
//! letters, arrays as a `[` prefix per dimension, object types as
//! `L<internal/name>;`. Rewriting substitutes the class names embedded in a
//! descriptor using a mapper as the substitution source; anything the mapper
//! does not know (primitives, external library types, unrecognized input)
//! passes through byte-for-byte.

use crate::mapper::Mapper;

/// Which way a descriptor is carried across the two naming domains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Source domain to target domain
    Forward,
    /// Target domain back to source domain
    Reverse,
}

/// Rewrites a single type descriptor.
///
/// Arrays are unwrapped to their element type, the element is rewritten, and
/// the nesting is reapplied around the result.
pub fn rewrite_type(descriptor: &str, mapper: &Mapper, direction: Direction) -> String {
    let dims = descriptor.bytes().take_while(|&b| b == b'[').count();
    let element = &descriptor[dims..];

    if let Some(name) = element.strip_prefix('L').and_then(|e| e.strip_suffix(';')) {
        let mapped = match direction {
            Direction::Forward => mapper.mapped_class_name(name),
            Direction::Reverse => mapper.inverse().mapped_class_name(name),
        };
        if let Some(mapped) = mapped {
            let mut out = String::with_capacity(dims + mapped.len() + 2);
            for _ in 0..dims {
                out.push('[');
            }
            out.push('L');
            out.push_str(mapped);
            out.push(';');
            return out;
        }
    }

    descriptor.to_string()
}

/// Rewrites every parameter type and the return type of a method descriptor
/// independently and reassembles the descriptor string.
///
/// Partial descriptors (overload-disambiguating prefixes such as `(I`) are
/// not full method descriptors and are returned unchanged.
pub fn rewrite_method_descriptor(descriptor: &str, mapper: &Mapper, direction: Direction) -> String {
    let Some((params, ret)) = split_method_descriptor(descriptor) else {
        return descriptor.to_string();
    };

    let mut out = String::with_capacity(descriptor.len());
    out.push('(');
    for param in params {
        out.push_str(&rewrite_type(param, mapper, direction));
    }
    out.push(')');
    out.push_str(&rewrite_type(ret, mapper, direction));
    out
}

/// Splits `(AB)C` into its parameter type tokens and the return type
fn split_method_descriptor(descriptor: &str) -> Option<(Vec<&str>, &str)> {
    let rest = descriptor.strip_prefix('(')?;
    let close = rest.find(')')?;
    let (params_str, ret) = (&rest[..close], &rest[close + 1..]);
    if ret.is_empty() {
        return None;
    }

    let bytes = params_str.as_bytes();
    let mut params = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        while i < bytes.len() && bytes[i] == b'[' {
            i += 1;
        }
        match bytes.get(i)? {
            b'L' => {
                let end = i + params_str[i..].find(';')?;
                i = end + 1;
            }
            b'B' | b'C' | b'D' | b'F' | b'I' | b'J' | b'S' | b'Z' => i += 1,
            _ => return None,
        }
        params.push(&params_str[start..i]);
    }

    Some((params, ret))
}
