//! Resource acquisition: turning a location string into text lines
//!
//! Parsing never performs IO by itself; everything flows through a
//! [`ResourceLoader`], so tests and embedders can substitute their own.

use crate::core::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Acquires the text lines behind a location string
pub trait ResourceLoader: Send + Sync {
    fn fetch(&self, location: &str) -> Result<Vec<String>>;
}

/// The default loader: an `http(s)` URL is fetched over the network, any
/// other location is read as a local path.
#[derive(Debug, Default)]
pub struct HttpResourceLoader;

impl ResourceLoader for HttpResourceLoader {
    fn fetch(&self, location: &str) -> Result<Vec<String>> {
        if location.starts_with("http://") || location.starts_with("https://") {
            debug!(location, "fetching remote mapping resource");
            let body = reqwest::blocking::get(location)?.error_for_status()?.text()?;
            return Ok(split_lines(&body));
        }

        debug!(location, "reading local mapping resource");
        let path = Path::new(location);
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(split_lines(&content)),
            Err(_) => Err(Error::InvalidResource {
                location: location.to_string(),
            }),
        }
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;

    /// Loader for tests that must never perform a fetch
    pub(crate) struct NullLoader;

    impl ResourceLoader for NullLoader {
        fn fetch(&self, location: &str) -> Result<Vec<String>> {
            Err(Error::InvalidResource {
                location: location.to_string(),
            })
        }
    }

    /// In-memory loader keyed by location string
    pub(crate) struct MemoryLoader {
        resources: HashMap<String, String>,
    }

    impl MemoryLoader {
        pub(crate) fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                resources: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl ResourceLoader for MemoryLoader {
        fn fetch(&self, location: &str) -> Result<Vec<String>> {
            self.resources
                .get(location)
                .map(|content| split_lines(content))
                .ok_or_else(|| Error::InvalidResource {
                    location: location.to_string(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_is_read_as_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mappings.srg");
        std::fs::write(&path, "CL: a b\r\nCL: c d\n").unwrap();

        let lines = HttpResourceLoader
            .fetch(path.to_str().unwrap())
            .unwrap();
        assert_eq!(lines, vec!["CL: a b".to_string(), "CL: c d".to_string()]);
    }

    #[test]
    fn test_missing_location_is_invalid_resource() {
        let result = HttpResourceLoader.fetch("/definitely/not/here.srg");
        match result {
            Err(Error::InvalidResource { location }) => {
                assert_eq!(location, "/definitely/not/here.srg")
            }
            other => panic!("expected invalid-resource, got {:?}", other.map(|_| ())),
        }
    }
}
