//! Registry of named model chains.
//!
//! Only the name-to-chain mapping is defined; how a multi-model chain would
//! be sequenced is not, and nothing here executes one. The image upload
//! flow consumes the head of the vision chain, which is the single place a
//! chain is consulted today.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use std::collections::BTreeMap;

/// Chain consulted for plain prompt submissions.
pub const DEFAULT_FLOW: &str = "default";
/// Chain consulted when an uploaded image needs a description.
pub const IMAGE_FLOW: &str = "describe-image";

const DEFAULT_MODEL: &str = "llama3-8b-instruct";
const VISION_MODEL: &str = "bakllava";

/// Named, ordered model chains.
#[derive(Clone, Debug)]
pub struct Workflows {
    flows: BTreeMap<String, Vec<String>>,
}

impl Default for Workflows {
    fn default() -> Self {
        let mut flows = BTreeMap::new();
        flows.insert(DEFAULT_FLOW.to_owned(), vec![DEFAULT_MODEL.to_owned()]);
        flows.insert(IMAGE_FLOW.to_owned(), vec![VISION_MODEL.to_owned()]);
        Self { flows }
    }
}

impl Workflows {
    /// An empty registry, for callers that build their own chains.
    pub fn empty() -> Self {
        Self {
            flows: BTreeMap::new(),
        }
    }

    /// Register or replace a named chain.
    pub fn insert(&mut self, name: impl Into<String>, chain: Vec<String>) {
        self.flows.insert(name.into(), chain);
    }

    /// The ordered model chain registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<&[String]> {
        self.flows.get(name).map(Vec::as_slice)
    }

    /// The first model of the chain registered under `name`.
    pub fn chain_head(&self, name: &str) -> Option<&str> {
        self.resolve(name)?.first().map(String::as_str)
    }
}
