//! Entity registry: a fixed, ordered sequence of entities.
//!
//! The registry is built once, either from the built-in example data or from a
//! validated JSON file, and is only iterated afterwards.

pub mod builtin;
pub mod spec;

pub use spec::{RegistrySpec, ValidatedRegistry};

use crate::Result;
use crate::diagnostics;
use crate::entity::{Entity, Kind};
use crate::guard;

use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    entities: Vec<Entity>,
}

impl Registry {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities per kind. Kinds with no entity are absent.
    pub fn counts_by_kind(&self) -> BTreeMap<Kind, usize> {
        let mut counts = BTreeMap::new();
        for entity in &self.entities {
            *counts.entry(guard::classify(entity)).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

/// Read, parse and validate a registry JSON file.
pub fn load_registry_file(path: &str) -> Result<ValidatedRegistry> {
    let text = fs::read_to_string(path)
        .with_context(|| diagnostics::error_message(format!("read registry file {}", path)))?;

    let spec: RegistrySpec = serde_json::from_str(&text)
        .with_context(|| diagnostics::error_message(format!("parse registry file {}", path)))?;

    spec.validate_and_build()
        .with_context(|| diagnostics::error_message(format!("invalid registry file {}", path)))
}
