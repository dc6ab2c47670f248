//! # Material Registry
//!
//! A keyed, in-memory store of materials. Keys are derived from the material
//! name and default condition (lowercased, spaces to underscores), so
//! "Ti-6Al-4V" in the "Annealed" condition registers as
//! `ti-6al-4v_annealed`.
//!
//! Lookups are case-insensitive and soft-fail: a missing key is `None`, not
//! an error, so callers can probe for optional materials without error
//! plumbing. Registration replaces silently but returns the displaced
//! material, which lets strict callers treat a collision as a bug.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::material::Material;

/// Compute the registry key for a material name and default condition.
///
/// ```rust
/// use matprop_core::registry::derive_key;
///
/// assert_eq!(derive_key("Ti-6Al-4V", "Annealed"), "ti-6al-4v_annealed");
/// assert_eq!(
///     derive_key("Inconel 718", "Solution Treated and Aged"),
///     "inconel_718_solution_treated_and_aged"
/// );
/// ```
pub fn derive_key(name: &str, default_condition: &str) -> String {
    format!("{}_{}", name, default_condition)
        .replace(' ', "_")
        .to_lowercase()
}

/// In-memory material store indexed by derived key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialRegistry {
    materials: HashMap<String, Material>,
    /// Keys in registration order, for deterministic listing
    keys: Vec<String>,
}

impl MaterialRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material under its derived key.
    ///
    /// Re-registering a name/default-condition pair replaces the stored
    /// material and returns the displaced entry; the key keeps its original
    /// position in [`keys`](Self::keys).
    pub fn register(&mut self, material: Material) -> Option<Material> {
        let key = derive_key(&material.name, &material.default_condition);
        tracing::info!(key = %key, material = %material.name, "Registered material");
        let displaced = self.materials.insert(key.clone(), material);
        if displaced.is_none() {
            self.keys.push(key);
        }
        displaced
    }

    /// Case-insensitive lookup by key. Absence is `None`, never an error.
    ///
    /// Note that only letter case is forgiven: spaces in the query are not
    /// converted to underscores the way [`derive_key`] converts them.
    pub fn get(&self, key: &str) -> Option<&Material> {
        self.materials.get(&key.to_lowercase())
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Materials whose key starts with `pattern` (case-insensitive), in
    /// registration order.
    pub fn search(&self, pattern: &str) -> Vec<&Material> {
        let needle = pattern.to_lowercase();
        self.keys
            .iter()
            .filter(|key| key.starts_with(&needle))
            .filter_map(|key| self.materials.get(key))
            .collect()
    }

    /// Number of registered materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the registry holds no materials
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
