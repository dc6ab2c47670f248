//! # matprop_core - Material Property Engine
//!
//! `matprop_core` is the material data backbone for rocket engine design
//! tooling: temperature-dependent properties, S-N fatigue curves, and a
//! keyed registry of materials, all behind a small, JSON-friendly API.
//!
//! ## Design Philosophy
//!
//! - **Validated at the edges**: tables are checked once at construction;
//!   every query after that is infallible
//! - **JSON-First**: all data types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types that name the material,
//!   property, and condition that failed
//! - **No hidden state**: registries are ordinary values owned by the caller
//!
//! ## Quick Start
//!
//! ```rust
//! use matprop_core::library::standard_library;
//!
//! let registry = standard_library();
//! let ti = registry.get("ti-6al-4v_annealed").unwrap();
//!
//! // Yield strength at 450 K under the default (Annealed) condition
//! let sigma_y = ti.value("YieldStrength", 450.0, None).unwrap();
//! assert!(sigma_y < 880.0);
//!
//! // Serialize the material to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&ti).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`property`] - Constant and temperature-table property values
//! - [`fatigue`] - S-N curves and nearest-temperature curve selection
//! - [`material`] - Materials with per-condition properties and metadata
//! - [`registry`] - Keyed material store with derived keys
//! - [`library`] - Built-in registry of common rocket engine alloys
//! - [`errors`] - Structured error types

pub mod errors;
pub mod fatigue;
pub mod library;
pub mod material;
pub mod property;
pub mod registry;

// Re-export commonly used types at crate root for convenience
pub use errors::{MatError, MatResult};
pub use fatigue::{FatigueCurve, FatigueCurveSet, FatigueLookup, TEMP_MISMATCH_WARN_K};
pub use library::standard_library;
pub use material::{Material, MetaValue, ROOM_TEMPERATURE_K};
pub use property::{Property, PropertyKind, PropertyValue};
pub use registry::{derive_key, MaterialRegistry};
