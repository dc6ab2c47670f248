//! # Materials
//!
//! A [`Material`] groups properties by name and heat-treat condition,
//! fatigue curve sets by condition, and free-form metadata. Property lookups
//! resolve in two steps (property name, then condition) so a miss reports
//! exactly which level failed.
//!
//! Every material carries a `default_condition`; lookups that pass `None`
//! for the condition resolve against it. Adding data under a name/condition
//! pair that is already populated replaces the stored entry and hands the
//! displaced value back to the caller.
//!
//! ## Example
//!
//! ```rust
//! use matprop_core::material::Material;
//! use matprop_core::property::Property;
//!
//! let mut ti = Material::new("Ti-6Al-4V", "Titanium Alloy", "Annealed");
//! ti.add_custom_property(
//!     Property::table(
//!         "YieldStrength",
//!         vec![297.0, 589.0],
//!         vec![880.0, 620.0],
//!         "MPa",
//!     ).unwrap(),
//!     None,
//! );
//!
//! let sigma = ti.value("YieldStrength", 443.0, None).unwrap();
//! assert_eq!(sigma, 750.0);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::errors::{MatError, MatResult};
use crate::fatigue::FatigueCurveSet;
use crate::property::{Property, PropertyValue};

/// Temperature used by [`Material::value_at_room`] (kelvin)
pub const ROOM_TEMPERATURE_K: f64 = 298.0;

/// A metadata value: the closed set of shapes a material note can carry.
///
/// Serializes untagged, so JSON metadata reads naturally:
/// `{"specification": "AMS 4911", "max_service_temp_k": 672.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Number(f64),
    Text(String),
    List(Vec<f64>),
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Number(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Text(value)
    }
}

impl From<Vec<f64>> for MetaValue {
    fn from(value: Vec<f64>) -> Self {
        MetaValue::List(value)
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Number(n) => write!(f, "{}", n),
            MetaValue::Text(s) => write!(f, "{}", s),
            MetaValue::List(v) => write!(f, "{:?}", v),
        }
    }
}

/// A material with per-condition properties, fatigue data, and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name, e.g. "Ti-6Al-4V"
    pub name: String,
    /// Material family, e.g. "Titanium Alloy"
    pub category: String,
    /// Condition used when a lookup passes no explicit condition
    pub default_condition: String,
    /// property name -> condition -> property
    properties: HashMap<String, HashMap<String, Property>>,
    /// condition -> fatigue curves
    fatigue: HashMap<String, FatigueCurveSet>,
    /// Free-form notes: specification, UNS number, data provenance, ...
    metadata: HashMap<String, MetaValue>,
}

impl Material {
    /// Create an empty material.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        default_condition: impl Into<String>,
    ) -> Self {
        Material {
            name: name.into(),
            category: category.into(),
            default_condition: default_condition.into(),
            properties: HashMap::new(),
            fatigue: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    fn resolve<'a>(&'a self, condition: Option<&'a str>) -> &'a str {
        condition.unwrap_or(&self.default_condition)
    }

    /// Add a property from raw payload data, validating table shapes.
    ///
    /// `condition: None` stores under the default condition. Returns the
    /// displaced property when the name/condition pair was already populated.
    pub fn add_property(
        &mut self,
        name: &str,
        value: PropertyValue,
        units: &str,
        condition: Option<&str>,
    ) -> MatResult<Option<Property>> {
        let prop = Property::new(name, value, units)?;
        Ok(self.add_custom_property(prop, condition))
    }

    /// Add an already-constructed property (e.g. one shared across
    /// materials). Returns the displaced property on overwrite.
    pub fn add_custom_property(
        &mut self,
        prop: Property,
        condition: Option<&str>,
    ) -> Option<Property> {
        let cond = self.resolve(condition).to_string();
        self.properties
            .entry(prop.name().to_string())
            .or_default()
            .insert(cond, prop)
    }

    /// Attach fatigue curves for a condition. Returns the displaced curve
    /// set on overwrite.
    pub fn add_fatigue(
        &mut self,
        curves: FatigueCurveSet,
        condition: Option<&str>,
    ) -> Option<FatigueCurveSet> {
        let cond = self.resolve(condition).to_string();
        self.fatigue.insert(cond, curves)
    }

    /// Attach a metadata entry. Returns the displaced value on overwrite.
    pub fn add_metadata(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetaValue>,
    ) -> Option<MetaValue> {
        self.metadata.insert(key.into(), value.into())
    }

    /// Builder-style [`add_custom_property`](Self::add_custom_property)
    /// under the default condition.
    pub fn with_property(mut self, prop: Property) -> Self {
        self.add_custom_property(prop, None);
        self
    }

    /// Builder-style [`add_custom_property`](Self::add_custom_property)
    /// under an explicit condition.
    pub fn with_property_for(mut self, prop: Property, condition: &str) -> Self {
        self.add_custom_property(prop, Some(condition));
        self
    }

    /// Builder-style [`add_fatigue`](Self::add_fatigue) under the default
    /// condition.
    pub fn with_fatigue(mut self, curves: FatigueCurveSet) -> Self {
        self.add_fatigue(curves, None);
        self
    }

    /// Builder-style [`add_fatigue`](Self::add_fatigue) under an explicit
    /// condition.
    pub fn with_fatigue_for(mut self, curves: FatigueCurveSet, condition: &str) -> Self {
        self.add_fatigue(curves, Some(condition));
        self
    }

    /// Builder-style [`add_metadata`](Self::add_metadata).
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.add_metadata(key, value);
        self
    }

    /// Look up a property under a condition (`None` = default condition).
    ///
    /// Fails with [`MatError::PropertyNotFound`] when the material has no
    /// property of that name, and [`MatError::ConditionNotFound`] when the
    /// property exists but not for the resolved condition.
    pub fn property_for(&self, property: &str, condition: Option<&str>) -> MatResult<&Property> {
        let cond = self.resolve(condition);
        let by_condition = self
            .properties
            .get(property)
            .ok_or_else(|| MatError::property_not_found(&self.name, property))?;
        by_condition
            .get(cond)
            .ok_or_else(|| MatError::condition_not_found(&self.name, property, cond))
    }

    /// Evaluate a property at `temp_k` under a condition.
    pub fn value(&self, property: &str, temp_k: f64, condition: Option<&str>) -> MatResult<f64> {
        Ok(self.property_for(property, condition)?.value_at(temp_k))
    }

    /// Evaluate a property at room temperature ([`ROOM_TEMPERATURE_K`]).
    pub fn value_at_room(&self, property: &str, condition: Option<&str>) -> MatResult<f64> {
        self.value(property, ROOM_TEMPERATURE_K, condition)
    }

    /// Fatigue curves for a condition, if any.
    pub fn fatigue_for(&self, condition: Option<&str>) -> Option<&FatigueCurveSet> {
        self.fatigue.get(self.resolve(condition))
    }

    /// Allowable fatigue stress at `cycles` and `temp_k` under a condition.
    ///
    /// Fails with [`MatError::FatigueNotFound`] when the material carries no
    /// curves for the resolved condition.
    pub fn fatigue_limit(
        &self,
        cycles: f64,
        temp_k: f64,
        condition: Option<&str>,
    ) -> MatResult<f64> {
        let cond = self.resolve(condition);
        let curves = self
            .fatigue
            .get(cond)
            .ok_or_else(|| MatError::fatigue_not_found(&self.name, cond))?;
        Ok(curves.limit_at(cycles, temp_k))
    }

    /// Property names, sorted
    pub fn property_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.properties.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Conditions a property has data for, sorted. Empty when the material
    /// has no such property.
    pub fn conditions_for(&self, property: &str) -> Vec<&str> {
        let mut conds: Vec<&str> = self
            .properties
            .get(property)
            .map(|by_condition| by_condition.keys().map(String::as_str).collect())
            .unwrap_or_default();
        conds.sort_unstable();
        conds
    }

    /// Conditions with fatigue data, sorted
    pub fn fatigue_conditions(&self) -> Vec<&str> {
        let mut conds: Vec<&str> = self.fatigue.keys().map(String::as_str).collect();
        conds.sort_unstable();
        conds
    }

    /// Whether the material has a property of this name under any condition
    pub fn has_property(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Number of distinct property names
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// A metadata entry, if present
    pub fn metadata(&self, key: &str) -> Option<&MetaValue> {
        self.metadata.get(key)
    }

    /// Metadata keys, sorted
    pub fn metadata_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.metadata.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] - default condition {}, {} properties",
            self.name,
            self.category,
            self.default_condition,
            self.property_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fatigue::FatigueCurve;

    fn titanium() -> Material {
        let mut mat = Material::new("Ti-6Al-4V", "Titanium Alloy", "Annealed");
        mat.add_custom_property(Property::constant("Density", 4430.0, "kg/m^3"), None);
        mat.add_custom_property(
            Property::table(
                "YieldStrength",
                vec![297.0, 477.0, 700.0],
                vec![880.0, 693.0, 530.0],
                "MPa",
            )
            .unwrap(),
            None,
        );
        mat
    }

    #[test]
    fn test_lookup_under_default_condition() {
        let mat = titanium();
        assert_eq!(mat.value("Density", 298.0, None).unwrap(), 4430.0);
        assert_eq!(mat.value("YieldStrength", 297.0, None).unwrap(), 880.0);
        assert_eq!(mat.value("YieldStrength", 4000.0, None).unwrap(), 530.0);
    }

    #[test]
    fn test_room_temperature_lookup() {
        let mut mat = Material::new("Test", "Test", "Base");
        mat.add_custom_property(
            Property::table("Modulus", vec![198.0, 398.0], vec![0.0, 100.0], "GPa").unwrap(),
            None,
        );
        assert_eq!(mat.value_at_room("Modulus", None).unwrap(), 50.0);
    }

    #[test]
    fn test_missing_property_vs_missing_condition() {
        let mat = titanium();

        let err = mat.value("Creep", 298.0, None).unwrap_err();
        assert_eq!(err.error_code(), "PROPERTY_NOT_FOUND");

        let err = mat.value("YieldStrength", 298.0, Some("STA")).unwrap_err();
        assert_eq!(err.error_code(), "CONDITION_NOT_FOUND");
        assert!(err.to_string().contains("STA"));
    }

    #[test]
    fn test_explicit_condition_lookup() {
        let mut mat = titanium();
        mat.add_custom_property(
            Property::constant("YieldStrength", 1100.0, "MPa"),
            Some("STA"),
        );

        assert_eq!(mat.value("YieldStrength", 297.0, None).unwrap(), 880.0);
        assert_eq!(
            mat.value("YieldStrength", 297.0, Some("STA")).unwrap(),
            1100.0
        );
        assert_eq!(mat.conditions_for("YieldStrength"), vec!["Annealed", "STA"]);
    }

    #[test]
    fn test_overwrite_returns_displaced_property() {
        let mut mat = titanium();
        let displaced = mat
            .add_property(
                "Density",
                PropertyValue::Constant(4500.0),
                "kg/m^3",
                None,
            )
            .unwrap();
        assert_eq!(displaced.unwrap().value_at(298.0), 4430.0);
        assert_eq!(mat.value("Density", 298.0, None).unwrap(), 4500.0);
    }

    #[test]
    fn test_invalid_table_not_inserted() {
        let mut mat = titanium();
        let result = mat.add_property(
            "ThermalConductivity",
            PropertyValue::Table {
                temps_k: vec![500.0, 300.0],
                values: vec![10.0, 6.7],
            },
            "W/(m*K)",
            None,
        );
        assert!(result.is_err());
        assert!(!mat.has_property("ThermalConductivity"));
    }

    #[test]
    fn test_fatigue_limit_and_missing_condition() {
        let mut mat = titanium();
        let curves = FatigueCurveSet::new(vec![FatigueCurve::new(
            297.0,
            vec![1e4, 1e6],
            vec![620.0, 410.0],
        )
        .unwrap()])
        .unwrap();
        mat.add_fatigue(curves, None);

        assert_eq!(mat.fatigue_limit(1e4, 298.0, None).unwrap(), 620.0);
        assert!(mat.fatigue_for(None).is_some());
        assert!(mat.fatigue_for(Some("STA")).is_none());

        let err = mat.fatigue_limit(1e4, 298.0, Some("STA")).unwrap_err();
        assert_eq!(err.error_code(), "FATIGUE_NOT_FOUND");
    }

    #[test]
    fn test_metadata() {
        let mut mat = titanium();
        assert!(mat.add_metadata("specification", "AMS 4911").is_none());
        assert!(mat.add_metadata("max_service_temp_k", 672.0).is_none());
        assert!(mat
            .add_metadata("sn_temps_k", vec![297.0, 589.0])
            .is_none());

        assert_eq!(
            mat.metadata("specification"),
            Some(&MetaValue::Text("AMS 4911".to_string()))
        );
        let displaced = mat.add_metadata("specification", "AMS 4911A");
        assert_eq!(displaced, Some(MetaValue::Text("AMS 4911".to_string())));
        assert_eq!(
            mat.metadata_keys(),
            vec!["max_service_temp_k", "sn_temps_k", "specification"]
        );
    }

    #[test]
    fn test_builder_chain() {
        let mat = Material::new("Al 6061", "Aluminum Alloy", "T6")
            .with_property(Property::constant("Density", 2700.0, "kg/m^3"))
            .with_property_for(Property::constant("Density", 2700.0, "kg/m^3"), "O")
            .with_metadata("temper", "T6");

        assert_eq!(mat.value("Density", 298.0, Some("O")).unwrap(), 2700.0);
        assert_eq!(mat.property_names(), vec!["Density"]);
        assert_eq!(mat.metadata("temper"), Some(&MetaValue::Text("T6".into())));
    }

    #[test]
    fn test_listing_accessors() {
        let mat = titanium();
        assert_eq!(mat.property_names(), vec!["Density", "YieldStrength"]);
        assert_eq!(mat.property_count(), 2);
        assert!(mat.has_property("Density"));
        assert!(!mat.has_property("density"));
        assert!(mat.conditions_for("Creep").is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut mat = titanium();
        mat.add_metadata("specification", "AMS 4911");
        mat.add_metadata("max_service_temp_k", 672.0);
        mat.add_metadata("sn_temps_k", vec![297.0, 589.0]);
        mat.add_fatigue(
            FatigueCurveSet::new(vec![FatigueCurve::new(
                297.0,
                vec![1e4, 1e6],
                vec![620.0, 410.0],
            )
            .unwrap()])
            .unwrap(),
            None,
        );

        let json = serde_json::to_string(&mat).unwrap();
        let roundtrip: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, roundtrip);
    }

    #[test]
    fn test_display() {
        let mat = titanium();
        let text = mat.to_string();
        assert!(text.contains("Ti-6Al-4V"));
        assert!(text.contains("Annealed"));
    }
}
