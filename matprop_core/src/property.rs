//! # Material Properties
//!
//! Temperature-aware property values. A [`Property`] couples a name and units
//! with either a constant scalar or a table of (temperature, value) pairs.
//! Table lookups use piecewise-linear interpolation and clamp flat to the
//! endpoint values outside the tabulated range, so a query can never
//! extrapolate past measured data.
//!
//! Tables are validated at construction: the temperature axis must be
//! non-empty, strictly ascending, finite, and the same length as the value
//! sequence. Every query after that is infallible.
//!
//! ## Example
//!
//! ```rust
//! use matprop_core::property::Property;
//!
//! let yield_strength = Property::table(
//!     "YieldStrength",
//!     vec![300.0, 400.0, 500.0],
//!     vec![200.0, 180.0, 150.0],
//!     "MPa",
//! ).unwrap();
//!
//! assert_eq!(yield_strength.value_at(450.0), 165.0); // interpolated
//! assert_eq!(yield_strength.value_at(250.0), 200.0); // clamped low
//! assert_eq!(yield_strength.value_at(900.0), 150.0); // clamped high
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{MatError, MatResult};

/// The payload of a property: a temperature-independent scalar or a
/// temperature table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Single value, valid at any temperature
    Constant(f64),
    /// Paired temperature/value sequences; temperatures in kelvin,
    /// strictly ascending
    Table {
        temps_k: Vec<f64>,
        values: Vec<f64>,
    },
}

/// Discriminant of a property's payload, for display and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Constant,
    Table,
}

impl PropertyKind {
    /// Human-readable kind name
    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyKind::Constant => "Constant",
            PropertyKind::Table => "Temperature Table",
        }
    }
}

/// A single named physical property of a material (yield strength, thermal
/// conductivity, ...), queryable at any temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    name: String,
    units: String,
    value: PropertyValue,
}

impl Property {
    /// Create a constant (temperature-independent) property.
    pub fn constant(name: impl Into<String>, value: f64, units: impl Into<String>) -> Self {
        Property {
            name: name.into(),
            units: units.into(),
            value: PropertyValue::Constant(value),
        }
    }

    /// Create a temperature-dependent property from paired sequences.
    ///
    /// Fails with [`MatError::InvalidPropertyData`] when the sequences differ
    /// in length, are empty, or the temperature axis is not strictly
    /// ascending and finite.
    pub fn table(
        name: impl Into<String>,
        temps_k: Vec<f64>,
        values: Vec<f64>,
        units: impl Into<String>,
    ) -> MatResult<Self> {
        Property::new(name, PropertyValue::Table { temps_k, values }, units)
    }

    /// Create a property from an already-built [`PropertyValue`], validating
    /// table payloads.
    pub fn new(
        name: impl Into<String>,
        value: PropertyValue,
        units: impl Into<String>,
    ) -> MatResult<Self> {
        let name = name.into();
        if let PropertyValue::Table { temps_k, values } = &value {
            validate_table(&name, temps_k, values)?;
        }
        Ok(Property {
            name,
            units: units.into(),
            value,
        })
    }

    /// Property name, e.g. "YieldStrength"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units string, e.g. "MPa"
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Whether this property is constant or tabulated
    pub fn kind(&self) -> PropertyKind {
        match self.value {
            PropertyValue::Constant(_) => PropertyKind::Constant,
            PropertyValue::Table { .. } => PropertyKind::Table,
        }
    }

    /// The underlying payload
    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// Evaluate the property at `temp_k` (kelvin).
    ///
    /// Constants ignore the temperature. Tables interpolate linearly between
    /// the bracketing points and clamp to the endpoint values outside the
    /// tabulated range.
    pub fn value_at(&self, temp_k: f64) -> f64 {
        match &self.value {
            PropertyValue::Constant(v) => *v,
            PropertyValue::Table { temps_k, values } => interp_clamped(temps_k, values, temp_k),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            PropertyValue::Constant(v) => write!(f, "{}: {} {}", self.name, v, self.units),
            PropertyValue::Table { temps_k, .. } => write!(
                f,
                "{}: {} points over {} K to {} K, {}",
                self.name,
                temps_k.len(),
                temps_k[0],
                temps_k[temps_k.len() - 1],
                self.units
            ),
        }
    }
}

fn validate_table(name: &str, temps_k: &[f64], values: &[f64]) -> MatResult<()> {
    if temps_k.is_empty() {
        return Err(MatError::invalid_property_data(
            name,
            "temperature table must not be empty",
        ));
    }
    if temps_k.len() != values.len() {
        return Err(MatError::invalid_property_data(
            name,
            format!(
                "temperature and value sequences must have equal length (got {} and {})",
                temps_k.len(),
                values.len()
            ),
        ));
    }
    if temps_k.iter().any(|t| !t.is_finite()) {
        return Err(MatError::invalid_property_data(
            name,
            "temperature axis must be finite",
        ));
    }
    for pair in temps_k.windows(2) {
        if pair[1] <= pair[0] {
            return Err(MatError::invalid_property_data(
                name,
                format!(
                    "temperature axis must be strictly ascending ({} K followed by {} K)",
                    pair[0], pair[1]
                ),
            ));
        }
    }
    Ok(())
}

/// Piecewise-linear interpolation with flat clamping at the endpoints.
///
/// Callers guarantee `xs` is non-empty, strictly ascending, finite, and the
/// same length as `ys`; every table in this crate is validated to that shape
/// at construction.
pub(crate) fn interp_clamped(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }
    for i in 0..last {
        // Bind each query to the half-open window [xs[i], xs[i+1]) so exact
        // tabulated points come back exactly, with no float round-trip.
        if x < xs[i + 1] {
            let frac = (x - xs[i]) / (xs[i + 1] - xs[i]);
            return ys[i] + frac * (ys[i + 1] - ys[i]);
        }
    }
    ys[last]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Property {
        Property::table(
            "YieldStrength",
            vec![300.0, 400.0, 500.0],
            vec![200.0, 180.0, 150.0],
            "MPa",
        )
        .unwrap()
    }

    #[test]
    fn test_constant_ignores_temperature() {
        let density = Property::constant("Density", 4430.0, "kg/m^3");
        assert_eq!(density.value_at(-40.0), 4430.0);
        assert_eq!(density.value_at(4.0), 4430.0);
        assert_eq!(density.value_at(298.0), 4430.0);
        assert_eq!(density.value_at(1e6), 4430.0);
        assert_eq!(density.kind(), PropertyKind::Constant);
    }

    #[test]
    fn test_table_returns_exact_tabulated_points() {
        let prop = sample_table();
        assert_eq!(prop.value_at(300.0), 200.0);
        assert_eq!(prop.value_at(400.0), 180.0);
        assert_eq!(prop.value_at(500.0), 150.0);
    }

    #[test]
    fn test_table_interpolates_between_points() {
        let prop = sample_table();
        assert_eq!(prop.value_at(450.0), 165.0);
        assert_eq!(prop.value_at(350.0), 190.0);
    }

    #[test]
    fn test_table_clamps_outside_range() {
        let prop = sample_table();
        assert_eq!(prop.value_at(100.0), 200.0);
        assert_eq!(prop.value_at(300.0 - 1e-9), 200.0);
        assert_eq!(prop.value_at(2000.0), 150.0);
    }

    #[test]
    fn test_single_point_table_acts_constant() {
        let prop = Property::table("Emissivity", vec![298.0], vec![0.3], "").unwrap();
        assert_eq!(prop.value_at(100.0), 0.3);
        assert_eq!(prop.value_at(298.0), 0.3);
        assert_eq!(prop.value_at(900.0), 0.3);
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let result = Property::table(
            "YieldStrength",
            vec![300.0, 400.0],
            vec![200.0, 180.0, 150.0],
            "MPa",
        );
        let err = result.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PROPERTY_DATA");
        assert!(err.to_string().contains("equal length"));
    }

    #[test]
    fn test_rejects_empty_table() {
        let result = Property::table("YieldStrength", vec![], vec![], "MPa");
        assert_eq!(result.unwrap_err().error_code(), "INVALID_PROPERTY_DATA");
    }

    #[test]
    fn test_rejects_unsorted_axis() {
        let descending = Property::table(
            "YieldStrength",
            vec![500.0, 400.0, 300.0],
            vec![150.0, 180.0, 200.0],
            "MPa",
        );
        assert!(descending.is_err());

        let duplicate = Property::table(
            "YieldStrength",
            vec![300.0, 300.0, 500.0],
            vec![200.0, 180.0, 150.0],
            "MPa",
        );
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_rejects_non_finite_axis() {
        let result = Property::table(
            "YieldStrength",
            vec![300.0, f64::NAN, 500.0],
            vec![200.0, 180.0, 150.0],
            "MPa",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let prop = sample_table();
        let json = serde_json::to_string(&prop).unwrap();
        let roundtrip: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(prop, roundtrip);
    }

    #[test]
    fn test_display() {
        let density = Property::constant("Density", 4430.0, "kg/m^3");
        assert_eq!(density.to_string(), "Density: 4430 kg/m^3");

        let table = sample_table();
        let text = table.to_string();
        assert!(text.contains("YieldStrength"));
        assert!(text.contains("300 K to 500 K"));
    }
}
