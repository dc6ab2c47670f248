//! # Fatigue Curves
//!
//! S-N (stress vs. cycles) fatigue data. A [`FatigueCurve`] holds one curve
//! measured at a single temperature; a [`FatigueCurveSet`] holds the curves
//! for one material condition and answers queries at arbitrary temperature
//! by selecting the nearest curve.
//!
//! Curve selection never interpolates between temperatures: fatigue behavior
//! shifts nonlinearly with temperature, so the engine reports which curve it
//! actually used (and whether that curve is far from the query) instead of
//! blending two curves into a number nobody measured.
//!
//! ## Example
//!
//! ```rust
//! use matprop_core::fatigue::{FatigueCurve, FatigueCurveSet};
//!
//! let room = FatigueCurve::new(297.0, vec![1e4, 1e5, 1e6], vec![620.0, 510.0, 410.0]).unwrap();
//! let hot = FatigueCurve::new(589.0, vec![1e4, 1e5, 1e6], vec![480.0, 400.0, 330.0]).unwrap();
//! let curves = FatigueCurveSet::new(vec![room, hot]).unwrap();
//!
//! let hit = curves.lookup(1e5, 310.0);
//! assert_eq!(hit.curve_temp_k, 297.0);
//! assert_eq!(hit.stress, 510.0);
//! assert!(!hit.distant);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{MatError, MatResult};
use crate::property::interp_clamped;

/// Gap (kelvin) between query and nearest curve beyond which a lookup is
/// flagged as distant and [`FatigueCurveSet::limit_at`] emits a warning.
pub const TEMP_MISMATCH_WARN_K: f64 = 50.0;

/// One S-N curve: allowable stress vs. cycle count at a fixed temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueCurve {
    temp_k: f64,
    cycles: Vec<f64>,
    stress: Vec<f64>,
}

impl FatigueCurve {
    /// Create a curve from paired cycle/stress sequences.
    ///
    /// Fails with [`MatError::InvalidPropertyData`] when the sequences differ
    /// in length, are empty, or the cycle axis is not strictly ascending and
    /// finite.
    pub fn new(temp_k: f64, cycles: Vec<f64>, stress: Vec<f64>) -> MatResult<Self> {
        let label = format!("S-N curve at {} K", temp_k);
        if !temp_k.is_finite() {
            return Err(MatError::invalid_property_data(
                label,
                "curve temperature must be finite",
            ));
        }
        if cycles.is_empty() {
            return Err(MatError::invalid_property_data(
                label,
                "cycle axis must not be empty",
            ));
        }
        if cycles.len() != stress.len() {
            return Err(MatError::invalid_property_data(
                label,
                format!(
                    "cycle and stress sequences must have equal length (got {} and {})",
                    cycles.len(),
                    stress.len()
                ),
            ));
        }
        if cycles.iter().any(|n| !n.is_finite()) {
            return Err(MatError::invalid_property_data(
                label,
                "cycle axis must be finite",
            ));
        }
        for pair in cycles.windows(2) {
            if pair[1] <= pair[0] {
                return Err(MatError::invalid_property_data(
                    label,
                    "cycle axis must be strictly ascending",
                ));
            }
        }
        Ok(FatigueCurve {
            temp_k,
            cycles,
            stress,
        })
    }

    /// Temperature this curve was measured at (kelvin)
    pub fn temp_k(&self) -> f64 {
        self.temp_k
    }

    /// Cycle counts, strictly ascending
    pub fn cycles(&self) -> &[f64] {
        &self.cycles
    }

    /// Allowable stress at each cycle count
    pub fn stress(&self) -> &[f64] {
        &self.stress
    }

    /// Allowable stress at `cycles`, interpolated linearly and clamped to the
    /// endpoint values outside the tabulated cycle range.
    pub fn stress_at(&self, cycles: f64) -> f64 {
        interp_clamped(&self.cycles, &self.stress, cycles)
    }
}

/// Outcome of a fatigue lookup: the stress plus which curve answered it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatigueLookup {
    /// Interpolated allowable stress
    pub stress: f64,
    /// Temperature of the curve that served the query (kelvin)
    pub curve_temp_k: f64,
    /// True when the serving curve is more than [`TEMP_MISMATCH_WARN_K`]
    /// away from the query temperature
    pub distant: bool,
}

/// The fatigue curves for one material condition, keyed by temperature.
///
/// Curves are stored sorted by ascending temperature, which makes the
/// nearest-curve tie-break deterministic: when a query sits exactly between
/// two curves, the lower temperature wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueCurveSet {
    curves: Vec<FatigueCurve>,
}

impl FatigueCurveSet {
    /// Build a set from curves in any order.
    ///
    /// Fails with [`MatError::InvalidPropertyData`] when `curves` is empty or
    /// two curves share a temperature.
    pub fn new(mut curves: Vec<FatigueCurve>) -> MatResult<Self> {
        if curves.is_empty() {
            return Err(MatError::invalid_property_data(
                "S-N curve set",
                "must contain at least one curve",
            ));
        }
        curves.sort_by(|a, b| a.temp_k.total_cmp(&b.temp_k));
        for pair in curves.windows(2) {
            if pair[0].temp_k == pair[1].temp_k {
                return Err(MatError::invalid_property_data(
                    "S-N curve set",
                    format!("duplicate curve temperature {} K", pair[0].temp_k),
                ));
            }
        }
        Ok(FatigueCurveSet { curves })
    }

    /// The curve whose temperature is closest to `temp_k`. Ties go to the
    /// lower temperature.
    pub fn nearest_curve(&self, temp_k: f64) -> &FatigueCurve {
        let mut best = &self.curves[0];
        let mut best_gap = (best.temp_k - temp_k).abs();
        for curve in &self.curves[1..] {
            let gap = (curve.temp_k - temp_k).abs();
            if gap < best_gap {
                best = curve;
                best_gap = gap;
            }
        }
        best
    }

    /// Allowable stress at `cycles` using the curve nearest `temp_k`,
    /// reporting which curve served the query.
    pub fn lookup(&self, cycles: f64, temp_k: f64) -> FatigueLookup {
        let curve = self.nearest_curve(temp_k);
        FatigueLookup {
            stress: curve.stress_at(cycles),
            curve_temp_k: curve.temp_k,
            distant: (curve.temp_k - temp_k).abs() > TEMP_MISMATCH_WARN_K,
        }
    }

    /// Allowable stress at `cycles` for `temp_k`, warning through `tracing`
    /// when the nearest curve is further than [`TEMP_MISMATCH_WARN_K`] away.
    pub fn limit_at(&self, cycles: f64, temp_k: f64) -> f64 {
        let hit = self.lookup(cycles, temp_k);
        if hit.distant {
            tracing::warn!(
                query_temp_k = temp_k,
                curve_temp_k = hit.curve_temp_k,
                "Nearest fatigue curve is far from the query temperature"
            );
        }
        hit.stress
    }

    /// Curves in ascending temperature order
    pub fn curves(&self) -> &[FatigueCurve] {
        &self.curves
    }

    /// Curve temperatures in ascending order
    pub fn temperatures(&self) -> Vec<f64> {
        self.curves.iter().map(|c| c.temp_k).collect()
    }

    /// Number of curves in the set
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Always false for a constructed set; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(temp_k: f64) -> FatigueCurve {
        FatigueCurve::new(
            temp_k,
            vec![1e3, 1e4, 1e5, 1e6],
            vec![500.0, 400.0, 300.0, 200.0],
        )
        .unwrap()
    }

    #[test]
    fn test_nearest_curve_selection() {
        let set = FatigueCurveSet::new(vec![curve(300.0), curve(400.0), curve(500.0)]).unwrap();
        assert_eq!(set.nearest_curve(340.0).temp_k(), 300.0);
        assert_eq!(set.nearest_curve(360.0).temp_k(), 400.0);
        assert_eq!(set.nearest_curve(1200.0).temp_k(), 500.0);
        assert_eq!(set.nearest_curve(4.0).temp_k(), 300.0);
    }

    #[test]
    fn test_tie_goes_to_lower_temperature() {
        // Shuffled input order must not change the winner
        let set = FatigueCurveSet::new(vec![curve(400.0), curve(300.0)]).unwrap();
        let hit = set.lookup(1e4, 350.0);
        assert_eq!(hit.curve_temp_k, 300.0);
        // A 50 K gap is not "distant"; the flag requires strictly more
        assert!(!hit.distant);
    }

    #[test]
    fn test_distant_flag_requires_gap_over_threshold() {
        let set = FatigueCurveSet::new(vec![curve(500.0)]).unwrap();
        assert!(set.lookup(1e4, 1000.0).distant);
        assert!(set.lookup(1e4, 560.0).distant);
        assert!(!set.lookup(1e4, 540.0).distant);
        assert!(!set.lookup(1e4, 550.0).distant); // gap exactly 50 K
        assert!(!set.lookup(1e4, 450.0).distant);
    }

    #[test]
    fn test_cycle_interpolation_and_clamping() {
        let one = FatigueCurve::new(297.0, vec![1e4, 1e5], vec![400.0, 300.0]).unwrap();
        assert_eq!(one.stress_at(1e4), 400.0);
        assert_eq!(one.stress_at(5.5e4), 350.0);
        assert_eq!(one.stress_at(1e2), 400.0); // below tabulated cycles
        assert_eq!(one.stress_at(1e9), 300.0); // beyond tabulated cycles
    }

    #[test]
    fn test_limit_at_matches_lookup() {
        let set = FatigueCurveSet::new(vec![curve(300.0), curve(500.0)]).unwrap();
        assert_eq!(set.limit_at(1e5, 310.0), set.lookup(1e5, 310.0).stress);
    }

    #[test]
    fn test_rejects_empty_set() {
        let result = FatigueCurveSet::new(vec![]);
        assert_eq!(result.unwrap_err().error_code(), "INVALID_PROPERTY_DATA");
    }

    #[test]
    fn test_rejects_duplicate_temperatures() {
        let result = FatigueCurveSet::new(vec![curve(400.0), curve(400.0)]);
        assert!(result.unwrap_err().to_string().contains("duplicate"));
    }

    #[test]
    fn test_rejects_malformed_curve() {
        assert!(FatigueCurve::new(297.0, vec![1e5, 1e4], vec![300.0, 400.0]).is_err());
        assert!(FatigueCurve::new(297.0, vec![1e4], vec![300.0, 400.0]).is_err());
        assert!(FatigueCurve::new(297.0, vec![], vec![]).is_err());
        assert!(FatigueCurve::new(f64::NAN, vec![1e4], vec![300.0]).is_err());
    }

    #[test]
    fn test_curves_sorted_after_construction() {
        let set = FatigueCurveSet::new(vec![curve(500.0), curve(300.0), curve(400.0)]).unwrap();
        assert_eq!(set.temperatures(), vec![300.0, 400.0, 500.0]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let set = FatigueCurveSet::new(vec![curve(300.0), curve(500.0)]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        let roundtrip: FatigueCurveSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, roundtrip);
    }
}
