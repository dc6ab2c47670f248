//! # Built-in Material Library
//!
//! A starter registry of alloys common in liquid rocket engine hardware:
//! impeller and housing titanium, aluminum structure, hot-section nickel,
//! stainless plumbing, and copper chamber liner.
//!
//! Values are assembled from public handbook data (room temperature through
//! the useful service range) and are reference data only: verify against the
//! governing specification before using them in flight hardware analysis.

use crate::fatigue::{FatigueCurve, FatigueCurveSet};
use crate::material::Material;
use crate::property::Property;
use crate::registry::MaterialRegistry;

/// Build a registry pre-loaded with the built-in alloys.
///
/// The returned registry is an ordinary caller-owned value; mutate or extend
/// it freely.
///
/// ```rust
/// use matprop_core::library::standard_library;
///
/// let registry = standard_library();
/// let ti = registry.get("ti-6al-4v_annealed").unwrap();
/// assert_eq!(ti.value("YieldStrength", 297.0, None).unwrap(), 880.0);
/// ```
pub fn standard_library() -> MaterialRegistry {
    let mut registry = MaterialRegistry::new();
    registry.register(ti_6al_4v());
    registry.register(al_6061_t6());
    registry.register(inconel_718());
    registry.register(ss_316l());
    registry.register(cucrzr());
    registry
}

fn table(name: &str, temps_k: &[f64], values: &[f64], units: &str) -> Property {
    Property::table(name, temps_k.to_vec(), values.to_vec(), units)
        .expect("built-in property table is valid")
}

fn sn(temp_k: f64, cycles: &[f64], stress: &[f64]) -> FatigueCurve {
    FatigueCurve::new(temp_k, cycles.to_vec(), stress.to_vec())
        .expect("built-in S-N curve is valid")
}

fn sn_set(curves: Vec<FatigueCurve>) -> FatigueCurveSet {
    FatigueCurveSet::new(curves).expect("built-in S-N curve set is valid")
}

/// Workhorse titanium: impellers, housings, high strength-to-weight parts.
fn ti_6al_4v() -> Material {
    Material::new("Ti-6Al-4V", "Titanium Alloy", "Annealed")
        .with_property(Property::constant("Density", 4430.0, "kg/m^3"))
        .with_property(table(
            "YieldStrength",
            &[297.0, 366.0, 477.0, 589.0, 700.0],
            &[880.0, 790.0, 693.0, 620.0, 530.0],
            "MPa",
        ))
        .with_property(table(
            "UltimateStrength",
            &[297.0, 366.0, 477.0, 589.0, 700.0],
            &[950.0, 870.0, 780.0, 710.0, 620.0],
            "MPa",
        ))
        .with_property(table(
            "ElasticModulus",
            &[297.0, 477.0, 700.0],
            &[113.8, 107.0, 98.0],
            "GPa",
        ))
        .with_property(table(
            "ThermalConductivity",
            &[297.0, 477.0, 700.0, 922.0],
            &[6.7, 9.8, 13.2, 17.5],
            "W/(m*K)",
        ))
        .with_property(table(
            "SpecificHeat",
            &[297.0, 477.0, 700.0],
            &[526.0, 565.0, 610.0],
            "J/(kg*K)",
        ))
        .with_fatigue(sn_set(vec![
            sn(
                297.0,
                &[1e4, 1e5, 1e6, 1e7],
                &[620.0, 510.0, 410.0, 340.0],
            ),
            sn(
                589.0,
                &[1e4, 1e5, 1e6, 1e7],
                &[480.0, 400.0, 330.0, 270.0],
            ),
        ]))
        .with_metadata("specification", "AMS 4911")
        .with_metadata("uns", "R56400")
        .with_metadata("max_service_temp_k", 672.0)
}

/// General aluminum structure; strength falls off quickly above ~430 K.
fn al_6061_t6() -> Material {
    Material::new("Al 6061", "Aluminum Alloy", "T6")
        .with_property(Property::constant("Density", 2700.0, "kg/m^3"))
        .with_property(table(
            "YieldStrength",
            &[297.0, 373.0, 423.0, 473.0, 533.0, 589.0],
            &[276.0, 262.0, 214.0, 103.0, 35.0, 19.0],
            "MPa",
        ))
        .with_property(table(
            "UltimateStrength",
            &[297.0, 373.0, 423.0, 473.0, 533.0, 589.0],
            &[310.0, 290.0, 234.0, 131.0, 52.0, 30.0],
            "MPa",
        ))
        .with_property(table(
            "ElasticModulus",
            &[297.0, 477.0, 589.0],
            &[68.9, 63.0, 56.0],
            "GPa",
        ))
        .with_property(Property::constant("ThermalConductivity", 167.0, "W/(m*K)"))
        .with_property(Property::constant("SpecificHeat", 896.0, "J/(kg*K)"))
        .with_fatigue(sn_set(vec![sn(
            297.0,
            &[1e4, 1e5, 1e6, 1e7, 1e8],
            &[186.0, 152.0, 117.0, 97.0, 83.0],
        )]))
        .with_metadata("specification", "AMS 4027")
        .with_metadata("temper", "T6")
}

/// Hot-section nickel superalloy: turbine housings, manifolds, fasteners.
/// Carries a second "Annealed" strength condition for pre-age analysis.
fn inconel_718() -> Material {
    Material::new("Inconel 718", "Nickel Superalloy", "Solution Treated and Aged")
        .with_property(Property::constant("Density", 8190.0, "kg/m^3"))
        .with_property(table(
            "YieldStrength",
            &[297.0, 700.0, 811.0, 922.0, 1033.0],
            &[1172.0, 1100.0, 1068.0, 1000.0, 758.0],
            "MPa",
        ))
        .with_property(table(
            "UltimateStrength",
            &[297.0, 700.0, 811.0, 922.0, 1033.0],
            &[1407.0, 1310.0, 1276.0, 1138.0, 827.0],
            "MPa",
        ))
        .with_property_for(
            table(
                "YieldStrength",
                &[297.0, 922.0],
                &[414.0, 310.0],
                "MPa",
            ),
            "Annealed",
        )
        .with_property(table(
            "ElasticModulus",
            &[297.0, 700.0, 1033.0],
            &[200.0, 184.0, 163.0],
            "GPa",
        ))
        .with_property(table(
            "ThermalConductivity",
            &[297.0, 700.0, 1033.0, 1255.0],
            &[11.4, 17.2, 23.5, 26.8],
            "W/(m*K)",
        ))
        .with_fatigue(sn_set(vec![
            sn(
                297.0,
                &[1e4, 1e5, 1e6, 1e7],
                &[965.0, 793.0, 655.0, 586.0],
            ),
            sn(
                811.0,
                &[1e4, 1e5, 1e6, 1e7],
                &[827.0, 689.0, 552.0, 483.0],
            ),
        ]))
        .with_metadata("specification", "AMS 5662")
        .with_metadata("uns", "N07718")
}

/// Stainless lines and fittings; cryo-compatible and weldable.
fn ss_316l() -> Material {
    Material::new("SS 316L", "Stainless Steel", "Annealed")
        .with_property(Property::constant("Density", 7990.0, "kg/m^3"))
        .with_property(table(
            "YieldStrength",
            &[297.0, 477.0, 700.0, 922.0],
            &[240.0, 186.0, 150.0, 120.0],
            "MPa",
        ))
        .with_property(table(
            "UltimateStrength",
            &[297.0, 477.0, 700.0, 922.0],
            &[585.0, 515.0, 470.0, 390.0],
            "MPa",
        ))
        .with_property(table(
            "ElasticModulus",
            &[297.0, 700.0, 922.0],
            &[193.0, 172.0, 155.0],
            "GPa",
        ))
        .with_property(table(
            "ThermalConductivity",
            &[297.0, 477.0, 700.0, 922.0],
            &[13.4, 15.9, 18.3, 21.4],
            "W/(m*K)",
        ))
        .with_property(Property::constant("SpecificHeat", 500.0, "J/(kg*K)"))
        .with_metadata("specification", "AMS 5507")
        .with_metadata("uns", "S31603")
}

/// Combustion chamber liner copper: high conductivity at moderate strength.
fn cucrzr() -> Material {
    Material::new("CuCrZr", "Copper Alloy", "Aged")
        .with_property(Property::constant("Density", 8890.0, "kg/m^3"))
        .with_property(table(
            "YieldStrength",
            &[297.0, 477.0, 700.0, 811.0],
            &[310.0, 270.0, 180.0, 120.0],
            "MPa",
        ))
        .with_property(table(
            "ElasticModulus",
            &[297.0, 700.0],
            &[128.0, 112.0],
            "GPa",
        ))
        .with_property(table(
            "ThermalConductivity",
            &[297.0, 477.0, 700.0],
            &[318.0, 330.0, 337.0],
            "W/(m*K)",
        ))
        .with_property(Property::constant("SpecificHeat", 385.0, "J/(kg*K)"))
        .with_fatigue(sn_set(vec![sn(
            297.0,
            &[1e4, 1e5, 1e6],
            &[207.0, 172.0, 138.0],
        )]))
        .with_metadata("uns", "C18150")
        .with_metadata("application", "combustion chamber liners")
}
