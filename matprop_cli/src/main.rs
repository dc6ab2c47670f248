//! # Matprop CLI Application
//!
//! Interactive lookups against the built-in material library: pick a
//! material, query a property at temperature, and check fatigue limits.

use std::io::{self, BufRead, Write};

use matprop_core::library::standard_library;
use matprop_core::material::ROOM_TEMPERATURE_K;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_line(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("Matprop CLI - Material Property Lookup");
    println!("======================================");
    println!();

    let registry = standard_library();

    println!("Available materials:");
    for key in registry.keys() {
        println!("  {}", key);
    }
    println!();

    let key = prompt_line(
        "Material key [ti-6al-4v_annealed]: ",
        "ti-6al-4v_annealed",
    );
    let material = match registry.get(&key) {
        Some(material) => material,
        None => {
            println!("No material registered under '{}'", key);
            return;
        }
    };

    println!();
    println!("{}", material);
    println!("Properties:");
    for name in material.property_names() {
        println!(
            "  {} (conditions: {})",
            name,
            material.conditions_for(name).join(", ")
        );
    }
    for meta_key in material.metadata_keys() {
        if let Some(value) = material.metadata(meta_key) {
            println!("  {}: {}", meta_key, value);
        }
    }
    println!();

    let property = prompt_line("Property [YieldStrength]: ", "YieldStrength");
    let temp_k = prompt_f64("Temperature (K) [298.0]: ", ROOM_TEMPERATURE_K);

    println!();
    match material.property_for(&property, None) {
        Ok(prop) => {
            println!("═══════════════════════════════════════");
            println!("  PROPERTY LOOKUP");
            println!("═══════════════════════════════════════");
            println!();
            println!("  Material:  {}", material.name);
            println!("  Condition: {}", material.default_condition);
            println!("  {} at {} K = {} {}", property, temp_k, prop.value_at(temp_k), prop.units());
        }
        Err(e) => {
            println!("Lookup failed: {}", e);
        }
    }

    if let Some(curves) = material.fatigue_for(None) {
        println!();
        let cycles = prompt_f64("Fatigue life (cycles) [1e6]: ", 1e6);
        let hit = curves.lookup(cycles, temp_k);
        println!(
            "  Fatigue limit at {} cycles, {} K = {} MPa (curve at {} K)",
            cycles, temp_k, hit.stress, hit.curve_temp_k
        );
        if hit.distant {
            println!("  NOTE: nearest curve is more than 50 K from the query temperature");
        }
    }

    println!();
    let dump = prompt_line("Dump material as JSON? [y/N]: ", "n");
    if dump.eq_ignore_ascii_case("y") {
        match serde_json::to_string_pretty(material) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("Serialization failed: {}", e),
        }
    }
}
