//! Basic usage example for gazetteer-rs
//!
//! This example demonstrates how to:
//! - Build a table of locations in memory
//! - Run the four analyses one by one
//! - Bundle them into a result set with the default parameters

use gazetteer_rs::prelude::*;
use gazetteer_rs::run_queries;

fn main() -> Result<()> {
    println!("=== Gazetteer Basic Usage Example ===\n");

    let table = LocationTable::new(vec![
        LocationRecord::new(1, "Gounghin", 12.3, -1.5),
        LocationRecord::new(2, "Ouagadougou", 12.37, -1.52),
        LocationRecord::new(3, "Zabre", 11.17, -0.6),
        LocationRecord::new(4, "Gaoua", 10.33, -3.18),
        LocationRecord::new(5, "Dori", 14.03, -0.03),
    ]);

    // Example 1: Substring search
    println!("--- Example 1: Names containing 'gounghin' ---");
    for r in table.substring_match("gounghin") {
        println!("  {} (ID: {}, Lat: {:.6}, Long: {:.6})", r.name, r.id, r.lat, r.long);
    }
    println!();

    // Example 2: Alphabetical range
    println!("--- Example 2: Names starting with A-P ---");
    let a_to_p = table.alpha_range('A', 'P');
    println!("  {} of {} locations", a_to_p.len(), table.len());
    println!();

    // Example 3: Extremes
    println!("--- Example 3: Extreme coordinates ---");
    let e = table.extremes()?;
    println!("  Northernmost: {} ({:.6})", e.lat_max.name, e.lat_max.lat);
    println!("  Southernmost: {} ({:.6})", e.lat_min.name, e.lat_min.lat);
    println!("  Westernmost:  {} ({:.6})", e.long_min.name, e.long_min.long);
    println!("  Easternmost:  {} ({:.6})", e.long_max.name, e.long_max.long);
    println!();

    // Example 4: Everything at once
    println!("--- Example 4: Full result set ---");
    let results = run_queries(&table, &QueryParams::default())?;
    println!("  lat >= 11 and long <= 0.5: {}", results.bounding_filter.len());

    Ok(())
}
