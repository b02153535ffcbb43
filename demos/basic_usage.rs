//! Basic usage of citygeo-core
//!
//! Offline ranked search over the bundled dataset, then an online lookup
//! through the cached resolver.

use citygeo_core::{LocationService, Result};

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== citygeo basic usage ===\n");

    let service = LocationService::with_defaults()?;

    println!("--- Offline: \"new\" ---");
    for city in service.search_cities("new", Some(5)) {
        println!(
            "  {} ({}) {:.4}, {:.4} [{}]",
            city.name, city.country, city.latitude, city.longitude, city.timezone
        );
    }
    println!();

    println!("--- Online: \"Tetouan\" ---");
    let online = service.search_online("Tetouan", Some(5)).await;
    if online.is_empty() {
        println!("  no suggestions (no matches or provider unavailable)");
    }
    for city in &online {
        let note = if city.has_approximate_timezone() { " (approx.)" } else { "" };
        println!("  {} ({}) [{}{}]", city.name, city.country, city.timezone, note);
    }

    // Second call is served from the cache.
    let again = service.search_online("tetouan", Some(5)).await;
    println!("\n  cached results: {}", again.len());

    Ok(())
}
