//! citygeo — command-line front end for citygeo-core
//!
//! Offline search ranks the bundled (or `--dataset`) cities; online search
//! queries the autocomplete provider through the TTL cache.
//!
//! Usage examples
//! --------------
//!
//! - Ranked offline search
//!   $ citygeo search mecca
//!   $ citygeo search "united kingdom" --limit 3
//!
//! - Online lookup
//!   $ citygeo online "Chefchaouen"
//!   $ citygeo --endpoint http://localhost:2322/api online tetouan
//!
//! - Dataset housekeeping
//!   $ citygeo show gb-london
//!   $ citygeo stats
//!   $ citygeo build --input my-cities.json --output my-cities.bin
//!
//! Logging goes to stderr and follows `RUST_LOG` (`-v` switches to debug).
mod args;

use crate::args::{CliArgs, Commands};
use citygeo_core::{City, RemoteConfig, StaticIndex};
use clap::Parser;
use std::borrow::Cow;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_index(dataset: Option<&str>) -> anyhow::Result<Cow<'static, StaticIndex>> {
    Ok(match dataset {
        Some(path) => {
            tracing::debug!(path, "loading dataset from file");
            Cow::Owned(StaticIndex::load_from_path(path)?)
        }
        None => Cow::Borrowed(StaticIndex::bundled()?),
    })
}

fn print_city(city: &City) {
    let code = if city.country_code.is_empty() {
        String::new()
    } else {
        format!(" [{}]", city.country_code)
    };
    println!(
        "{} — {}{}  {:.4}, {:.4}  {}",
        city.name, city.country, code, city.latitude, city.longitude, city.timezone
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Search { query, limit } => {
            let index = load_index(args.dataset.as_deref())?;
            let matches = index.search_cities(&query, limit);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            }
            for city in &matches {
                print_city(city);
            }
        }

        Commands::Online { query, limit } => {
            let config = remote_config(args.endpoint.as_deref(), args.timeout_secs);
            online(&config, &query, limit).await?;
        }

        Commands::Show { id } => {
            let index = load_index(args.dataset.as_deref())?;
            match index.find_by_id(&id) {
                Some(city) => print_city(city),
                None => anyhow::bail!("no city with id {id}"),
            }
        }

        Commands::List => {
            let index = load_index(args.dataset.as_deref())?;
            for city in index.all_cities() {
                print_city(city);
            }
        }

        Commands::Stats => {
            let index = load_index(args.dataset.as_deref())?;
            let stats = index.stats();
            println!("Dataset statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Countries: {}", stats.countries);
        }

        Commands::Build { input, output } => {
            let index = StaticIndex::load_from_path(&input)?;
            index.save_as(&output)?;
            println!("Wrote {} cities to {output}", index.len());
        }
    }

    Ok(())
}

fn remote_config(endpoint: Option<&str>, timeout_secs: u64) -> RemoteConfig {
    let config = RemoteConfig::default().with_timeout(Duration::from_secs(timeout_secs));
    match endpoint {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

#[cfg(feature = "http")]
async fn online(
    config: &RemoteConfig,
    query: &str,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let resolver = citygeo_core::RemoteResolver::http(config.clone())?;
    match resolver.try_search_online(query, limit).await {
        Ok(cities) if cities.is_empty() => println!("No online matches for: {query}"),
        Ok(cities) => cities.iter().for_each(print_city),
        Err(e) => eprintln!("Online lookup failed: {e}"),
    }
    Ok(())
}

#[cfg(not(feature = "http"))]
async fn online(
    _config: &RemoteConfig,
    _query: &str,
    _limit: Option<usize>,
) -> anyhow::Result<()> {
    anyhow::bail!("citygeo was built without the 'http' feature")
}
