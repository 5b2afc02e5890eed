//! Locations command handler for browsing the catalog.

use std::path::Path;

use anyhow::{Context, Result};

use safarpak_cli::output::{render_locations, OutputFormat};
use safarpak_lib::{load_catalog, Location};

/// Arguments for the locations command.
#[derive(Debug, Clone, Default)]
pub struct LocationsCommandArgs {
    /// Only list the named category (e.g. "Airports").
    pub category: Option<String>,
    /// Only list hub cities.
    pub cities_only: bool,
}

/// Handle the locations subcommand.
pub fn handle_locations_command(
    cities: Option<&Path>,
    format: OutputFormat,
    args: &LocationsCommandArgs,
) -> Result<()> {
    let catalog = load_catalog(cities).context("failed to load city data")?;

    if args.cities_only {
        let hubs = catalog.hub_cities();
        let refs: Vec<&Location> = hubs.iter().collect();
        render_locations(Some("Cities"), &refs, format)?;
        return Ok(());
    }

    if let Some(label) = args.category.as_deref() {
        let category = catalog.category(label).ok_or_else(|| {
            let available = catalog
                .categories()
                .iter()
                .map(|c| c.label.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            anyhow::anyhow!("Unknown category '{label}'. Available: {available}")
        })?;
        let members: Vec<&Location> = category
            .names
            .iter()
            .filter_map(|name| catalog.get(name))
            .collect();
        render_locations(Some(category.label.as_str()), &members, format)?;
        return Ok(());
    }

    let all: Vec<&Location> = catalog.iter().collect();
    render_locations(None, &all, format)?;
    Ok(())
}
