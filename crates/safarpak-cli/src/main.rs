mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use safarpak_cli::output::OutputFormat;
use safarpak_cli::point::{parse_latitude, parse_longitude, parse_point};
use safarpak_lib::{GeoPoint, TravelMode, DEFAULT_THRESHOLD_KM};

use commands::graph::handle_graph_command;
use commands::locations::{handle_locations_command, LocationsCommandArgs};
use commands::nearest::{handle_nearest_command, NearestCommandArgs};
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "SafarPak route planning across Pakistan")]
struct Cli {
    /// City CSV (City, Latitude, Longitude) to use instead of the bundled data.
    /// Falls back to SAFARPAK_CITIES, then the platform data directory.
    #[arg(long, global = true)]
    cities: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a route between two locations with travel estimates.
    Route(RouteArgs),
    /// List known cities, areas and landmarks.
    Locations {
        /// Only list one category, e.g. "Airports".
        #[arg(long, conflicts_with = "cities_only")]
        category: Option<String>,
        /// Only list hub cities.
        #[arg(long)]
        cities_only: bool,
    },
    /// Find the known location closest to a coordinate.
    Nearest {
        #[arg(long, value_parser = parse_latitude, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, value_parser = parse_longitude, allow_hyphen_values = true)]
        lon: f64,
        /// Only consider hub cities.
        #[arg(long)]
        cities_only: bool,
    },
    /// Report hub graph connectivity for a proximity threshold.
    Graph {
        /// Maximum distance between connected cities, in kilometres.
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_KM)]
        threshold: f64,
    },
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Source location name.
    #[arg(long = "from", required_unless_present = "from_point", conflicts_with = "from_point")]
    from: Option<String>,
    /// Source as a LAT,LON map pick.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    from_point: Option<GeoPoint>,
    /// Destination location name.
    #[arg(long = "to", required_unless_present = "to_point", conflicts_with = "to_point")]
    to: Option<String>,
    /// Destination as a LAT,LON map pick.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    to_point: Option<GeoPoint>,
    /// Maximum distance between connected hub cities, in kilometres.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_KM)]
    threshold: f64,
    /// Means of transport: car, bike, cycle or walk.
    #[arg(long, default_value = "car")]
    mode: TravelMode,
    /// Average speed in km/h (defaults to the mode's typical speed).
    #[arg(long)]
    speed: Option<f64>,
    /// Fuel average in km per litre.
    #[arg(long)]
    fuel_average: Option<f64>,
    /// Fuel price per litre in rupees.
    #[arg(long)]
    fuel_price: Option<f64>,
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        Self {
            from: args.from,
            from_point: args.from_point,
            to: args.to,
            to_point: args.to_point,
            threshold: args.threshold,
            mode: args.mode,
            speed: args.speed,
            fuel_average: args.fuel_average,
            fuel_price: args.fuel_price,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cities = cli.cities.as_deref();

    match cli.command {
        Command::Route(args) => handle_route_command(cities, cli.format, &args.into()),
        Command::Locations {
            category,
            cities_only,
        } => handle_locations_command(
            cities,
            cli.format,
            &LocationsCommandArgs {
                category,
                cities_only,
            },
        ),
        Command::Nearest {
            lat,
            lon,
            cities_only,
        } => handle_nearest_command(
            cities,
            cli.format,
            &NearestCommandArgs {
                point: GeoPoint::new(lat, lon),
                cities_only,
            },
        ),
        Command::Graph { threshold } => handle_graph_command(cities, cli.format, threshold),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
