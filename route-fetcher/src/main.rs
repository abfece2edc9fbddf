use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, warn};

use route_fetcher::domain::{RouteRecord, RouteType};
use route_fetcher::maxikarta::{
    ConvertError, FetchError, MaxikartaClient, MaxikartaConfig, RouteSummaryDto,
    build_route_record,
};
use route_fetcher::output;

/// Fetch public-transit routes and write one JSON record per route.
#[derive(Debug, Parser)]
struct Args {
    /// Base path for the per-route output files
    #[arg(long, default_value = "routes_info")]
    output: PathBuf,

    /// Seconds to sleep between routes (upstream politeness)
    #[arg(long, default_value_t = 1)]
    sleep: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("route_fetcher=info")),
        )
        .init();

    let args = Args::parse();

    let client =
        MaxikartaClient::new(MaxikartaConfig::new()).expect("Failed to create maxikarta client");

    let routes = match client.routes().await {
        Ok(routes) => routes,
        Err(e) => {
            error!("could not fetch the route catalogue: {e}");
            std::process::exit(1);
        }
    };
    info!("catalogue lists {} routes", routes.len());

    for route in &routes {
        let Some(route_type) = RouteType::from_code(route.type_code) else {
            warn!(
                route = %route.name,
                code = route.type_code,
                "unknown route type, skipping"
            );
            continue;
        };
        if !route_type.is_fetched() {
            continue;
        }

        let path = output::route_path(&args.output, route_type, &route.name);
        if path.exists() {
            continue;
        }

        info!("fetching {route_type} route #{}", route.name);
        match fetch_one(&client, route).await {
            Ok(record) => {
                if let Err(e) = output::write_route_record(&args.output, route_type, &record) {
                    error!(route = %route.name, "could not write record: {e}");
                    std::process::exit(1);
                }
            }
            Err(e) => {
                warn!(route = %route.name, "skipping route: {e}");
            }
        }

        tokio::time::sleep(Duration::from_secs(args.sleep)).await;
    }
}

/// Fetch geometry and stations for one route and assemble its record.
async fn fetch_one(
    client: &MaxikartaClient,
    route: &RouteSummaryDto,
) -> Result<RouteRecord, RouteFetchError> {
    let geometry = client.route_geometry(route.route_id).await?;
    let stations = client.route_stations(route.route_id).await?;

    let record = build_route_record(route, &geometry.geom, &stations.stations)?;
    Ok(record)
}

/// Per-route failure: either the fetch or the conversion went wrong.
#[derive(Debug, thiserror::Error)]
enum RouteFetchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}
