use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use taxi_map::application::LoggingUrlOpener;
use taxi_map::config::Config;
use taxi_map::geo::{CameraPosition, Coordinate};
use taxi_map::lifetime::ScreenLifetime;
use taxi_map::location::{AuthorizationStatus, SimulatedLocationManager};
use taxi_map::logging::init_tracing;
use taxi_map::places::{
    AutocompleteFilter, GooglePlacesClient, GooglePlacesHttpProvider, PlacesRequest, StyledText,
};
use taxi_map::ui::map::{MapAction, MapReducer, MapState, ViewAction};
use taxi_map::ui::store::Store;

/// Degrees moved per simulated step (roughly 55 m).
const ROUTE_STEP_DEGREES: f64 = 0.0005;
const FIRST_FIX_TIMEOUT: Duration = Duration::from_secs(5);
const CAMERA_ZOOM: f32 = 16.0;

#[derive(Parser, Debug)]
#[command(name = "taxi-map", version, about = "Map screen core for a ride-hailing client")]
struct Cli {
    /// Config file (default: ~/.config/taxi-map/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print place predictions for a query.
    Autocomplete {
        /// Search text; words are joined with spaces.
        #[arg(required = true)]
        query: Vec<String>,
        /// Restrict results to a country (ISO 3166-1 alpha-2).
        #[arg(long)]
        country: Option<String>,
    },
    /// Run the map screen against a simulated route.
    Simulate {
        /// Number of route points to drive through.
        #[arg(long, default_value_t = 10)]
        steps: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    match cli.command {
        Command::Autocomplete { query, country } => autocomplete(&config, query.join(" "), country).await,
        Command::Simulate { steps } => simulate(&config, steps).await,
    }
}

async fn autocomplete(config: &Config, query: String, country: Option<String>) -> Result<()> {
    let provider = GooglePlacesHttpProvider::from_config(&config.places)?;
    let mut client = GooglePlacesClient::new(Arc::new(provider));
    if let Some(country) = country.or_else(|| config.places.country.clone()) {
        client = client.with_filter(AutocompleteFilter {
            country: Some(country),
        });
    }

    let response = client
        .autocomplete_predictions(PlacesRequest::new(query))
        .await
        .context("autocomplete request failed")?;

    if response.is_empty() {
        println!("no predictions");
        return Ok(());
    }
    for (rank, prediction) in response.predictions.iter().enumerate() {
        println!(
            "{:>2}. {}  ({})",
            rank + 1,
            render_highlights(&prediction.attributed_full_text),
            prediction.place_id
        );
    }
    Ok(())
}

async fn simulate(config: &Config, steps: usize) -> Result<()> {
    let start = config.start_coordinate()?;
    let route = build_route(start, steps)?;
    let interval = Duration::from_millis(config.location.simulated_interval_ms);

    let manager = SimulatedLocationManager::new(AuthorizationStatus::NotDetermined);
    manager.set_position(start);

    let lifetime = ScreenLifetime::new("map");
    let reducer = MapReducer::new(Arc::new(manager.clone()), Arc::new(LoggingUrlOpener));
    let (store, task) = Store::spawn(reducer, MapState::default(), lifetime.handle());

    let mut updates = store.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            match state.user_location {
                Some(location) => println!("user location: {}", location),
                None => println!("user location: unknown"),
            }
        }
    });

    store.send(ViewAction::OnViewLoad.into())?;
    store.send(ViewAction::OnLocationButtonTap.into())?;

    tokio::time::timeout(FIRST_FIX_TIMEOUT, store.wait_for(MapState::has_user_location))
        .await
        .context("no location fix from the simulated service")??;

    for coordinate in route {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = manager.drive_route(vec![coordinate], interval) => {}
        }
        store.send(MapAction::View(ViewAction::OnMapViewIdleAtPosition(
            CameraPosition::new(coordinate, CAMERA_ZOOM),
        )))?;
    }

    lifetime.end();
    let final_state = task.await?;
    printer.abort();
    if let Some(location) = final_state.user_location {
        println!("final user location: {}", location);
    }
    Ok(())
}

fn build_route(start: Coordinate, steps: usize) -> Result<Vec<Coordinate>> {
    (1..=steps)
        .map(|step| {
            let offset = ROUTE_STEP_DEGREES * step as f64;
            Coordinate::new(start.latitude() + offset, start.longitude() + offset)
                .with_context(|| format!("route leaves valid coordinates at step {}", step))
        })
        .collect()
}

fn render_highlights(text: &StyledText) -> String {
    text.segments()
        .into_iter()
        .map(|(segment, highlighted)| {
            if highlighted {
                format!("[{}]", segment)
            } else {
                segment.to_string()
            }
        })
        .collect()
}
