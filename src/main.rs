use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use irrops::config::{AppConfig, ConnectionSource};
use irrops::error::AppError;
use irrops::ops::disruption::{
    ClassifierConfig, DisruptionClassifier, DisruptionService, EligibilityEngine,
    ItineraryConnections, OperationsStore, ScanReport, SimulatedConnections,
};
use irrops::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Disruption Operations Service",
    about = "Detect flight disruptions and compute passenger recovery eligibility",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run a one-off disruption scan over flight and passenger exports
    Scan(ScanArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Flight feed JSON export
    #[arg(long)]
    flights: PathBuf,
    /// Passenger feed JSON export
    #[arg(long)]
    passengers: PathBuf,
    /// Write the full scan report to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
    /// Print every detected event, not just the summary
    #[arg(long)]
    list_events: bool,
    /// Connection exposure source for the classifier
    #[arg(long, value_enum, default_value = "simulated")]
    connections: ConnectionSource,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Scan(args) => run_scan(args),
    }
}

fn build_classifier(source: ConnectionSource) -> DisruptionClassifier {
    match source {
        ConnectionSource::Simulated => {
            DisruptionClassifier::new(ClassifierConfig::default(), Box::new(SimulatedConnections))
        }
        ConnectionSource::Itinerary => {
            DisruptionClassifier::new(ClassifierConfig::default(), Box::new(ItineraryConnections))
        }
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let store =
        OperationsStore::from_json_files(&config.data.flights_path, &config.data.passengers_path)?;
    let service = Arc::new(DisruptionService::new(
        store,
        build_classifier(config.connection_source),
        EligibilityEngine::default(),
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(irrops::ops::disruption::disruption_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "disruption operations service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_scan(args: ScanArgs) -> Result<(), AppError> {
    let ScanArgs {
        flights,
        passengers,
        output,
        list_events,
        connections,
    } = args;

    telemetry::init_for_scan()?;

    let store = OperationsStore::from_json_files(&flights, &passengers)?;
    let classifier = build_classifier(connections);

    let report = irrops::ops::disruption::scan(&store, &classifier, Utc::now());
    render_scan_report(&report, list_events);

    if let Some(path) = output {
        report.export(&path)?;
        println!("\nScan report exported to {}", path.display());
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn render_scan_report(report: &ScanReport, list_events: bool) {
    println!("Disruption scan");
    println!(
        "Flights scanned: {} | disruptions detected: {}",
        report.total_flights_scanned, report.total_disruptions_detected
    );

    let summary = report.summary();

    println!("\nImpact");
    println!(
        "- Passengers affected: {} ({} high-value, {} connecting)",
        summary.total_passengers_affected,
        summary.total_high_value_passengers,
        summary.total_connecting_passengers
    );
    println!(
        "- Estimated cost: {:.2} ({:.2} per affected passenger)",
        summary.total_estimated_cost, summary.average_cost_per_passenger
    );

    println!("\nSeverity breakdown");
    for (severity, count) in &summary.severity_breakdown {
        println!("- {severity}: {count} flight(s)");
    }

    println!("\nActions required");
    println!(
        "- Flights needing rebooking: {}",
        summary.flights_requiring_rebooking
    );
    println!(
        "- Flights needing accommodation: {}",
        summary.flights_requiring_accommodation
    );

    if list_events {
        println!("\nDetected events");
        for event in &report.disruptions {
            let delay_note = if event.delay_minutes > 0 {
                format!(", {}min delay", event.delay_minutes)
            } else {
                String::new()
            };
            println!(
                "- {} {} -> {} | {} | {}{} | {} pax | cost {:.2}",
                event.flight_number,
                event.origin,
                event.destination,
                event.disruption_status.label(),
                event.severity.label(),
                delay_note,
                event.passengers_affected,
                event.estimated_cost_impact
            );
        }
    }
}
