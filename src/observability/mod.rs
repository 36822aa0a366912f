//! OpenTelemetry tracing exported to a local file.
//!
//! `tracing` spans from the whole crate flow through `tracing-opentelemetry`
//! into the OpenTelemetry SDK, whose exporter writes every batch as one line of
//! OTLP JSON:
//!
//! ```text
//! tracing → OpenTelemetryLayer → TracerProvider → OtlpFileExporter → RotatingFile
//! ```
//!
//! The trace file is `<data_dir>/palancas-otlp.json`. It rotates at 10 MB and
//! keeps three numbered backups.
//!
//! Observability is optional: if the directory cannot be created or a
//! subscriber is already installed, initialization does nothing.
//!
//! # Modules
//!
//! - `exporter`: `SpanExporter` producing OTLP JSON lines
//! - `rotation`: size-based rotating line writer

mod exporter;
mod rotation;

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use rotation::RotatingFile;

const SERVICE_NAME: &str = "Palancas";
const TRACE_FILE: &str = "palancas-otlp.json";
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// The filter comes from `config.trace_level` (default `info`) and accepts
/// anything [`EnvFilter`] does, e.g. `palancas=debug`.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let data_dir = config.data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let exporter = exporter::OtlpFileExporter::new(
        RotatingFile::new(data_dir.join(TRACE_FILE)),
        resource.clone(),
        SERVICE_NAME,
    );

    let provider = TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build();
    let tracer = provider.tracer(SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
