//! Tracing subscriber initialization: human or JSON log lines, plus
//! optional OpenTelemetry span export to stdout.
//!
//! ```no_run
//! use reminisce_types::config::LoggingConfig;
//!
//! reminisce_observe::tracing_setup::init_tracing(&LoggingConfig::default(), "info").unwrap();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use reminisce_types::config::{LogFormat, LoggingConfig};

static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum TracingInitError {
    #[error("invalid log filter '{filter}': {message}")]
    Filter { filter: String, message: String },

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Build the log filter. `RUST_LOG` wins over `default_filter` when set.
pub fn build_filter(default_filter: &str) -> Result<EnvFilter, TracingInitError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter).map_err(|e| TracingInitError::Filter {
        filter: default_filter.to_string(),
        message: e.to_string(),
    })
}

/// Plain stderr subscriber for work that runs before [`init_tracing`],
/// such as reading the config file that decides the final log format.
pub fn bootstrap_dispatch(default_filter: &str) -> tracing::Dispatch {
    let filter = build_filter(default_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing::Dispatch::new(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish(),
    )
}

/// Install the global subscriber.
///
/// Log lines go to stderr so CLI output on stdout stays machine-readable.
/// Fails if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig, default_filter: &str) -> Result<(), TracingInitError> {
    let filter = build_filter(default_filter)?;

    let (pretty, json) = match config.format {
        LogFormat::Pretty => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true),
            ),
        ),
    };

    let otel = config.otel.then(|| {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("reminisce");
        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .with(otel)
        .try_init()
        .map_err(|e| TracingInitError::Install(e.to_string()))
}

/// Flush buffered spans. No-op when OpenTelemetry export was not enabled.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_default_filter_is_rejected() {
        // RUST_LOG would bypass the default; only assert when it is unset.
        if std::env::var_os("RUST_LOG").is_none() {
            let err = build_filter("reminisce=notalevel").unwrap_err();
            assert!(matches!(err, TracingInitError::Filter { .. }));
        }
    }

    #[test]
    fn valid_default_filter_builds() {
        assert!(build_filter("info,reminisce_core=debug").is_ok());
    }

    #[test]
    fn bootstrap_dispatch_scopes_events() {
        let dispatch = bootstrap_dispatch("info");
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::info!("bootstrap event");
        });
    }

    #[test]
    fn shutdown_without_otel_is_noop() {
        shutdown_tracing();
    }
}
