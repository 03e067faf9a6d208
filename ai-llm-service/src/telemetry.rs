//! Log formatting shared by the backend binary and its crates.

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Targets (crate names) whose events the backend renders.
pub const APP_TARGETS: &[&str] = &[
    "wound_assistant_backend",
    "api",
    "ai_llm_service",
    "local_qa",
    "tower_http",
];

/// RFC3339 UTC timer implemented via `chrono` (no extra features).
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        // Keep timestamps compact: no fractional seconds, Z-suffix
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Build a formatting layer that renders only events whose target starts with
/// one of `targets`, written to stdout.
///
/// - RFC3339 UTC timestamps, whole seconds
/// - Compact single-line format
/// - `file:line` and target (module path)
/// - Span close events (duration of instrumented handlers)
/// - ANSI colors only when stdout is a terminal
pub fn layer<S>(targets: &'static [&'static str]) -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    build_layer(targets, io::stdout, io::stdout().is_terminal())
}

/// Same as [`layer`], writing plain text (no ANSI) to `writer`.
pub fn layer_with_writer<S, W>(
    targets: &'static [&'static str],
    writer: W,
) -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    build_layer(targets, writer, false)
}

fn build_layer<S, W>(
    targets: &'static [&'static str],
    writer: W,
    ansi: bool,
) -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let only_targets = filter::filter_fn(move |meta| {
        targets.iter().any(|t| meta.target().starts_with(t))
    });

    // The timer lives on the event format; a layer-level timer is discarded by `event_format`.
    let format = fmt::format()
        .compact()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_source_location(true);

    fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .event_format(format)
        .with_filter(only_targets)
}

/// Level directive for a single target, e.g. `ai_llm_service=debug`.
///
/// Returns `None` if `target` is not a valid directive target.
pub fn level_directive(target: &str, level: Level) -> Option<Directive> {
    format!("{target}={}", level.as_str().to_lowercase())
        .parse()
        .ok()
}

/// `EnvFilter` from `RUST_LOG`; when unset, `level` for [`APP_TARGETS`] and
/// `warn` for everything else (hyper, reqwest, rustls).
pub fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        APP_TARGETS
            .iter()
            .filter_map(|t| level_directive(t, level))
            .fold(EnvFilter::new("warn"), EnvFilter::add_directive)
    })
}
