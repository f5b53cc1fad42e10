//! Colorful console output for searches and scans.
//!
//! Provides a custom `tracing` layer that formats Armorsmith events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Search and scan start/end
//! - **DEBUG**: Model size and every accepted result
//! - **WARN**: Anomalies (empty extraction, unknown clude names)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "armorsmith_solver=info,armorsmith=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ArmorsmithConsoleLayer)
            .try_init();
    });
}

// Marks the start of a search or scan for elapsed time tracking.
fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats Armorsmith events with colors.
pub struct ArmorsmithConsoleLayer;

impl<S: Subscriber> Layer<S> for ArmorsmithConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("armorsmith") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    name: Option<String>,
    status: Option<String>,
    results: Option<u64>,
    limit: Option<u64>,
    variables: Option<u64>,
    constraints: Option<u64>,
    skills: Option<u64>,
    parallelism: Option<u64>,
    achievable: Option<u64>,
    decos: Option<u64>,
    dominated: Option<u64>,
    duration_ms: Option<u64>,
    defense: Option<i64>,
    fully_searched: Option<bool>,
    fully_scanned: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            "name" => self.name = Some(s.trim_matches('"').to_string()),
            "status" => self.status = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "results" => self.results = Some(value),
            "limit" => self.limit = Some(value),
            "variables" => self.variables = Some(value),
            "constraints" => self.constraints = Some(value),
            "skills" => self.skills = Some(value),
            "parallelism" => self.parallelism = Some(value),
            "achievable" => self.achievable = Some(value),
            "decos" => self.decos = Some(value),
            "dominated" => self.dominated = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "defense" => self.defense = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "fully_searched" => self.fully_searched = Some(value),
            "fully_scanned" => self.fully_scanned = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "name" => self.name = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "model_built" => format_model_built(v),
        "result_accepted" => format_result(v),
        "scan_start" => format_scan_start(v),
        "scan_end" => format_scan_end(v),
        _ if level == Level::WARN => format_warning(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_search_start(v: &EventVisitor) -> String {
    mark_run_start();
    format!(
        "{} {} Searching │ {} found so far │ limit {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.results).bright_yellow(),
        count(v.limit).bright_yellow(),
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let status = if v.fully_searched.unwrap_or(false) {
        "EXHAUSTED".bright_cyan().bold().to_string()
    } else {
        "MORE AVAILABLE".bright_green().bold().to_string()
    };

    format!(
        "{} {} Search complete │ {} results │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.results).bright_yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        status
    )
}

fn format_model_built(v: &EventVisitor) -> String {
    format!(
        "{} {} Model │ {} variables │ {} constraints",
        format_elapsed(),
        "◆".bright_blue(),
        count(v.variables).white(),
        count(v.constraints).white(),
    )
}

fn format_result(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Result │ defense {} │ {} decorations",
        format_elapsed(),
        "✓".bright_green(),
        v.defense.unwrap_or(0).to_formatted_string(&Locale::en).bright_magenta(),
        count(v.decos).white(),
    );

    if let Some(dominated) = v.dominated.filter(|&d| d > 0) {
        output.push_str(&format!(
            " │ {} dominated",
            dominated.to_formatted_string(&Locale::en).bright_black()
        ));
    }

    output
}

fn format_scan_start(v: &EventVisitor) -> String {
    mark_run_start();
    format!(
        "{} {} Scanning │ {} skills │ {} workers",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.skills).bright_yellow(),
        count(v.parallelism).bright_yellow(),
    )
}

fn format_scan_end(v: &EventVisitor) -> String {
    let status = if v.fully_scanned.unwrap_or(false) {
        "COMPLETE".bright_green().bold().to_string()
    } else {
        "CANCELLED".bright_red().bold().to_string()
    };

    format!(
        "{} {} Scan complete │ {} achievable │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.achievable).bright_yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        status
    )
}

fn format_warning(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} {}",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        v.message.as_deref().unwrap_or("warning").yellow(),
    );

    if let Some(ref name) = v.name {
        output.push_str(&format!(" │ {}", name.white().bold()));
    }
    if let Some(ref status) = v.status {
        output.push_str(&format!(" │ {}", status.bright_black()));
    }

    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
