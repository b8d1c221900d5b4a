//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that renders the solver's structured events.
//! Call [`init`] once near the start of `main`.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const SOLVER_TARGET: &str = "rosterfair_solver";

/// Initializes console output for the solver.
///
/// Safe to call multiple times; only the first call has effect. Does
/// nothing if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "rosterfair_solver=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with(SOLVER_TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_solver_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    phase_index: Option<u64>,
    day_count: Option<u64>,
    worker_count: Option<u64>,
    empty_day_count: Option<u64>,
    duration_ms: Option<u64>,
    steps: Option<u64>,
    passes: Option<u64>,
    swaps: Option<u64>,
    potential: Option<u64>,
    imbalance: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "phase" => self.phase = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field, s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "phase_index" => &mut self.phase_index,
            "day_count" => &mut self.day_count,
            "worker_count" => &mut self.worker_count,
            "empty_day_count" => &mut self.empty_day_count,
            "duration_ms" => &mut self.duration_ms,
            "steps" => &mut self.steps,
            "passes" => &mut self.passes,
            "swaps" => &mut self.swaps,
            "potential" => &mut self.potential,
            "imbalance" => &mut self.imbalance,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

fn format_solver_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("solve_start") => format_solve_start(v),
        Some("phase_start") => format_phase_start(v),
        Some("phase_end") => format_phase_end(v),
        Some("solve_end") => format_solve_end(v),
        _ => String::new(),
    }
}

fn prefix(tag: &str) -> String {
    format!(
        "{} {} {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", tag).bright_cyan()
    )
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} Solving started: days ({}), workers ({}), empty days ({})",
        prefix("Solver"),
        count(v.day_count).bright_yellow(),
        count(v.worker_count).bright_yellow(),
        count(v.empty_day_count).bright_yellow()
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} phase ({}) started",
        prefix(phase),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).to_string().yellow()
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let mut output = format!(
        "{} {} phase ({}) ended: time spent ({}), potential ({}), step total ({})",
        prefix(phase),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).to_string().yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.potential).bright_magenta(),
        count(v.steps).white()
    );
    if let Some(passes) = v.passes {
        output.push_str(&format!(", passes ({})", passes.to_formatted_string(&Locale::en)));
    }
    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let imbalance = v.imbalance.unwrap_or(0);
    let imbalance_str = if imbalance <= 1 {
        imbalance.to_string().bright_green().to_string()
    } else {
        imbalance.to_string().yellow().to_string()
    };
    format!(
        "{} Solving ended: time spent ({}), imbalance ({}), swaps ({}), passes ({})",
        prefix("Solver"),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        imbalance_str,
        count(v.swaps).white(),
        count(v.passes).white()
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100_000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}
