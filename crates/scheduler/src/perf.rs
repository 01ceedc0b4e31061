//! Render timing. Each measured component reports how long it took, either to the log or as an
//! analytics event.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerfMode {
    /// `tracing::debug!` a line per measurement.
    Log,
    /// Send a `performance_measure` event through the [`AnalyticsSink`].
    Beacon,
    Off,
}

impl PerfMode {
    pub fn parse(str: &str) -> Option<Self> {
        match str.trim().to_ascii_lowercase().as_str() {
            "log" => Some(Self::Log),
            "beacon" => Some(Self::Beacon),
            "off" => Some(Self::Off),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PerfEvent<'a> {
    pub name: &'static str,
    pub category: &'static str,
    pub component: &'a str,
    /// Rounded to the nearest millisecond.
    pub duration_ms: u64,
}

impl<'a> PerfEvent<'a> {
    pub fn measure(component: &'a str, duration: Duration) -> Self {
        let millis = (duration.as_micros() + 500) / 1000;
        Self {
            name: "performance_measure",
            category: "Performance",
            component,
            duration_ms: u64::try_from(millis).unwrap_or(u64::MAX),
        }
    }
}

pub trait AnalyticsSink {
    fn send(&self, event: &PerfEvent<'_>) -> anyhow::Result<()>;
}

/// Emits events as structured `tracing` records under the `analytics` target.
#[derive(Debug, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn send(&self, event: &PerfEvent<'_>) -> anyhow::Result<()> {
        tracing::info!(
            target: "analytics",
            event = event.name,
            category = event.category,
            component = event.component,
            duration_ms = event.duration_ms
        );
        Ok(())
    }
}

pub struct PerfReporter {
    mode: PerfMode,
    sink: Box<dyn AnalyticsSink>,
}

impl PerfReporter {
    pub fn new(mode: PerfMode) -> Self {
        Self::with_sink(mode, Box::new(TracingSink))
    }
    pub fn with_sink(mode: PerfMode, sink: Box<dyn AnalyticsSink>) -> Self {
        Self { mode, sink }
    }

    /// Starts timing `component`. The time is reported when the returned guard is dropped.
    pub fn measure<'a>(&'a self, component: &'a str) -> Measurement<'a> {
        Measurement {
            reporter: self,
            component,
            start: Instant::now(),
        }
    }

    pub fn report(&self, component: &str, duration: Duration) {
        match self.mode {
            PerfMode::Off => (),
            PerfMode::Log => {
                tracing::debug!("{component} rendered in {:.2}ms", duration.as_secs_f64() * 1000.0)
            }
            PerfMode::Beacon => {
                // analytics failures must never reach the ui
                if let Err(err) = self.sink.send(&PerfEvent::measure(component, duration)) {
                    tracing::error!("failed to report render time of {component}: {err:#}");
                }
            }
        }
    }
}

impl std::fmt::Debug for PerfReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerfReporter")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[must_use = "the measurement is reported when this is dropped"]
pub struct Measurement<'a> {
    reporter: &'a PerfReporter,
    component: &'a str,
    start: Instant,
}

impl Drop for Measurement<'_> {
    fn drop(&mut self) {
        self.reporter.report(self.component, self.start.elapsed());
    }
}
