use crate::perf::PerfMode;

const PERF_VAR: &str = "SCHEDULER_PERF";
const TITLE_VAR: &str = "SCHEDULER_TITLE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub perf: PerfMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Scheduler".into(),
            perf: if cfg!(debug_assertions) {
                PerfMode::Log
            } else {
                PerfMode::Beacon
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Unset variables keep their defaults. Unrecognized values are logged and ignored.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(perf) = var(PERF_VAR) {
            match PerfMode::parse(&perf) {
                Some(mode) => config.perf = mode,
                None => tracing::warn!(
                    "unknown {PERF_VAR} value {perf:?}, expected one of log, beacon, off"
                ),
            }
        }
        if let Some(title) = var(TITLE_VAR) {
            let title = title.trim();
            if !title.is_empty() {
                config.title = title.to_owned();
            }
        }

        config
    }
}
