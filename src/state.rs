//! Shared application state.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::health::database::{DatabaseProbe, MySqlProbe};
use crate::health::process::{ProcessStats, SystemProcessStats};

pub struct AppStateInner {
    pub config: AppConfig,
    pub probe: Arc<dyn DatabaseProbe>,
    pub process: Arc<dyn ProcessStats>,
}

pub type AppState = Arc<AppStateInner>;

struct StateBuilder {
    config: AppConfig,
    probe: Arc<dyn DatabaseProbe>,
    process: Arc<dyn ProcessStats>,
}

impl StateBuilder {
    fn build(self) -> AppState {
        Arc::new(AppStateInner {
            config: self.config,
            probe: self.probe,
            process: self.process,
        })
    }
}

pub fn build_state(config: AppConfig) -> AppState {
    StateBuilder {
        config,
        probe: Arc::new(MySqlProbe),
        process: Arc::new(SystemProcessStats::new()),
    }
    .build()
}

#[cfg(test)]
pub fn build_test_state(config: AppConfig, probe: Arc<dyn DatabaseProbe>) -> AppState {
    use crate::health::process::testing::FixedStats;

    StateBuilder {
        config,
        probe,
        process: Arc::new(FixedStats::new(42.0, 8 * 1024 * 1024, 64 * 1024 * 1024)),
    }
    .build()
}
