//! Process uptime and memory, injected so tests can pin the values.
//! Used by: health::report, state.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Memory footprint of the running process, in bytes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemorySnapshot {
    pub rss: u64,
    pub virtual_memory: u64,
}

pub trait ProcessStats: Send + Sync {
    fn uptime_seconds(&self) -> f64;
    fn memory(&self) -> MemorySnapshot;
}

pub struct SystemProcessStats {
    started_at: Instant,
}

impl SystemProcessStats {
    pub fn new() -> Self {
        Self { started_at: Instant::now() }
    }
}

impl Default for SystemProcessStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessStats for SystemProcessStats {
    fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    fn memory(&self) -> MemorySnapshot {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => pid,
            Err(e) => {
                tracing::debug!(error = e, "current pid unavailable");
                return MemorySnapshot::default();
            }
        };

        let mut sys = System::new();
        if !sys.refresh_process(pid) {
            return MemorySnapshot::default();
        }

        sys.process(pid)
            .map(|p| MemorySnapshot {
                rss: p.memory(),
                virtual_memory: p.virtual_memory(),
            })
            .unwrap_or_default()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_is_monotonic() {
        let stats = SystemProcessStats::new();
        let first = stats.uptime_seconds();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(stats.uptime_seconds() > first);
    }

    #[test]
    fn running_process_reports_resident_memory() {
        let memory = SystemProcessStats::new().memory();
        assert!(memory.rss > 0);
    }

    #[test]
    fn snapshot_serializes_camel_case() -> serde_json::Result<()> {
        let json = serde_json::to_value(MemorySnapshot { rss: 1, virtual_memory: 2 })?;
        assert_eq!(json, serde_json::json!({"rss": 1, "virtualMemory": 2}));
        Ok(())
    }
}
