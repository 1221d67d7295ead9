//! NutriPlan Status Tool
//!
//! Provides runtime status information about the planner service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::catalog::Catalog;

/// Runtime status of the NutriPlan service
#[derive(Debug, Clone, Serialize)]
pub struct PlannerStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Catalog information
    pub catalog_path: String,
    pub catalog_rows: usize,
    pub catalog_columns: Vec<String>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// Server time in RFC 3339 format
    pub server_time: String,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    catalog_path: PathBuf,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            catalog_path,
        }
    }

    /// Get the current status against the given catalog snapshot
    pub fn get_status(&self, catalog: &Catalog) -> PlannerStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        PlannerStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            catalog_path: self.catalog_path.display().to_string(),
            catalog_rows: catalog.len(),
            catalog_columns: catalog.columns().iter().cloned().collect(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            server_time: chrono::Utc::now().to_rfc3339(),
        }
    }
}
