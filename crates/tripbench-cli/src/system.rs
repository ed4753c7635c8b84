//! Host system information printed after the timing table.

use serde::Serialize;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use tripbench_core::options::logical_cores;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Processor, memory, and core count of the machine running the benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemSpecs {
    pub processor: String,
    pub total_memory_bytes: u64,
    pub logical_cores: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}

impl SystemSpecs {
    /// Query the host via sysinfo.
    #[must_use]
    pub fn collect() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );
        let processor = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "unknown".to_string());
        let logical = match sys.cpus().len() {
            0 => logical_cores(),
            n => n,
        };
        Self {
            processor,
            total_memory_bytes: sys.total_memory(),
            logical_cores: logical,
            os: System::long_os_version(),
        }
    }

    /// Total memory in GiB.
    #[must_use]
    pub fn ram_gb(&self) -> f64 {
        self.total_memory_bytes as f64 / BYTES_PER_GIB
    }

    /// `Processor`, `RAM`, and `CPU Cores` lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Processor: {}", self.processor),
            format!("RAM: {:.2} GB", self.ram_gb()),
            format!("CPU Cores: {}", self.logical_cores),
        ];
        if let Some(os) = &self.os {
            lines.push(format!("OS: {os}"));
        }
        lines
    }
}
