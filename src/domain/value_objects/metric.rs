use serde::{Deserialize, Serialize};

/// Resource checked against thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Metric {
    #[serde(rename = "CPU")]
    Cpu,
    Memory,
    Disk,
}

impl Metric {
    /// Evaluation order used by the alert engine.
    pub const ALL: [Self; 3] = [Self::Cpu, Self::Memory, Self::Disk];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
            Self::Disk => "Disk",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
