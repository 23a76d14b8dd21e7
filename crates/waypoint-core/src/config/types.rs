//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::HeuristicKind;
use crate::persistence::LoadMode;

/// Top-level configuration (`waypoint.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaypointConfig {
    /// A* settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Graph file loading
    #[serde(default)]
    pub persistence: PersistenceConfig,

    /// Grid construction
    #[serde(default)]
    pub grid: GridConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Heuristic used when the command line does not name one
    #[serde(default)]
    pub heuristic: HeuristicKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    #[serde(default)]
    pub load_mode: LoadMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Include the down-right and down-left edges
    #[serde(default = "default_diagonals")]
    pub diagonals: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            diagonals: default_diagonals(),
        }
    }
}

fn default_diagonals() -> bool {
    true
}
