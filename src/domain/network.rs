//! Chain topology used by the network panel.

use serde::{Deserialize, Serialize};

/// One chain on the network ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Lower-cased chain name.
    pub id: String,
    pub name: String,
    pub position: [f64; 3],
    /// Ids of connected nodes.
    pub connections: Vec<String>,
    /// Relative activity in [0, 1].
    pub activity: f64,
    /// `#RRGGBB` colour.
    pub color: String,
}
