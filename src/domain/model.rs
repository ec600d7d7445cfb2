//! Descriptive AI model records. Nothing here is backed by an actual model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelKind {
    Lstm,
    Gru,
    Gnn,
    Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelStatus {
    Active,
    Training,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiModel {
    pub name: String,
    pub kind: ModelKind,
    pub accuracy: f64,
    /// Human-readable age label, e.g. "2 hours ago".
    pub last_trained: String,
    pub status: ModelStatus,
    pub confidence: f64,
}

/// Headline figures for the model panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiMetrics {
    pub neural_network_status: String,
    pub prediction_accuracy: f64,
    /// Predictions per second.
    pub processing_speed: f64,
    pub model_confidence: f64,
}
