//! AI model descriptors and headline metrics.

use super::random::RandomSource;
use crate::domain::{AiMetrics, AiModel, ModelKind, ModelStatus};
use crate::error::Result;

struct ModelFixture {
    name: &'static str,
    kind: ModelKind,
    accuracy: (f64, f64),
    last_trained: &'static str,
    /// Draw above which the model reports `Training`; `None` keeps it `Active`.
    training_above: Option<f64>,
    confidence: (f64, f64),
}

const MODELS: [ModelFixture; 4] = [
    ModelFixture {
        name: "ARBITRON LSTM Prime",
        kind: ModelKind::Lstm,
        accuracy: (85.0, 10.0),
        last_trained: "2 hours ago",
        training_above: None,
        confidence: (88.0, 10.0),
    },
    ModelFixture {
        name: "Cross-Chain GNN",
        kind: ModelKind::Gnn,
        accuracy: (80.0, 12.0),
        last_trained: "4 hours ago",
        training_above: None,
        confidence: (85.0, 12.0),
    },
    ModelFixture {
        name: "Sentiment Analyzer",
        kind: ModelKind::Sentiment,
        accuracy: (75.0, 15.0),
        last_trained: "1 hour ago",
        training_above: Some(0.7),
        confidence: (80.0, 15.0),
    },
    ModelFixture {
        name: "Volume Pattern AI",
        kind: ModelKind::Gru,
        accuracy: (82.0, 13.0),
        last_trained: "3 hours ago",
        training_above: None,
        confidence: (86.0, 12.0),
    },
];

/// Draws consumed by [`generate_ai_models`].
pub const DRAWS_PER_MODEL_SET: usize = 9;

/// Generate the four model descriptors.
pub fn generate_ai_models<R>(random: &mut R) -> Result<Vec<AiModel>>
where
    R: RandomSource + ?Sized,
{
    MODELS
        .iter()
        .map(|fixture| -> Result<AiModel> {
            let accuracy = random.uniform(fixture.accuracy.0, fixture.accuracy.1)?;
            let status = match fixture.training_above {
                Some(threshold) if random.unit()? > threshold => ModelStatus::Training,
                _ => ModelStatus::Active,
            };
            let confidence = random.uniform(fixture.confidence.0, fixture.confidence.1)?;
            Ok(AiModel {
                name: fixture.name.to_string(),
                kind: fixture.kind,
                accuracy,
                last_trained: fixture.last_trained.to_string(),
                status,
                confidence,
            })
        })
        .collect()
}

pub fn generate_ai_metrics<R>(random: &mut R) -> Result<AiMetrics>
where
    R: RandomSource + ?Sized,
{
    Ok(AiMetrics {
        neural_network_status: "PRIME ACTIVE".to_string(),
        prediction_accuracy: random.uniform(90.0, 8.0)?,
        processing_speed: random.uniform(8.0, 8.0)?,
        model_confidence: random.uniform(85.0, 12.0)?,
    })
}
