//! Prediction engine - ONNX Runtime integration
//!
//! The model is loaded once at startup. A load failure is terminal for
//! the process lifetime: the engine stays in `Failed` and every predict
//! call answers with the load error instead of retrying.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use crate::sequence::build_windows;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Model not loaded: {0}")]
    Unavailable(String),

    #[error("Prediction error: {0}")]
    Inference(String),
}

enum EngineState {
    /// Session access is exclusive; inference mutates internal buffers
    Loaded(Mutex<Session>),
    Failed(String),
}

pub struct PredictionEngine {
    state: EngineState,
    sequence_length: usize,
}

impl PredictionEngine {
    /// Load the model artifact. Never fails the process; a bad artifact
    /// leaves the engine in the `Failed` state.
    pub fn load(model_path: &str, sequence_length: usize) -> Self {
        let state = match Self::build_session(model_path) {
            Ok(session) => {
                tracing::info!("Model loaded successfully from {}", model_path);
                EngineState::Loaded(Mutex::new(session))
            }
            Err(reason) => {
                tracing::error!("Error loading model: {}", reason);
                EngineState::Failed(reason)
            }
        };

        Self {
            state,
            sequence_length,
        }
    }

    fn build_session(model_path: &str) -> Result<Session, String> {
        if !std::path::Path::new(model_path).exists() {
            return Err(format!("Model not found: {}", model_path));
        }

        Session::builder()
            .map_err(|e| format!("Failed to create session builder: {}", e))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| format!("Failed to set optimization: {}", e))?
            .commit_from_file(model_path)
            .map_err(|e| format!("Failed to load model: {}", e))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, EngineState::Loaded(_))
    }

    /// Run the model over every window of the supplied history in one
    /// batched pass and reduce to the maximum predicted value, the single
    /// most likely food-addition event found anywhere in the series.
    pub fn predict(&self, weights: &[f64]) -> Result<f64, EngineError> {
        let session = match &self.state {
            EngineState::Loaded(session) => session,
            EngineState::Failed(reason) => {
                return Err(EngineError::Unavailable(reason.clone()))
            }
        };

        let windows: Array2<f32> = build_windows(weights, self.sequence_length);

        let mut session = session.lock();

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| EngineError::Inference("No output defined".to_string()))?;

        let input_tensor = Value::from_array(windows)
            .map_err(|e| EngineError::Inference(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| EngineError::Inference(e.to_string()))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| EngineError::Inference("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| EngineError::Inference(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;

        let max_prediction = data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(f32::NEG_INFINITY, f32::max);

        if !max_prediction.is_finite() {
            return Err(EngineError::Inference(
                "Model produced no finite output".to_string(),
            ));
        }

        Ok(max_prediction as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_is_terminal_failure() {
        let engine = PredictionEngine::load("/nonexistent/model.onnx", 500);
        assert!(!engine.is_loaded());

        // Every call reports unavailability, no retry
        for _ in 0..2 {
            let err = engine.predict(&[1.0, 2.0]).unwrap_err();
            assert!(matches!(err, EngineError::Unavailable(_)));
            assert!(err.to_string().contains("Model not loaded"));
        }
    }
}
