//! JSON shapes of the hosted inference workflow.

use serde::{Deserialize, Serialize};

use crate::classify::{ClassifyError, Prediction};

#[derive(Debug, Serialize)]
pub struct WorkflowRequest<'a> {
    pub api_key: &'a str,
    pub inputs: WorkflowInputs,
}

#[derive(Debug, Serialize)]
pub struct WorkflowInputs {
    pub image: ImageInput,
}

#[derive(Debug, Serialize)]
pub struct ImageInput {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// A `data:` URL; the service also accepts bare base64.
    pub value: String,
}

impl<'a> WorkflowRequest<'a> {
    pub fn new(api_key: &'a str, data_url: String) -> Self {
        Self {
            api_key,
            inputs: WorkflowInputs {
                image: ImageInput {
                    kind: "base64",
                    value: data_url,
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WorkflowResponse {
    #[serde(default)]
    pub outputs: Vec<WorkflowOutput>,
}

#[derive(Debug, Deserialize)]
pub struct WorkflowOutput {
    pub model_predictions: Option<ModelPredictions>,
}

#[derive(Debug, Deserialize)]
pub struct ModelPredictions {
    pub top: Option<String>,
    pub confidence: Option<f64>,
}

impl WorkflowResponse {
    /// Reads `outputs[0].model_predictions.{top, confidence}`.
    pub fn into_prediction(self) -> Result<Prediction, ClassifyError> {
        let first = self
            .outputs
            .into_iter()
            .next()
            .ok_or_else(|| ClassifyError::Malformed("empty outputs".to_owned()))?;
        let preds = first
            .model_predictions
            .ok_or_else(|| ClassifyError::Malformed("missing model_predictions".to_owned()))?;
        let label = preds
            .top
            .ok_or_else(|| ClassifyError::Malformed("missing top label".to_owned()))?;
        let confidence = preds.confidence.unwrap_or(0.0);
        if !confidence.is_finite() {
            return Err(ClassifyError::Malformed(format!(
                "confidence {confidence} is not a number"
            )));
        }
        Ok(Prediction::new(label, confidence))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/wire.rs"]
mod tests;
