//! Handwriting classification behind a trait.
//!
//! The model itself is remote and opaque: an encoded image goes in, a label and a confidence
//! come out. [`RemoteClassifier`] talks to the hosted workflow endpoint; tests and offline
//! tools can provide their own [`Classifier`].

use std::future::Future;
use std::sync::Arc;

use crate::canvas::export::EncodedImage;

pub mod client;
pub mod wire;

pub use client::RemoteClassifier;

/// Best guess returned by the classifier.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Prediction {
    pub label: String,
    /// In `0.0..=1.0`.
    pub confidence: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Confidence as a whole percentage.
    pub fn percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub fn matches(&self, expected: &str) -> bool {
        self.label.eq_ignore_ascii_case(expected)
    }
}

/// Why a classification produced no usable prediction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("classifier answered with HTTP {0}")]
    Status(u16),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("classifier did not answer in time")]
    Timeout,

    #[error("malformed classifier response: {0}")]
    Malformed(String),

    #[error("no image to classify")]
    EmptyImage,
}

/// Image in, label and confidence out. No retries are implied.
pub trait Classifier: Send + Sync {
    fn classify(
        &self,
        image: &EncodedImage,
    ) -> impl Future<Output = Result<Prediction, ClassifyError>> + Send;
}

impl<C: Classifier> Classifier for Arc<C> {
    fn classify(
        &self,
        image: &EncodedImage,
    ) -> impl Future<Output = Result<Prediction, ClassifyError>> + Send {
        self.as_ref().classify(image)
    }
}

impl<C: Classifier> Classifier for &C {
    fn classify(
        &self,
        image: &EncodedImage,
    ) -> impl Future<Output = Result<Prediction, ClassifyError>> + Send {
        (**self).classify(image)
    }
}

#[cfg(test)]
#[path = "../tests/unit/classify/mod.rs"]
mod tests;
