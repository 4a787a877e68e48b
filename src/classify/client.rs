use std::time::Duration;

use anyhow::Context;

use crate::{
    canvas::export::EncodedImage,
    classify::{
        Classifier, ClassifyError, Prediction,
        wire::{WorkflowRequest, WorkflowResponse},
    },
    config::ClassifierConfig,
    foundation::error::{AksaraError, AksaraResult},
};

const USER_AGENT: &str = concat!("aksara/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the hosted inference workflow.
///
/// Every request carries the configured timeout. Failures are returned once; callers decide
/// whether to try again.
#[derive(Clone)]
pub struct RemoteClassifier {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for RemoteClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteClassifier")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl RemoteClassifier {
    pub fn new(cfg: &ClassifierConfig) -> AksaraResult<Self> {
        let api_key = cfg
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AksaraError::validation("classifier api key is not configured (AKSARA_API_KEY)")
            })?
            .to_owned();
        if cfg.endpoint.trim().is_empty() {
            return Err(AksaraError::validation("classifier endpoint must not be empty"));
        }
        if cfg.timeout_ms == 0 {
            return Err(AksaraError::validation("classifier timeout must be > 0"));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .context("build classifier http client")?;

        Ok(Self {
            http,
            endpoint: cfg.endpoint.clone(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classifier for RemoteClassifier {
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(endpoint = %self.endpoint, bytes = image.bytes.len())
    )]
    async fn classify(&self, image: &EncodedImage) -> Result<Prediction, ClassifyError> {
        if image.bytes.is_empty() {
            return Err(ClassifyError::EmptyImage);
        }

        let body = WorkflowRequest::new(&self.api_key, image.to_data_url());
        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status.as_u16()));
        }

        let parsed: WorkflowResponse = response.json().await.map_err(from_reqwest)?;
        let prediction = parsed.into_prediction()?;
        tracing::debug!(
            label = %prediction.label,
            confidence = prediction.confidence,
            "classified"
        );
        Ok(prediction)
    }
}

fn from_reqwest(err: reqwest::Error) -> ClassifyError {
    if err.is_timeout() {
        ClassifyError::Timeout
    } else if err.is_decode() {
        ClassifyError::Malformed(err.to_string())
    } else {
        ClassifyError::Transport(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/client.rs"]
mod tests;
