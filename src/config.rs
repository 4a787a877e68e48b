//! Runtime configuration: a JSON file plus `AKSARA_*` environment overrides.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    canvas::surface::CanvasOptions,
    foundation::{
        core::Rgba8,
        error::{AksaraError, AksaraResult},
    },
    script::validate::DEFAULT_MAX_SYLLABLES,
};

pub const DEFAULT_CLASSIFIER_URL: &str =
    "https://serverless.roboflow.com/infer/workflows/aliepratama/custom-workflow-2";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub canvas: CanvasConfig,
    pub session: SessionConfig,
    /// Directory catalog reference paths are resolved against.
    pub assets_root: PathBuf,
}

#[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CLASSIFIER_URL.to_owned(),
            api_key: None,
            timeout_ms: 15_000,
        }
    }
}

impl std::fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub stroke_width: f64,
    pub stroke_color: Rgba8,
    pub background_color: Rgba8,
    pub reference_opacity: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let opts = CanvasOptions::default();
        Self {
            width: opts.width,
            height: opts.height,
            stroke_width: opts.stroke_width,
            stroke_color: opts.stroke_color,
            background_color: opts.background_color,
            reference_opacity: crate::canvas::overlay::DEFAULT_REFERENCE_OPACITY,
        }
    }
}

impl CanvasConfig {
    pub fn options(&self) -> CanvasOptions {
        CanvasOptions {
            width: self.width,
            height: self.height,
            stroke_width: self.stroke_width,
            stroke_color: self.stroke_color,
            background_color: self.background_color,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub auto_classify_delay_ms: u64,
    pub challenge_seconds: u32,
    pub hint_delay_ms: u64,
    pub max_syllables: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_classify_delay_ms: 2_000,
            challenge_seconds: 60,
            hint_delay_ms: 5_000,
            max_syllables: DEFAULT_MAX_SYLLABLES,
        }
    }
}

impl AppConfig {
    /// Reads `path` when given, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> AksaraResult<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_json_file(p)?,
            None => Self::default(),
        };
        cfg.apply_env_with(|k| std::env::var(k).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: &Path) -> AksaraResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> AksaraResult<Self> {
        serde_json::from_str(text).map_err(|e| AksaraError::serde(format!("config: {e}")))
    }

    /// Applies `AKSARA_*` overrides read through `var`. Unparseable values are ignored.
    pub fn apply_env_with(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("AKSARA_CLASSIFIER_URL").filter(|v| !v.trim().is_empty()) {
            self.classifier.endpoint = url;
        }
        if let Some(key) = var("AKSARA_API_KEY").filter(|v| !v.trim().is_empty()) {
            self.classifier.api_key = Some(key);
        }
        if let Some(ms) = var("AKSARA_CLASSIFIER_TIMEOUT_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&n| n > 0)
        {
            self.classifier.timeout_ms = ms;
        }
        if let Some(root) = var("AKSARA_ASSETS_ROOT").filter(|v| !v.is_empty()) {
            self.assets_root = PathBuf::from(root);
        }
    }

    pub fn validate(&self) -> AksaraResult<()> {
        self.canvas.options().validate()?;
        if !(0.0..=1.0).contains(&self.canvas.reference_opacity) {
            return Err(AksaraError::validation(
                "canvas.reference_opacity must be within 0..=1",
            ));
        }
        if self.session.max_syllables == 0 {
            return Err(AksaraError::validation("session.max_syllables must be > 0"));
        }
        if self.session.challenge_seconds == 0 {
            return Err(AksaraError::validation("session.challenge_seconds must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
