use crate::classify::{ClassifyError, Prediction};

/// Label recorded when the classifier could not produce a prediction.
pub const FAILED_LABEL: &str = "Error";

/// Outcome of one check action.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttemptResult {
    pub predicted_label: String,
    /// Whole percent, 0..=100.
    pub confidence: u8,
    pub expected_label: String,
    pub is_correct: bool,
}

impl AttemptResult {
    pub fn from_prediction(expected: &str, prediction: &Prediction) -> Self {
        Self {
            predicted_label: prediction.label.clone(),
            confidence: prediction.percent(),
            expected_label: expected.to_owned(),
            is_correct: prediction.matches(expected),
        }
    }

    /// The sentinel result standing in for a failed classification.
    pub fn failed(expected: &str) -> Self {
        Self {
            predicted_label: FAILED_LABEL.to_owned(),
            confidence: 0,
            expected_label: expected.to_owned(),
            is_correct: false,
        }
    }

    /// Folds a classifier outcome into a result; errors become [`AttemptResult::failed`].
    pub fn from_outcome(expected: &str, outcome: &Result<Prediction, ClassifyError>) -> Self {
        match outcome {
            Ok(p) => Self::from_prediction(expected, p),
            Err(err) => {
                tracing::warn!(expected, error = %err, "classification failed");
                Self::failed(expected)
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        self.predicted_label == FAILED_LABEL && self.confidence == 0 && !self.is_correct
    }

    /// Confidence when correct, otherwise 0.
    pub fn score(&self) -> u8 {
        if self.is_correct { self.confidence } else { 0 }
    }
}

/// Running tally for a timed session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionStats {
    pub correct_count: u32,
    pub total_count: u32,
    pub elapsed_seconds: u32,
}

impl SessionStats {
    pub fn record(&mut self, attempt: &AttemptResult) {
        self.total_count += 1;
        if attempt.is_correct {
            self.correct_count += 1;
        }
    }

    /// Share of correct attempts, rounded; 0 before the first attempt.
    pub fn percentage(&self) -> u8 {
        if self.total_count == 0 {
            return 0;
        }
        (f64::from(self.correct_count) / f64::from(self.total_count) * 100.0).round() as u8
    }
}

/// Feedback band for a 0..=100 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    KeepPracticing,
    Fair,
    Great,
    Excellent,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            70..=89 => Self::Great,
            50..=69 => Self::Fair,
            _ => Self::KeepPracticing,
        }
    }
}

/// How sure the classifier was, for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
}

impl ConfidenceBand {
    pub fn from_percent(confidence: u8) -> Self {
        match confidence {
            80.. => Self::High,
            60..=79 => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/attempt.rs"]
mod tests;
