use std::time::Duration;

use crate::{
    canvas::{
        export::EncodedImage,
        input::{DrawEvent, InputEvent, ViewportRect},
        surface::{CanvasOptions, StrokeCanvas},
    },
    classify::{Classifier, ClassifyError, Prediction},
    foundation::error::AksaraResult,
    session::{
        attempt::{ConfidenceBand, FAILED_LABEL},
        gate::{CheckGate, CheckTicket},
        timers::InactivityTimer,
    },
};

/// What the classifier read from a free drawing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ExploreResult {
    pub predicted_label: String,
    pub confidence: u8,
    pub band: ConfidenceBand,
}

impl ExploreResult {
    fn from_outcome(outcome: &Result<Prediction, ClassifyError>) -> Self {
        match outcome {
            Ok(p) => Self {
                predicted_label: p.label.clone(),
                confidence: p.percent(),
                band: ConfidenceBand::from_percent(p.percent()),
            },
            Err(err) => {
                tracing::warn!(error = %err, "classification failed");
                Self {
                    predicted_label: FAILED_LABEL.to_owned(),
                    confidence: 0,
                    band: ConfidenceBand::Low,
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct ExploreCheck {
    pub ticket: CheckTicket,
    pub image: EncodedImage,
}

/// Free drawing that classifies itself once the user pauses.
///
/// Every [`DrawEvent::Drawing`] pushes the inactivity deadline back; the host awaits
/// [`ExploreSession::idle`] and then calls [`ExploreSession::classify_now`].
#[derive(Debug)]
pub struct ExploreSession {
    canvas: StrokeCanvas,
    timer: InactivityTimer,
    gate: CheckGate,
    result: Option<ExploreResult>,
    /// A check was refused while another was in flight; the newest drawing still needs one.
    rerun_after_check: bool,
}

impl ExploreSession {
    pub fn new(canvas: CanvasOptions, auto_classify_delay: Duration) -> AksaraResult<Self> {
        let mut surface = StrokeCanvas::new();
        surface.initialize(canvas)?;
        Ok(Self {
            canvas: surface,
            timer: InactivityTimer::new(auto_classify_delay),
            gate: CheckGate::new(),
            result: None,
            rerun_after_check: false,
        })
    }

    pub fn canvas(&self) -> &StrokeCanvas {
        &self.canvas
    }

    pub fn handle_input(&mut self, event: &InputEvent, viewport: &ViewportRect) -> Option<DrawEvent> {
        let ev = self.canvas.handle_input(event, viewport);
        if ev == Some(DrawEvent::Drawing) {
            self.timer.reset();
        }
        ev
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
        self.timer.cancel();
        self.gate.invalidate();
        self.rerun_after_check = false;
        self.result = None;
    }

    pub fn result(&self) -> Option<&ExploreResult> {
        self.result.as_ref()
    }

    pub fn is_classifying(&self) -> bool {
        self.gate.is_checking()
    }

    pub fn is_auto_classify_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Resolves once the user has stopped drawing for the configured delay.
    pub async fn idle(&mut self) {
        self.timer.fired().await;
    }

    /// An empty canvas clears the result instead of producing a check.
    ///
    /// While another check is in flight this returns `None` and the auto-classify is re-armed
    /// once that check completes.
    pub fn begin_check(&mut self) -> Option<ExploreCheck> {
        if self.canvas.is_empty() {
            self.result = None;
            return None;
        }
        let image = self.canvas.export_image()?;
        let Some(ticket) = self.gate.begin() else {
            self.rerun_after_check = true;
            return None;
        };
        self.rerun_after_check = false;
        Some(ExploreCheck { ticket, image })
    }

    pub fn complete_check(
        &mut self,
        pending: ExploreCheck,
        outcome: Result<Prediction, ClassifyError>,
    ) -> Option<&ExploreResult> {
        if !self.gate.finish(pending.ticket) {
            return None;
        }
        if std::mem::take(&mut self.rerun_after_check) {
            self.timer.reset();
        }
        self.result = Some(ExploreResult::from_outcome(&outcome));
        self.result.as_ref()
    }

    pub async fn classify_now<C: Classifier>(&mut self, classifier: &C) -> Option<&ExploreResult> {
        let pending = self.begin_check()?;
        let outcome = classifier.classify(&pending.image).await;
        self.complete_check(pending, outcome)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/explore.rs"]
mod tests;
