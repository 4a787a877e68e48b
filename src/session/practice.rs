use crate::{
    canvas::surface::{CanvasOptions, StrokeCanvas},
    classify::{Classifier, ClassifyError, Prediction},
    foundation::error::AksaraResult,
    script::catalog::{Catalog, Character},
    session::{
        attempt::AttemptResult,
        gate::{CheckGate, PendingCheck},
    },
};

/// Step through the catalog one character at a time and check each drawing on demand.
#[derive(Debug)]
pub struct PracticeSession {
    catalog: Catalog,
    index: usize,
    canvas: StrokeCanvas,
    gate: CheckGate,
    result: Option<AttemptResult>,
}

impl PracticeSession {
    pub fn new(catalog: Catalog, canvas: CanvasOptions) -> AksaraResult<Self> {
        let mut surface = StrokeCanvas::new();
        surface.initialize(canvas)?;
        Ok(Self {
            catalog,
            index: 0,
            canvas: surface,
            gate: CheckGate::new(),
            result: None,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'static Character> {
        self.catalog.get(self.index)
    }

    pub fn next_character(&mut self) -> Option<&'static Character> {
        let len = self.catalog.len();
        if len == 0 {
            return None;
        }
        self.move_to((self.index + 1) % len)
    }

    pub fn prev_character(&mut self) -> Option<&'static Character> {
        let len = self.catalog.len();
        if len == 0 {
            return None;
        }
        self.move_to((self.index + len - 1) % len)
    }

    /// Jumps to `index`; out-of-range indices leave the session unchanged.
    pub fn select(&mut self, index: usize) -> Option<&'static Character> {
        if index >= self.catalog.len() {
            return None;
        }
        self.move_to(index)
    }

    fn move_to(&mut self, index: usize) -> Option<&'static Character> {
        self.index = index;
        self.canvas.clear();
        self.result = None;
        self.gate.invalidate();
        self.current()
    }

    pub fn canvas(&self) -> &StrokeCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut StrokeCanvas {
        &mut self.canvas
    }

    /// Erases the drawing; a check still in flight is abandoned.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.gate.invalidate();
        self.result = None;
    }

    pub fn result(&self) -> Option<&AttemptResult> {
        self.result.as_ref()
    }

    pub fn is_checking(&self) -> bool {
        self.gate.is_checking()
    }

    /// Exports the drawing and marks a check in flight.
    pub fn begin_check(&mut self) -> Option<PendingCheck> {
        let expected = self.current()?.label;
        let image = self.canvas.export_image()?;
        let ticket = self.gate.begin()?;
        Some(PendingCheck {
            ticket,
            expected: expected.to_owned(),
            image,
        })
    }

    /// `None` when the check was abandoned by navigation.
    pub fn complete_check(
        &mut self,
        pending: PendingCheck,
        outcome: Result<Prediction, ClassifyError>,
    ) -> Option<&AttemptResult> {
        if !self.gate.finish(pending.ticket) {
            return None;
        }
        self.result = Some(AttemptResult::from_outcome(&pending.expected, &outcome));
        self.result.as_ref()
    }

    pub async fn check<C: Classifier>(&mut self, classifier: &C) -> Option<&AttemptResult> {
        let pending = self.begin_check()?;
        let outcome = classifier.classify(&pending.image).await;
        self.complete_check(pending, outcome)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/practice.rs"]
mod tests;
