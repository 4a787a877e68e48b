use crate::{
    canvas::{
        export::EncodedImage,
        surface::{CanvasOptions, StrokeCanvas},
    },
    classify::{Classifier, ClassifyError, Prediction},
    foundation::error::{AksaraError, AksaraResult},
    script::{
        segment::{Syllable, Transliterator},
        validate::{NameValidation, validate_name},
    },
    session::{
        attempt::AttemptResult,
        gate::{CheckGate, PendingCheck},
    },
};

/// Summary of a completed name.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FinalResult {
    pub name: String,
    pub syllables: Vec<String>,
    pub scores: Vec<u8>,
    pub average_score: u8,
    /// One drawing per syllable, in order.
    #[serde(skip)]
    pub images: Vec<EncodedImage>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowState {
    AwaitingInput,
    Writing { step: usize },
    Result(FinalResult),
}

/// One syllable to write, with its own canvas.
#[derive(Debug)]
pub struct SyllableSlot {
    pub syllable: Syllable,
    canvas: StrokeCanvas,
    attempt: Option<AttemptResult>,
    score: Option<u8>,
    image: Option<EncodedImage>,
}

impl SyllableSlot {
    pub fn canvas(&self) -> &StrokeCanvas {
        &self.canvas
    }

    pub fn attempt(&self) -> Option<&AttemptResult> {
        self.attempt.as_ref()
    }

    /// Set once the syllable was classified.
    pub fn score(&self) -> Option<u8> {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.score.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct SyllableCheck {
    pub step: usize,
    pub check: PendingCheck,
}

/// Write-your-name flow: input, one canvas per syllable, then a scored summary.
#[derive(Debug)]
pub struct CustomNameFlow {
    transliterator: Transliterator,
    max_syllables: usize,
    canvas_opts: CanvasOptions,
    validation: NameValidation,
    state: FlowState,
    slots: Vec<SyllableSlot>,
    gate: CheckGate,
}

impl CustomNameFlow {
    pub fn new(
        transliterator: Transliterator,
        max_syllables: usize,
        canvas_opts: CanvasOptions,
    ) -> AksaraResult<Self> {
        canvas_opts.validate()?;
        Ok(Self {
            validation: validate_name("", &transliterator, max_syllables),
            transliterator,
            max_syllables,
            canvas_opts,
            state: FlowState::AwaitingInput,
            slots: Vec::new(),
            gate: CheckGate::new(),
        })
    }

    /// Starts with `name` filled in, skipping straight to writing when it is valid.
    pub fn with_prefilled_name(
        name: &str,
        transliterator: Transliterator,
        max_syllables: usize,
        canvas_opts: CanvasOptions,
    ) -> AksaraResult<Self> {
        let mut flow = Self::new(transliterator, max_syllables, canvas_opts)?;
        if flow.set_input(name).is_valid() {
            flow.proceed()?;
        }
        Ok(flow)
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.validation.input
    }

    pub fn validation(&self) -> &NameValidation {
        &self.validation
    }

    /// Re-validates on every edit. Ignored outside the input step.
    pub fn set_input(&mut self, name: &str) -> &NameValidation {
        if self.state == FlowState::AwaitingInput {
            self.validation = validate_name(name, &self.transliterator, self.max_syllables);
        }
        &self.validation
    }

    /// Moves to the first syllable; refuses a name that fails any rule.
    pub fn proceed(&mut self) -> AksaraResult<()> {
        if self.state != FlowState::AwaitingInput {
            return Err(AksaraError::validation("name already accepted"));
        }
        let transliteration = self.validation.clone().into_transliteration()?;

        let mut slots = Vec::with_capacity(transliteration.len());
        for syllable in transliteration.syllables {
            let mut canvas = StrokeCanvas::new();
            canvas.initialize(self.canvas_opts.clone())?;
            slots.push(SyllableSlot {
                syllable,
                canvas,
                attempt: None,
                score: None,
                image: None,
            });
        }
        tracing::debug!(name = %transliteration.name, syllables = slots.len(), "name accepted");
        self.slots = slots;
        self.state = FlowState::Writing { step: 0 };
        Ok(())
    }

    pub fn slots(&self) -> &[SyllableSlot] {
        &self.slots
    }

    pub fn step(&self) -> Option<usize> {
        match self.state {
            FlowState::Writing { step } => Some(step),
            _ => None,
        }
    }

    pub fn current_slot(&self) -> Option<&SyllableSlot> {
        self.slots.get(self.step()?)
    }

    pub fn current_canvas_mut(&mut self) -> Option<&mut StrokeCanvas> {
        let step = self.step()?;
        self.slots.get_mut(step).map(|s| &mut s.canvas)
    }

    pub fn is_checking(&self) -> bool {
        self.gate.is_checking()
    }

    /// Goes to the next syllable once the current one is done.
    pub fn advance(&mut self) -> bool {
        let Some(step) = self.step() else {
            return false;
        };
        let done = self.slots.get(step).is_some_and(SyllableSlot::is_completed);
        if !done || step + 1 >= self.slots.len() {
            return false;
        }
        self.state = FlowState::Writing { step: step + 1 };
        self.slots[step + 1].canvas.clear();
        true
    }

    pub fn begin_check(&mut self) -> Option<SyllableCheck> {
        let step = self.step()?;
        let slot = self.slots.get(step)?;
        if slot.is_completed() {
            return None;
        }
        let expected = slot.syllable.symbol().to_owned();
        let image = slot.canvas.export_image()?;
        let ticket = self.gate.begin()?;
        Some(SyllableCheck {
            step,
            check: PendingCheck {
                ticket,
                expected,
                image,
            },
        })
    }

    /// A failed classification leaves the syllable open for another try.
    pub fn complete_check(
        &mut self,
        pending: SyllableCheck,
        outcome: Result<Prediction, ClassifyError>,
    ) -> Option<&AttemptResult> {
        if !self.gate.finish(pending.check.ticket) {
            return None;
        }
        let step = pending.step;
        let attempt = AttemptResult::from_outcome(&pending.check.expected, &outcome);
        let slot = self.slots.get_mut(step)?;
        if outcome.is_ok() {
            slot.score = Some(attempt.score());
            slot.image = Some(pending.check.image);
            slot.canvas.end_stroke();
            slot.canvas.set_disabled(true);
        }
        slot.attempt = Some(attempt);

        if step + 1 == self.slots.len() && self.slots.iter().all(SyllableSlot::is_completed) {
            self.state = FlowState::Result(self.final_summary());
        }
        self.slots.get(step).and_then(SyllableSlot::attempt)
    }

    pub async fn check<C: Classifier>(&mut self, classifier: &C) -> Option<&AttemptResult> {
        let pending = self.begin_check()?;
        let outcome = classifier.classify(&pending.check.image).await;
        self.complete_check(pending, outcome)
    }

    pub fn final_result(&self) -> Option<&FinalResult> {
        match &self.state {
            FlowState::Result(r) => Some(r),
            _ => None,
        }
    }

    /// Back to an empty input.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.gate.invalidate();
        self.state = FlowState::AwaitingInput;
        self.validation = validate_name("", &self.transliterator, self.max_syllables);
    }

    fn final_summary(&self) -> FinalResult {
        let scores: Vec<u8> = self.slots.iter().map(|s| s.score.unwrap_or(0)).collect();
        let average = if scores.is_empty() {
            0
        } else {
            let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
            (f64::from(sum) / scores.len() as f64).round() as u8
        };
        FinalResult {
            name: self.validation.input.clone(),
            syllables: self.slots.iter().map(|s| s.syllable.text.clone()).collect(),
            scores,
            average_score: average,
            images: self.slots.iter().filter_map(|s| s.image.clone()).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/custom_name.rs"]
mod tests;
