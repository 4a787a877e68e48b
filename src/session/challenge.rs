use std::{collections::HashMap, path::PathBuf, time::Duration};

use crate::{
    canvas::{
        overlay::ReferenceGlyph,
        surface::{CanvasOptions, StrokeCanvas},
    },
    classify::{Classifier, ClassifyError, Prediction},
    foundation::{error::AksaraResult, rng::Rng64},
    script::catalog::{Catalog, Character},
    session::{
        attempt::{AttemptResult, SessionStats},
        gate::{CheckGate, PendingCheck},
        timers::{Countdown, InactivityTimer},
    },
};

#[derive(Clone, Debug, PartialEq)]
pub struct ChallengeOptions {
    pub canvas: CanvasOptions,
    pub duration_secs: u32,
    pub hint_delay: Duration,
    pub hint_opacity: f32,
    pub assets_root: PathBuf,
}

impl Default for ChallengeOptions {
    fn default() -> Self {
        Self {
            canvas: CanvasOptions::default(),
            duration_secs: 60,
            hint_delay: Duration::from_secs(5),
            hint_opacity: crate::canvas::overlay::DEFAULT_REFERENCE_OPACITY,
            assets_root: PathBuf::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeState {
    Ready,
    Running {
        target: &'static Character,
        time_left: u32,
    },
    Ended,
}

/// Timer-driven transitions reported by [`ChallengeSession::next_event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeEvent {
    Tick { time_left: u32 },
    HintShown,
    Ended,
}

/// Timed quiz over random catalog characters.
#[derive(Debug)]
pub struct ChallengeSession {
    catalog: Catalog,
    opts: ChallengeOptions,
    rng: Rng64,
    state: ChallengeState,
    stats: SessionStats,
    canvas: StrokeCanvas,
    gate: CheckGate,
    result: Option<AttemptResult>,
    countdown: Countdown,
    hint: InactivityTimer,
    hint_visible: bool,
    glyphs: HashMap<&'static str, ReferenceGlyph>,
}

impl ChallengeSession {
    pub fn new(catalog: Catalog, opts: ChallengeOptions, rng: Rng64) -> AksaraResult<Self> {
        let mut canvas = StrokeCanvas::new();
        canvas.initialize(opts.canvas.clone())?;
        Ok(Self {
            catalog,
            hint: InactivityTimer::new(opts.hint_delay),
            opts,
            rng,
            state: ChallengeState::Ready,
            stats: SessionStats::default(),
            canvas,
            gate: CheckGate::new(),
            result: None,
            countdown: Countdown::new(),
            hint_visible: false,
            glyphs: HashMap::new(),
        })
    }

    /// Supplies a reference glyph up front instead of reading it from the assets root.
    pub fn preload_glyph(&mut self, label: &'static str, glyph: ReferenceGlyph) {
        self.glyphs.insert(label, glyph);
    }

    pub fn state(&self) -> ChallengeState {
        self.state
    }

    pub fn target(&self) -> Option<&'static Character> {
        match self.state {
            ChallengeState::Running { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn time_left(&self) -> u32 {
        match self.state {
            ChallengeState::Running { time_left, .. } => time_left,
            ChallengeState::Ready => self.opts.duration_secs,
            ChallengeState::Ended => 0,
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn result(&self) -> Option<&AttemptResult> {
        self.result.as_ref()
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn is_checking(&self) -> bool {
        self.gate.is_checking()
    }

    pub fn canvas(&self) -> &StrokeCanvas {
        &self.canvas
    }

    /// Drawing is only possible while the clock runs.
    pub fn canvas_mut(&mut self) -> Option<&mut StrokeCanvas> {
        match self.state {
            ChallengeState::Running { .. } => Some(&mut self.canvas),
            _ => None,
        }
    }

    /// Starts (or restarts) the clock with fresh stats.
    pub fn start(&mut self) -> Option<&'static Character> {
        let target = self.random_target()?;
        self.stats = SessionStats::default();
        self.state = ChallengeState::Running {
            target,
            time_left: self.opts.duration_secs,
        };
        self.countdown.start(self.opts.duration_secs);
        self.canvas.set_disabled(false);
        self.reset_for_target();
        tracing::debug!(label = target.label, seconds = self.opts.duration_secs, "challenge started");
        Some(target)
    }

    pub fn next_question(&mut self) -> Option<&'static Character> {
        let ChallengeState::Running { time_left, .. } = self.state else {
            return None;
        };
        let target = self.random_target()?;
        self.state = ChallengeState::Running { target, time_left };
        self.reset_for_target();
        Some(target)
    }

    /// Stops the clock; pending checks are abandoned.
    pub fn end(&mut self) {
        if let ChallengeState::Running { time_left, .. } = self.state {
            self.stats.elapsed_seconds = self.opts.duration_secs.saturating_sub(time_left);
        }
        self.state = ChallengeState::Ended;
        self.countdown.cancel();
        self.hint.cancel();
        self.gate.invalidate();
        self.canvas.end_stroke();
        self.canvas.set_disabled(true);
        tracing::debug!(
            correct = self.stats.correct_count,
            total = self.stats.total_count,
            "challenge ended"
        );
    }

    /// Waits for the next clock tick or hint; `None` unless running.
    pub async fn next_event(&mut self) -> Option<ChallengeEvent> {
        if !matches!(self.state, ChallengeState::Running { .. }) {
            return None;
        }
        loop {
            tokio::select! {
                biased;
                time_left = self.countdown.tick() => {
                    if time_left == 0 {
                        if let ChallengeState::Running { time_left, .. } = &mut self.state {
                            *time_left = 0;
                        }
                        self.end();
                        return Some(ChallengeEvent::Ended);
                    }
                    if let ChallengeState::Running { time_left: t, .. } = &mut self.state {
                        *t = time_left;
                    }
                    return Some(ChallengeEvent::Tick { time_left });
                }
                () = self.hint.fired() => {
                    if self.show_hint() {
                        return Some(ChallengeEvent::HintShown);
                    }
                }
            }
        }
    }

    pub fn begin_check(&mut self) -> Option<PendingCheck> {
        let target = self.target()?;
        let image = self.canvas.export_image()?;
        let ticket = self.gate.begin()?;
        Some(PendingCheck {
            ticket,
            expected: target.label.to_owned(),
            image,
        })
    }

    /// Successful classifications count towards the stats; failures only set the result.
    pub fn complete_check(
        &mut self,
        pending: PendingCheck,
        outcome: Result<Prediction, ClassifyError>,
    ) -> Option<&AttemptResult> {
        if !self.gate.finish(pending.ticket) {
            return None;
        }
        let attempt = AttemptResult::from_outcome(&pending.expected, &outcome);
        if outcome.is_ok() {
            self.stats.record(&attempt);
        }
        self.result = Some(attempt);
        self.result.as_ref()
    }

    pub async fn check<C: Classifier>(&mut self, classifier: &C) -> Option<&AttemptResult> {
        let pending = self.begin_check()?;
        let outcome = classifier.classify(&pending.image).await;
        self.complete_check(pending, outcome)
    }

    fn random_target(&mut self) -> Option<&'static Character> {
        let len = self.catalog.len();
        if len == 0 {
            return None;
        }
        self.catalog.get(self.rng.next_index(len))
    }

    fn reset_for_target(&mut self) {
        self.canvas.clear();
        self.canvas.hide_reference();
        self.hint_visible = false;
        self.result = None;
        self.gate.invalidate();
        self.hint.reset();
    }

    fn show_hint(&mut self) -> bool {
        let Some(target) = self.target() else {
            return false;
        };
        if !self.glyphs.contains_key(target.label) {
            let path = target.resolve_reference(&self.opts.assets_root);
            match ReferenceGlyph::load(&path) {
                Ok(glyph) => {
                    self.glyphs.insert(target.label, glyph);
                }
                Err(err) => {
                    tracing::warn!(label = target.label, error = %err, "hint glyph unavailable");
                    return false;
                }
            }
        }
        let Some(glyph) = self.glyphs.get(target.label) else {
            return false;
        };
        match self.canvas.show_reference(glyph, self.opts.hint_opacity) {
            Ok(()) => {
                self.hint_visible = true;
                true
            }
            Err(err) => {
                tracing::warn!(label = target.label, error = %err, "hint could not be drawn");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/challenge.rs"]
mod tests;
