//! Page controllers for the four practice modes.
//!
//! Each session owns its canvas (or canvases), its timers and the check gate. Checks are split
//! into `begin_check` / `complete_check` so a host can run the classifier wherever it likes;
//! `check` does both for callers that simply await.

pub mod attempt;
pub mod challenge;
pub mod custom_name;
pub mod explore;
pub mod gate;
pub mod practice;
pub mod timers;

pub use attempt::{AttemptResult, ConfidenceBand, ScoreTier, SessionStats};
pub use challenge::{ChallengeEvent, ChallengeOptions, ChallengeSession, ChallengeState};
pub use custom_name::{CustomNameFlow, FinalResult, FlowState};
pub use explore::{ExploreResult, ExploreSession};
pub use gate::{CheckGate, CheckTicket, PendingCheck};
pub use practice::PracticeSession;
pub use timers::{Countdown, InactivityTimer};
