//! Core of a Batak script (aksara Batak Toba) practice app.
//!
//! - [`canvas`]: a freehand stroke surface with a reference overlay and PNG export
//! - [`script`]: the symbol catalog, name validation and syllable transliteration
//! - [`classify`]: the remote handwriting classifier behind the [`Classifier`] trait
//! - [`session`]: practice, explore, challenge and write-your-name controllers
//! - [`share`]: score cards for sharing results
#![forbid(unsafe_code)]

pub mod canvas;
pub mod classify;
pub mod config;
pub mod foundation;
pub mod script;
pub mod session;
pub mod share;

pub use crate::canvas::{
    CanvasOptions, Contacts, DrawEvent, EncodedImage, InputEvent, ReferenceGlyph, StrokeCanvas,
    ViewportRect,
};
pub use crate::classify::{Classifier, ClassifyError, Prediction, RemoteClassifier};
pub use crate::config::AppConfig;
pub use crate::foundation::core::{Point, Rgba8};
pub use crate::foundation::error::{AksaraError, AksaraResult};
pub use crate::foundation::rng::Rng64;
pub use crate::script::catalog::{Catalog, CatalogKind, Character, CharacterKind};
pub use crate::script::segment::{OrphanPolicy, SegmentError, Syllable, Transliterator};
pub use crate::script::validate::{
    NameRule, NameValidation, Transliteration, transliterate, validate_name,
};
pub use crate::session::{
    AttemptResult, ChallengeEvent, ChallengeOptions, ChallengeSession, ChallengeState,
    ConfidenceBand, CustomNameFlow, ExploreResult, ExploreSession, FinalResult, FlowState,
    PracticeSession, ScoreTier, SessionStats,
};
pub use crate::share::ShareCard;
