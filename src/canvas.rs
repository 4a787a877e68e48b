pub mod composite;
pub mod export;
pub mod input;
pub mod overlay;
pub mod surface;

pub use export::EncodedImage;
pub use input::{Contacts, DrawEvent, InputEvent, ViewportRect};
pub use overlay::ReferenceGlyph;
pub use surface::{CanvasOptions, StrokeCanvas};
