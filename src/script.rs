pub mod alphabet;
pub mod catalog;
pub mod mapping;
pub mod segment;
pub mod validate;

pub use segment::SegmentError;
