pub mod card;

pub use card::ShareCard;
